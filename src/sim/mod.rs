//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod particles;
pub mod physics;
pub mod score;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_collision, player_hits_obstacle};
pub use particles::{Particle, NeonColor, ParticleSystem};
pub use snapshot::Snapshot;
pub use state::{
    GameEvent, GamePhase, GameSession, Obstacle, ObstacleKind, PhaseEvent, PhaseTransitionError,
    Player, Viewport,
};
pub use tick::{TickInput, tick};
