//! Neon Pulse - A single-lane neon runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Top-10 leaderboard
//! - `persistence`: Key/value storage for scores and settings
//! - `platform`: Browser/native platform abstraction

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::Leaderboard;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Downward acceleration added to `dy` every tick
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity set by a jump (negative is up)
    pub const JUMP_FORCE: f32 = -12.0;
    /// Horizontal obstacle scroll per tick
    pub const SPEED: f32 = 6.0;
    /// Milliseconds between obstacle spawns
    pub const SPAWN_INTERVAL_MS: f64 = 1500.0;
    /// Height of the ground strip at the bottom of the viewport
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Player defaults - fixed column, world scrolls past
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Degrees of spin per airborne tick
    pub const ROTATION_RATE: f32 = 5.0;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 40.0;
    pub const FLOATING_BLOCK_CHANCE: f64 = 0.3;
    /// Height of a floating block's top edge above the ground line
    pub const FLOATING_BLOCK_OFFSET: f32 = 100.0;

    /// Inward inset applied to both boxes before collision testing
    pub const COLLISION_GRACE: f32 = 5.0;

    /// Scoring
    pub const PASS_REWARD: u64 = 100;
    pub const LEVEL_THRESHOLD: u64 = 1000;

    /// Particles
    pub const BURST_SIZE: usize = 20;
    /// Velocity is sampled from [-PARTICLE_SPEED, PARTICLE_SPEED) per axis
    pub const PARTICLE_SPEED: f32 = 5.0;
    /// Ticks until a particle's life reaches zero (life -= 1/50 per tick)
    pub const PARTICLE_LIFETIME_TICKS: u32 = 50;
    pub const MAX_PARTICLES: usize = 256;

    /// Display-only pause after a crash before the host moves on
    pub const GAME_OVER_DELAY_MS: f64 = 1000.0;
}

/// Level reached at `score` with the given points-per-level threshold
#[inline]
pub fn level_for_score(score: u64, threshold: u64) -> u32 {
    (score / threshold.max(1)) as u32 + 1
}
