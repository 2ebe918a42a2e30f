//! Game state and core simulation types
//!
//! A `GameSession` is one play-through. It owns every entity and is advanced
//! only through [`super::tick`] and [`GameSession::activate`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::particles::{NeonColor, ParticleSystem};
use super::physics;
use super::snapshot::Snapshot;
use super::spawner::ObstacleSpawner;
use crate::consts::GAME_OVER_DELAY_MS;
use crate::level_for_score;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player resting on the ground, waiting for activation
    Start,
    /// Active gameplay
    Playing,
    /// Run ended (terminal)
    GameOver,
}

/// Inputs that drive phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// Key press or tap: start in `Start`, jump in `Playing`
    Activate,
    /// Player overlapped an obstacle
    Collide,
}

/// A transition the state machine does not allow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no transition from {from:?} on {event:?}")]
pub struct PhaseTransitionError {
    pub from: GamePhase,
    pub event: PhaseEvent,
}

impl GamePhase {
    /// Next phase for `event`, or an error if the pair is invalid
    pub fn transition(self, event: PhaseEvent) -> Result<GamePhase, PhaseTransitionError> {
        match (self, event) {
            (GamePhase::Start, PhaseEvent::Activate) => Ok(GamePhase::Playing),
            (GamePhase::Playing, PhaseEvent::Activate) => Ok(GamePhase::Playing),
            (GamePhase::Playing, PhaseEvent::Collide) => Ok(GamePhase::GameOver),
            (from, event) => Err(PhaseTransitionError { from, event }),
        }
    }
}

/// Drawable area, sampled by the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// The player's square. Only `pos.y`, `dy` and `rotation` change during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels per tick, positive is down)
    pub dy: f32,
    /// Spin in degrees
    pub rotation: f32,
    pub grounded: bool,
}

impl Player {
    pub fn new(tuning: &Tuning, ground_y: f32) -> Self {
        let mut player = Self {
            pos: Vec2::new(tuning.player_x, 0.0),
            size: Vec2::splat(tuning.player_size),
            dy: 0.0,
            rotation: 0.0,
            grounded: true,
        };
        player.rest_on_ground(ground_y);
        player
    }

    /// Place the player on the ground line, at rest
    pub fn rest_on_ground(&mut self, ground_y: f32) {
        self.pos.y = ground_y - self.size.y;
        self.dy = 0.0;
        self.grounded = true;
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Obstacle shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Spike,
    Block,
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Block hovering above the ground line
    pub floating: bool,
    /// Trailing edge has cleared the player (scored)
    pub passed: bool,
}

impl Obstacle {
    /// Trailing edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Notifications for the host (audio, persistence, UI)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    Started,
    Jumped,
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    ObstaclePassed { id: u32, score: u64 },
    LevelUp { level: u32 },
    GameOver { final_score: u64 },
}

/// Complete state of one play-through
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    /// Obstacles in creation order
    pub obstacles: Vec<Obstacle>,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticleSystem,
    pub score: u64,
    /// Simulation tick counter (Playing ticks only)
    pub time_ticks: u64,
    /// Viewport sampled on the most recent tick
    pub viewport: Viewport,
    pub started_at_ms: Option<f64>,
    pub game_over_at_ms: Option<f64>,
    pub(crate) spawner: ObstacleSpawner,
    pub(crate) rng: Pcg32,
    pub(crate) tuning: Tuning,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameSession {
    /// Create a new session with default tuning
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self::with_tuning(seed, viewport, Tuning::default())
    }

    pub fn with_tuning(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        let ground_y = tuning.ground_y(viewport.height);
        Self {
            seed,
            phase: GamePhase::Start,
            player: Player::new(&tuning, ground_y),
            obstacles: Vec::new(),
            particles: ParticleSystem::new(tuning.particle_lifetime_ticks, tuning.max_particles),
            score: 0,
            time_ticks: 0,
            viewport,
            started_at_ms: None,
            game_over_at_ms: None,
            spawner: ObstacleSpawner::default(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Level derived from the current score
    pub fn level(&self) -> u32 {
        level_for_score(self.score, self.tuning.level_threshold)
    }

    /// Ground line for the last sampled viewport
    pub fn ground_y(&self) -> f32 {
        self.tuning.ground_y(self.viewport.height)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Handle an activation input (key press or tap)
    ///
    /// Starts the run from `Start` (with the first jump applied immediately)
    /// and jumps in `Playing`. Returns whether a jump impulse was applied.
    /// Activations in `GameOver` are ignored.
    pub fn activate(&mut self, now_ms: f64) -> bool {
        let next = match self.phase.transition(PhaseEvent::Activate) {
            Ok(next) => next,
            Err(err) => {
                log::debug!("Ignoring activation: {}", err);
                return false;
            }
        };

        if self.phase == GamePhase::Start {
            self.started_at_ms = Some(now_ms);
            self.spawner.reset(now_ms);
            self.events.push(GameEvent::Started);
            log::info!("Run started (seed {})", self.seed);
        }
        self.phase = next;

        let jumped = physics::jump(&mut self.player, self.tuning.jump_force);
        if jumped {
            self.events.push(GameEvent::Jumped);
        }
        jumped
    }

    /// End the run after a collision
    pub(crate) fn crash(&mut self, now_ms: f64) {
        match self.phase.transition(PhaseEvent::Collide) {
            Ok(next) => self.phase = next,
            Err(err) => {
                log::debug!("Ignoring collision: {}", err);
                return;
            }
        }
        self.game_over_at_ms = Some(now_ms);
        let burst = self.tuning.burst_size;
        let speed = self.tuning.particle_speed;
        self.particles.spawn_burst(
            &mut self.rng,
            self.player.pos,
            NeonColor::Cyan,
            burst,
            speed,
        );
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
        log::info!(
            "Game over: score {} level {} after {} ticks",
            self.score,
            self.level(),
            self.time_ticks
        );
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// True once the post-crash display delay has elapsed
    pub fn ready_for_handoff(&self, now_ms: f64) -> bool {
        self.game_over_at_ms
            .is_some_and(|at| now_ms - at >= GAME_OVER_DELAY_MS)
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            player: &self.player,
            obstacles: &self.obstacles,
            particles: self.particles.as_slice(),
            score: self.score,
            level: self.level(),
            accent: NeonColor::for_level(self.level()).hex(),
            time_ticks: self.time_ticks,
        }
    }
}
