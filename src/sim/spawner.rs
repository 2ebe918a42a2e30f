//! Obstacle spawning and scrolling

use glam::Vec2;
use rand::Rng;

use super::state::{Obstacle, ObstacleKind, Viewport};
use crate::tuning::Tuning;

/// Spawn-interval bookkeeping
#[derive(Debug, Clone, Default)]
pub struct ObstacleSpawner {
    /// Host timestamp (ms) of the last spawn, or of the run start
    pub last_spawn_ms: f64,
}

impl ObstacleSpawner {
    pub fn reset(&mut self, now_ms: f64) {
        self.last_spawn_ms = now_ms;
    }

    /// True (and the interval restarts) when more than `interval_ms` has passed
    pub fn poll(&mut self, now_ms: f64, interval_ms: f64) -> bool {
        if now_ms - self.last_spawn_ms > interval_ms {
            self.last_spawn_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// Build a new obstacle at the right edge of the viewport
///
/// Spikes and blocks are equally likely. Blocks float above the ground with
/// `tuning.floating_block_chance`.
pub fn create_obstacle<R: Rng>(rng: &mut R, id: u32, viewport: Viewport, tuning: &Tuning) -> Obstacle {
    let ground_y = tuning.ground_y(viewport.height);
    let size = Vec2::splat(tuning.obstacle_size);

    let kind = if rng.random_bool(0.5) {
        ObstacleKind::Block
    } else {
        ObstacleKind::Spike
    };
    let floating = kind == ObstacleKind::Block && rng.random_bool(tuning.floating_block_chance);

    let y = if floating {
        ground_y - tuning.floating_block_offset
    } else {
        ground_y - size.y
    };

    Obstacle {
        id,
        kind,
        pos: Vec2::new(viewport.width, y),
        size,
        floating,
        passed: false,
    }
}

/// Move every obstacle left by `speed` and drop those fully off-screen
pub fn scroll_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32) {
    for obstacle in obstacles.iter_mut() {
        obstacle.pos.x -= speed;
    }
    obstacles.retain(|o| o.right() >= 0.0);
}
