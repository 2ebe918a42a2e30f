//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here. Defaults come from
//! [`crate::consts`]; a JSON document may override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_force: f32,
    pub speed: f32,
    pub spawn_interval_ms: f64,
    pub ground_height: f32,
    pub player_x: f32,
    pub player_size: f32,
    pub rotation_rate: f32,
    pub obstacle_size: f32,
    pub floating_block_chance: f64,
    pub floating_block_offset: f32,
    pub collision_grace: f32,
    pub pass_reward: u64,
    pub level_threshold: u64,
    pub burst_size: usize,
    pub particle_speed: f32,
    pub particle_lifetime_ticks: u32,
    pub max_particles: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            speed: SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            ground_height: GROUND_HEIGHT,
            player_x: PLAYER_X,
            player_size: PLAYER_SIZE,
            rotation_rate: ROTATION_RATE,
            obstacle_size: OBSTACLE_SIZE,
            floating_block_chance: FLOATING_BLOCK_CHANCE,
            floating_block_offset: FLOATING_BLOCK_OFFSET,
            collision_grace: COLLISION_GRACE,
            pass_reward: PASS_REWARD,
            level_threshold: LEVEL_THRESHOLD,
            burst_size: BURST_SIZE,
            particle_speed: PARTICLE_SPEED,
            particle_lifetime_ticks: PARTICLE_LIFETIME_TICKS,
            max_particles: MAX_PARTICLES,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Self = serde_json::from_str(json)?;
        tuning.sanitize();
        Ok(tuning)
    }

    /// Clamp values that would break the tick contract
    fn sanitize(&mut self) {
        // JSON numbers past f32::MAX parse as infinity
        finite_or(&mut self.gravity, GRAVITY);
        finite_or(&mut self.jump_force, JUMP_FORCE);
        finite_or(&mut self.speed, SPEED);
        finite_or(&mut self.ground_height, GROUND_HEIGHT);
        finite_or(&mut self.player_x, PLAYER_X);
        finite_or(&mut self.player_size, PLAYER_SIZE);
        finite_or(&mut self.rotation_rate, ROTATION_RATE);
        finite_or(&mut self.obstacle_size, OBSTACLE_SIZE);
        finite_or(&mut self.floating_block_offset, FLOATING_BLOCK_OFFSET);
        finite_or(&mut self.collision_grace, COLLISION_GRACE);
        finite_or(&mut self.particle_speed, PARTICLE_SPEED);
        if !self.spawn_interval_ms.is_finite() {
            self.spawn_interval_ms = SPAWN_INTERVAL_MS;
        }
        if !self.floating_block_chance.is_finite() {
            self.floating_block_chance = FLOATING_BLOCK_CHANCE;
        }

        // Obstacles must move left or they are never removed
        self.speed = self.speed.max(0.0);
        self.level_threshold = self.level_threshold.max(1);
        self.particle_lifetime_ticks = self.particle_lifetime_ticks.max(1);
        self.floating_block_chance = self.floating_block_chance.clamp(0.0, 1.0);
        self.particle_speed = self.particle_speed.abs();
        self.collision_grace = self.collision_grace.max(0.0);
    }

    /// Ground line for a viewport of the given height
    #[inline]
    pub fn ground_y(&self, viewport_height: f32) -> f32 {
        viewport_height - self.ground_height
    }
}

fn finite_or(value: &mut f32, default: f32) {
    if !value.is_finite() {
        log::warn!("Non-finite tuning value {}, using {}", value, default);
        *value = default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.8, "speed": 9.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.speed, 9.0);
        assert_eq!(tuning.jump_force, JUMP_FORCE);
        assert_eq!(tuning.burst_size, BURST_SIZE);
    }

    #[test]
    fn test_sanitize_rejects_zero_threshold() {
        let tuning =
            Tuning::from_json(r#"{ "level_threshold": 0, "floating_block_chance": 4.0 }"#).unwrap();
        assert_eq!(tuning.level_threshold, 1);
        assert_eq!(tuning.floating_block_chance, 1.0);
    }

    #[test]
    fn test_sanitize_replaces_overflowing_values() {
        let tuning = Tuning::from_json(
            r#"{ "particle_speed": 1e39, "gravity": -1e39, "obstacle_size": 1e40, "speed": 1e39 }"#,
        )
        .unwrap();
        assert_eq!(tuning.particle_speed, PARTICLE_SPEED);
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.obstacle_size, OBSTACLE_SIZE);
        assert_eq!(tuning.speed, SPEED);
    }

    #[test]
    fn test_sanitize_keeps_obstacles_moving_left() {
        let tuning = Tuning::from_json(r#"{ "speed": -6.0 }"#).unwrap();
        assert_eq!(tuning.speed, 0.0);
    }

    #[test]
    fn test_crash_with_overflowing_particle_speed() {
        use crate::sim::{GamePhase, GameSession, Viewport};

        let tuning = Tuning::from_json(r#"{ "particle_speed": 1e39 }"#).unwrap();
        let mut session = GameSession::with_tuning(7, Viewport::new(800.0, 600.0), tuning);
        session.activate(0.0);
        session.crash(10.0);

        assert_eq!(session.phase, GamePhase::GameOver);
        assert_eq!(session.particles.len(), BURST_SIZE);
        assert!(
            session
                .particles
                .as_slice()
                .iter()
                .all(|p| p.vel.x.abs() <= PARTICLE_SPEED && p.vel.y.abs() <= PARTICLE_SPEED)
        );
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Tuning::from_json("{ gravity: ").is_err());
    }

    #[test]
    fn test_ground_y() {
        let tuning = Tuning::default();
        assert_eq!(tuning.ground_y(600.0), 500.0);
    }
}
