//! Cosmetic particle bursts
//!
//! Particles never touch gameplay. Life is counted in whole ticks so a
//! particle always dies on exactly its final tick.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Palette shared by particles and the level theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeonColor {
    Cyan,
    Magenta,
    Red,
}

impl NeonColor {
    /// Theme accent: cyan, then violet at level 2, red from level 3
    pub fn for_level(level: u32) -> Self {
        match level {
            0 | 1 => NeonColor::Cyan,
            2 => NeonColor::Magenta,
            _ => NeonColor::Red,
        }
    }

    /// CSS hex color
    pub fn hex(&self) -> &'static str {
        match self {
            NeonColor::Cyan => "#00ffff",
            NeonColor::Magenta => "#fb00ff",
            NeonColor::Red => "#ff3333",
        }
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life, 1.0 at spawn down to 0.0
    pub life: f32,
    pub color: NeonColor,
    #[serde(skip)]
    ticks_left: u32,
}

/// Owns all live particles
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    lifetime_ticks: u32,
    max_particles: usize,
}

impl ParticleSystem {
    pub fn new(lifetime_ticks: u32, max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            lifetime_ticks: lifetime_ticks.max(1),
            max_particles,
        }
    }

    /// Spawn `count` particles at `origin` with velocity in [-speed, speed) per axis
    pub fn spawn_burst<R: Rng>(
        &mut self,
        rng: &mut R,
        origin: Vec2,
        color: NeonColor,
        count: usize,
        speed: f32,
    ) {
        for _ in 0..count {
            if self.particles.len() >= self.max_particles {
                // Remove oldest particles to make room
                if self.particles.is_empty() {
                    break;
                }
                self.particles.remove(0);
            }
            let vel = if speed.is_finite() && speed > 0.0 {
                Vec2::new(
                    rng.random_range(-speed..speed),
                    rng.random_range(-speed..speed),
                )
            } else {
                Vec2::ZERO
            };
            self.particles.push(Particle {
                pos: origin,
                vel,
                life: 1.0,
                color,
                ticks_left: self.lifetime_ticks,
            });
        }
    }

    /// Advance all particles one tick and drop the dead ones
    pub fn update(&mut self) {
        let lifetime = self.lifetime_ticks as f32;
        for particle in self.particles.iter_mut() {
            particle.pos += particle.vel;
            particle.ticks_left = particle.ticks_left.saturating_sub(1);
            particle.life = particle.ticks_left as f32 / lifetime;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
