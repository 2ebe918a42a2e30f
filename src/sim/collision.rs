//! Collision detection between the player and obstacles
//!
//! Plain axis-aligned boxes. Both boxes are shrunk by a grace margin before
//! the overlap test so grazing contacts don't end the run.

use glam::Vec2;

use super::state::{Obstacle, Player};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Shrink by `margin` on all four sides
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            max: self.max - Vec2::splat(margin),
        }
    }

    /// Strict overlap on both axes (touching edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

impl From<&Player> for Aabb {
    fn from(player: &Player) -> Self {
        Aabb::from_pos_size(player.pos, player.size)
    }
}

impl From<&Obstacle> for Aabb {
    fn from(obstacle: &Obstacle) -> Self {
        Aabb::from_pos_size(obstacle.pos, obstacle.size)
    }
}

/// Check whether the player touches an obstacle after applying `grace`
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle, grace: f32) -> bool {
    Aabb::from(player)
        .inset(grace)
        .overlaps(&Aabb::from(obstacle).inset(grace))
}

/// Index of the first obstacle (in creation order) the player collides with
pub fn first_collision(player: &Player, obstacles: &[Obstacle], grace: f32) -> Option<usize> {
    obstacles
        .iter()
        .position(|o| player_hits_obstacle(player, o, grace))
}
