//! Idle/demo mode: the simulation plays itself
//!
//! Starts the run immediately and jumps for ground obstacles about to reach
//! the player. Floating blocks are left to pass overhead.

use super::state::{GamePhase, GameSession};

/// Distance (px) between the player's leading edge and an obstacle that triggers a jump
pub const JUMP_LEAD: f32 = 30.0;

/// Should the autopilot press the activation input this tick?
pub fn wants_activation(session: &GameSession) -> bool {
    match session.phase {
        GamePhase::Start => true,
        GamePhase::Playing => {
            let player = &session.player;
            player.grounded
                && session.obstacles.iter().any(|o| {
                    !o.passed
                        && !o.floating
                        && o.right() >= player.pos.x
                        && o.pos.x - player.right() <= JUMP_LEAD
                })
        }
        GamePhase::GameOver => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Obstacle, ObstacleKind, Viewport};
    use glam::Vec2;

    fn obstacle_at(x: f32, floating: bool) -> Obstacle {
        Obstacle {
            id: 1,
            kind: if floating { ObstacleKind::Block } else { ObstacleKind::Spike },
            pos: Vec2::new(x, if floating { 400.0 } else { 460.0 }),
            size: Vec2::splat(40.0),
            floating,
            passed: false,
        }
    }

    #[test]
    fn test_autopilot_starts_run() {
        let session = GameSession::new(1, Viewport::default());
        assert!(wants_activation(&session));
    }

    #[test]
    fn test_autopilot_jumps_for_near_ground_obstacle() {
        let mut session = GameSession::new(1, Viewport::default());
        session.activate(0.0);
        session.player.rest_on_ground(session.ground_y());

        session.obstacles.push(obstacle_at(400.0, false));
        assert!(!wants_activation(&session));

        session.obstacles[0].pos.x = 165.0;
        assert!(wants_activation(&session));
    }

    #[test]
    fn test_autopilot_ignores_floating_blocks() {
        let mut session = GameSession::new(1, Viewport::default());
        session.activate(0.0);
        session.player.rest_on_ground(session.ground_y());
        session.obstacles.push(obstacle_at(150.0, true));
        assert!(!wants_activation(&session));
    }
}
