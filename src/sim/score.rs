//! Score and level progression

use super::state::{Obstacle, Player};
use crate::level_for_score;

/// Outcome of one scoring pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassResult {
    /// IDs of obstacles that were passed this tick
    pub passed: Vec<u32>,
    /// Level after the pass, if it changed
    pub level_up: Option<u32>,
}

/// Mark obstacles whose trailing edge cleared the player and award points
///
/// Each obstacle scores at most once. The level is recomputed from the new
/// score rather than incremented.
pub fn award_passes(
    player: &Player,
    obstacles: &mut [Obstacle],
    score: &mut u64,
    reward: u64,
    level_threshold: u64,
) -> PassResult {
    let level_before = level_for_score(*score, level_threshold);
    let mut result = PassResult::default();

    for obstacle in obstacles.iter_mut() {
        if !obstacle.passed && obstacle.right() < player.pos.x {
            obstacle.passed = true;
            *score += reward;
            result.passed.push(obstacle.id);
        }
    }

    let level_after = level_for_score(*score, level_threshold);
    if level_after > level_before {
        result.level_up = Some(level_after);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::ObstacleKind;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new(&Tuning::default(), 500.0)
    }

    fn obstacle(id: u32, x: f32) -> Obstacle {
        Obstacle {
            id,
            kind: ObstacleKind::Spike,
            pos: Vec2::new(x, 460.0),
            size: Vec2::splat(40.0),
            floating: false,
            passed: false,
        }
    }

    #[test]
    fn test_pass_fires_once_when_trailing_edge_clears() {
        let p = player();
        let mut obstacles = vec![obstacle(1, 66.0)];
        let mut score = 0;

        // Trailing edge at 106, still overlapping the player's column
        let r = award_passes(&p, &mut obstacles, &mut score, PASS_REWARD, LEVEL_THRESHOLD);
        assert!(r.passed.is_empty());
        assert_eq!(score, 0);

        // Trailing edge exactly at player.x is not yet past
        obstacles[0].pos.x = 60.0;
        award_passes(&p, &mut obstacles, &mut score, PASS_REWARD, LEVEL_THRESHOLD);
        assert_eq!(score, 0);

        obstacles[0].pos.x = 54.0;
        let r = award_passes(&p, &mut obstacles, &mut score, PASS_REWARD, LEVEL_THRESHOLD);
        assert_eq!(r.passed, vec![1]);
        assert_eq!(score, 100);
        assert!(obstacles[0].passed);

        obstacles[0].pos.x = 0.0;
        let r = award_passes(&p, &mut obstacles, &mut score, PASS_REWARD, LEVEL_THRESHOLD);
        assert!(r.passed.is_empty());
        assert_eq!(score, 100);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for_score(0, LEVEL_THRESHOLD), 1);
        assert_eq!(level_for_score(999, LEVEL_THRESHOLD), 1);
        assert_eq!(level_for_score(1000, LEVEL_THRESHOLD), 2);
        assert_eq!(level_for_score(2500, LEVEL_THRESHOLD), 3);
    }

    #[test]
    fn test_level_up_reported() {
        let p = player();
        let mut obstacles = vec![obstacle(1, 0.0)];
        let mut score = 900;
        let r = award_passes(&p, &mut obstacles, &mut score, PASS_REWARD, LEVEL_THRESHOLD);
        assert_eq!(score, 1000);
        assert_eq!(r.level_up, Some(2));
    }

    proptest! {
        #[test]
        fn prop_level_matches_formula(passes in 0usize..200) {
            let p = player();
            let mut score = 0u64;
            let mut last_level = 1;
            for id in 0..passes {
                let mut obstacles = vec![obstacle(id as u32, 0.0)];
                award_passes(&p, &mut obstacles, &mut score, PASS_REWARD, LEVEL_THRESHOLD);
                let level = level_for_score(score, LEVEL_THRESHOLD);
                prop_assert_eq!(level as u64, score / 1000 + 1);
                prop_assert!(level >= last_level);
                last_level = level;
            }
            prop_assert_eq!(score, passes as u64 * PASS_REWARD);
        }
    }
}
