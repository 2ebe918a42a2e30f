//! Per-frame simulation tick
//!
//! One call advances the session by one rendered frame. Physics and scrolling
//! are per tick; only obstacle spawning looks at the host's clock.

use super::autopilot;
use super::collision::first_collision;
use super::physics;
use super::score::award_passes;
use super::snapshot::Snapshot;
use super::spawner::{create_obstacle, scroll_obstacles};
use super::state::{GameEvent, GamePhase, GameSession, Viewport};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Host timestamp in milliseconds
    pub now_ms: f64,
    /// Viewport size this frame
    pub viewport: Viewport,
    /// Activation (space/up/tap) since the last tick
    pub activate: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the session by one tick and return the frame to draw
pub fn tick<'a>(session: &'a mut GameSession, input: &TickInput) -> Snapshot<'a> {
    session.viewport = input.viewport;
    let ground_y = session.ground_y();
    if session.phase == GamePhase::Start {
        // The opening jump leaves from this frame's ground line
        session.player.rest_on_ground(ground_y);
    }

    let activate = input.activate || (input.idle_mode && autopilot::wants_activation(session));
    if activate {
        session.activate(input.now_ms);
    }

    match session.phase {
        // Already resting on this frame's ground line
        GamePhase::Start => {}
        GamePhase::Playing => {
            advance_playing(session, input.now_ms, ground_y);
        }
        GamePhase::GameOver => {
            // Frozen, but the crash burst keeps fading
            session.particles.update();
        }
    }

    session.snapshot()
}

fn advance_playing(session: &mut GameSession, now_ms: f64, ground_y: f32) {
    session.time_ticks += 1;

    physics::integrate(&mut session.player, &session.tuning, ground_y);

    if session
        .spawner
        .poll(now_ms, session.tuning.spawn_interval_ms)
    {
        let id = session.next_entity_id();
        let obstacle = create_obstacle(&mut session.rng, id, session.viewport, &session.tuning);
        log::debug!(
            "Spawned {:?} #{} (floating: {}) at tick {}",
            obstacle.kind,
            id,
            obstacle.floating,
            session.time_ticks
        );
        session.emit(GameEvent::ObstacleSpawned {
            id,
            kind: obstacle.kind,
        });
        session.obstacles.push(obstacle);
    }
    scroll_obstacles(&mut session.obstacles, session.tuning.speed);

    // Collision wins over passing on the same tick
    let grace = session.tuning.collision_grace;
    if let Some(index) = first_collision(&session.player, &session.obstacles, grace) {
        log::debug!("Hit obstacle #{}", session.obstacles[index].id);
        session.crash(now_ms);
    } else {
        let reward = session.tuning.pass_reward;
        let threshold = session.tuning.level_threshold;
        let result = award_passes(
            &session.player,
            &mut session.obstacles,
            &mut session.score,
            reward,
            threshold,
        );
        let score = session.score;
        for id in result.passed {
            session.emit(GameEvent::ObstaclePassed { id, score });
        }
        if let Some(level) = result.level_up {
            log::info!("Level up: {} (score {})", level, score);
            session.emit(GameEvent::LevelUp { level });
        }
    }

    session.particles.update();
}
