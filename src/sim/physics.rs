//! Player physics
//!
//! Gravity and velocity are per tick, not per second: one call to
//! [`integrate`] is one rendered frame.

use super::state::Player;
use crate::tuning::Tuning;

/// Apply a jump impulse. Only works from the ground; returns whether it fired.
pub fn jump(player: &mut Player, jump_force: f32) -> bool {
    if !player.grounded {
        return false;
    }
    player.dy = jump_force;
    player.grounded = false;
    true
}

/// Advance the player by one tick against the ground line and ceiling
pub fn integrate(player: &mut Player, tuning: &Tuning, ground_y: f32) {
    player.dy += tuning.gravity;
    player.pos.y += player.dy;

    if player.bottom() >= ground_y {
        player.pos.y = ground_y - player.size.y;
        player.dy = 0.0;
        player.grounded = true;
        player.rotation = snap_rotation(player.rotation);
    } else {
        player.grounded = false;
        player.rotation += tuning.rotation_rate;
    }

    if player.pos.y < 0.0 {
        player.pos.y = 0.0;
        player.dy = 0.0;
    }
}

/// Nearest multiple of 90 degrees
#[inline]
pub fn snap_rotation(degrees: f32) -> f32 {
    (degrees / 90.0).round() * 90.0
}
