//! Read-only per-frame view handed to the renderer

use serde::Serialize;

use super::particles::Particle;
use super::state::{GamePhase, Obstacle, Player};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub particles: &'a [Particle],
    pub score: u64,
    pub level: u32,
    /// Theme accent for the current level, CSS hex
    pub accent: &'static str,
    pub time_ticks: u64,
}

impl Snapshot<'_> {
    /// JSON encoding for web hosts
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::sim::{GameSession, Viewport};

    #[test]
    fn test_snapshot_json_shape() {
        let session = GameSession::new(5, Viewport::new(800.0, 600.0));
        let json = session.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["phase"], "Start");
        assert_eq!(value["score"], 0);
        assert_eq!(value["level"], 1);
        assert_eq!(value["accent"], "#00ffff");
        assert_eq!(value["player"]["grounded"], true);
        assert!(value["obstacles"].as_array().unwrap().is_empty());
        assert!(value["particles"].as_array().unwrap().is_empty());
    }
}
