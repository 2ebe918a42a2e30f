//! Score and settings persistence
//!
//! Storage is a flat string key/value store shaped like browser LocalStorage.
//! Reads never fail the caller: missing or corrupt values fall back to
//! defaults. Writes report errors so the host can log them.

use std::collections::HashMap;

use thiserror::Error;

use crate::highscores::Leaderboard;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

/// Key holding the most recent final score
pub const LAST_SCORE_KEY: &str = "neon-pulse-last-score";
/// Key holding the JSON leaderboard
pub const LEADERBOARD_KEY: &str = "neon-pulse-leaderboard";
/// Key holding player settings
pub const SETTINGS_KEY: &str = "neon-pulse-settings";

/// Errors from the storage backend
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Backend could not be reached (no window, storage disabled)
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("encoding error: {0}")]
    Encode(#[from] serde_json::Error),
    /// Backend-specific failure message
    #[error("storage error: {0}")]
    Backend(String),
}

/// String key/value storage
pub trait KeyValueStore {
    /// Read a value. Backend failures read as `None`.
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Score persistence over any [`KeyValueStore`]
pub struct ScoreBook<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ScoreBook<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Stored leaderboard, empty if missing or unreadable
    pub fn leaderboard(&self) -> Leaderboard {
        match self.store.get_item(LEADERBOARD_KEY) {
            Some(json) => Leaderboard::from_json(&json),
            None => Leaderboard::new(),
        }
    }

    /// Most recent final score, zero if missing or unreadable
    pub fn last_score(&self) -> u64 {
        self.store
            .get_item(LAST_SCORE_KEY)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Persist a finished run: last score plus leaderboard entry
    ///
    /// Returns the leaderboard rank achieved, if any.
    pub fn record_game_over(
        &mut self,
        name: &str,
        score: u64,
        timestamp: f64,
    ) -> Result<Option<usize>, PersistenceError> {
        self.store.set_item(LAST_SCORE_KEY, &score.to_string())?;

        let mut board = self.leaderboard();
        let rank = board.record(name, score, timestamp);
        self.store.set_item(LEADERBOARD_KEY, &board.to_json()?)?;

        match rank {
            Some(rank) => log::info!("Score {} saved at rank {}", score, rank),
            None => log::info!("Score {} saved (not in top {})", score, board.entries.len()),
        }
        Ok(rank)
    }
}
