//! Player settings and preferences
//!
//! Persisted separately from scores under [`SETTINGS_KEY`].

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, PersistenceError, SETTINGS_KEY};
use crate::tuning::Tuning;

/// Player settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name recorded on the leaderboard
    pub player_name: String,

    // === Visual Effects ===
    /// Particle effects (crash burst)
    pub particles: bool,

    // === Accessibility ===
    /// Reduced motion (smaller bursts)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            particles: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Leaderboard name, falling back to the default for blank names
    pub fn display_name(&self) -> &str {
        let name = self.player_name.trim();
        if name.is_empty() { "Player" } else { name }
    }

    /// Apply visual preferences to gameplay tuning
    pub fn apply_to(&self, tuning: &mut Tuning) {
        if !self.particles {
            tuning.burst_size = 0;
        } else if self.reduced_motion {
            tuning.burst_size /= 2;
        }
    }

    /// Load settings from the store, defaults if missing or unreadable
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        if let Some(json) = store.get_item(SETTINGS_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(err) => log::warn!("Ignoring unreadable settings: {}", err),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save<S: KeyValueStore>(&self, store: &mut S) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(self)?;
        store.set_item(SETTINGS_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BURST_SIZE;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            player_name: "Ada".to_string(),
            particles: false,
            reduced_motion: true,
        };
        settings.save(&mut store).unwrap();
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_load_defaults_on_garbage() {
        let mut store = MemoryStore::new();
        store.set_item(SETTINGS_KEY, "nope").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let mut store = MemoryStore::new();
        store.set_item(SETTINGS_KEY, r#"{"player_name":"Zed"}"#).unwrap();
        let settings = Settings::load(&store);
        assert_eq!(settings.player_name, "Zed");
        assert!(settings.particles);
    }

    #[test]
    fn test_apply_to_tuning() {
        let mut tuning = Tuning::default();
        Settings::default().apply_to(&mut tuning);
        assert_eq!(tuning.burst_size, BURST_SIZE);

        let mut tuning = Tuning::default();
        Settings {
            reduced_motion: true,
            ..Settings::default()
        }
        .apply_to(&mut tuning);
        assert_eq!(tuning.burst_size, BURST_SIZE / 2);

        let mut tuning = Tuning::default();
        Settings {
            particles: false,
            ..Settings::default()
        }
        .apply_to(&mut tuning);
        assert_eq!(tuning.burst_size, 0);
    }

    #[test]
    fn test_display_name_fallback() {
        let settings = Settings {
            player_name: "   ".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.display_name(), "Player");
    }
}
