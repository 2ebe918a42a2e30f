//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (host clock in milliseconds)
//! - Input events (which keys mean "activate")
//! - Storage (LocalStorage on web)

/// Host clock in milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Keyboard codes (`KeyboardEvent.code`) that activate start/jump
pub fn is_activation_key(code: &str) -> bool {
    matches!(code, "Space" | "ArrowUp")
}

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use crate::persistence::{KeyValueStore, PersistenceError};

    /// Browser LocalStorage
    pub struct LocalStorageStore {
        storage: Option<web_sys::Storage>,
    }

    impl LocalStorageStore {
        pub fn new() -> Self {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten();
            if storage.is_none() {
                log::warn!("LocalStorage unavailable, scores will not persist");
            }
            Self { storage }
        }
    }

    impl Default for LocalStorageStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl KeyValueStore for LocalStorageStore {
        fn get_item(&self, key: &str) -> Option<String> {
            self.storage
                .as_ref()
                .and_then(|s| s.get_item(key).ok())
                .flatten()
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
            let storage = self.storage.as_ref().ok_or(PersistenceError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|err| PersistenceError::Backend(format!("{:?}", err)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Space"));
        assert!(is_activation_key("ArrowUp"));
        assert!(!is_activation_key("ArrowDown"));
        assert!(!is_activation_key("KeyW"));
    }

    #[test]
    fn test_now_ms_advances() {
        let a = now_ms();
        let b = now_ms();
        assert!(a > 0.0);
        assert!(b >= a);
    }
}
