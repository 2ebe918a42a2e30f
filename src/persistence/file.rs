//! Native file-backed store: one file per key in a data directory

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, PersistenceError};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the data directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `[A-Za-z0-9-]` pass through, every other byte becomes `_xx`
    fn path_for(&self, key: &str) -> PathBuf {
        let mut file = String::with_capacity(key.len() + 5);
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                file.push(byte as char);
            } else {
                file.push_str(&format!("_{:02x}", byte));
            }
        }
        file.push_str(".json");
        self.dir.join(file)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("Failed to read {}: {}", key, err);
                None
            }
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        // Temp file + rename: readers see the old value or the new one
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        if let Err(err) = fs::rename(&tmp, &path) {
            fs::remove_file(&tmp).ok();
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{LEADERBOARD_KEY, ScoreBook};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("neon-pulse-{}-{}-{}", tag, std::process::id(), nanos))
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = temp_dir("roundtrip");
        let mut store = FileStore::open(&dir).unwrap();
        assert_eq!(store.get_item("missing"), None);

        store.set_item("neon-pulse-last-score", "700").unwrap();
        assert_eq!(store.get_item("neon-pulse-last-score").as_deref(), Some("700"));

        // Reopening sees the same data
        let reopened = FileStore::open(&dir).unwrap();
        assert_eq!(reopened.get_item("neon-pulse-last-score").as_deref(), Some("700"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_score_book_on_disk_survives_corruption() {
        let dir = temp_dir("corrupt");
        let mut store = FileStore::open(&dir).unwrap();
        store.set_item(LEADERBOARD_KEY, "[{\"name\": ").unwrap();

        let mut book = ScoreBook::new(store);
        assert!(book.leaderboard().is_empty());
        book.record_game_over("Player", 800, 1.0).unwrap();
        assert_eq!(book.leaderboard().top_score(), Some(800));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_keys_are_sanitized() {
        let store = FileStore::open(temp_dir("sanitize")).unwrap();
        let path = store.path_for("../escape/key");
        assert_eq!(path.parent(), Some(store.dir()));
        fs::remove_dir_all(store.dir()).ok();
    }

    #[test]
    fn test_distinct_keys_use_distinct_files() {
        let mut store = FileStore::open(temp_dir("distinct")).unwrap();
        assert_ne!(store.path_for("a.b"), store.path_for("a_b"));
        assert_eq!(
            store.path_for(LEADERBOARD_KEY).file_name(),
            Some(std::ffi::OsStr::new("neon-pulse-leaderboard.json"))
        );

        store.set_item("a.b", "dot").unwrap();
        store.set_item("a_b", "underscore").unwrap();
        assert_eq!(store.get_item("a.b").as_deref(), Some("dot"));
        assert_eq!(store.get_item("a_b").as_deref(), Some("underscore"));
        fs::remove_dir_all(store.dir()).ok();
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let mut store = FileStore::open(temp_dir("rename")).unwrap();
        // A non-empty directory where the value file belongs makes rename fail
        let target = store.path_for("blocked");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        let err = store.set_item("blocked", "1").unwrap_err();
        assert!(matches!(err, PersistenceError::Io(_)));
        assert!(!target.with_extension("json.tmp").exists());
        fs::remove_dir_all(store.dir()).ok();
    }
}
