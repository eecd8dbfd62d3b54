//! File Store
//!
//! One JSON file per user under the data directory. Saves go through a
//! temp-file-then-rename sequence so a crash mid-write never leaves a
//! torn file; concurrent saves for the same user are last-writer-wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("stored payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the data directory.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Derive the filename component for an external user id.
    ///
    /// Ids are restricted to `[A-Za-z0-9_-]` to keep filenames safe.
    /// When stripping changes the id, a short hash of the raw id is
    /// appended so two distinct raw ids can never share a file.
    pub fn storage_key(user_id: &str) -> String {
        let sanitized: String = user_id
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        if sanitized == user_id {
            sanitized
        } else {
            let digest = blake3::hash(user_id.as_bytes()).to_hex();
            format!("{}-{}", sanitized, &digest[..8])
        }
    }

    fn user_file(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("user_{}.json", Self::storage_key(user_id)))
    }

    /// Read a user's stored payload. `Ok(None)` when no save exists yet.
    pub fn load(&self, user_id: &str) -> Result<Option<Value>, StoreError> {
        let path = self.user_file(user_id);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Overwrite a user's stored payload via atomic replace.
    pub fn save(&self, user_id: &str, data: &Value) -> Result<(), StoreError> {
        let path = self.user_file(user_id);
        let tmp = tmp_path(&path);
        fs::write(&tmp, serde_json::to_vec_pretty(data)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_ids_map_to_themselves() {
        assert_eq!(FileStore::storage_key("alice_01-x"), "alice_01-x");
    }

    #[test]
    fn distinct_raw_ids_never_collide_after_sanitizing() {
        let a = FileStore::storage_key("user!a");
        let b = FileStore::storage_key("user?a");
        assert_ne!(a, b);
        for key in [&a, &b] {
            assert!(key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
    }

    #[test]
    fn traversal_characters_are_stripped() {
        let key = FileStore::storage_key("../../etc/passwd");
        assert!(!key.contains('/'));
        assert!(!key.contains('.'));
    }

    #[test]
    fn load_before_any_save_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        assert!(store.load("nobody").unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        let payload = json!({"lists": [{"id": "l1", "name": "Today", "items": []}]});
        store.save("alice", &payload).unwrap();
        assert_eq!(store.load("alice").unwrap(), Some(payload));
    }

    #[test]
    fn save_replaces_the_previous_payload() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        store.save("alice", &json!({"lists": []})).unwrap();
        let second = json!({"lists": [{"id": "l2", "name": "Later", "items": []}]});
        store.save("alice", &second).unwrap();
        assert_eq!(store.load("alice").unwrap(), Some(second));
        // no leftover temp file
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
