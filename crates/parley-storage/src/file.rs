//! File-backed storage implementation.

use crate::{SecureStorage, StorageError, StorageResult};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Key/value storage persisted as a JSON file under the client base dir.
///
/// Values survive restarts; writes go to disk immediately. Concurrent
/// access within one process is serialized by an internal mutex.
pub struct FileStorage {
    path: PathBuf,
    data: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or create) the store at the given path.
    ///
    /// The parent directory must already exist.
    pub fn open(path: PathBuf) -> StorageResult<Self> {
        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)
                .map_err(|e| StorageError::Encoding(format!("Corrupt store file: {}", e)))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    fn persist(&self, data: &HashMap<String, String>) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(data)
            .map_err(|e| StorageError::Encoding(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SecureStorage for FileStorage {
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut data = self.data.lock().unwrap();
        data.insert(key.to_string(), value.to_string());
        self.persist(&data)?;
        tracing::debug!(key = %key, "Stored value");
        Ok(())
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let data = self.data.lock().unwrap();
        Ok(data.get(key).cloned())
    }

    fn delete(&self, key: &str) -> StorageResult<bool> {
        let mut data = self.data.lock().unwrap();
        let removed = data.remove(key).is_some();
        if removed {
            self.persist(&data)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_get_roundtrip() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("store.json")).unwrap();

        storage.set("token", "abc123").unwrap();
        assert_eq!(storage.get("token").unwrap(), Some("abc123".to_string()));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let storage = FileStorage::open(path.clone()).unwrap();
            storage.set("token", "persisted").unwrap();
        }

        let storage = FileStorage::open(path).unwrap();
        assert_eq!(storage.get("token").unwrap(), Some("persisted".to_string()));
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("store.json")).unwrap();

        storage.set("token", "first").unwrap();
        storage.set("token", "second").unwrap();
        assert_eq!(storage.get("token").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("store.json")).unwrap();

        storage.set("token", "abc").unwrap();
        assert!(storage.delete("token").unwrap());
        assert!(!storage.delete("token").unwrap());
        assert_eq!(storage.get("token").unwrap(), None);
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("store.json")).unwrap();

        assert_eq!(storage.get("anything").unwrap(), None);
        assert!(!storage.has("anything").unwrap());
    }

    #[test]
    fn test_open_corrupt_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all").unwrap();

        let result = FileStorage::open(path);
        assert!(matches!(result, Err(StorageError::Encoding(_))));
    }
}
