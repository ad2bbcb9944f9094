//! Persistent client-side storage for the Parley client.
//!
//! This crate provides the storage port the login flow writes the issued
//! token through, plus the default file-backed implementation kept under
//! the client base dir (`~/.parley/store.json`).

mod file;
mod keys;
mod tokens;
mod traits;

pub use file::FileStorage;
pub use keys::StorageKeys;
pub use tokens::TokenManager;
pub use traits::SecureStorage;

use parley_core::Paths;
use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Create the default file-backed storage implementation.
pub fn create_storage(paths: &Paths) -> StorageResult<Box<dyn SecureStorage>> {
    let storage = FileStorage::open(paths.store_file())?;
    Ok(Box::new(storage))
}

/// Create a TokenManager with the default storage backend.
pub fn create_token_manager(paths: &Paths) -> StorageResult<TokenManager> {
    let storage = create_storage(paths)?;
    Ok(TokenManager::new(storage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_storage() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let storage = create_storage(&paths).unwrap();
        storage.set("token", "value").unwrap();
        assert_eq!(storage.get("token").unwrap(), Some("value".to_string()));
    }

    #[test]
    fn test_create_token_manager() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let manager = create_token_manager(&paths).unwrap();
        manager.set_token("jwt").unwrap();

        // A fresh manager over the same base dir sees the same token
        let manager = create_token_manager(&paths).unwrap();
        assert_eq!(manager.get_token().unwrap(), Some("jwt".to_string()));
    }

    #[test]
    fn test_storage_keys_constants() {
        // The token key is fixed wire-level contract with other clients
        // of the same store.
        assert_eq!(StorageKeys::TOKEN, "token");
    }
}
