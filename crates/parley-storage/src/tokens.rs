//! High-level API for the stored authentication token.

use crate::{SecureStorage, StorageKeys, StorageResult};

/// Typed facade over a storage backend for the authentication token.
///
/// The login flow writes the token here; it is never parsed or validated
/// client-side.
pub struct TokenManager {
    storage: Box<dyn SecureStorage>,
}

impl TokenManager {
    /// Create a new token manager with the given storage backend
    pub fn new(storage: Box<dyn SecureStorage>) -> Self {
        Self { storage }
    }

    /// Store the authentication token
    pub fn set_token(&self, token: &str) -> StorageResult<()> {
        self.storage.set(StorageKeys::TOKEN, token)
    }

    /// Retrieve the authentication token
    pub fn get_token(&self) -> StorageResult<Option<String>> {
        self.storage.get(StorageKeys::TOKEN)
    }

    /// Check whether a token is stored
    pub fn has_token(&self) -> StorageResult<bool> {
        self.storage.has(StorageKeys::TOKEN)
    }

    /// Delete the stored token
    pub fn clear_token(&self) -> StorageResult<bool> {
        self.storage.delete(StorageKeys::TOKEN)
    }
}
