//! Storage key constants.

/// Storage keys used by the client
pub struct StorageKeys;

impl StorageKeys {
    /// Authentication token issued by the service
    pub const TOKEN: &'static str = "token";
}
