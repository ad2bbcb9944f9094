//! Authentication error types.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Password and confirmation differ; no request was sent
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Authentication rejected by the service
    #[error("Authentication failed: {0}")]
    InvalidCredentials(String),

    /// Registration rejected by the service
    #[error("Registration failed: {0}")]
    Registration(String),

    /// Password recovery request rejected by the service
    #[error("Password recovery failed: {0}")]
    Recovery(String),

    /// Password reset rejected by the service
    #[error("Password reset failed: {0}")]
    Reset(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] parley_storage::StorageError),

    /// HTTP request error (transport failure or undecodable response body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias using AuthError.
pub type AuthResult<T> = Result<T, AuthError>;
