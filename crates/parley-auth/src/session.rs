//! Login and registration flows over the account API.
//!
//! Each flow is one linear sequence: at most one client-side precondition
//! check and one request with a success/failure outcome. Failures are
//! terminal for that submission; there is no retry.

use crate::client::{AuthClient, Credentials, Registration};
use crate::error::{AuthError, AuthResult};
use parley_storage::TokenManager;
use tracing::{debug, info, warn};

/// Path the caller should navigate to after a successful login.
pub const POST_LOGIN_DESTINATION: &str = "/home";

/// Successful login result.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The issued token, as stored.
    pub token: String,
    /// Fixed post-login path, relative to the service base URL.
    pub destination: String,
}

/// Drives the account flows and persists the issued token.
///
/// The storage port is injected so tests can substitute an in-memory
/// fake. Only the login flow writes to it; nothing here reads the token
/// back or interprets it.
pub struct SessionManager {
    tokens: TokenManager,
    client: AuthClient,
}

impl SessionManager {
    /// Create a new session manager.
    pub fn new(tokens: TokenManager, client: AuthClient) -> Self {
        Self { tokens, client }
    }

    /// Login with email and password.
    ///
    /// On success the issued token is stored under the fixed key and the
    /// outcome carries the post-login destination. On any failure (non-2xx,
    /// transport, undecodable body) nothing is stored and no destination
    /// is produced.
    pub async fn login(&self, credentials: &Credentials) -> AuthResult<LoginOutcome> {
        debug!(email = %credentials.email, "Attempting login");

        let response = self.client.authenticate(credentials).await?;

        self.tokens.set_token(&response.token)?;

        info!(email = %credentials.email, "Login successful");

        Ok(LoginOutcome {
            token: response.token,
            destination: POST_LOGIN_DESTINATION.to_string(),
        })
    }

    /// Register a new account.
    ///
    /// If the password and its confirmation differ, fails immediately
    /// without any network call. A successful registration deliberately
    /// does not log the user in or produce a destination; the service
    /// expects a separate login afterwards.
    pub async fn register(&self, registration: &Registration) -> AuthResult<()> {
        if registration.password != registration.confirm_password {
            warn!("Registration aborted: passwords do not match");
            return Err(AuthError::PasswordMismatch);
        }

        self.client.register(registration).await?;

        info!(email = %registration.email, "Registration successful");
        Ok(())
    }

    /// Ask the service to send a password recovery email.
    pub async fn request_recovery(&self, email: &str) -> AuthResult<()> {
        self.client.request_recovery(email).await?;

        info!(email = %email, "Password recovery email requested");
        Ok(())
    }

    /// Set a new password using a reset token from the recovery email.
    ///
    /// Shares the mismatch precondition with registration: no request is
    /// sent when the confirmation differs.
    pub async fn reset_password(
        &self,
        reset_token: &str,
        password: &str,
        confirm_password: &str,
    ) -> AuthResult<()> {
        if password != confirm_password {
            warn!("Password reset aborted: passwords do not match");
            return Err(AuthError::PasswordMismatch);
        }

        self.client
            .reset_password(reset_token, password, confirm_password)
            .await?;

        info!("Password reset successful");
        Ok(())
    }
}
