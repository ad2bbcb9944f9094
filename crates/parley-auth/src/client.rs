//! HTTP client for the Parley account API.
//!
//! All operations POST (or PUT) JSON bodies to fixed `/api/auth/*`
//! endpoints and treat any non-2xx status uniformly as failure.

use crate::error::{AuthError, AuthResult};
use serde::{Deserialize, Serialize};

/// Email and password for one login submission.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form data for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Request body for the password recovery email.
#[derive(Debug, Serialize)]
struct RecoveryRequest<'a> {
    email: &'a str,
}

/// Request body for the password reset.
#[derive(Debug, Serialize)]
struct ResetRequest<'a> {
    password: &'a str,
    #[serde(rename = "confirmPassword")]
    confirm_password: &'a str,
}

/// Successful authentication response. The token is opaque; extra
/// response fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticationResponse {
    pub token: String,
}

/// Client for the account API.
#[derive(Clone)]
pub struct AuthClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - The service base URL (e.g., `https://app.parley.chat`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build the URL for an auth endpoint.
    fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/api/auth/{}", self.base_url, endpoint)
    }

    /// Exchange credentials for an authentication token.
    pub async fn authenticate(&self, credentials: &Credentials) -> AuthResult<AuthenticationResponse> {
        let url = self.auth_url("authenticate");

        tracing::debug!(url = %url, email = %credentials.email, "Authenticating");

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(credentials)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Authentication failed");
            return Err(AuthError::InvalidCredentials(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let data: AuthenticationResponse = response.json().await?;
        Ok(data)
    }

    /// Create a new account. Success is signaled purely by the status
    /// code; the response body is ignored.
    pub async fn register(&self, registration: &Registration) -> AuthResult<()> {
        let url = self.auth_url("register");

        tracing::debug!(url = %url, email = %registration.email, "Registering");

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(registration)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Registration failed");
            return Err(AuthError::Registration(format!("HTTP {}: {}", status, body)));
        }

        Ok(())
    }

    /// Ask the service to send a password recovery email.
    pub async fn request_recovery(&self, email: &str) -> AuthResult<()> {
        let url = self.auth_url("recovery");

        tracing::debug!(url = %url, email = %email, "Requesting password recovery");

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&RecoveryRequest { email })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Password recovery failed");
            return Err(AuthError::Recovery(format!("HTTP {}: {}", status, body)));
        }

        Ok(())
    }

    /// Set a new password using a reset token from the recovery email.
    pub async fn reset_password(
        &self,
        reset_token: &str,
        password: &str,
        confirm_password: &str,
    ) -> AuthResult<()> {
        let url = self.auth_url("reset");

        tracing::debug!(url = %url, "Resetting password");

        let response = self
            .http_client
            .put(&url)
            .query(&[("token", reset_token)])
            .header("Content-Type", "application/json")
            .json(&ResetRequest {
                password,
                confirm_password,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Password reset failed");
            return Err(AuthError::Reset(format!("HTTP {}: {}", status, body)));
        }

        Ok(())
    }
}
