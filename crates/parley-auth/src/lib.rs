//! Account flows for the Parley client.
//!
//! This crate provides:
//! - A typed HTTP client for the service's `/api/auth/*` endpoints
//! - Login and registration flows with token persistence
//! - Password recovery and reset flows

mod client;
mod error;
mod session;

pub use client::{AuthClient, AuthenticationResponse, Credentials, Registration};
pub use error::{AuthError, AuthResult};
pub use session::{LoginOutcome, SessionManager, POST_LOGIN_DESTINATION};
