//! CLI command implementations.

mod auth;

pub use auth::{login, recover, register, reset};

use anyhow::Result;
use parley_auth::{AuthClient, SessionManager};
use parley_core::{Config, Paths};
use parley_storage::TokenManager;

/// Build a session manager over the default config and token store.
fn session_manager() -> Result<(SessionManager, Config)> {
    let paths = Paths::new()?;
    paths.ensure_dirs()?;

    let config = Config::load(&paths)?;

    let storage = parley_storage::create_storage(&paths)?;
    let tokens = TokenManager::new(storage);
    let client = AuthClient::new(config.api_url.clone());

    Ok((SessionManager::new(tokens, client), config))
}
