//! Account commands.

use super::session_manager;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use parley_auth::{Credentials, Registration};
use std::io::{self, Write};

/// Login with email and password.
pub async fn login(format: &OutputFormat) -> Result<()> {
    // Prompt for email
    print!("Email: ");
    io::stdout().flush()?;
    let mut email = String::new();
    io::stdin().read_line(&mut email)?;
    let email = email.trim().to_string();

    if email.is_empty() {
        output::print_error("Email is required", format);
        return Ok(());
    }

    // Prompt for password (hidden)
    let password = rpassword::prompt_password("Password: ")?;

    if password.is_empty() {
        output::print_error("Password is required", format);
        return Ok(());
    }

    println!("Logging in...");

    let (manager, config) = session_manager()?;

    match manager
        .login(&Credentials {
            email: email.clone(),
            password,
        })
        .await
    {
        Ok(outcome) => {
            output::print_success(&format!("Logged in as {}", email), format);

            let destination_url = format!("{}{}", config.api_url, outcome.destination);
            if let Err(e) = open::that(&destination_url) {
                tracing::debug!("Could not open browser: {}", e);
                println!("Continue in your browser: {}", destination_url);
            }
        }
        Err(e) => {
            output::print_error(&format!("Login failed: {}", e), format);
        }
    }

    Ok(())
}

/// Create a new account.
pub async fn register(format: &OutputFormat) -> Result<()> {
    // Prompt for email
    print!("Email: ");
    io::stdout().flush()?;
    let mut email = String::new();
    io::stdin().read_line(&mut email)?;
    let email = email.trim().to_string();

    if email.is_empty() {
        output::print_error("Email is required", format);
        return Ok(());
    }

    // Prompt for password and confirmation (hidden)
    let password = rpassword::prompt_password("Password: ")?;

    if password.is_empty() {
        output::print_error("Password is required", format);
        return Ok(());
    }

    let confirm_password = rpassword::prompt_password("Confirm password: ")?;

    println!("Creating account...");

    let (manager, _config) = session_manager()?;

    match manager
        .register(&Registration {
            email: email.clone(),
            password,
            confirm_password,
        })
        .await
    {
        Ok(()) => {
            output::print_success(
                "Registration successful. Log in with 'parley login'.",
                format,
            );
        }
        Err(e) => {
            output::print_error(&format!("Registration failed: {}", e), format);
        }
    }

    Ok(())
}

/// Request a password recovery email.
pub async fn recover(email: Option<&str>, format: &OutputFormat) -> Result<()> {
    let email = match email {
        Some(email) => email.to_string(),
        None => {
            print!("Email: ");
            io::stdout().flush()?;
            let mut email = String::new();
            io::stdin().read_line(&mut email)?;
            email.trim().to_string()
        }
    };

    if email.is_empty() {
        output::print_error("Email is required", format);
        return Ok(());
    }

    let (manager, _config) = session_manager()?;

    match manager.request_recovery(&email).await {
        Ok(()) => {
            output::print_success(&format!("Recovery email sent to {}", email), format);
        }
        Err(e) => {
            output::print_error(&format!("Password recovery failed: {}", e), format);
        }
    }

    Ok(())
}

/// Set a new password using a reset token from the recovery email.
pub async fn reset(token: &str, format: &OutputFormat) -> Result<()> {
    let password = rpassword::prompt_password("New password: ")?;

    if password.is_empty() {
        output::print_error("Password is required", format);
        return Ok(());
    }

    let confirm_password = rpassword::prompt_password("Confirm new password: ")?;

    let (manager, _config) = session_manager()?;

    match manager.reset_password(token, &password, &confirm_password).await {
        Ok(()) => {
            output::print_success("Password reset. Log in with 'parley login'.", format);
        }
        Err(e) => {
            output::print_error(&format!("Password reset failed: {}", e), format);
        }
    }

    Ok(())
}
