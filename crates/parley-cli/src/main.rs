//! Parley CLI - Command-line client for the Parley chat service.

mod commands;
mod output;

use clap::{Parser, Subcommand};

/// Parley CLI - Manage your Parley account from the terminal.
#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "Parley CLI for account management")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    format: output::OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Login with email and password
    Login,

    /// Create a new account
    Register,

    /// Request a password recovery email
    Recover {
        /// Account email (prompted when omitted)
        email: Option<String>,
    },

    /// Set a new password using a reset token
    Reset {
        /// Reset token from the recovery email
        token: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    parley_core::init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::Login => commands::login(&cli.format).await,
        Commands::Register => commands::register(&cli.format).await,
        Commands::Recover { email } => commands::recover(email.as_deref(), &cli.format).await,
        Commands::Reset { token } => commands::reset(&token, &cli.format).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
