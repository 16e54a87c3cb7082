//! CLI command definitions and dispatch.

pub mod check;
pub mod login;
pub mod logout;
pub mod register;
pub mod routes;
pub mod verify;
pub mod whoami;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use betlogic_core::config::AppConfig;
use betlogic_core::error::AppError;
use betlogic_session::store::file_store;
use betlogic_session::{ApiClient, IdentityResolver, SessionLifecycle};

use crate::output::OutputFormat;

/// BetLogic — personal bankroll and task management client
#[derive(Debug, Parser)]
#[command(name = "betlogic", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and persist the session
    Login(login::LoginArgs),
    /// Log out and discard the session
    Logout,
    /// Register a new account
    Register(register::RegisterArgs),
    /// Confirm an email verification token
    Verify(verify::VerifyArgs),
    /// Show the current identity
    Whoami,
    /// Evaluate whether the current session may navigate to a path
    Check(check::CheckArgs),
    /// List the navigable views and their requirements
    Routes,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Login(args) => login::execute(args, config).await,
            Commands::Logout => logout::execute(config).await,
            Commands::Register(args) => register::execute(args, config).await,
            Commands::Verify(args) => verify::execute(args, config).await,
            Commands::Whoami => whoami::execute(config, self.format).await,
            Commands::Check(args) => check::execute(args, config).await,
            Commands::Routes => routes::execute(self.format),
        }
    }
}

/// Helper: wire the session lifecycle from configuration
pub fn build_lifecycle(config: &AppConfig) -> Result<Arc<SessionLifecycle>, AppError> {
    let api = Arc::new(ApiClient::new(&config.api)?);
    let resolver = Arc::new(IdentityResolver::new(api.clone()));
    let store = file_store(&config.storage.path);
    Ok(Arc::new(SessionLifecycle::new(store, api, resolver)))
}
