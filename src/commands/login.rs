//! Login command.

use clap::Args;
use dialoguer::Password;

use betlogic_core::config::AppConfig;
use betlogic_core::error::AppError;

use crate::output;

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email
    pub email: String,

    /// Password (prompted interactively when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

/// Execute the login command
pub async fn execute(args: &LoginArgs, config: &AppConfig) -> Result<(), AppError> {
    let password = match &args.password {
        Some(p) => p.clone(),
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| AppError::internal(format!("Password prompt failed: {e}")))?,
    };

    let lifecycle = super::build_lifecycle(config)?;
    let identity = lifecycle.login(&args.email, &password).await?;

    output::print_success(&format!(
        "Logged in as {} ({})",
        identity.display_name, identity.role
    ));
    Ok(())
}
