//! Account registration command.

use clap::Args;
use dialoguer::Password;

use betlogic_core::config::AppConfig;
use betlogic_core::error::AppError;
use betlogic_session::client::RegisterRequest;

use crate::output;

/// Arguments for the register command
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Account email
    pub email: String,

    /// First name
    #[arg(long)]
    pub first_name: String,

    /// Last name
    #[arg(long)]
    pub last_name: String,
}

/// Execute the register command
pub async fn execute(args: &RegisterArgs, config: &AppConfig) -> Result<(), AppError> {
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Password prompt failed: {e}")))?;

    let lifecycle = super::build_lifecycle(config)?;
    lifecycle
        .register(&RegisterRequest {
            email: args.email.clone(),
            password,
            first_name: args.first_name.clone(),
            last_name: args.last_name.clone(),
        })
        .await?;

    output::print_success("Registered. Check your email to verify the account, then log in.");
    Ok(())
}
