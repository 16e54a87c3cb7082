//! Email verification command.

use clap::Args;

use betlogic_core::config::AppConfig;
use betlogic_core::error::AppError;

use crate::output;

/// Arguments for the verify command
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Verification token from the confirmation email
    pub token: String,
}

/// Execute the verify command
pub async fn execute(args: &VerifyArgs, config: &AppConfig) -> Result<(), AppError> {
    let lifecycle = super::build_lifecycle(config)?;
    lifecycle.verify(&args.token).await?;
    output::print_success("Email verified. You can now log in.");
    Ok(())
}
