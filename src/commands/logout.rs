//! Logout command.

use betlogic_core::config::AppConfig;
use betlogic_core::error::AppError;

use crate::output;

/// Execute the logout command
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let lifecycle = super::build_lifecycle(config)?;
    lifecycle.logout().await?;
    output::print_success("Logged out");
    Ok(())
}
