//! Current identity command.

use serde::Serialize;
use tabled::Tabled;

use betlogic_core::config::AppConfig;
use betlogic_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Identity display row
#[derive(Debug, Serialize, Tabled)]
struct IdentityRow {
    /// User id
    id: String,
    /// Display name
    name: String,
    /// Role
    role: String,
}

/// Execute the whoami command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let lifecycle = super::build_lifecycle(config)?;
    lifecycle.bootstrap().await?;

    let session = lifecycle.session();
    match session.identity() {
        Some(identity) => {
            let rows = vec![IdentityRow {
                id: identity.user_id.to_string(),
                name: identity.display_name.clone(),
                role: identity.role.to_string(),
            }];
            output::print_list(&rows, format);
        }
        None => {
            println!("Not logged in.");
        }
    }
    Ok(())
}
