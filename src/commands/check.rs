//! Navigation check command: evaluate the guard chain for a path.

use clap::Args;

use betlogic_core::config::AppConfig;
use betlogic_core::error::AppError;
use betlogic_guard::{GuardComposer, GuardDecision, RouteTable};

use crate::output;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to evaluate, e.g. /admin/users
    pub path: String,
}

/// Execute the check command
pub async fn execute(args: &CheckArgs, config: &AppConfig) -> Result<(), AppError> {
    let lifecycle = super::build_lifecycle(config)?;
    lifecycle.bootstrap().await?;

    let table = RouteTable::standard();
    let composer = GuardComposer::new();
    let outcome = composer.evaluate(table.resolve(&args.path), &lifecycle.session());

    match outcome.decision {
        GuardDecision::Allow => output::print_success(&format!("{} — allowed", args.path)),
        GuardDecision::Wait => {
            // only reachable if a caller skips bootstrap; evaluated
            // here after resolution, Wait never survives
            println!("{} — resolution in flight", args.path);
        }
        GuardDecision::DenyToLogin | GuardDecision::DenyToFallback => {
            output::print_error(&format!("{} — denied", args.path));
            if let Some(shell) = outcome.blocked_by {
                output::print_kv("blocked by", shell);
            }
            if let Some(redirect) = outcome.redirect {
                output::print_kv("redirect", redirect);
            }
        }
    }
    Ok(())
}
