//! Route table listing command.

use serde::Serialize;
use tabled::Tabled;

use betlogic_core::error::AppError;
use betlogic_guard::RouteTable;

use crate::output::{self, OutputFormat};

/// Route display row
#[derive(Debug, Serialize, Tabled)]
struct RouteRow {
    /// Path pattern
    path: String,
    /// Shell chain, outermost first
    shells: String,
    /// Effective (innermost) requirement
    requirement: String,
}

/// Execute the routes command
pub fn execute(format: OutputFormat) -> Result<(), AppError> {
    let table = RouteTable::standard();

    let rows: Vec<RouteRow> = table
        .entries()
        .map(|entry| RouteRow {
            path: entry.pattern.to_string(),
            shells: entry
                .shells
                .iter()
                .map(|s| s.name)
                .collect::<Vec<_>>()
                .join(" > "),
            requirement: entry
                .shells
                .last()
                .map(|s| s.requirement.to_string())
                .unwrap_or_else(|| "public".to_string()),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
