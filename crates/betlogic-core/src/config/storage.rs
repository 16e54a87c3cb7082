//! Durable client storage configuration.

use serde::{Deserialize, Serialize};

/// Durable client storage configuration.
///
/// The storage file is the client-side equivalent of the browser's
/// localStorage slot: it survives process restarts and holds the
/// persisted credential plus display hints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the session storage file.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> String {
    "data/session.json".to_string()
}
