//! Resolved identity.

use serde::{Deserialize, Serialize};

use super::id::UserId;
use super::role::UserRole;

/// The validated profile derived from a credential.
///
/// Present on a session only while it is authenticated. The display
/// name exists for presentation; authorization decisions consult the
/// role alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend user id.
    pub user_id: UserId,
    /// Role used for route authorization.
    pub role: UserRole,
    /// Display name ("First Last" or the account email when no name
    /// is on file).
    pub display_name: String,
}

impl Identity {
    /// Creates an identity.
    pub fn new(user_id: UserId, role: UserRole, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            role,
            display_name: display_name.into(),
        }
    }
}
