//! Durable client storage seam.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The document persisted in durable client storage.
///
/// The field names are a compatibility surface: anything else reading
/// the slot expects exactly `token`, `role`, `firstName` and
/// `lastName`. The role and name fields are display hints only and are
/// never consulted for authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSlot {
    /// The persisted bearer token.
    pub token: String,
    /// Last known role, used to avoid a pre-resolution content flash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Last known first name, display only.
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last known last name, display only.
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Abstracts the durable key-value slot that survives restarts.
///
/// Implementations must treat the slot as a single atomic unit: a read
/// either sees a complete document or nothing.
pub trait StorageBackend: Send + Sync {
    /// Reads the persisted slot, if any.
    fn read(&self) -> Result<Option<SessionSlot>, AppError>;

    /// Writes the slot, replacing any previous contents.
    fn write(&self, slot: &SessionSlot) -> Result<(), AppError>;

    /// Removes the slot entirely.
    fn clear(&self) -> Result<(), AppError>;
}
