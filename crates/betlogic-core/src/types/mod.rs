//! Shared identity and credential types.

pub mod credential;
pub mod id;
pub mod identity;
pub mod role;

pub use credential::Credential;
pub use id::UserId;
pub use identity::Identity;
pub use role::{RoleSet, UserRole};
