//! User roles and role sets.
//!
//! Role checks are exact set membership only. There is deliberately no
//! privilege ladder: a requirement that accepts `superadmin` does not
//! implicitly accept `admin`. Every requirement enumerates each role it
//! accepts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The role carried by a resolved identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular end user of the product.
    User,
    /// Administrator of the product's domain data.
    Admin,
    /// Privileged administrator with account management access.
    SuperAdmin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
            Self::SuperAdmin => write!(f, "superadmin"),
        }
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "superadmin" => Ok(Self::SuperAdmin),
            other => Err(AppError::validation(format!("Unknown role: '{other}'"))),
        }
    }
}

/// An explicit, enumerated set of accepted roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(Vec<UserRole>);

impl RoleSet {
    /// Creates a role set from the given roles.
    pub fn new(roles: impl Into<Vec<UserRole>>) -> Self {
        Self(roles.into())
    }

    /// Checks exact membership. No hierarchy is consulted.
    pub fn contains(&self, role: UserRole) -> bool {
        self.0.contains(&role)
    }

    /// Iterates over the accepted roles.
    pub fn iter(&self) -> impl Iterator<Item = UserRole> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.0.iter().map(|r| r.to_string()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

impl From<&[UserRole]> for RoleSet {
    fn from(roles: &[UserRole]) -> Self {
        Self(roles.to_vec())
    }
}
