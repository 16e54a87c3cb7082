//! Static visibility metadata attached to navigable views.

use std::fmt;

use serde::{Deserialize, Serialize};

use betlogic_core::types::{RoleSet, UserRole};

/// What a view demands of the session before it may render.
///
/// `RequiresRole` implies `RequiresSession`: a role check never runs
/// without a validated session first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteRequirement {
    /// Anyone may see the view.
    Public,
    /// Any authenticated session may see the view.
    RequiresSession,
    /// Only authenticated sessions whose role is in the enumerated set.
    RequiresRole(RoleSet),
}

impl RouteRequirement {
    /// Convenience constructor for a role-gated requirement.
    pub fn roles(roles: impl Into<Vec<UserRole>>) -> Self {
        Self::RequiresRole(RoleSet::new(roles))
    }

    /// Whether this requirement demands a validated session at all.
    pub fn requires_session(&self) -> bool {
        !matches!(self, Self::Public)
    }

    /// Ordering used to validate shell nesting: an inner shell may only
    /// tighten what its ancestors demand.
    pub fn strictness(&self) -> u8 {
        match self {
            Self::Public => 0,
            Self::RequiresSession => 1,
            Self::RequiresRole(_) => 2,
        }
    }
}

impl fmt::Display for RouteRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::RequiresSession => write!(f, "requires-session"),
            Self::RequiresRole(roles) => write!(f, "requires-role{roles}"),
        }
    }
}
