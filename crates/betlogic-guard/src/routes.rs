//! The product's navigable views and the shell chain wrapping each one.
//!
//! One table, consumed by the composer, replaces per-layout redirect
//! logic: every view is annotated with exactly one chain, and the
//! redirect targets are re-exported from the core crate so no two
//! call sites can diverge on where a denied visitor goes.

use betlogic_core::types::UserRole;

use crate::composer::Shell;
use crate::requirement::RouteRequirement;

pub use betlogic_core::routes::{FALLBACK_ROUTE, LOGIN_ROUTE};

/// A navigable view: a path pattern plus its shell chain.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Path pattern. Segments starting with `:` match any one segment.
    pub pattern: &'static str,
    /// Shell chain, outermost first.
    pub shells: Vec<Shell>,
}

/// The full route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    /// Chain applied to paths matching no entry.
    not_found: Vec<Shell>,
}

impl RouteTable {
    /// The product's standard route tree.
    ///
    /// - `/auth/*` — public entry views (login, register, password
    ///   reset, email verification, the logout page)
    /// - everything at the root — the authenticated main shell
    /// - `/admin/*` — the admin shell nested inside the main shell,
    ///   gated to `{admin, superadmin}` by exact membership
    pub fn standard() -> Self {
        let auth = || vec![Shell::new("auth", RouteRequirement::Public)];
        let main = || vec![Shell::new("main", RouteRequirement::RequiresSession)];
        let admin = || {
            vec![
                Shell::new("main", RouteRequirement::RequiresSession),
                Shell::new(
                    "admin",
                    RouteRequirement::roles(vec![UserRole::Admin, UserRole::SuperAdmin]),
                ),
            ]
        };

        let mut entries = Vec::new();
        for pattern in [
            "/auth/login",
            "/auth/register",
            "/auth/forgot",
            "/auth/reset",
            "/auth/verify/:token",
            "/auth/logout",
        ] {
            entries.push(RouteEntry {
                pattern,
                shells: auth(),
            });
        }
        for pattern in [
            "/",
            "/finances",
            "/promotions",
            "/promotions/:promoId",
            "/tasks",
            "/bets",
            "/messages",
            "/calendar",
            "/profile",
            "/notifications",
        ] {
            entries.push(RouteEntry {
                pattern,
                shells: main(),
            });
        }
        for pattern in [
            "/admin/users",
            "/admin/finances",
            "/admin/promotions",
            "/admin/tasks",
            "/admin/bets",
            "/admin/messages",
        ] {
            entries.push(RouteEntry {
                pattern,
                shells: admin(),
            });
        }

        Self {
            entries,
            // unknown paths render the public not-found view
            not_found: vec![Shell::new("not-found", RouteRequirement::Public)],
        }
    }

    /// Resolves a path to its shell chain.
    pub fn resolve(&self, path: &str) -> &[Shell] {
        self.entries
            .iter()
            .find(|entry| pattern_matches(entry.pattern, path))
            .map(|entry| entry.shells.as_slice())
            .unwrap_or(&self.not_found)
    }

    /// Iterates over the declared entries.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }
}

/// Segment-wise match; `:name` segments match any single segment.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.trim_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return false;
    }
    pattern_segments
        .iter()
        .zip(&path_segments)
        .all(|(p, s)| p.starts_with(':') || p == s)
}
