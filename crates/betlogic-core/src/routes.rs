//! The two redirect targets shared across the client.
//!
//! Owned here so the guard composer and the session lifecycle cannot
//! drift apart on where a denied or invalidated visitor goes.

/// Where a visitor without a valid session is sent.
pub const LOGIN_ROUTE: &str = "/auth/login";

/// Where a valid but under-privileged session is sent: the general
/// authenticated landing view, not login — their credential was not
/// rejected.
pub const FALLBACK_ROUTE: &str = "/";
