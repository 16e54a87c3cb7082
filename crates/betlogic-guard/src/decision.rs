//! The guard decision table.
//!
//! `decide` is a pure function of (requirement, session): no side
//! effects, no ambient reads, trivially testable. It is the single
//! place in the client where a visibility rule meets a session.

use betlogic_session::{Session, SessionStatus};

use crate::requirement::RouteRequirement;

/// The outcome of evaluating one requirement against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the view.
    Allow,
    /// Resolution is in flight. Render nothing user-visible yet —
    /// neither the protected content nor a premature redirect.
    Wait,
    /// No valid session. Route to the login entry point. Covers both
    /// "never logged in" and "login expired"; the visitor is not shown
    /// the distinction.
    DenyToLogin,
    /// Valid session, insufficient role. Route to the authenticated
    /// landing view — the visitor is who they say they are, they simply
    /// lack privilege.
    DenyToFallback,
}

/// Evaluates a requirement against the current session.
///
/// Role membership is exact: no role implies another, and every
/// requirement enumerates each role it accepts.
pub fn decide(requirement: &RouteRequirement, session: &Session) -> GuardDecision {
    match requirement {
        RouteRequirement::Public => GuardDecision::Allow,
        RouteRequirement::RequiresSession => match session.status() {
            SessionStatus::Resolving => GuardDecision::Wait,
            SessionStatus::Authenticated => GuardDecision::Allow,
            SessionStatus::Anonymous | SessionStatus::Invalid => GuardDecision::DenyToLogin,
        },
        RouteRequirement::RequiresRole(roles) => match session.status() {
            SessionStatus::Resolving => GuardDecision::Wait,
            SessionStatus::Anonymous | SessionStatus::Invalid => GuardDecision::DenyToLogin,
            SessionStatus::Authenticated => match session.role() {
                Some(role) if roles.contains(role) => GuardDecision::Allow,
                _ => GuardDecision::DenyToFallback,
            },
        },
    }
}
