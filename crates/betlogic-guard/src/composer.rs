//! Outside-in guard composition across nested view shells.
//!
//! Each shell declares exactly one requirement for everything beneath
//! it. Evaluation walks the chain from the outermost shell inward and
//! stops at the first non-allow verdict, so an inner shell can never
//! contradict a decision its ancestor already made.

use tracing::debug;

use betlogic_session::Session;

use crate::decision::{GuardDecision, decide};
use crate::requirement::RouteRequirement;
use crate::routes::{FALLBACK_ROUTE, LOGIN_ROUTE};

/// One nesting level of the view tree with its declared requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    /// Shell name, for logs and diagnostics.
    pub name: &'static str,
    /// The requirement everything beneath this shell must meet.
    pub requirement: RouteRequirement,
}

impl Shell {
    /// Creates a shell.
    pub fn new(name: &'static str, requirement: RouteRequirement) -> Self {
        Self { name, requirement }
    }
}

/// The result of evaluating a full shell chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardOutcome {
    /// The winning decision.
    pub decision: GuardDecision,
    /// Where to send the visitor on a deny. `None` for `Allow` and for
    /// `Wait` (during `Wait` nothing user-visible happens at all).
    pub redirect: Option<&'static str>,
    /// The shell whose requirement produced a non-allow verdict.
    pub blocked_by: Option<&'static str>,
}

impl GuardOutcome {
    fn allow() -> Self {
        Self {
            decision: GuardDecision::Allow,
            redirect: None,
            blocked_by: None,
        }
    }

    fn blocked(decision: GuardDecision, shell: &Shell) -> Self {
        let redirect = match decision {
            GuardDecision::DenyToLogin => Some(LOGIN_ROUTE),
            GuardDecision::DenyToFallback => Some(FALLBACK_ROUTE),
            GuardDecision::Allow | GuardDecision::Wait => None,
        };
        Self {
            decision,
            redirect,
            blocked_by: Some(shell.name),
        }
    }
}

/// Applies the decision table at every nesting level of a view's shell
/// chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuardComposer;

impl GuardComposer {
    /// Creates a composer.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a shell chain, outermost first.
    ///
    /// The outermost unmet requirement wins; inner shells are never
    /// consulted once an ancestor has decided anything but `Allow`.
    pub fn evaluate(&self, shells: &[Shell], session: &Session) -> GuardOutcome {
        debug_assert!(chain_is_monotonic(shells));

        for shell in shells {
            let decision = decide(&shell.requirement, session);
            if decision != GuardDecision::Allow {
                debug!(
                    shell = shell.name,
                    requirement = %shell.requirement,
                    ?decision,
                    "Shell blocked navigation"
                );
                return GuardOutcome::blocked(decision, shell);
            }
        }
        GuardOutcome::allow()
    }
}

/// A descendant may only declare a requirement at least as strict as
/// its ancestors'.
fn chain_is_monotonic(shells: &[Shell]) -> bool {
    shells
        .windows(2)
        .all(|pair| pair[0].requirement.strictness() <= pair[1].requirement.strictness())
}
