//! The `Session` entity — the single process-wide answer to "who is
//! using this client right now."
//!
//! Mutating methods exist for [`SessionLifecycle`](crate::lifecycle::SessionLifecycle),
//! which owns the one live instance. Every other component receives
//! read-only snapshots.

use betlogic_core::types::{Credential, Identity, UserRole};

/// The session's position in its state machine. Exactly one holds at
/// any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No credential is present.
    Anonymous,
    /// A credential exists and its identity resolution is in flight.
    Resolving,
    /// The credential resolved to a validated identity.
    Authenticated,
    /// The credential was rejected. Transient: the credential is purged
    /// immediately afterwards and the session returns to `Anonymous`.
    Invalid,
}

/// Last-known profile data loaded alongside a persisted credential.
///
/// Display only: the guard never consults the hint for authorization.
/// It exists so the UI can greet the user and size its chrome before
/// resolution completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileHint {
    /// Last known role.
    pub role: Option<UserRole>,
    /// Last known first name.
    pub first_name: Option<String>,
    /// Last known last name.
    pub last_name: Option<String>,
}

impl ProfileHint {
    /// Formats a display name from the hint, if any name is present.
    pub fn display_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (None, None) => None,
            (first, last) => {
                let joined = format!(
                    "{} {}",
                    first.as_deref().unwrap_or(""),
                    last.as_deref().unwrap_or("")
                );
                Some(joined.trim().to_string())
            }
        }
    }
}

/// The current session.
///
/// Invariants, upheld by construction and by the mutation methods:
/// - no credential ⇒ `Anonymous`
/// - identity present ⇔ `Authenticated`
/// - `Invalid` still carries the rejected credential; purging it is the
///   only exit, and it lands on `Anonymous`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    credential: Option<Credential>,
    status: SessionStatus,
    identity: Option<Identity>,
    hint: ProfileHint,
}

impl Session {
    /// An empty session. The state every process starts from and
    /// returns to on logout.
    pub fn anonymous() -> Self {
        Self {
            credential: None,
            status: SessionStatus::Anonymous,
            identity: None,
            hint: ProfileHint::default(),
        }
    }

    /// A session holding a credential whose resolution is in flight.
    pub fn resolving(credential: Credential, hint: ProfileHint) -> Self {
        Self {
            credential: Some(credential),
            status: SessionStatus::Resolving,
            identity: None,
            hint,
        }
    }

    /// Current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The held credential, if any.
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// The resolved identity. Present iff `Authenticated`.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The display hint loaded from storage.
    pub fn hint(&self) -> &ProfileHint {
        &self.hint
    }

    /// Whether a validated identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// The role usable for authorization: the resolved identity's role,
    /// never the hint's.
    pub fn role(&self) -> Option<UserRole> {
        self.identity.as_ref().map(|i| i.role)
    }

    /// Best display name available: resolved identity first, hint as a
    /// pre-resolution stand-in.
    pub fn display_name(&self) -> Option<String> {
        self.identity
            .as_ref()
            .map(|i| i.display_name.clone())
            .or_else(|| self.hint.display_name())
    }

    /// Applies a successful resolution. Requires a held credential.
    pub fn authenticate(&mut self, identity: Identity) {
        debug_assert!(self.credential.is_some());
        self.status = SessionStatus::Authenticated;
        self.identity = Some(identity);
    }

    /// Marks the held credential as rejected. The credential stays in
    /// place so callers can observe which value failed; `purge` follows
    /// immediately.
    pub fn mark_invalid(&mut self) {
        self.status = SessionStatus::Invalid;
        self.identity = None;
    }

    /// Drops the credential and identity, returning to `Anonymous`.
    pub fn purge(&mut self) {
        self.credential = None;
        self.identity = None;
        self.hint = ProfileHint::default();
        self.status = SessionStatus::Anonymous;
    }
}
