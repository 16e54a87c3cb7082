//! Session lifecycle orchestration — login, logout, forced
//! invalidation, and the boot-time revalidation sequence.
//!
//! `SessionLifecycle` is the only component that mutates the live
//! `Session`. Everything else reads snapshots via [`SessionLifecycle::session`]
//! or requests a transition through the four operations here. Durable
//! storage is touched exclusively through the owned `SessionStore`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use betlogic_core::error::AppError;
use betlogic_core::routes::LOGIN_ROUTE;
use betlogic_core::traits::IdentitySource;
use betlogic_core::types::{Credential, Identity};

use crate::client::{ApiClient, RegisterRequest};
use crate::session::{Session, SessionStatus};
use crate::store::SessionStore;

/// Owns the live session and drives every transition.
pub struct SessionLifecycle {
    /// Durable credential storage.
    store: SessionStore,
    /// Backend client for the credential exchange.
    api: Arc<ApiClient>,
    /// Identity resolution.
    resolver: Arc<dyn IdentitySource>,
    /// The one live session. Lock held only for synchronous reads and
    /// writes, never across a suspension point.
    state: Mutex<Session>,
    /// Bumped by every operation that supersedes in-flight resolution.
    /// A resolution is applied only if the epoch it started under is
    /// still current and its credential still matches the session's.
    epoch: AtomicU64,
}

impl SessionLifecycle {
    /// Creates a lifecycle starting from an empty session.
    pub fn new(store: SessionStore, api: Arc<ApiClient>, resolver: Arc<dyn IdentitySource>) -> Self {
        Self {
            store,
            api,
            resolver,
            state: Mutex::new(Session::anonymous()),
            epoch: AtomicU64::new(0),
        }
    }

    fn state(&self) -> MutexGuard<'_, Session> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A read-only snapshot of the current session.
    pub fn session(&self) -> Session {
        self.state().clone()
    }

    /// Boot-time sequence: load any persisted credential, then validate
    /// it. Gated views stay behind `Wait` until this resolves.
    pub async fn bootstrap(&self) -> Result<(), AppError> {
        let loaded = self.store.load()?;
        let credential = loaded.credential().cloned();
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state() = loaded;

        if let Some(credential) = credential {
            debug!("Bootstrap found persisted credential, resolving");
            match self.resolve_and_apply(epoch, credential).await {
                // an expired or revoked persisted credential is an
                // expected boot outcome, not a failure; the session is
                // already back to Anonymous
                Err(e) if e.is_credential_failure() => {}
                Err(e) => return Err(e),
                Ok(_) => {}
            }
        }
        Ok(())
    }

    /// Full login flow: exchange credentials, persist the token, then
    /// resolve the authoritative identity.
    ///
    /// On a rejected exchange or a failed resolution the session ends
    /// `Anonymous` with nothing persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AppError> {
        let grant = self.api.login(email, password).await?;
        let credential = Credential::new(grant.token.clone());
        let hint = grant.hint();

        self.store.persist(&credential, &hint)?;
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state() = Session::resolving(credential.clone(), hint);

        info!(email = %email, "Credential exchange succeeded, resolving identity");

        match self.resolve_and_apply(epoch, credential).await? {
            Some(identity) => Ok(identity),
            // a newer login/logout superseded us mid-flight; internal
            // outcome, reported as such
            None => Err(AppError::race_discarded("Login superseded")),
        }
    }

    /// Clears the session and storage. Idempotent: logging out with no
    /// active session is a no-op, not an error.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.store.clear()?;
        self.epoch.fetch_add(1, Ordering::SeqCst);

        let mut state = self.state();
        if state.status() != SessionStatus::Anonymous {
            info!("Logged out");
        }
        *state = Session::anonymous();
        Ok(())
    }

    /// Disposes of a session the backend no longer honors.
    ///
    /// Called by any collaborator whose domain request was rejected as
    /// unauthenticated after the session was believed valid. Same local
    /// effect as [`logout`](Self::logout), plus it hands back the login
    /// entry point for the caller to navigate to.
    pub async fn force_invalidate(&self) -> Result<&'static str, AppError> {
        {
            let mut state = self.state();
            if state.status() != SessionStatus::Anonymous {
                warn!("Session rejected by backend, invalidating");
                state.mark_invalid();
            }
        }
        self.store.clear()?;
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.state().purge();
        Ok(LOGIN_ROUTE)
    }

    /// Registers a new account. No session mutation: the product does
    /// not auto-login after registration.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AppError> {
        self.api.register(request).await
    }

    /// Confirms an email verification token. No session mutation: the
    /// confirmed account still logs in normally afterwards.
    pub async fn verify(&self, token: &str) -> Result<(), AppError> {
        self.api.verify(token).await
    }

    /// Runs resolution for `credential` and applies the outcome, unless
    /// a newer operation superseded it while it was in flight.
    ///
    /// Returns `Ok(None)` when the result was discarded. Stale results
    /// are dropped on arrival whether they succeeded or failed: a late
    /// failure must not tear down a newer session any more than a late
    /// success may re-authenticate a logged-out one.
    async fn resolve_and_apply(
        &self,
        epoch: u64,
        credential: Credential,
    ) -> Result<Option<Identity>, AppError> {
        let outcome = self.resolver.resolve(&credential).await;

        let mut state = self.state();
        let superseded = self.epoch.load(Ordering::SeqCst) != epoch
            || state.credential() != Some(&credential);
        if superseded {
            debug!("Discarding superseded identity resolution");
            return Ok(None);
        }

        match outcome {
            Ok(identity) => {
                info!(user_id = %identity.user_id, role = %identity.role, "Identity resolved");
                state.authenticate(identity.clone());
                Ok(Some(identity))
            }
            Err(e) => {
                warn!(error = %e, "Credential failed resolution, purging");
                state.mark_invalid();
                drop(state);
                self.store.clear()?;
                self.state().purge();
                Err(e)
            }
        }
    }
}
