//! Durable session storage.
//!
//! [`SessionStore`] is the only component permitted to touch the
//! persisted slot. Everything else either reads the live `Session` or
//! asks the lifecycle for a mutation.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;

use betlogic_core::error::AppError;
use betlogic_core::traits::storage::{SessionSlot, StorageBackend};
use betlogic_core::types::Credential;

use crate::session::{ProfileHint, Session};

/// Single source of truth for the persisted credential and its display
/// hints.
#[derive(Clone)]
pub struct SessionStore {
    /// Durable backend.
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    /// Creates a new session store over the given backend.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Reads the persisted slot and builds the boot-time session:
    /// `Resolving` when a credential was found, `Anonymous` otherwise.
    ///
    /// A slot that cannot be read is dropped and treated as absent —
    /// the visitor re-authenticates rather than the client refusing to
    /// start.
    pub fn load(&self) -> Result<Session, AppError> {
        let slot = match self.backend.read() {
            Ok(slot) => slot,
            Err(e) => {
                warn!(error = %e, "Unreadable session slot, discarding");
                self.backend.clear()?;
                None
            }
        };

        let Some(slot) = slot else {
            return Ok(Session::anonymous());
        };

        let hint = ProfileHint {
            // an unparseable role hint is ignored, not fatal
            role: slot.role.as_deref().and_then(|r| r.parse().ok()),
            first_name: slot.first_name,
            last_name: slot.last_name,
        };

        Ok(Session::resolving(Credential::new(slot.token), hint))
    }

    /// Persists the credential together with its display hints.
    pub fn persist(&self, credential: &Credential, hint: &ProfileHint) -> Result<(), AppError> {
        let slot = SessionSlot {
            token: credential.expose().to_string(),
            role: hint.role.map(|r| r.to_string()),
            first_name: hint.first_name.clone(),
            last_name: hint.last_name.clone(),
        };
        self.backend.write(&slot)
    }

    /// Removes the persisted slot.
    pub fn clear(&self) -> Result<(), AppError> {
        self.backend.clear()
    }
}

/// File-backed storage, the client-side stand-in for localStorage.
///
/// Writes go through a temp file and rename so a crash mid-write never
/// leaves a torn slot behind.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend storing the slot at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut os = self.path.as_os_str().to_os_string();
        os.push(".tmp");
        PathBuf::from(os)
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> Result<Option<SessionSlot>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let slot = serde_json::from_str(&raw)?;
        Ok(Some(slot))
    }

    fn write(&self, slot: &SessionSlot) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(slot)?;
        let tmp = self.temp_path();
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage for tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: Mutex<Option<SessionSlot>>,
}

impl MemoryBackend {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, Option<SessionSlot>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Result<Option<SessionSlot>, AppError> {
        Ok(self.guard().clone())
    }

    fn write(&self, slot: &SessionSlot) -> Result<(), AppError> {
        *self.guard() = Some(slot.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.guard() = None;
        Ok(())
    }
}

/// Convenience constructor used by the binary and tests.
pub fn file_store(path: impl AsRef<Path>) -> SessionStore {
    SessionStore::new(Arc::new(FileBackend::new(path.as_ref())))
}
