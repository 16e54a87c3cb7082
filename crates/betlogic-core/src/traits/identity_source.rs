//! Identity resolution seam.

use async_trait::async_trait;

use crate::error::AppError;
use crate::types::{Credential, Identity};

/// Exchanges a credential for a validated identity.
///
/// Implementations issue the remote "who am I" request. They never
/// mutate session state; callers apply (or discard) the result. A
/// rejected or unusable credential surfaces as
/// [`ErrorKind::CredentialInvalid`](crate::error::ErrorKind::CredentialInvalid).
#[async_trait]
pub trait IdentitySource: Send + Sync {
    /// Resolves the given credential into an identity.
    async fn resolve(&self, credential: &Credential) -> Result<Identity, AppError>;
}
