//! Credential-to-identity resolution.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use betlogic_core::error::{AppError, ErrorKind};
use betlogic_core::traits::IdentitySource;
use betlogic_core::types::{Credential, Identity};

use crate::client::ApiClient;

/// Resolves a credential through `GET /users/me`.
///
/// Transport failures get exactly one retry; a second failure is
/// reported as an invalid credential, the same as an explicit
/// rejection — from the guard's point of view an unreachable backend
/// and an expired token both mean "cannot prove who this is."
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    api: Arc<ApiClient>,
}

impl IdentityResolver {
    /// Creates a resolver over the given API client.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl IdentitySource for IdentityResolver {
    async fn resolve(&self, credential: &Credential) -> Result<Identity, AppError> {
        match self.api.fetch_profile(credential).await {
            Ok(identity) => Ok(identity),
            Err(e) if e.kind == ErrorKind::Network => {
                debug!(error = %e, "Profile fetch transport failure, retrying once");
                self.api.fetch_profile(credential).await.map_err(|e| {
                    AppError::credential_invalid(format!(
                        "Could not validate credential: {}",
                        e.message
                    ))
                })
            }
            Err(e) => Err(e),
        }
    }
}
