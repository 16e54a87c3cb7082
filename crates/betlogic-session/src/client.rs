//! Typed wrapper over the backend auth endpoints.
//!
//! The two session contracts (`POST /auth/login`, `GET /users/me`) plus
//! the registration entry points. Wire shapes are fixed by the backend
//! and not ours to change: the login exchange speaks camelCase, the
//! profile endpoint snake_case, and failures carry a JSON `{error}`
//! body.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use betlogic_core::config::api::ApiConfig;
use betlogic_core::error::{AppError, ErrorKind};
use betlogic_core::types::{Credential, Identity, UserId, UserRole};

use crate::session::ProfileHint;

/// A successful credential exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginGrant {
    /// The bearer token for subsequent requests.
    pub token: String,
    /// Role echo. Treated purely as a display hint; the authoritative
    /// role comes from profile resolution.
    #[serde(default)]
    pub role: Option<String>,
    /// Display hint.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Display hint.
    #[serde(default)]
    pub last_name: Option<String>,
}

impl LoginGrant {
    /// Extracts the display hint from the grant.
    pub fn hint(&self) -> ProfileHint {
        ProfileHint {
            role: self.role.as_deref().and_then(|r| r.parse().ok()),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Registration request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// `GET /users/me` response.
#[derive(Debug, Clone, Deserialize)]
struct MeResponse {
    id: i64,
    email: String,
    role: UserRole,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

/// Error body shared by every non-success response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl MeResponse {
    fn into_identity(self) -> Identity {
        let name = match (&self.first_name, &self.last_name) {
            (None, None) => self.email.clone(),
            (first, last) => {
                let joined = format!(
                    "{} {}",
                    first.as_deref().unwrap_or(""),
                    last.as_deref().unwrap_or("")
                );
                let joined = joined.trim().to_string();
                if joined.is_empty() {
                    self.email.clone()
                } else {
                    joined
                }
            }
        };
        Identity::new(UserId(self.id), self.role, name)
    }
}

/// HTTP client for the BetLogic backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Exchanges credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginGrant, AppError> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let message = error_message(response).await;
            return Err(AppError::credential_invalid(message));
        }

        response
            .json::<LoginGrant>()
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorKind::Serialization,
                    format!("Malformed login response: {e}"),
                )
            })
    }

    /// Fetches the profile owned by the given credential.
    ///
    /// Any non-success status means the credential is expired,
    /// malformed, or revoked.
    pub async fn fetch_profile(&self, credential: &Credential) -> Result<Identity, AppError> {
        let response = self
            .http
            .get(format!("{}/users/me", self.base_url))
            .bearer_auth(credential.expose())
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let message = error_message(response).await;
            return Err(AppError::credential_invalid(message));
        }

        let me = response.json::<MeResponse>().await.map_err(|e| {
            AppError::new(
                ErrorKind::Serialization,
                format!("Malformed profile response: {e}"),
            )
        })?;

        Ok(me.into_identity())
    }

    /// Registers a new account. Does not log the account in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AppError> {
        let response = self
            .http
            .post(format!("{}/auth/register", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let message = error_message(response).await;
            return Err(AppError::validation(message));
        }
        Ok(())
    }

    /// Confirms an email verification token.
    pub async fn verify(&self, token: &str) -> Result<(), AppError> {
        let response = self
            .http
            .get(format!("{}/auth/verify/{token}", self.base_url))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let message = error_message(response).await;
            return Err(AppError::validation(message));
        }
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::network(format!("Request failed: {err}"))
}

async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.json::<ErrorBody>().await.ok();
    body.and_then(|b| b.error)
        .unwrap_or_else(|| format!("Request rejected with status {status}"))
}
