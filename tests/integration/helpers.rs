//! Shared test helpers: a stub backend plus a wired lifecycle.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::{Value, json};

use betlogic_core::config::api::ApiConfig;
use betlogic_session::store::file_store;
use betlogic_session::{ApiClient, IdentityResolver, SessionLifecycle};

static NEXT_STORE: AtomicUsize = AtomicUsize::new(0);

/// A registered account on the stub backend.
#[derive(Debug, Clone)]
pub struct StubUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
}

/// Scripted backend state.
#[derive(Default)]
pub struct StubState {
    /// Accounts by email.
    users: Mutex<HashMap<String, StubUser>>,
    /// Issued tokens, token -> email. Removing an entry revokes it.
    tokens: Mutex<HashMap<String, String>>,
    /// Artificial `/users/me` latency per token, for race scripting.
    latency: Mutex<HashMap<String, Duration>>,
    /// Outstanding email verification tokens, token -> email.
    verifications: Mutex<HashMap<String, String>>,
}

/// Test application: stub backend + storage slot + lifecycle factory.
pub struct TestApp {
    pub base_url: String,
    pub storage_path: PathBuf,
    state: Arc<StubState>,
}

impl TestApp {
    /// Boots the stub backend on an ephemeral port.
    pub async fn new() -> Self {
        let state = Arc::new(StubState::default());

        let app = axum::Router::new()
            .route("/api/auth/login", post(login_handler))
            .route("/api/auth/register", post(register_handler))
            .route("/api/auth/verify/{token}", get(verify_handler))
            .route("/api/users/me", get(me_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Failed to read stub address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub backend died");
        });

        let storage_path = std::env::temp_dir().join(format!(
            "betlogic-it-{}-{}.json",
            std::process::id(),
            NEXT_STORE.fetch_add(1, Ordering::SeqCst)
        ));
        let _ = std::fs::remove_file(&storage_path);

        Self {
            base_url: format!("http://{addr}/api"),
            storage_path,
            state,
        }
    }

    /// Registers an account directly into the stub.
    pub fn add_user(&self, email: &str, password: &str, role: &str, first: &str, last: &str) {
        let mut users = self.state.users.lock().unwrap();
        let id = users.len() as i64 + 1;
        users.insert(
            email.to_string(),
            StubUser {
                id,
                email: email.to_string(),
                password: password.to_string(),
                role: role.to_string(),
                first_name: first.to_string(),
                last_name: last.to_string(),
            },
        );
    }

    /// The deterministic token the stub issues for an email.
    pub fn token_for(&self, email: &str) -> String {
        format!("tok-{email}")
    }

    /// Adds artificial latency to `/users/me` for the given email's token.
    pub fn delay_profile(&self, email: &str, delay: Duration) {
        self.state
            .latency
            .lock()
            .unwrap()
            .insert(self.token_for(email), delay);
    }

    /// Issues an outstanding verification token for an email, as if a
    /// confirmation mail had just gone out.
    pub fn issue_verification(&self, email: &str) -> String {
        let token = format!("verify-{email}");
        self.state
            .verifications
            .lock()
            .unwrap()
            .insert(token.clone(), email.to_string());
        token
    }

    /// Revokes the given email's token, simulating expiry.
    pub fn revoke(&self, email: &str) {
        self.state.tokens.lock().unwrap().remove(&self.token_for(email));
    }

    /// Builds a lifecycle wired to the stub and this app's storage slot.
    pub fn lifecycle(&self) -> Arc<SessionLifecycle> {
        let api = Arc::new(
            ApiClient::new(&ApiConfig {
                base_url: self.base_url.clone(),
                timeout_seconds: 5,
            })
            .expect("Failed to build API client"),
        );
        let resolver = Arc::new(IdentityResolver::new(api.clone()));
        let store = file_store(&self.storage_path);
        Arc::new(SessionLifecycle::new(store, api, resolver))
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.storage_path);
    }
}

async fn login_handler(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default();

    let user = state.users.lock().unwrap().get(&email).cloned();
    match user {
        Some(user) if user.password == password => {
            let token = format!("tok-{email}");
            state.tokens.lock().unwrap().insert(token.clone(), email);
            (
                StatusCode::OK,
                Json(json!({
                    "token": token,
                    "role": user.role,
                    "firstName": user.first_name,
                    "lastName": user.last_name,
                })),
            )
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid email or password" })),
        ),
    }
}

async fn me_handler(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default()
        .to_string();

    let delay = state.latency.lock().unwrap().get(&token).copied();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let email = state.tokens.lock().unwrap().get(&token).cloned();
    let user = email.and_then(|email| state.users.lock().unwrap().get(&email).cloned());

    match user {
        Some(user) => (
            StatusCode::OK,
            Json(json!({
                "id": user.id,
                "email": user.email,
                "role": user.role,
                "first_name": user.first_name,
                "last_name": user.last_name,
            })),
        ),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid or expired token" })),
        ),
    }
}

async fn verify_handler(
    State(state): State<Arc<StubState>>,
    Path(token): Path<String>,
) -> impl IntoResponse {
    // one-shot: a consumed token cannot be redeemed again
    match state.verifications.lock().unwrap().remove(&token) {
        Some(_) => (StatusCode::OK, Json(json!({ "message": "Email verified" }))),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid or expired verification token" })),
        ),
    }
}

async fn register_handler(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if email.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email is required" })),
        );
    }

    let mut users = state.users.lock().unwrap();
    if users.contains_key(&email) {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "error": "Email already registered" })),
        );
    }
    let id = users.len() as i64 + 1;
    users.insert(
        email.clone(),
        StubUser {
            id,
            email,
            password: body["password"].as_str().unwrap_or_default().to_string(),
            role: "user".to_string(),
            first_name: body["firstName"].as_str().unwrap_or_default().to_string(),
            last_name: body["lastName"].as_str().unwrap_or_default().to_string(),
        },
    );
    (StatusCode::CREATED, Json(json!({ "message": "Registered" })))
}
