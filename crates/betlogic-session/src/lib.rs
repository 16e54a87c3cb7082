//! # betlogic-session
//!
//! Session state and lifecycle for the BetLogic client.
//!
//! ## Modules
//!
//! - `session` — the `Session` entity and its status state machine
//! - `store` — durable credential storage (`SessionStore` + backends)
//! - `client` — typed wrapper over the backend auth endpoints
//! - `resolver` — credential-to-identity resolution with bounded retry
//! - `lifecycle` — the single writer orchestrating login, logout,
//!   forced invalidation, and boot-time revalidation

pub mod client;
pub mod lifecycle;
pub mod resolver;
pub mod session;
pub mod store;

pub use client::ApiClient;
pub use lifecycle::SessionLifecycle;
pub use resolver::IdentityResolver;
pub use session::{ProfileHint, Session, SessionStatus};
pub use store::{FileBackend, MemoryBackend, SessionStore};
