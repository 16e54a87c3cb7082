//! # betlogic-core
//!
//! Core crate for the BetLogic client. Contains configuration schemas,
//! shared identity types (roles, credentials, resolved profiles), the
//! trait seams other crates implement, and the unified error system.
//!
//! This crate has **no** internal dependencies on other BetLogic crates.

pub mod config;
pub mod error;
pub mod result;
pub mod routes;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
