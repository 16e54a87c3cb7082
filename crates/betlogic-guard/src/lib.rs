//! # betlogic-guard
//!
//! Role-gated navigation control for the BetLogic client.
//!
//! ## Modules
//!
//! - `requirement` — static visibility metadata attached to views
//! - `decision` — the pure allow/wait/deny decision table
//! - `composer` — outside-in evaluation across nested view shells
//! - `routes` — the product's navigable views and their shell chains

pub mod composer;
pub mod decision;
pub mod requirement;
pub mod routes;

pub use composer::{GuardComposer, GuardOutcome, Shell};
pub use decision::{GuardDecision, decide};
pub use requirement::RouteRequirement;
pub use routes::{FALLBACK_ROUTE, LOGIN_ROUTE, RouteTable};
