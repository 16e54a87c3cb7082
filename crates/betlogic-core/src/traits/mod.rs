//! Trait seams implemented by other BetLogic crates.

pub mod identity_source;
pub mod storage;

pub use identity_source::IdentitySource;
pub use storage::StorageBackend;
