//! # Token persistence for the FridgeChef client
//!
//! The session manager in the `api` crate keeps exactly one piece of state on
//! disk between launches: the opaque bearer token returned by the backend at
//! login. This crate defines the [`TokenStore`] trait that abstracts where
//! that token lives, plus the two backends the app uses:
//!
//! | Backend | Purpose |
//! |---------|---------|
//! | [`MemoryTokenStore`] | Ephemeral storage for tests and previews. |
//! | [`FileTokenStore`] | On-device persistence under the platform data directory. |
//!
//! The trait is async so backends backed by platform keychains or other IPC
//! surfaces can be added without changing the session manager.

use thiserror::Error;

mod file_store;
mod memory;

pub use file_store::FileTokenStore;
pub use memory::MemoryTokenStore;

/// Errors from a token store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Async trait for reading and writing the persisted session token.
///
/// A store holds at most one token. `put` overwrites any previous value;
/// `delete` on an empty store succeeds.
pub trait TokenStore {
    fn get(&self) -> impl std::future::Future<Output = Option<String>>;
    fn put(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn delete(&self) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
