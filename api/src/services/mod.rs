//! Stateless resource services.
//!
//! Each function performs exactly one [`crate::client::ApiClient`] call and
//! returns the parsed payload or the classified error. No retries, no
//! caching, no header manipulation; the backend enforces authorization via
//! the bearer token the session manager attached.

pub mod ingredients;
pub mod recipes;
