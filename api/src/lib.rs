//! # API crate — backend client core for FridgeChef
//!
//! Everything the FridgeChef frontends need to talk to the backend: one
//! configured HTTP client, the authentication session lifecycle, and the
//! stateless resource services for ingredients and recipes. Screens depend
//! on this crate; nothing here renders UI or displays errors itself.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The single configured [`ApiClient`]: base URL, JSON default, bounded timeout, bearer-token attachment, failure classification |
//! | [`config`] | [`ClientConfig`], the `fridgechef.toml` deploy-time settings |
//! | [`error`] | [`ApiError`], the transport failure taxonomy screens branch on |
//! | [`models`] | Typed request/response payloads (users, ingredients, recipes) |
//! | [`services`] | Stateless one-call-per-operation wrappers over the client |
//! | [`session`] | [`SessionManager`]: restore/login/register/logout and the observable [`Session`] snapshot |
//!
//! Token persistence lives in the sibling `store` crate; its types are
//! re-exported here so frontends only import one crate.
//!
//! ## Startup sequence
//!
//! ```no_run
//! # async fn start() -> Result<(), api::ApiError> {
//! use api::{ApiClient, ClientConfig, FileTokenStore, SessionManager};
//!
//! let config = ClientConfig::default();
//! let client = ApiClient::new(&config)?;
//! let sessions = SessionManager::new(client.clone(), FileTokenStore::new("/data/fridgechef".into()));
//! sessions.restore().await;
//!
//! if sessions.session().authenticated {
//!     let inventory = api::services::ingredients::list(&client).await?;
//!     println!("{} ingredients on hand", inventory.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use session::{LoginOutcome, Session, SessionManager};

pub use store::{FileTokenStore, MemoryTokenStore, StoreError, TokenStore};
