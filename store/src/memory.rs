use std::sync::{Arc, Mutex};

use crate::{StoreError, TokenStore};

/// In-memory TokenStore for testing and ephemeral sessions.
///
/// Clones share the same underlying slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token, as if a previous session had
    /// persisted one.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    async fn put(&self, token: &str) -> Result<(), StoreError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    async fn delete(&self) -> Result<(), StoreError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
