//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] persists the session token as a single file under a
//! caller-supplied base directory, so a login survives app restarts on
//! desktop and mobile.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── token          # the raw bearer token string
//! ```
//!
//! ## Platform data directories
//!
//! Callers pass a platform-appropriate base, e.g.:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/fridgechef/` |
//! | Linux | `~/.local/share/fridgechef/` |
//! | Android | App-internal storage |
//!
//! On Unix the token file is written with mode `0600`.

use std::path::PathBuf;

use crate::{StoreError, TokenStore};

const TOKEN_FILE: &str = "token";

/// Filesystem-backed TokenStore for on-device persistence.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_FILE)
    }

    #[cfg(unix)]
    fn restrict_permissions(path: &std::path::Path) -> std::io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
    }
}

impl TokenStore for FileTokenStore {
    async fn get(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    async fn put(&self, token: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        let path = self.token_path();
        std::fs::write(&path, token)?;
        #[cfg(unix)]
        Self::restrict_permissions(&path)?;
        Ok(())
    }

    async fn delete(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fridgechef_store_{}_{}", tag, std::process::id()))
    }

    #[tokio::test]
    async fn test_roundtrip_across_reopen() {
        let base = temp_base("roundtrip");
        let _ = std::fs::remove_dir_all(&base);

        let store = FileTokenStore::new(base.clone());
        assert!(store.get().await.is_none());
        store.put("persisted-token").await.unwrap();

        // Re-open from the same directory
        let store2 = FileTokenStore::new(base.clone());
        assert_eq!(store2.get().await.as_deref(), Some("persisted-token"));

        store2.delete().await.unwrap();
        assert!(store.get().await.is_none());

        let _ = std::fs::remove_dir_all(&base);
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let base = temp_base("delete_missing");
        let _ = std::fs::remove_dir_all(&base);

        let store = FileTokenStore::new(base);
        store.delete().await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_token_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let base = temp_base("perms");
        let _ = std::fs::remove_dir_all(&base);

        let store = FileTokenStore::new(base.clone());
        store.put("secret").await.unwrap();

        let mode = std::fs::metadata(base.join("token"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);

        let _ = std::fs::remove_dir_all(&base);
    }
}
