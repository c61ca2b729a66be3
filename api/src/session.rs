//! # Session manager — the authentication lifecycle
//!
//! Single source of truth for "is there a valid authenticated user", and the
//! only component allowed to write or erase the persisted credential and the
//! client's authorization state.
//!
//! ## Lifecycle
//!
//! | Phase | Trigger | Outcome |
//! |-------|---------|---------|
//! | Restoring | [`SessionManager::restore`] at startup | Reads the stored token, validates it against `GET /auth/me`. Success ⇒ Authenticated; absence or any failure ⇒ Unauthenticated (a rejected token is erased). |
//! | Login | [`SessionManager::login`] | Exchanges credentials for a token, persists it, fetches the user record. Bad credentials come back as [`LoginOutcome::InvalidCredentials`], never as an error. |
//! | Register | [`SessionManager::register`] | Creates the account, then performs the login flow with the same credentials. Creation failure propagates without a login attempt. |
//! | Logout | [`SessionManager::logout`] | Detaches the token, erases the stored copy (erase failures are logged and swallowed), Unauthenticated unconditionally. |
//!
//! ## Observing the session
//!
//! State is published as immutable [`Session`] snapshots over a
//! `tokio::sync::watch` channel: [`SessionManager::session`] reads the
//! current snapshot, [`SessionManager::subscribe`] returns a receiver for
//! reactive consumers (route guards, header widgets). No ambient global.
//!
//! ## Concurrency contract
//!
//! `restore` runs once per application lifetime, before any login or
//! register call. The manager provides no internal mutual exclusion; callers
//! serialize operations (disable the submit button while a call is in
//! flight).

use serde::Deserialize;
use store::TokenStore;
use tokio::sync::watch;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::User;

/// Immutable snapshot of the authentication state.
///
/// Invariant: `authenticated` is true iff `token` and `user` are present and
/// the last backend validation succeeded. `loading` is true only before the
/// initial restoration has finished.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub authenticated: bool,
    pub user: Option<User>,
    pub loading: bool,
}

impl Session {
    fn restoring() -> Self {
        Self {
            token: None,
            authenticated: false,
            user: None,
            loading: true,
        }
    }

    fn unauthenticated() -> Self {
        Self {
            token: None,
            authenticated: false,
            user: None,
            loading: false,
        }
    }

    fn authenticated(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            authenticated: true,
            user: Some(user),
            loading: false,
        }
    }
}

/// Result of a credential exchange.
///
/// Credential rejection is an expected outcome, not an error; only transport
/// failures surface as [`ApiError`] so callers can tell "wrong password"
/// from "server unreachable".
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    Success(User),
    InvalidCredentials,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Owns the session state machine over an [`ApiClient`] and a [`TokenStore`].
pub struct SessionManager<S: TokenStore> {
    client: ApiClient,
    store: S,
    state: watch::Sender<Session>,
}

impl<S: TokenStore> SessionManager<S> {
    /// Create a manager in the initial Restoring state.
    pub fn new(client: ApiClient, store: S) -> Self {
        let (state, _) = watch::channel(Session::restoring());
        Self {
            client,
            store,
            state,
        }
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Subscribe to session changes.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    fn publish(&self, session: Session) {
        self.state.send_replace(session);
    }

    /// Attempt to resume a previous session from the token store.
    ///
    /// Call once at startup, before any other operation. Always leaves
    /// `loading == false`.
    pub async fn restore(&self) {
        let Some(token) = self.store.get().await else {
            tracing::debug!("no persisted token, starting unauthenticated");
            self.publish(Session::unauthenticated());
            return;
        };

        self.client.set_token(Some(token.clone()));
        match self.client.get::<User>("/auth/me").await {
            Ok(user) => {
                tracing::debug!(username = %user.username, "session restored");
                self.publish(Session::authenticated(token, user));
            }
            Err(e) => {
                tracing::warn!(error = %e, "persisted token rejected, clearing");
                self.clear_credential().await;
                self.publish(Session::unauthenticated());
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// Returns [`LoginOutcome::InvalidCredentials`] when the backend rejects
    /// the credentials; transport failures propagate as errors.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, ApiError> {
        let credentials = serde_json::json!({
            "username": username,
            "password": password,
        });
        let token = match self
            .client
            .post::<_, TokenResponse>("/auth/login", &credentials)
            .await
        {
            Ok(response) => response.access_token,
            Err(e) if e.is_credential_rejection() => {
                tracing::debug!(username, "credentials rejected");
                return Ok(LoginOutcome::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        // Losing the persisted copy only costs the next restoration, so a
        // storage failure does not abort a login the backend accepted.
        if let Err(e) = self.store.put(&token).await {
            tracing::warn!(error = %e, "failed to persist session token");
        }
        self.client.set_token(Some(token.clone()));

        match self.client.get::<User>("/auth/me").await {
            Ok(user) => {
                tracing::debug!(username, "login succeeded");
                self.publish(Session::authenticated(token, user.clone()));
                Ok(LoginOutcome::Success(user))
            }
            Err(e) => {
                // The token exchange worked but the user lookup did not; roll
                // back so the session never claims authentication without a
                // user record.
                self.clear_credential().await;
                self.publish(Session::unauthenticated());
                Err(e)
            }
        }
    }

    /// Create an account, then establish a session with the new credentials.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<LoginOutcome, ApiError> {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
            "full_name": full_name,
        });
        let _created: serde_json::Value = self.client.post("/auth/register", &payload).await?;

        // Registration does not establish a session by itself.
        self.login(username, password).await
    }

    /// End the session. Never fails from the caller's perspective.
    pub async fn logout(&self) {
        self.clear_credential().await;
        self.publish(Session::unauthenticated());
        tracing::debug!("logged out");
    }

    async fn clear_credential(&self) {
        self.client.set_token(None);
        if let Err(e) = self.store.delete().await {
            tracing::warn!(error = %e, "failed to clear stored token");
        }
    }
}

#[cfg(test)]
mod tests {
    use store::{MemoryTokenStore, StoreError, TokenStore};

    use super::*;
    use crate::testutil::{self, PASSWORD, TEST_TOKEN, USERNAME};

    async fn manager_with_store(
        store: MemoryTokenStore,
    ) -> (SessionManager<MemoryTokenStore>, ApiClient) {
        let base = testutil::spawn(testutil::auth_router()).await;
        let client = testutil::client_for(&base);
        (SessionManager::new(client.clone(), store), client)
    }

    #[tokio::test]
    async fn test_restore_without_token_ends_unauthenticated() {
        let (manager, _) = manager_with_store(MemoryTokenStore::new()).await;
        assert!(manager.session().loading);

        manager.restore().await;

        let session = manager.session();
        assert!(!session.loading);
        assert!(!session.authenticated);
        assert!(session.token.is_none());
        assert!(session.user.is_none());
    }

    #[tokio::test]
    async fn test_restore_with_accepted_token() {
        let store = MemoryTokenStore::with_token(TEST_TOKEN);
        let (manager, client) = manager_with_store(store).await;

        manager.restore().await;

        let session = manager.session();
        assert!(session.authenticated);
        assert!(!session.loading);
        assert_eq!(session.token.as_deref(), Some(TEST_TOKEN));
        assert_eq!(session.user.unwrap().username, USERNAME);

        // The client now carries the bearer header on protected calls.
        let me: User = client.get("/auth/me").await.unwrap();
        assert_eq!(me.username, USERNAME);
    }

    #[tokio::test]
    async fn test_restore_with_rejected_token_clears_store() {
        let store = MemoryTokenStore::with_token("expired-token");
        let (manager, client) = manager_with_store(store.clone()).await;

        manager.restore().await;

        let session = manager.session();
        assert!(!session.authenticated);
        assert!(!session.loading);
        assert!(store.get().await.is_none());

        // Header is detached again.
        let err = client.get::<User>("/auth/me").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_returns_outcome_not_error() {
        let store = MemoryTokenStore::new();
        let (manager, _) = manager_with_store(store.clone()).await;
        manager.restore().await;

        let outcome = manager.login(USERNAME, "wrong").await.unwrap();
        assert_eq!(outcome, LoginOutcome::InvalidCredentials);
        assert!(!manager.session().authenticated);
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn test_login_success_overwrites_stored_token() {
        let store = MemoryTokenStore::with_token("stale-token-from-last-year");
        let (manager, _) = manager_with_store(store.clone()).await;

        let outcome = manager.login(USERNAME, PASSWORD).await.unwrap();
        match outcome {
            LoginOutcome::Success(user) => assert_eq!(user.username, USERNAME),
            other => panic!("got {other:?}"),
        }

        let session = manager.session();
        assert!(session.authenticated);
        assert_eq!(session.token.as_deref(), Some(TEST_TOKEN));
        assert_eq!(store.get().await.as_deref(), Some(TEST_TOKEN));
    }

    #[tokio::test]
    async fn test_login_transport_error_propagates() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = testutil::client_for(&format!("http://{addr}"));
        let manager = SessionManager::new(client, MemoryTokenStore::new());

        let err = manager.login(USERNAME, PASSWORD).await.unwrap_err();
        assert!(matches!(err, ApiError::Unreachable(_)), "got {err:?}");
        assert!(!manager.session().authenticated);
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let store = MemoryTokenStore::new();
        let (manager, client) = manager_with_store(store.clone()).await;
        manager.login(USERNAME, PASSWORD).await.unwrap();
        assert!(manager.session().authenticated);

        manager.logout().await;

        assert!(!manager.session().authenticated);
        assert!(store.get().await.is_none());
        let err = client.get::<User>("/auth/me").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 401, .. }));
    }

    /// Store whose delete always fails, for the logout-never-fails contract.
    #[derive(Clone, Default)]
    struct BrokenDeleteStore {
        inner: MemoryTokenStore,
    }

    impl TokenStore for BrokenDeleteStore {
        async fn get(&self) -> Option<String> {
            self.inner.get().await
        }

        async fn put(&self, token: &str) -> Result<(), StoreError> {
            self.inner.put(token).await
        }

        async fn delete(&self) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "keychain unavailable",
            )))
        }
    }

    #[tokio::test]
    async fn test_logout_survives_store_failure() {
        let base = testutil::spawn(testutil::auth_router()).await;
        let client = testutil::client_for(&base);
        let manager = SessionManager::new(client, BrokenDeleteStore::default());
        manager.login(USERNAME, PASSWORD).await.unwrap();

        manager.logout().await;

        assert!(!manager.session().authenticated);
        assert!(manager.session().token.is_none());
    }

    #[tokio::test]
    async fn test_register_establishes_session() {
        let store = MemoryTokenStore::new();
        let (manager, _) = manager_with_store(store.clone()).await;
        manager.restore().await;

        let outcome = manager
            .register(USERNAME, "alice@example.com", PASSWORD, "Alice Example")
            .await
            .unwrap();
        assert!(matches!(outcome, LoginOutcome::Success(_)));
        assert!(manager.session().authenticated);
        assert_eq!(store.get().await.as_deref(), Some(TEST_TOKEN));
    }

    #[tokio::test]
    async fn test_register_duplicate_propagates_without_login() {
        let store = MemoryTokenStore::new();
        let (manager, _) = manager_with_store(store.clone()).await;
        manager.restore().await;

        let err = manager
            .register("taken", "taken@example.com", PASSWORD, "Taken Name")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 400, .. }));
        assert!(!manager.session().authenticated);
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let (manager, _) = manager_with_store(MemoryTokenStore::new()).await;
        let rx = manager.subscribe();
        assert!(rx.borrow().loading);

        manager.restore().await;
        assert!(!rx.borrow().loading);
        assert!(!rx.borrow().authenticated);

        manager.login(USERNAME, PASSWORD).await.unwrap();
        assert!(rx.borrow().authenticated);

        manager.logout().await;
        assert!(!rx.borrow().authenticated);
    }
}
