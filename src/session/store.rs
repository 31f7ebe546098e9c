use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::models::UserSnapshot;

use super::storage::{SessionSnapshot, SessionStorage};
use super::token;

/// What consumers may conclude about the session.
///
/// `Unknown` means the persisted snapshot has not been loaded yet; route
/// guards must wait on it rather than treat it as logged out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Exchanges a refresh token for a new access token against the remote
/// service. Implemented by the API client; tests substitute a scripted one.
#[async_trait]
pub trait TokenRefresher {
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String>;
}

/// Single source of truth for authentication state.
///
/// Holds the access token, refresh token, and user snapshot; persists them
/// as one unit through a `SessionStorage` backend; publishes an
/// `AuthStatus` on a watch channel after every change. The mutating
/// operations take `&mut self`, so two refresh attempts cannot race within
/// the process.
pub struct SessionStore {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<UserSnapshot>,
    hydrated: bool,
    storage: Box<dyn SessionStorage>,
    status_tx: watch::Sender<AuthStatus>,
}

impl SessionStore {
    /// Create an empty, not-yet-hydrated store over the given storage.
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        let (status_tx, _) = watch::channel(AuthStatus::Unknown);
        Self {
            access_token: None,
            refresh_token: None,
            user: None,
            hydrated: false,
            storage,
            status_tx,
        }
    }

    /// Load the persisted snapshot into memory and mark the store hydrated.
    ///
    /// An unreadable or corrupt snapshot is treated as "no prior session";
    /// hydration completes either way and happens at most once.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }

        match self.storage.load() {
            Ok(Some(snapshot)) => {
                debug!(has_user = snapshot.user.is_some(), "Restored persisted session");
                self.access_token = snapshot.access_token;
                self.refresh_token = snapshot.refresh_token;
                self.user = snapshot.user;
            }
            Ok(None) => {
                debug!("No persisted session found");
            }
            Err(e) => {
                warn!(error = %e, "Failed to load persisted session, starting logged out");
            }
        }

        self.hydrated = true;
        self.notify();
    }

    /// Overwrite all three session fields with a fresh login result.
    /// No token-format validation is performed; the caller has already
    /// obtained the pair from the authentication endpoint.
    pub fn login(&mut self, access: String, refresh: String, user: UserSnapshot) {
        self.access_token = Some(access);
        self.refresh_token = Some(refresh);
        self.user = Some(user);
        self.persist();
        self.notify();
    }

    /// Clear all three session fields. Idempotent.
    pub fn logout(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.user = None;
        self.persist();
        self.notify();
    }

    /// Return whether a usable access token is available after this call,
    /// refreshing proactively when expiry is close.
    ///
    /// No access token means false with no network traffic. An expiry more
    /// than the refresh margin away means true with no network traffic.
    /// Any other case (inside the margin, already expired, undecodable)
    /// delegates to `refresh_access_token`.
    pub async fn ensure_valid_token(&mut self, refresher: &dyn TokenRefresher) -> bool {
        let Some(access) = self.access_token.clone() else {
            return false;
        };

        if token::seconds_past_margin(&access, Utc::now().timestamp()) > 0 {
            return true;
        }

        debug!("Access token expiring or unreadable, refreshing");
        self.refresh_access_token(refresher).await
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// On success only the access token is replaced; the refresh token and
    /// user snapshot stay untouched. Any failure clears the whole session:
    /// an unusable refresh token means the session cannot be recovered, and
    /// partial credential state is worse than none.
    pub async fn refresh_access_token(&mut self, refresher: &dyn TokenRefresher) -> bool {
        let Some(refresh_token) = self.refresh_token.clone() else {
            return false;
        };

        match refresher.refresh_access_token(&refresh_token).await {
            Ok(access) => {
                self.access_token = Some(access);
                self.persist();
                self.notify();
                true
            }
            Err(e) => {
                warn!(error = %e, "Token refresh failed, clearing session");
                self.logout();
                false
            }
        }
    }

    pub fn status(&self) -> AuthStatus {
        if !self.hydrated {
            AuthStatus::Unknown
        } else if self.user.is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }

    /// Watch channel carrying the status; receives a new value after every
    /// mutation and after hydration.
    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.status_tx.subscribe()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn user(&self) -> Option<&UserSnapshot> {
        self.user.as_ref()
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
            user: self.user.clone(),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.snapshot()) {
            warn!(error = %e, "Failed to persist session");
        }
    }

    fn notify(&self) {
        self.status_tx.send_replace(self.status());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::anyhow;

    use super::super::storage::MemoryStorage;
    use super::super::token::make_token;
    use super::*;

    /// Refresher that answers from a script and counts invocations.
    struct ScriptedRefresher {
        response: Option<String>,
        calls: AtomicUsize,
    }

    impl ScriptedRefresher {
        fn succeeding(token: &str) -> Self {
            Self {
                response: Some(token.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                response: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TokenRefresher for ScriptedRefresher {
        async fn refresh_access_token(&self, _refresh_token: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response
                .clone()
                .ok_or_else(|| anyhow!("refresh token rejected"))
        }
    }

    fn sam() -> UserSnapshot {
        UserSnapshot {
            user_id: 1,
            email: "sam@example.com".to_string(),
            username: Some("sam".to_string()),
        }
    }

    fn store_with(storage: MemoryStorage) -> SessionStore {
        let mut store = SessionStore::new(Box::new(storage));
        store.hydrate();
        store
    }

    #[test]
    fn test_login_sets_all_fields_and_persists() {
        let storage = MemoryStorage::new();
        let mut store = store_with(storage.clone());

        store.login("a1".to_string(), "r1".to_string(), sam());

        assert_eq!(store.access_token(), Some("a1"));
        assert_eq!(store.refresh_token(), Some("r1"));
        assert_eq!(store.user(), Some(&sam()));
        assert_eq!(store.status(), AuthStatus::Authenticated);

        let stored = storage.stored().expect("snapshot should be persisted");
        assert_eq!(stored.access_token.as_deref(), Some("a1"));
        assert_eq!(stored.refresh_token.as_deref(), Some("r1"));
        assert_eq!(stored.user, Some(sam()));
    }

    #[test]
    fn test_logout_clears_everything_and_is_idempotent() {
        let storage = MemoryStorage::new();
        let mut store = store_with(storage.clone());
        store.login("a1".to_string(), "r1".to_string(), sam());

        store.logout();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
        assert_eq!(store.user(), None);
        assert_eq!(store.status(), AuthStatus::Unauthenticated);
        assert!(storage.stored().expect("persisted").is_empty());

        // Logging out again changes nothing
        store.logout();
        assert_eq!(store.status(), AuthStatus::Unauthenticated);
    }

    #[tokio::test]
    async fn test_ensure_without_access_token_skips_network() {
        let mut store = store_with(MemoryStorage::new());
        let refresher = ScriptedRefresher::succeeding("unused");

        assert!(!store.ensure_valid_token(&refresher).await);
        assert_eq!(refresher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_ensure_with_fresh_token_skips_refresh() {
        let mut store = store_with(MemoryStorage::new());
        let fresh = make_token(Utc::now().timestamp() + 3600);
        store.login(fresh.clone(), "r1".to_string(), sam());

        let refresher = ScriptedRefresher::succeeding("unused");
        assert!(store.ensure_valid_token(&refresher).await);
        assert_eq!(refresher.call_count(), 0);
        assert_eq!(store.access_token(), Some(fresh.as_str()));
    }

    #[tokio::test]
    async fn test_ensure_with_expiring_token_refreshes_once() {
        let mut store = store_with(MemoryStorage::new());
        let expiring = make_token(Utc::now().timestamp() + 60);
        store.login(expiring, "r1".to_string(), sam());

        let refresher = ScriptedRefresher::succeeding("a2");
        assert!(store.ensure_valid_token(&refresher).await);
        assert_eq!(refresher.call_count(), 1);
        assert_eq!(store.access_token(), Some("a2"));
    }

    #[tokio::test]
    async fn test_ensure_with_undecodable_token_refreshes() {
        let mut store = store_with(MemoryStorage::new());
        store.login("not-a-jwt".to_string(), "r1".to_string(), sam());

        let refresher = ScriptedRefresher::succeeding("a2");
        assert!(store.ensure_valid_token(&refresher).await);
        assert_eq!(refresher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_refresh_without_refresh_token_skips_network() {
        let mut store = store_with(MemoryStorage::new());
        let refresher = ScriptedRefresher::succeeding("unused");

        assert!(!store.refresh_access_token(&refresher).await);
        assert_eq!(refresher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_refresh_success_replaces_only_access_token() {
        let storage = MemoryStorage::new();
        let mut store = store_with(storage.clone());
        store.login("a1".to_string(), "r1".to_string(), sam());

        let refresher = ScriptedRefresher::succeeding("a2");
        assert!(store.refresh_access_token(&refresher).await);

        assert_eq!(store.access_token(), Some("a2"));
        assert_eq!(store.refresh_token(), Some("r1"));
        assert_eq!(store.user(), Some(&sam()));

        let stored = storage.stored().expect("persisted");
        assert_eq!(stored.access_token.as_deref(), Some("a2"));
        assert_eq!(stored.refresh_token.as_deref(), Some("r1"));
    }

    #[tokio::test]
    async fn test_refresh_failure_clears_session() {
        let storage = MemoryStorage::new();
        let mut store = store_with(storage.clone());
        store.login("a1".to_string(), "r1".to_string(), sam());

        let refresher = ScriptedRefresher::failing();
        assert!(!store.refresh_access_token(&refresher).await);

        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
        assert_eq!(store.user(), None);
        assert_eq!(store.status(), AuthStatus::Unauthenticated);
        assert!(storage.stored().expect("persisted").is_empty());
    }

    #[test]
    fn test_hydration_restores_snapshot_and_resolves_status() {
        let storage = MemoryStorage::with_snapshot(SessionSnapshot {
            access_token: Some("a1".to_string()),
            refresh_token: Some("r1".to_string()),
            user: Some(sam()),
        });

        let mut store = SessionStore::new(Box::new(storage));
        assert_eq!(store.status(), AuthStatus::Unknown);

        store.hydrate();
        assert_eq!(store.status(), AuthStatus::Authenticated);
        assert_eq!(store.access_token(), Some("a1"));
        assert_eq!(store.refresh_token(), Some("r1"));
        assert_eq!(store.user(), Some(&sam()));
    }

    #[test]
    fn test_hydration_with_no_snapshot_reports_unauthenticated() {
        let mut store = SessionStore::new(Box::new(MemoryStorage::new()));
        assert_eq!(store.status(), AuthStatus::Unknown);

        store.hydrate();
        assert_eq!(store.status(), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_watch_channel_tracks_mutations() {
        let mut store = SessionStore::new(Box::new(MemoryStorage::new()));
        let rx = store.subscribe();
        assert_eq!(*rx.borrow(), AuthStatus::Unknown);

        store.hydrate();
        assert_eq!(*rx.borrow(), AuthStatus::Unauthenticated);

        store.login("a1".to_string(), "r1".to_string(), sam());
        assert_eq!(*rx.borrow(), AuthStatus::Authenticated);

        store.logout();
        assert_eq!(*rx.borrow(), AuthStatus::Unauthenticated);
    }

    #[tokio::test]
    async fn test_expired_session_recovers_through_refresh_on_load() {
        // A prior run persisted an expired access token alongside a live
        // refresh token; this run hydrates, notices the expiry, and ends up
        // with a new access token and everything else untouched.
        let expired = make_token(Utc::now().timestamp() - 60);
        let storage = MemoryStorage::with_snapshot(SessionSnapshot {
            access_token: Some(expired),
            refresh_token: Some("r1".to_string()),
            user: Some(sam()),
        });

        let mut store = SessionStore::new(Box::new(storage.clone()));
        store.hydrate();
        assert_eq!(store.status(), AuthStatus::Authenticated);

        let refresher = ScriptedRefresher::succeeding("new-token");
        assert!(store.ensure_valid_token(&refresher).await);
        assert_eq!(refresher.call_count(), 1);

        assert_eq!(store.access_token(), Some("new-token"));
        assert_eq!(store.refresh_token(), Some("r1"));
        assert_eq!(store.user(), Some(&sam()));

        let stored = storage.stored().expect("persisted");
        assert_eq!(stored.access_token.as_deref(), Some("new-token"));
    }
}
