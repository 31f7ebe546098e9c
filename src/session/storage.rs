// Allow dead code: the in-memory backend is test and future-use infrastructure
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::UserSnapshot;

/// Session file name in the data directory
const SESSION_FILE: &str = "session.json";

/// The persisted unit of session state.
///
/// All three fields are written together on every mutation; a snapshot with
/// tokens but no user (or vice versa) is not a defined state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<UserSnapshot>,
}

impl SessionSnapshot {
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none() && self.user.is_none()
    }
}

/// Durable storage for the session snapshot.
///
/// One named blob, read once at startup and overwritten on every mutating
/// session operation.
pub trait SessionStorage: Send {
    fn load(&self) -> Result<Option<SessionSnapshot>>;
    fn save(&self, snapshot: &SessionSnapshot) -> Result<()>;
}

/// File-backed storage under the application data directory.
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Option<SessionSnapshot>> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .context("Failed to read session file")?;
        let snapshot: SessionSnapshot = serde_json::from_str(&contents)
            .context("Failed to parse session file")?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        let path = self.session_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// In-memory storage, shared between clones.
///
/// Used by tests; also usable as an ephemeral backend that forgets the
/// session on exit.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Option<SessionSnapshot>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the stored snapshot, as if a prior run had saved it.
    pub fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(snapshot))),
        }
    }

    /// The currently stored snapshot, if any.
    pub fn stored(&self) -> Option<SessionSnapshot> {
        self.inner.lock().expect("session storage lock poisoned").clone()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<SessionSnapshot>> {
        Ok(self.stored())
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        *self.inner.lock().expect("session storage lock poisoned") = Some(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = std::env::temp_dir().join(format!("eshtrak-test-{}", std::process::id()));
        let storage = FileStorage::new(dir.clone());

        assert!(storage.load().unwrap().is_none());

        let snapshot = SessionSnapshot {
            access_token: Some("a1".to_string()),
            refresh_token: Some("r1".to_string()),
            user: Some(UserSnapshot {
                user_id: 1,
                email: "sam@example.com".to_string(),
                username: None,
            }),
        };
        storage.save(&snapshot).unwrap();

        let loaded = storage.load().unwrap().expect("snapshot should exist");
        assert_eq!(loaded, snapshot);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_empty_snapshot_is_empty() {
        assert!(SessionSnapshot::default().is_empty());
        let populated = SessionSnapshot {
            access_token: Some("a".to_string()),
            ..Default::default()
        };
        assert!(!populated.is_empty());
    }
}
