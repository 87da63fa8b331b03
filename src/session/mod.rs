//! Session Store
//!
//! Holds the bearer token and profile name of the logged-in user. The
//! in-memory copy is process-wide; persistence goes through an injectable
//! [`SessionStore`] adapter so the manager can be tested without touching
//! the filesystem.
//!
//! Written only by login/register/logout; read by every protected API call.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

mod file_store;

pub use file_store::FileStore;

/// A logged-in session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token, valid until explicitly cleared. There is no
    /// expiry tracking: the server may have invalidated it long ago.
    pub token: String,
    /// Profile name, when the auth response or register form carried one.
    pub name: Option<String>,
}

/// Persistence adapter for sessions.
///
/// [`FileStore`] persists across process runs; [`MemoryStore`] backs tests.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>, SessionError>;
    fn save(&self, session: &Session) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-memory store with no persistence.
#[derive(Default)]
pub struct MemoryStore {
    session: RwLock<Option<Session>>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.session.read().unwrap().clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self.session.write().unwrap() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.session.write().unwrap() = None;
        Ok(())
    }
}

/// Manages the current session: an in-memory copy plus its persisted form.
pub struct SessionManager {
    store: Box<dyn SessionStore>,
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    /// Create a manager, restoring any persisted session.
    pub fn new(store: Box<dyn SessionStore>) -> Result<Self, SessionError> {
        let current = store.load()?;
        Ok(Self {
            store,
            current: RwLock::new(current),
        })
    }

    /// Persist a new session. Called on successful login or register.
    pub fn set_session(&self, token: &str, name: Option<&str>) -> Result<(), SessionError> {
        let session = Session {
            token: token.to_string(),
            name: name.map(str::to_string),
        };
        self.store.save(&session)?;
        *self.current.write().unwrap() = Some(session);
        Ok(())
    }

    /// The bearer token, if logged in.
    pub fn token(&self) -> Option<String> {
        self.current.read().unwrap().as_ref().map(|s| s.token.clone())
    }

    /// The stored profile name, if any.
    pub fn username(&self) -> Option<String> {
        self.current.read().unwrap().as_ref().and_then(|s| s.name.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.read().unwrap().is_some()
    }

    /// Remove both the persisted and in-memory session. Called on logout.
    pub fn clear_session(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        *self.current.write().unwrap() = None;
        Ok(())
    }
}

/// Errors from session persistence
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to access session file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse session file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read_session() {
        let manager = SessionManager::new(Box::<MemoryStore>::default()).unwrap();
        assert!(!manager.is_logged_in());
        assert_eq!(manager.token(), None);

        manager.set_session("t1", Some("alice")).unwrap();
        assert!(manager.is_logged_in());
        assert_eq!(manager.token().as_deref(), Some("t1"));
        assert_eq!(manager.username().as_deref(), Some("alice"));
    }

    #[test]
    fn test_session_without_name() {
        let manager = SessionManager::new(Box::<MemoryStore>::default()).unwrap();
        manager.set_session("t1", None).unwrap();

        assert_eq!(manager.token().as_deref(), Some("t1"));
        assert_eq!(manager.username(), None);
    }

    #[test]
    fn test_clear_removes_token_and_name() {
        let store = MemoryStore::default();
        let manager = SessionManager::new(Box::new(store)).unwrap();
        manager.set_session("t1", Some("alice")).unwrap();

        manager.clear_session().unwrap();
        assert!(!manager.is_logged_in());
        assert_eq!(manager.token(), None);
        assert_eq!(manager.username(), None);
    }

    #[test]
    fn test_manager_restores_persisted_session() {
        let store = MemoryStore::default();
        store
            .save(&Session {
                token: "persisted".to_string(),
                name: Some("bob".to_string()),
            })
            .unwrap();

        let manager = SessionManager::new(Box::new(store)).unwrap();
        assert_eq!(manager.token().as_deref(), Some("persisted"));
        assert_eq!(manager.username().as_deref(), Some("bob"));
    }
}
