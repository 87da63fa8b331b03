//! File-backed session persistence.
//!
//! Stores the session as a small JSON file under the platform data
//! directory, so a login survives until an explicit logout.

use super::{Session, SessionError, SessionStore};
use std::fs;
use std::path::PathBuf;

/// Session store persisting to a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default session file location under the platform data dir.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .map(|p| p.join("holidaze").join("session.json"))
            .unwrap_or_else(|| PathBuf::from("./holidaze_session.json"))
    }

    fn io_error(&self, error: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            error: error.to_string(),
        }
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let session = serde_json::from_str(&content).map_err(|e| SessionError::Parse {
            path: self.path.clone(),
            error: e.to_string(),
        })?;

        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(session).map_err(|e| SessionError::Parse {
            path: self.path.clone(),
            error: e.to_string(),
        })?;

        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }

    fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| self.io_error(e))?;
        }
        Ok(())
    }
}
