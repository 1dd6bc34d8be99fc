//! Persisted session storage.
//!
//! The store is the single process-wide home of the current session. It is
//! constructed once at startup and handed around by `Arc`, so there is no
//! hidden global state. Token and user live in one record; saving or
//! clearing touches both or neither.

use std::path::PathBuf;
use std::sync::Mutex;

use super::Session;
use crate::error::Result;

/// Read/write access to the persisted session.
pub trait SessionStore: Send + Sync {
    /// Load the current session, if one exists
    fn load(&self) -> Result<Option<Session>>;

    /// Persist a session, replacing any prior one
    fn save(&self, session: &Session) -> Result<()>;

    /// Remove the session. A no-op when none exists.
    fn clear(&self) -> Result<()>;
}

/// File-backed session store.
///
/// The session is one JSON file so token and user are written and removed
/// in a single filesystem operation.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let session: Session = serde_json::from_str(&contents)?;
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, contents)?;

        // The file holds a live bearer token; keep it private on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory session store for tests and embedding.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>> {
        let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}
