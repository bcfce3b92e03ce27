//! Session token storage.
//!
//! A single opaque token slot, persisted in `<base>/session.json` with
//! restricted permissions (0600). Presence of a non-empty token means the
//! user is authenticated; there is no expiry or refresh metadata.
//! Tokens are never logged or displayed in full.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// On-disk layout of the session file.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    jwt_token: String,
}

/// Storage seam behind [`SessionStore`].
pub trait SessionBackend: Send + Sync + fmt::Debug {
    /// Reads the stored token, `None` if nothing is stored.
    ///
    /// # Errors
    /// Returns an error if the storage exists but cannot be read.
    fn load(&self) -> Result<Option<String>>;

    /// Replaces the stored token.
    ///
    /// # Errors
    /// Returns an error if the token cannot be written.
    fn save(&self, token: &str) -> Result<()>;

    /// Removes the stored token. Removing an absent token is not an error.
    ///
    /// # Errors
    /// Returns an error if existing storage cannot be removed.
    fn remove(&self) -> Result<()>;
}

/// File-backed token slot.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionBackend for FileBackend {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session from {}", self.path.display()))?;
        let file: SessionFile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", self.path.display()))?;
        Ok(Some(file.jwt_token))
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(&SessionFile {
            jwt_token: token.to_string(),
        })
        .context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }

    fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to remove session {}", self.path.display())),
        }
    }
}

/// In-memory token slot (tests, ephemeral runs).
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: Mutex<Option<String>>,
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>> {
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(())
    }
}

/// Handle to the single session token slot.
///
/// Cheap to clone; every clone shares the same backend. Pass it explicitly to
/// whatever needs auth state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Session stored at `<base>/session.json`.
    pub fn open_default() -> Self {
        Self::file(paths::session_path())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileBackend::new(path)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::default()))
    }

    /// Persists `token`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error if the backend cannot write the token.
    pub fn set_token(&self, token: &str) -> Result<()> {
        self.backend.save(token)?;
        tracing::debug!(token = %mask_token(token), "session token stored");
        Ok(())
    }

    /// Returns the stored token, if any.
    ///
    /// Unreadable storage is logged and reported as absent.
    pub fn get_token(&self) -> Option<String> {
        match self.backend.load() {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "ignoring unreadable session");
                None
            }
        }
    }

    /// True iff a non-empty token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some_and(|token| !token.is_empty())
    }

    /// Removes the stored token. Idempotent.
    ///
    /// # Errors
    /// Returns an error if existing storage cannot be removed.
    pub fn clear_token(&self) -> Result<()> {
        self.backend.remove()?;
        tracing::debug!("session token cleared");
        Ok(())
    }
}

/// Masks a token for display (shows first 4 and last 4 chars).
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = SessionStore::in_memory();
        assert_eq!(store.get_token(), None);
        assert!(!store.is_authenticated());

        store.set_token("abc").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("abc"));
        assert!(store.is_authenticated());

        store.set_token("def").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("def"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = SessionStore::in_memory();
        store.clear_token().unwrap();
        store.set_token("abc").unwrap();
        store.clear_token().unwrap();
        store.clear_token().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let store = SessionStore::in_memory();
        store.set_token("").unwrap();
        assert_eq!(store.get_token().as_deref(), Some(""));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = SessionStore::in_memory();
        let other = store.clone();
        store.set_token("shared").unwrap();
        assert!(other.is_authenticated());
        other.clear_token().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_file_store_persists_across_handles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        SessionStore::file(&path).set_token("persisted-token").unwrap();

        let reopened = SessionStore::file(&path);
        assert_eq!(reopened.get_token().as_deref(), Some("persisted-token"));

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"jwt_token\""));

        reopened.clear_token().unwrap();
        assert!(!path.exists());
        reopened.clear_token().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        SessionStore::file(&path).set_token("secret").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_corrupt_file_reads_as_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let store = SessionStore::file(&path);
        assert_eq!(store.get_token(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("short"), "*****");
        assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9.payload"), "eyJh...load");
    }
}
