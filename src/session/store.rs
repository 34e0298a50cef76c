//! File-backed persistence for session state.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::session::{AuthState, SessionError};

/// Persists [`AuthState`] as a JSON file at a fixed path.
///
/// The file holds the bearer token, the optional refresh token and the
/// serialized identity, unencrypted.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state, returning `None` when no session file
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<AuthState>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Persist the given state, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the filesystem write fails.
    pub fn save(&self, state: &AuthState) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, raw)?;

        Ok(())
    }

    /// Delete the persisted state, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::session::Identity;

    use super::*;

    fn sample() -> AuthState {
        AuthState {
            access_token: "tok".to_owned(),
            refresh_token: Some("refresh".to_owned()),
            identity: Identity {
                account_id: 1,
                email: "an@example.com".to_owned(),
                display_name: "An".to_owned(),
            },
        }
    }

    #[test]
    fn load_missing_file_returns_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path().join("session.json"));

        assert_eq!(store.load()?, None);

        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path().join("nested/session.json"));

        store.save(&sample())?;

        assert_eq!(store.load()?, Some(sample()));

        Ok(())
    }

    #[test]
    fn clear_removes_the_file_and_is_idempotent() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path().join("session.json"));

        store.save(&sample())?;
        store.clear()?;
        store.clear()?;

        assert_eq!(store.load()?, None);

        Ok(())
    }

    #[test]
    fn corrupt_file_reports_corrupt() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json")?;

        let result = SessionStore::new(path).load();

        assert!(
            matches!(result, Err(SessionError::Corrupt(_))),
            "expected Corrupt, got {result:?}"
        );

        Ok(())
    }
}
