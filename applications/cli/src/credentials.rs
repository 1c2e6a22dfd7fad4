//! Session persistence between invocations
//!
//! `encore login` writes the bearer token and the account name to a small
//! TOML file; later commands pick the token up from there when the
//! configuration does not carry one.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stored session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
    pub token: String,

    /// Username or email the session was opened with
    pub account: String,
}

/// Credentials file on disk
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session, `None` when nobody is signed in
    pub fn load(&self) -> Result<Option<Credentials>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let credentials: Credentials = toml::from_str(&contents)?;
        debug!(path = %self.path.display(), account = %credentials.account, "Loaded credentials");
        Ok(Some(credentials))
    }

    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, toml::to_string(credentials)?)?;
        info!(path = %self.path.display(), account = %credentials.account, "Saved credentials");
        Ok(())
    }

    /// Forget the stored session; returns whether there was one
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        fs::remove_file(&self.path)?;
        info!(path = %self.path.display(), "Removed credentials");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            token: "tok-123".to_string(),
            account: "ada".to_string(),
        }
    }

    #[test]
    fn test_missing_file_means_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("credentials.toml"));

        assert_eq!(store.load().unwrap(), None);
        assert!(!store.clear().unwrap());
    }

    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("nested").join("credentials.toml"));

        store.save(&credentials()).unwrap();
        assert_eq!(store.load().unwrap(), Some(credentials()));

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("token = \"tok-123\""));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("credentials.toml"));
        store.save(&credentials()).unwrap();

        assert!(store.clear().unwrap());
        assert!(!store.path().exists());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        fs::write(&path, "token = ").unwrap();

        let result = CredentialStore::new(path).load();
        assert!(matches!(result, Err(crate::CliError::Credentials(_))));
    }
}
