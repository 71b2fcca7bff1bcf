// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Secure credential storage for the session token.
//!
//! The session token is never cached in memory by the client: every
//! authenticated request re-reads it through a [`CredentialStore`].

use crate::error::ClientError;
use dashmap::DashMap;
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Key the session token is stored under.
pub const TOKEN_KEY: &str = "token";

/// Key/value credential storage (platform keychain, secure file, ...).
pub trait CredentialStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, ClientError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Remove `key`. Removing an absent key succeeds.
    fn delete(&self, key: &str) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// In-memory credential store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: DashMap<String, String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), ClientError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed credential store: one owner-readable file per key.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    dir: PathBuf,
}

impl FileCredentialStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, ClientError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(ClientError::CredentialStore(format!(
                "Invalid credential key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(key))
    }
}

impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::CredentialStore(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let path = self.path_for(key)?;
        let dir = self.dir.clone();
        let prefix = format!(".{}.", key);
        let value = value.to_string();

        tokio::task::spawn_blocking(move || replace_owner_only(&dir, &prefix, &path, &value))
            .await
            .map_err(|e| {
                ClientError::CredentialStore(format!("Credential write task failed: {}", e))
            })?
    }

    async fn delete(&self, key: &str) -> Result<(), ClientError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::CredentialStore(format!(
                "Failed to delete {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// Replace `path` with `value` via a uniquely named sibling temp file that is
/// owner-only from the moment it is created.
///
/// Concurrent writers never share a temp file, so the last rename wins.
fn replace_owner_only(dir: &Path, prefix: &str, path: &Path, value: &str) -> Result<(), ClientError> {
    let io_err = |action: &str, e: std::io::Error| {
        ClientError::CredentialStore(format!("Failed to {} {}: {}", action, path.display(), e))
    };

    std::fs::create_dir_all(dir).map_err(|e| io_err("create directory for", e))?;

    let mut builder = tempfile::Builder::new();
    builder.prefix(prefix).suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o600));
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| io_err("create temp file for", e))?;
    tmp.write_all(value.as_bytes())
        .map_err(|e| io_err("write", e))?;
    tmp.persist(path).map_err(|e| io_err("replace", e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);

        store.set(TOKEN_KEY, "abc").await.unwrap();
        assert_eq!(store.get(TOKEN_KEY).await.unwrap().as_deref(), Some("abc"));

        store.delete(TOKEN_KEY).await.unwrap();
        store.delete(TOKEN_KEY).await.unwrap();
        assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let store = FileCredentialStore::new("/tmp/unused");
        assert!(store.path_for("../escape").is_err());
        assert!(store.path_for("a/b").is_err());
        assert!(store.path_for(".hidden").is_err());
        assert!(store.path_for("").is_err());
        assert!(store.path_for("token").is_ok());
    }
}
