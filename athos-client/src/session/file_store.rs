//! File-backed credential storage.
//!
//! The file is a single JSON object mapping string keys to string values.
//! The credential lives under [`TOKEN_STORAGE_KEY`]; other keys are left
//! untouched on write.

use super::token_store::{TokenStore, TOKEN_STORAGE_KEY};
use async_trait::async_trait;
use athos_core::{ClientError, Result};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// A [`TokenStore`] persisted to disk so the credential survives restarts.
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw file. A missing file reads as `None`; any other I/O
    /// failure is a storage error.
    async fn read_contents(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::Storage(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// Decode file contents. Fails only when the contents are not a JSON object.
    fn parse_entries(&self, contents: &str) -> std::result::Result<Map<String, Value>, String> {
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(contents) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) => Err(format!("{} does not contain a JSON object", self.path.display())),
            Err(e) => Err(format!("{} is not valid JSON: {}", self.path.display(), e)),
        }
    }

    /// Entries to rewrite: unreadable I/O propagates, corrupt contents start over.
    async fn entries_for_update(&self) -> Result<Map<String, Value>> {
        let Some(contents) = self.read_contents().await? else {
            return Ok(Map::new());
        };

        Ok(self.parse_entries(&contents).unwrap_or_else(|reason| {
            tracing::warn!(error = %reason, "Discarding corrupted session storage");
            Map::new()
        }))
    }

    async fn read_entries(&self) -> Result<Map<String, Value>> {
        match self.read_contents().await? {
            Some(contents) => self.parse_entries(&contents).map_err(ClientError::Storage),
            None => Ok(Map::new()),
        }
    }

    async fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                ClientError::Storage(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let contents = serde_json::to_vec_pretty(entries)?;
        let staging = self.path.with_extension("tmp");

        tokio::fs::write(&staging, contents).await.map_err(|e| {
            ClientError::Storage(format!("failed to write {}: {}", staging.display(), e))
        })?;
        restrict_permissions(&staging).await;

        tokio::fs::rename(&staging, &self.path).await.map_err(|e| {
            ClientError::Storage(format!("failed to replace {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn set_token(&self, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.entries_for_update().await?;
        entries.insert(
            TOKEN_STORAGE_KEY.to_string(),
            Value::String(value.to_string()),
        );

        self.write_entries(&entries).await
    }

    async fn get_token(&self) -> Option<String> {
        match self.read_entries().await {
            Ok(entries) => entries
                .get(TOKEN_STORAGE_KEY)
                .and_then(Value::as_str)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
            Err(e) => {
                tracing::warn!(error = %e, "Session storage unavailable, treating as signed out");
                None
            }
        }
    }

    async fn clear_token(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.entries_for_update().await?;
        if entries.remove(TOKEN_STORAGE_KEY).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) =
        tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await
    {
        tracing::warn!(error = %e, path = %path.display(), "Failed to restrict session file permissions");
    }
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) {}
