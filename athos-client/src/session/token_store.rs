//! Storage for the single bearer credential held by a session.

use async_trait::async_trait;
use athos_core::Result;
use std::sync::RwLock;

/// Fixed key under which the credential is persisted.
pub const TOKEN_STORAGE_KEY: &str = "athos.access_token";

/// Holder of at most one opaque bearer credential.
///
/// Implementations never validate the token's format. Reads never fail:
/// unavailable or corrupted storage reads as "no credential".
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Store `value`, replacing any previous credential.
    async fn set_token(&self, value: &str) -> Result<()>;
    /// Current credential, if any.
    async fn get_token(&self) -> Option<String>;
    /// Remove the credential. Calling this when nothing is stored is a no-op.
    async fn clear_token(&self) -> Result<()>;
}

/// A [`TokenStore`] that lives only as long as the process.
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out holding `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn set_token(&self, value: &str) -> Result<()> {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(value.to_string());
        Ok(())
    }

    async fn get_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .filter(|token| !token.is_empty())
    }

    async fn clear_token(&self) -> Result<()> {
        self.token.write().unwrap_or_else(|e| e.into_inner()).take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sets_and_gets_token() {
        let store = InMemoryTokenStore::new();
        store.set_token("abc123").await.unwrap();
        assert_eq!(store.get_token().await.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn clears_token() {
        let store = InMemoryTokenStore::new();
        store.set_token("abc123").await.unwrap();
        store.clear_token().await.unwrap();
        assert_eq!(store.get_token().await, None);
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let store = InMemoryTokenStore::new();
        store.clear_token().await.unwrap();
        store.clear_token().await.unwrap();
        assert_eq!(store.get_token().await, None);
    }

    #[tokio::test]
    async fn overwrites_previous_token() {
        let store = InMemoryTokenStore::with_token("first");
        store.set_token("second").await.unwrap();
        assert_eq!(store.get_token().await.as_deref(), Some("second"));
    }
}
