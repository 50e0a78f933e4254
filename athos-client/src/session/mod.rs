pub mod file_store;
pub mod token_store;

pub use file_store::FileTokenStore;
pub use token_store::{InMemoryTokenStore, TokenStore, TOKEN_STORAGE_KEY};

use athos_core::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// The signed-in state of one client.
///
/// Owns the credential slot and is handed to the API client at construction,
/// so independent sessions never share a token.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// A session persisted to `path`.
    pub fn file_backed(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileTokenStore::new(path)))
    }

    /// A session that forgets its credential when dropped.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTokenStore::new()))
    }

    pub async fn token(&self) -> Option<String> {
        self.store.get_token().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token().await.is_some()
    }

    pub async fn sign_in(&self, token: &str) -> Result<()> {
        self.store.set_token(token).await
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.store.clear_token().await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
