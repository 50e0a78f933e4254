//! Common test utilities: a mock backend and a client pointed at it.

#![allow(dead_code)]

use athos_client::config::ApiSettings;
use athos_client::services::ApiClient;
use athos_client::session::{InMemoryTokenStore, Session};
use athos_client::AppState;
use std::sync::{Arc, Once};
use wiremock::MockServer;

pub const TEST_TIMEZONE: &str = "America/Chicago";

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("warn,athos_client=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub struct TestApp {
    pub server: MockServer,
    pub state: AppState,
}

impl TestApp {
    /// Spawn a mock backend and a client with an empty in-memory session.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(InMemoryTokenStore::new()).await
    }

    /// Spawn with a session that already holds `token`.
    pub async fn spawn_signed_in(token: &str) -> Self {
        Self::spawn_with_store(InMemoryTokenStore::with_token(token)).await
    }

    async fn spawn_with_store(store: InMemoryTokenStore) -> Self {
        init_tracing();

        let server = MockServer::start().await;
        let settings = ApiSettings {
            base_url: server.uri(),
            timeout_seconds: Some(10),
        };
        let session = Session::new(Arc::new(store));
        let api = ApiClient::new(&settings, TEST_TIMEZONE, session)
            .expect("Failed to build API client");

        TestApp {
            server,
            state: AppState::new(api),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.state.api
    }

    /// Number of requests that reached the mock backend.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }

    /// JSON body of the only request received.
    pub async fn single_request_body(&self) -> serde_json::Value {
        let requests = self
            .server
            .received_requests()
            .await
            .expect("request recording is enabled");
        assert_eq!(requests.len(), 1, "expected exactly one request");
        serde_json::from_slice(&requests[0].body).expect("request body is JSON")
    }
}
