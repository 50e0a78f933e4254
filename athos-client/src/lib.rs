pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod session;

use config::Settings;
use services::{
    resolve_client_timezone, ApiClient, AuthApi, DashboardApi, HealthApi, WorkoutApi,
};
use session::Session;

pub use athos_core::{ApiError, ClientError, ParsedBody, Result};

/// The API callers sharing one client and session.
#[derive(Clone, Debug)]
pub struct AppState {
    pub api: ApiClient,
    pub auth: AuthApi,
    pub dashboard: DashboardApi,
    pub health: HealthApi,
    pub workouts: WorkoutApi,
}

impl AppState {
    pub fn new(api: ApiClient) -> Self {
        Self {
            auth: AuthApi::new(api.clone()),
            dashboard: DashboardApi::new(api.clone()),
            health: HealthApi::new(api.clone()),
            workouts: WorkoutApi::new(api.clone()),
            api,
        }
    }

    /// Build from configuration with a file-backed session.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let session = Session::file_backed(settings.session.token_path.clone());
        let timezone = resolve_client_timezone(settings.client.timezone.as_deref());
        let api = ApiClient::new(&settings.api, timezone, session)?;
        Ok(Self::new(api))
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }
}
