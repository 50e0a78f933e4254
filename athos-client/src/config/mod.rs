use athos_core::config::load_configuration;
use athos_core::ClientError;
use serde::Deserialize;
use std::path::PathBuf;

/// Prefix for environment overrides, e.g. `ATHOS_API__BASE_URL`.
pub const ENV_PREFIX: &str = "ATHOS";

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub client: ClientSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApiSettings {
    /// Backend base URL; request paths are appended verbatim.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout. No timeout when unset.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ClientSettings {
    /// IANA timezone sent as `X-Client-Timezone`. Auto-detected when unset.
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SessionSettings {
    /// File holding the persisted bearer credential.
    #[serde(default = "default_token_path")]
    pub token_path: PathBuf,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            token_path: default_token_path(),
        }
    }
}

fn default_token_path() -> PathBuf {
    PathBuf::from(".athos").join("session.json")
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn get_configuration() -> Result<Settings, ClientError> {
    load_configuration(ENV_PREFIX)
}
