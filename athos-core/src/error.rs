use crate::body::ParsedBody;
use serde_json::json;
use thiserror::Error;

/// Detail message used when an authenticated call is attempted without a
/// stored credential.
pub const MISSING_TOKEN_DETAIL: &str = "Missing token";

/// A non-success outcome normalized into a single shape.
///
/// Produced both for server-reported failures (any non-2xx status) and for
/// the local "missing credential" precondition. `detail` is never empty.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{detail}")]
pub struct ApiError {
    pub status: u16,
    pub request_id: Option<String>,
    pub detail: String,
    pub raw_body: ParsedBody,
}

impl ApiError {
    /// Normalize a failed HTTP response.
    pub fn from_response(status: u16, request_id: Option<String>, raw_body: ParsedBody) -> Self {
        let detail = raw_body
            .detail()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        Self {
            status,
            request_id,
            detail,
            raw_body,
        }
    }

    /// The local failure raised when auth is required but no token is held.
    pub fn missing_token() -> Self {
        Self {
            status: 401,
            request_id: None,
            detail: MISSING_TOKEN_DETAIL.to_string(),
            raw_body: ParsedBody::Json(json!({ "detail": MISSING_TOKEN_DETAIL })),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response body: {source}")]
    Decode {
        request_id: Option<String>,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ClientError {
    /// Correlation id reported by the server, when one is known.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            ClientError::Api(err) => err.request_id.as_deref(),
            ClientError::Decode { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// HTTP status for normalized API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api(err) => Some(err.status),
            _ => None,
        }
    }

    /// Human-readable message suitable as the primary text shown to a user.
    pub fn detail(&self) -> String {
        match self {
            ClientError::Api(err) => err.detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
