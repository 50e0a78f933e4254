//! The single path through which every backend call is made.
//!
//! Each request gets the client timezone header, optional bearer auth from
//! the [`Session`], a JSON body when one is supplied, and trace context.
//! Responses are parsed tolerantly and non-2xx outcomes are normalized into
//! [`ApiError`].

use crate::config::ApiSettings;
use crate::session::Session;
use athos_core::observability::{extract_request_id, inject_trace_context, CLIENT_TIMEZONE_HEADER};
use athos_core::{ApiError, ClientError, ParsedBody, Result};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Description of one API call.
#[derive(Debug, Clone, Default)]
pub struct ApiRequest {
    pub path: String,
    pub method: Method,
    pub body: Option<serde_json::Value>,
    pub requires_auth: bool,
}

impl ApiRequest {
    /// A `GET` request to `path` without auth or body.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path).method(Method::POST)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Require the session's bearer credential.
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

/// A successful response with its correlation id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope<T> {
    pub data: T,
    pub request_id: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResponseEnvelope<U> {
        ResponseEnvelope {
            data: f(self.data),
            request_id: self.request_id,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timezone: String,
    session: Session,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings, timezone: impl Into<String>, session: Session) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = settings.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            timezone: timezone.into(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue `request` and decode a 2xx body into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<ResponseEnvelope<T>> {
        let ResponseEnvelope { data, request_id } = self.request_raw(request).await?;

        match data.decode::<T>() {
            Ok(data) => Ok(ResponseEnvelope { data, request_id }),
            Err(source) => {
                tracing::warn!(
                    request_id = ?request_id,
                    error = %source,
                    "Response body did not match the expected shape"
                );
                Err(ClientError::Decode { request_id, source })
            }
        }
    }

    /// Issue `request` and return the parsed body without decoding it.
    pub async fn request_raw(&self, request: ApiRequest) -> Result<ResponseEnvelope<ParsedBody>> {
        let url = self.url(&request.path);

        let mut headers = HeaderMap::new();
        inject_trace_context(&mut headers);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(headers)
            .header(CLIENT_TIMEZONE_HEADER, self.timezone.as_str());

        if request.requires_auth {
            // Read once; a sign-out racing with this call does not affect it.
            let Some(token) = self.session.token().await else {
                tracing::warn!(
                    method = %request.method,
                    path = %request.path,
                    "Authenticated request attempted without a stored token"
                );
                return Err(ApiError::missing_token().into());
            };
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(
            method = %request.method,
            url = %url,
            auth = request.requires_auth,
            "Sending API request"
        );

        let response = builder.send().await.map_err(|e| {
            tracing::error!(method = %request.method, url = %url, error = %e, "API request failed to send");
            ClientError::Network(e)
        })?;

        let status = response.status();
        let request_id = extract_request_id(response.headers());
        let text = response.text().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Failed to read API response body");
            ClientError::Network(e)
        })?;
        let parsed = ParsedBody::parse(&text);

        if status.is_success() {
            tracing::debug!(status = %status, request_id = ?request_id, "API request succeeded");
            return Ok(ResponseEnvelope {
                data: parsed,
                request_id,
            });
        }

        let error = ApiError::from_response(status.as_u16(), request_id, parsed);
        tracing::warn!(
            status = error.status,
            request_id = ?error.request_id,
            detail = %error.detail,
            path = %request.path,
            "API request returned an error status"
        );
        Err(error.into())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}
