use super::api_client::{ApiClient, ApiRequest, ResponseEnvelope};
use crate::models::auth::HealthResponse;
use athos_core::Result;

#[derive(Clone, Debug)]
pub struct HealthApi {
    api: ApiClient,
}

impl HealthApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn check(&self) -> Result<ResponseEnvelope<HealthResponse>> {
        self.api.request(ApiRequest::get("/health")).await
    }
}
