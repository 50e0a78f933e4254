use super::api_client::{ApiClient, ApiRequest, ResponseEnvelope};
use crate::models::dashboard::{DashboardDay, DashboardDayQuery};
use athos_core::{ClientError, Result};

#[derive(Clone, Debug)]
pub struct DashboardApi {
    api: ApiClient,
}

impl DashboardApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Workouts and telemetry for one local day. The backend interprets the
    /// date in the timezone sent with the request.
    pub async fn day(&self, query: &DashboardDayQuery) -> Result<ResponseEnvelope<DashboardDay>> {
        self.api.request(Self::day_request(query)?).await
    }

    /// Same as [`DashboardApi::day`] without imposing a response shape.
    pub async fn day_raw(
        &self,
        query: &DashboardDayQuery,
    ) -> Result<ResponseEnvelope<serde_json::Value>> {
        self.api.request(Self::day_request(query)?).await
    }

    fn day_request(query: &DashboardDayQuery) -> Result<ApiRequest> {
        let query = serde_urlencoded::to_string(query)
            .map_err(|e| ClientError::Validation(format!("Invalid dashboard query: {}", e)))?;
        Ok(ApiRequest::get(format!("/v1/dashboard/day?{}", query)).authenticated())
    }
}
