use super::api_client::{ApiClient, ApiRequest, ResponseEnvelope};
use crate::models::workout::{
    CreateWorkout, WorkoutCreated, WorkoutDetail, WorkoutListItem, WorkoutListQuery,
};
use athos_core::{ClientError, Result};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct WorkoutApi {
    api: ApiClient,
}

impl WorkoutApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(&self, workout: &CreateWorkout) -> Result<ResponseEnvelope<WorkoutCreated>> {
        let envelope = self
            .api
            .request::<WorkoutCreated>(
                ApiRequest::post("/v1/workouts")
                    .json(workout)?
                    .authenticated(),
            )
            .await?;

        tracing::info!(
            workout_id = %envelope.data.workout_id,
            client_uuid = %workout.client_uuid(),
            request_id = ?envelope.request_id,
            "Workout recorded"
        );

        Ok(envelope)
    }

    pub async fn list(&self, query: &WorkoutListQuery) -> Result<ResponseEnvelope<Vec<WorkoutListItem>>> {
        let query = serde_urlencoded::to_string(query)
            .map_err(|e| ClientError::Validation(format!("Invalid workout query: {}", e)))?;

        self.api
            .request(ApiRequest::get(format!("/v1/workouts?{}", query)).authenticated())
            .await
    }

    pub async fn get(&self, workout_id: Uuid) -> Result<ResponseEnvelope<WorkoutDetail>> {
        self.api
            .request(ApiRequest::get(format!("/v1/workouts/{}", workout_id)).authenticated())
            .await
    }
}
