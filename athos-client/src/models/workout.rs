use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutType {
    Strength,
    Cardio,
    Other,
}

/// Body of `POST /v1/workouts`, tagged by `workout_type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "workout_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreateWorkout {
    Strength(StrengthWorkout),
    Cardio(CardioWorkout),
}

impl CreateWorkout {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            CreateWorkout::Strength(_) => WorkoutType::Strength,
            CreateWorkout::Cardio(_) => WorkoutType::Cardio,
        }
    }

    pub fn client_uuid(&self) -> Uuid {
        match self {
            CreateWorkout::Strength(w) => w.client_uuid,
            CreateWorkout::Cardio(w) => w.client_uuid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthWorkout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub strength_sets: Vec<StrengthSetInput>,
    pub client_uuid: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_ts: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthSetInput {
    pub exercise_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardioWorkout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub cardio_session: CardioSessionInput,
    pub client_uuid: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_ts: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardioSessionInput {
    pub duration_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutCreated {
    pub workout_id: Uuid,
    pub workout_type: WorkoutType,
    #[serde(default)]
    pub strength_set_count: u32,
    #[serde(default)]
    pub cardio_session_created: bool,
}

/// Query for `GET /v1/workouts`.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutListQuery {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutListItem {
    pub id: Uuid,
    pub workout_type: WorkoutType,
    pub title: Option<String>,
    pub start_ts: DateTime<Utc>,
    pub end_ts: Option<DateTime<Utc>>,
    pub source: Option<String>,
    pub provider: Option<String>,
    pub client_uuid: Option<Uuid>,
    #[serde(default)]
    pub strength_set_count: u32,
    #[serde(default)]
    pub cardio_session_created: bool,
}

/// A workout with its sets or cardio session, as returned by the detail
/// and dashboard endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDetail {
    pub id: Uuid,
    pub workout_type: WorkoutType,
    pub title: Option<String>,
    pub start_ts: DateTime<Utc>,
    pub end_ts: Option<DateTime<Utc>>,
    pub source: Option<String>,
    pub provider: Option<String>,
    pub client_uuid: Option<Uuid>,
    #[serde(default)]
    pub strength_sets: Vec<StrengthSetDetail>,
    #[serde(default)]
    pub cardio_session: Option<CardioSessionDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthSetDetail {
    pub id: Uuid,
    #[serde(default)]
    pub workout_id: Option<Uuid>,
    #[serde(default)]
    pub exercise_id: Option<Uuid>,
    pub exercise_name: String,
    pub set_index: i32,
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i64>,
    pub rpe: Option<f64>,
    pub notes: Option<String>,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardioSessionDetail {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub workout_id: Option<Uuid>,
    #[serde(default)]
    pub distance_miles: Option<f64>,
    #[serde(default)]
    pub duration_seconds: Option<i64>,
    #[serde(default)]
    pub incline: Option<f64>,
    #[serde(default)]
    pub speed_mph: Option<f64>,
    #[serde(default)]
    pub resistance: Option<f64>,
    #[serde(default)]
    pub rpms: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}
