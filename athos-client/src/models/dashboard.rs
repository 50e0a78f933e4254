use super::workout::WorkoutDetail;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query for `GET /v1/dashboard/day`.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardDayQuery {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl DashboardDayQuery {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            limit: None,
            top_k: None,
        }
    }
}

/// One local calendar day of workouts and derived telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDay {
    #[serde(default)]
    pub workouts: Vec<WorkoutDetail>,
    pub telemetry: DayTelemetry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTelemetry {
    pub total_training_load: f64,
    pub best_set_load: Option<f64>,
    pub best_set_exercise_name: Option<String>,
    #[serde(default)]
    pub max_weight_per_exercise: Vec<MaxWeightPerExercise>,
    #[serde(default)]
    pub muscle_group_training_load: Vec<MuscleGroupTrainingLoad>,
    pub cardio_totals: CardioTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxWeightPerExercise {
    pub exercise_name: String,
    pub max_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupTrainingLoad {
    pub muscle_group: String,
    pub load: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardioTotals {
    pub total_distance_miles: f64,
    pub total_duration_seconds: Option<i64>,
}
