pub mod auth;
pub mod dashboard;
pub mod workout;
pub mod workout_draft;

pub use auth::{HealthResponse, LoginRequest, MeResponse, SignupRequest, TokenResponse};
pub use dashboard::{DashboardDay, DashboardDayQuery, DayTelemetry};
pub use workout::{
    CardioSessionInput, CardioWorkout, CreateWorkout, StrengthSetInput, StrengthWorkout,
    WorkoutCreated, WorkoutDetail, WorkoutListItem, WorkoutListQuery, WorkoutType,
};
pub use workout_draft::{parse_start_ts, CardioWorkoutDraft, StrengthSetRow, StrengthWorkoutDraft};
