pub mod api_client;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod timezone;
pub mod workouts;

pub use api_client::{ApiClient, ApiRequest, ResponseEnvelope};
pub use auth::AuthApi;
pub use dashboard::DashboardApi;
pub use health::HealthApi;
pub use timezone::resolve_client_timezone;
pub use workouts::WorkoutApi;
