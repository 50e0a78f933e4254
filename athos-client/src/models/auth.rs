use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: Secret<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    #[serde(serialize_with = "expose")]
    pub password: Secret<String>,
    pub birth_year: i32,
    pub birth_month: u8,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MeResponse {
    pub user_id: i64,
    pub email: String,
    pub name: String,
    pub birth_year: i32,
    pub birth_month: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

fn expose<S: Serializer>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}
