//! athos-core: shared infrastructure for the ATHOS API client.
pub mod body;
pub mod config;
pub mod error;
pub mod observability;

pub use body::ParsedBody;
pub use error::{ApiError, ClientError, Result, MISSING_TOKEN_DETAIL};

pub use reqwest;
pub use serde_json;
pub use tracing;
