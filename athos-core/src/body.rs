//! Parsed HTTP response bodies.
//!
//! Response bodies are read as text and classified once, so that success
//! payloads and error payloads go through the same tolerant parser. Malformed
//! JSON is never an error: it is kept as raw text.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A response body after tolerant parsing.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum ParsedBody {
    /// The body was empty.
    #[default]
    Null,
    /// The body was not valid JSON; the raw text is kept verbatim.
    Text(String),
    /// The body was valid JSON.
    Json(Value),
}

impl ParsedBody {
    /// Classify a raw response body.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return ParsedBody::Null;
        }

        match serde_json::from_str::<Value>(text) {
            Ok(value) => ParsedBody::Json(value),
            Err(_) => ParsedBody::Text(text.to_string()),
        }
    }

    /// The server-supplied `detail` message, if the body is a JSON object
    /// whose `detail` member is a non-empty string.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ParsedBody::Json(Value::Object(map)) => map
                .get("detail")
                .and_then(Value::as_str)
                .filter(|detail| !detail.is_empty()),
            _ => None,
        }
    }

    /// Convert into a JSON value. Text becomes a JSON string, an empty body
    /// becomes `null`.
    pub fn into_value(self) -> Value {
        match self {
            ParsedBody::Null => Value::Null,
            ParsedBody::Text(text) => Value::String(text),
            ParsedBody::Json(value) => value,
        }
    }

    /// Deserialize the body into a typed value.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.into_value())
    }
}

impl From<Value> for ParsedBody {
    fn from(value: Value) -> Self {
        ParsedBody::Json(value)
    }
}
