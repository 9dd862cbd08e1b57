//! Error families, categories, and recovery hints.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::classify::ApiError;

/// The two disjoint families a provider error code can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorFamily {
    /// Operation-specific problems the caller can fix by correcting the request.
    Response,
    /// Account, service, or infrastructure problems shared by every operation.
    Api,
}

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Response,
    Api,
    Transport,
    Network,
    Serialization,
    Configuration,
}

/// Provider-reported error item, as found in a failed Find or Retrieve payload.
///
/// Deserializes from the service's own item shape:
/// `{"Error": "2", "Description": "...", "Cause": "...", "Resolution": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetails {
    /// Provider error code. A value that is not an integer reads as the Unknown code.
    #[serde(rename = "Error", deserialize_with = "lenient_code")]
    pub code: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
}

// The service sends codes as strings ("1001"); accept numbers too.
fn lenient_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let code = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    Ok(code.unwrap_or_else(|| ApiError::Unknown.code()))
}

impl ErrorDetails {
    pub fn new(code: i32) -> Self {
        Self {
            code,
            description: None,
            cause: None,
            resolution: None,
        }
    }
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    CorrectRequest,
    CheckCredentials,
    CheckConfiguration,
    RetryWithBackoff,
    ContactSupport,
}
