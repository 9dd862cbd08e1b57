//! Typed views over Find and Retrieve payloads.
//!
//! The client returns payloads verbatim as [`serde_json::Value`]. These types
//! are an opt-in decoding of the `Items` list; fields the service adds later
//! land in `extra`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, ErrorDetails, Result};

/// One suggestion from a Find request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Suggestion {
    pub id: String,
    pub text: String,
    pub highlight: Option<String>,
    pub cursor: Option<i64>,
    pub description: Option<String>,
    /// `"Retrieve"` for a final address, `"Find"` for a container to drill into.
    pub next: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Suggestion {
    /// Whether this suggestion can be passed straight to Retrieve.
    pub fn is_retrievable(&self) -> bool {
        self.next.as_deref() == Some("Retrieve")
    }
}

/// One address record from a Retrieve request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub id: String,
    pub language: Option<String>,
    pub company: Option<String>,
    pub building_number: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province_code: Option<String>,
    pub province_name: Option<String>,
    pub postal_code: Option<String>,
    pub country_name: Option<String>,
    pub country_iso2: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The item list of a payload: either `{"Items": [...]}` or a bare array.
pub(crate) fn items(payload: &Value) -> Option<&Vec<Value>> {
    match payload {
        Value::Object(map) => map.get("Items").and_then(Value::as_array),
        Value::Array(items) => Some(items),
        _ => None,
    }
}

/// Decode the item list of a successful payload.
///
/// A payload that is neither `{"Items": [...]}` nor an array is a
/// [`AddressCompleteError::Serialization`](crate::error::AddressCompleteError::Serialization) error.
pub(crate) fn decode_items<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>> {
    let items = match payload {
        Value::Object(mut map) => map.remove("Items").unwrap_or(Value::Null),
        other => other,
    };
    Ok(serde_json::from_value(items)?)
}

/// Extract the provider error item from a payload, if the first item carries `Error`.
///
/// A non-numeric `Error` value is reported under the Unknown code. An item whose
/// other fields are malformed still reports as Unknown rather than as success.
pub(crate) fn provider_error(payload: &Value) -> Option<ErrorDetails> {
    let item = items(payload)?.first()?;
    item.get("Error")?;

    Some(
        serde_json::from_value(item.clone())
            .unwrap_or_else(|_| ErrorDetails::new(ApiError::Unknown.code())),
    )
}
