//! Request values for the Find and Retrieve operations.

use bon::Builder;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNTRY: &str = "CAN";
pub const DEFAULT_MAX_SUGGESTIONS: u32 = 10;
pub const DEFAULT_LANGUAGE_PREFERENCE: &str = "en";

/// Query parameters for an address search.
///
/// Serializes to the service's query parameter names (`SearchTerm`, `Country`,
/// `MaxSuggestions`, `LanguagePreference`).
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRequest {
    #[builder(into)]
    pub search_term: String,
    /// ISO 3166 country code.
    #[builder(into, default = DEFAULT_COUNTRY.to_string())]
    pub country: String,
    #[builder(default = DEFAULT_MAX_SUGGESTIONS)]
    pub max_suggestions: u32,
    /// 2 or 4 character language code.
    #[builder(into, default = DEFAULT_LANGUAGE_PREFERENCE.to_string())]
    pub language_preference: String,
}

impl SearchRequest {
    /// Search for `search_term` with the default country, limit, and language.
    pub fn new(search_term: impl Into<String>) -> Self {
        Self::builder().search_term(search_term).build()
    }
}

/// Identifier of a single record returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RetrievalRequest {
    pub id: String,
}

impl RetrievalRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<&str> for RetrievalRequest {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RetrievalRequest {
    fn from(id: String) -> Self {
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn search_request_defaults() {
        let request = SearchRequest::new("123 Main St");
        assert_eq!(request.search_term, "123 Main St");
        assert_eq!(request.country, "CAN");
        assert_eq!(request.max_suggestions, 10);
        assert_eq!(request.language_preference, "en");
    }

    #[test]
    fn search_request_serializes_service_parameter_names() {
        let request = SearchRequest::builder()
            .search_term("10 rue Principale")
            .country("CAN")
            .max_suggestions(5)
            .language_preference("fr")
            .build();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "SearchTerm": "10 rue Principale",
                "Country": "CAN",
                "MaxSuggestions": 5,
                "LanguagePreference": "fr"
            })
        );
    }

    #[test]
    fn retrieval_request_serializes_id() {
        let request = RetrievalRequest::from("CA|CP|ENG|3X1-R2J");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"Id": "CA|CP|ENG|3X1-R2J"})
        );
    }
}
