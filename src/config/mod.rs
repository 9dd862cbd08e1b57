//! Client configuration (code > env).

use std::fmt;
use std::time::Duration;

use bon::Builder;

use crate::error::{AddressCompleteError, Result};

/// Find (search suggestion) endpoint, including its fixed query parameters.
pub const DEFAULT_FIND_ENDPOINT: &str = "http://ws1.postescanada-canadapost.ca/addresscomplete/interactive/find/v2.10/json3.ws?provider=AddressComplete&package=Interactive&service=Find&version=2.1&endpoint=json3.ws";

/// Retrieve (address detail) endpoint, including its fixed query parameters.
pub const DEFAULT_RETRIEVE_ENDPOINT: &str = "https://ws1.postescanada-canadapost.ca/addresscomplete/interactive/retrieve/v2.11/json.ws?provider=AddressComplete&package=Interactive&service=Retrieve&version=2.11&endpoint=json.ws";

/// Environment variable read by [`ClientConfig::from_env`].
pub const API_KEY_ENV: &str = "ADDRESSCOMPLETE_API_KEY";

/// Settings for an [`AddressCompleteClient`](crate::client::AddressCompleteClient).
///
/// ```
/// use addresscomplete::config::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .api_key("AA11-AA11-AA11-AA11")
///     .timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
/// ```
#[derive(Clone, Builder)]
pub struct ClientConfig {
    #[builder(into)]
    api_key: String,
    #[builder(into, default = DEFAULT_FIND_ENDPOINT.to_string())]
    find_endpoint: String,
    #[builder(into, default = DEFAULT_RETRIEVE_ENDPOINT.to_string())]
    retrieve_endpoint: String,
    /// Per-request timeout. `None` uses the shared HTTP client.
    timeout: Option<Duration>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("find_endpoint", &self.find_endpoint)
            .field("retrieve_endpoint", &self.retrieve_endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Config with default endpoints for `api_key`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Load the API key from `ADDRESSCOMPLETE_API_KEY` (a `.env` file is honoured).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(AddressCompleteError::Configuration(format!(
                "{API_KEY_ENV} is not set"
            ))),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn find_endpoint(&self) -> &str {
        &self.find_endpoint
    }

    pub fn retrieve_endpoint(&self) -> &str {
        &self.retrieve_endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Reject an empty key or an endpoint that is not an absolute URL.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(AddressCompleteError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }
        for (name, endpoint) in [
            ("find", &self.find_endpoint),
            ("retrieve", &self.retrieve_endpoint),
        ] {
            reqwest::Url::parse(endpoint).map_err(|e| {
                AddressCompleteError::Configuration(format!("invalid {name} endpoint {endpoint:?}: {e}"))
            })?;
        }
        Ok(())
    }
}
