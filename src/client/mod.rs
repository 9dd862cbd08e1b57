//! AddressComplete service client.

pub mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{OperationContext, Result};
use crate::types::response::decode_items;
use crate::types::{Address, RetrievalRequest, SearchRequest, Suggestion};

/// The two operations of an address lookup service.
///
/// Implemented by [`AddressCompleteClient`]; callers can substitute their own
/// implementation in tests.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Search for address suggestions. Returns the payload unmodified.
    async fn find(&self, request: &SearchRequest) -> Result<Value>;

    /// Retrieve the full record for an identifier. Returns the payload unmodified.
    async fn retrieve(&self, request: &RetrievalRequest) -> Result<Value>;
}

/// Client for the Canada Post AddressComplete Find and Retrieve services.
///
/// Every call makes exactly one GET request. Nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct AddressCompleteClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl AddressCompleteClient {
    /// Client for `api_key` with the default endpoints.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Client for an explicit configuration.
    ///
    /// Fails with [`AddressCompleteError::Configuration`](crate::error::AddressCompleteError::Configuration)
    /// on an empty key or a malformed endpoint. A configured timeout gets its own
    /// reqwest client; otherwise the process-wide shared client is used.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = match config.timeout() {
            Some(timeout) => http::client_with_timeout(timeout)?,
            None => http::shared_client().clone(),
        };
        Ok(Self { config, http })
    }

    /// Client configured from `ADDRESSCOMPLETE_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Use a caller-supplied reqwest client (timeouts, proxies, TLS).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one Find request and return the payload unmodified.
    ///
    /// A non-2xx status is returned as `Http`. An error item from the service is
    /// classified under [`OperationContext::Find`] and returned as `Service`.
    pub async fn search(&self, request: &SearchRequest) -> Result<Value> {
        http::get_json(
            &self.http,
            self.config.find_endpoint(),
            self.config.api_key(),
            request,
            OperationContext::Find,
        )
        .await
    }

    /// Search with the default country, limit, and language.
    pub async fn search_term(&self, term: &str) -> Result<Value> {
        self.search(&SearchRequest::new(term)).await
    }

    /// Like [`search`](Self::search), decoding the `Items` list into [`Suggestion`]s.
    pub async fn search_suggestions(&self, request: &SearchRequest) -> Result<Vec<Suggestion>> {
        decode_items(self.search(request).await?)
    }

    /// Send one Retrieve request for `request.id` and return the payload unmodified.
    ///
    /// The identifier is percent-encoded. Error items are classified under
    /// [`OperationContext::Retrieve`].
    pub async fn retrieve(&self, request: &RetrievalRequest) -> Result<Value> {
        http::get_json(
            &self.http,
            self.config.retrieve_endpoint(),
            self.config.api_key(),
            request,
            OperationContext::Retrieve,
        )
        .await
    }

    /// Retrieve the record for a single identifier.
    pub async fn retrieve_details(&self, id: &str) -> Result<Value> {
        self.retrieve(&RetrievalRequest::new(id)).await
    }

    /// Like [`retrieve`](Self::retrieve), decoding the `Items` list into [`Address`]es.
    pub async fn retrieve_addresses(&self, request: &RetrievalRequest) -> Result<Vec<Address>> {
        decode_items(self.retrieve(request).await?)
    }
}

#[async_trait]
impl AddressLookup for AddressCompleteClient {
    async fn find(&self, request: &SearchRequest) -> Result<Value> {
        self.search(request).await
    }

    async fn retrieve(&self, request: &RetrievalRequest) -> Result<Value> {
        AddressCompleteClient::retrieve(self, request).await
    }
}
