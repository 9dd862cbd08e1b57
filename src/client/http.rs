//! Shared HTTP client and request plumbing.

use std::sync::OnceLock;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::error::{AddressCompleteError, OperationContext, Result};
use crate::types::response::provider_error;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    })
}

/// Build a dedicated client with a request timeout.
pub fn client_with_timeout(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(10)
        .build()?)
}

/// Map a non-success HTTP status to a transport error.
pub fn status_to_error(status: u16, body: &str) -> AddressCompleteError {
    AddressCompleteError::Http {
        status,
        body: body.to_string(),
    }
}

/// Issue one GET against `endpoint` with `Key` followed by `params`, and return
/// the decoded JSON. Provider error items are classified under `context`.
pub(crate) async fn get_json<P: Serialize + ?Sized>(
    client: &reqwest::Client,
    endpoint: &str,
    api_key: &str,
    params: &P,
    context: OperationContext,
) -> Result<Value> {
    tracing::debug!(%context, endpoint, "sending AddressComplete request");

    let response = client
        .get(endpoint)
        .query(&[("Key", api_key)])
        .query(params)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%context, status = status.as_u16(), "AddressComplete request failed");
        return Err(status_to_error(status.as_u16(), &body));
    }

    let body = response.text().await?;
    let payload: Value = serde_json::from_str(&body)?;

    if let Some(details) = provider_error(&payload) {
        let error = AddressCompleteError::service(context, details);
        tracing::warn!(
            %context,
            code = error.code(),
            error = %error,
            "AddressComplete reported an error"
        );
        return Err(error);
    }

    Ok(payload)
}
