//! Async client for the Canada Post AddressComplete web service.
//!
//! Sends Find (search suggestion) and Retrieve (address detail) requests and
//! maps the service's numeric error codes onto typed errors.
//!
//! # Quick Start
//!
//! ```no_run
//! use addresscomplete::prelude::*;
//!
//! # async fn example() -> addresscomplete::error::Result<()> {
//! let client = AddressCompleteClient::from_env()?;
//! let suggestions = client.search_term("123 Main St").await?;
//! println!("{suggestions}");
//! # Ok(())
//! # }
//! ```
//!
//! Provider failures come back as [`AddressCompleteError::Service`](error::AddressCompleteError::Service):
//!
//! ```
//! use addresscomplete::error::{classify, ApiError, OperationContext, ServiceError};
//!
//! let error = classify(8, OperationContext::General);
//! assert_eq!(error, ServiceError::Api(ApiError::KeyDailyLimitExceeded));
//! assert_eq!(error.to_string(), "Key daily limit exceeded");
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod types;
