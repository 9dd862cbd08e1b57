//! Convenience re-exports for common use.

pub use crate::client::{AddressCompleteClient, AddressLookup};
pub use crate::config::ClientConfig;
pub use crate::error::{
    AddressCompleteError, ApiError, OperationContext, ResponseError, Result, ServiceError,
};
pub use crate::types::{Address, RetrievalRequest, SearchRequest, Suggestion};
