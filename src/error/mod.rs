//! Error types for the AddressComplete client.

pub mod classify;
pub mod unified;

pub use classify::{
    classify, classify_with_description, ApiError, ErrorMapping, OperationContext, ResponseError,
    ResponseErrorKind, ServiceError,
};
pub use unified::{ErrorCategory, ErrorDetails, ErrorFamily, RecoverySuggestion};

use thiserror::Error;

/// Primary error type for all client operations.
#[derive(Error, Debug)]
pub enum AddressCompleteError {
    /// The service answered with one of its own error codes.
    #[error("{error}")]
    Service {
        context: OperationContext,
        details: ErrorDetails,
        error: ServiceError,
    },

    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    /// Transport failure. The request URL (which carries the API key) is stripped.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for AddressCompleteError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.without_url())
    }
}

impl AddressCompleteError {
    /// Classify a provider error item reported for `context`.
    pub fn service(context: OperationContext, details: ErrorDetails) -> Self {
        let error = classify_with_description(details.code, context, details.description.as_deref());
        Self::Service {
            context,
            details,
            error,
        }
    }

    /// The classified provider error, if this is one.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The provider error code, if this is a classified provider error.
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Service { details, .. } => Some(details.code),
            _ => None,
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Service { error, .. } => match error.family() {
                ErrorFamily::Response => ErrorCategory::Response,
                ErrorFamily::Api => ErrorCategory::Api,
            },
            Self::Http { .. } => ErrorCategory::Transport,
            Self::Network(_) => ErrorCategory::Network,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Configuration(_) => ErrorCategory::Configuration,
        }
    }

    /// Whether the same request may succeed if sent again later.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http { status, .. } => *status == 429 || (500..=599).contains(status),
            Self::Service { error, .. } => {
                error.recovery_suggestion() == RecoverySuggestion::RetryWithBackoff
            }
            _ => false,
        }
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self {
            Self::Service { error, .. } => error.recovery_suggestion(),
            Self::Http { status: 401 | 403, .. } => RecoverySuggestion::CheckCredentials,
            _ if self.is_retryable() => RecoverySuggestion::RetryWithBackoff,
            Self::Configuration(_) => RecoverySuggestion::CheckConfiguration,
            _ => RecoverySuggestion::ContactSupport,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AddressCompleteError>;
