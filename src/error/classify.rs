//! Classification of AddressComplete error codes.
//!
//! The service reports failures as integer codes whose meaning depends on the
//! operation that produced them. Three read-only tables map those codes to
//! typed errors:
//!
//! - the Find table (search suggestions), yielding [`ResponseError`]s
//! - the Retrieve table (detail lookups), yielding [`ResponseError`]s
//! - the General table (account and service problems), yielding [`ApiError`]s
//!
//! Lookup always walks Find, then Retrieve, then General, and falls back to
//! [`ApiError::Unknown`]. Codes 1001 and 1002 appear in both the Find and
//! Retrieve tables, so a Retrieve failure carrying either code resolves to
//! [`ResponseError::InvalidSearchTerm`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumDiscriminants, EnumString};
use thiserror::Error;

use super::unified::{ErrorFamily, RecoverySuggestion};

/// Message used for [`ResponseError::NotAvailable`] when the provider sends no description.
pub const NOT_AVAILABLE_MESSAGE: &str = "The data requested is not available";

/// Which operation produced an error code.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OperationContext {
    Find,
    Retrieve,
    #[default]
    General,
}

/// Operation-specific failures caused by the request or by data availability.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumDiscriminants)]
#[strum_discriminants(name(ResponseErrorKind), derive(Hash, Display, EnumString))]
pub enum ResponseError {
    #[error("SearchTerm is invalid")]
    InvalidSearchTerm,

    #[error("Country code is invalid")]
    CountryInvalid,

    #[error("LanguagePreference is invalid")]
    LanguagePreferenceInvalid,

    #[error("No response from the server")]
    NoResponse,

    #[error("ID is invalid")]
    IdInvalid,

    /// The requested data is not available for this account.
    #[error("{0}")]
    NotAvailable(String),
}

impl ResponseError {
    /// The data-unavailability variant, carrying the service's own message.
    pub fn not_available(message: impl Into<String>) -> Self {
        Self::NotAvailable(message.into())
    }

    /// Build the variant for `kind`. Only `NotAvailable` uses `description`.
    pub fn from_kind(kind: ResponseErrorKind, description: Option<&str>) -> Self {
        match kind {
            ResponseErrorKind::InvalidSearchTerm => Self::InvalidSearchTerm,
            ResponseErrorKind::CountryInvalid => Self::CountryInvalid,
            ResponseErrorKind::LanguagePreferenceInvalid => Self::LanguagePreferenceInvalid,
            ResponseErrorKind::NoResponse => Self::NoResponse,
            ResponseErrorKind::IdInvalid => Self::IdInvalid,
            ResponseErrorKind::NotAvailable => {
                Self::not_available(description.unwrap_or(NOT_AVAILABLE_MESSAGE))
            }
        }
    }

    /// The fieldless discriminant, as stored in the Find and Retrieve tables.
    pub fn kind(&self) -> ResponseErrorKind {
        ResponseErrorKind::from(self)
    }
}

/// Account, key, and service failures shared by every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ApiError {
    #[error("Unknown error")]
    Unknown,
    #[error("Unknown key")]
    UnknownKey,
    #[error("Account out of credit")]
    AccountOutOfCredit,
    #[error("Request not allowed from this IP")]
    IpNotAllowed,
    #[error("Request not allowed from this URL")]
    UrlNotAllowed,
    #[error("Web service not available on this key")]
    ServiceNotAvailableOnKey,
    #[error("Web service not available on your plan")]
    ServiceNotAvailableOnPlan,
    #[error("Key daily limit exceeded")]
    KeyDailyLimitExceeded,
    #[error("Your account has been suspended")]
    AccountSuspended,
    #[error("Surge protector triggered")]
    SurgeProtectorTriggered,
    #[error("No valid license available")]
    NoValidLicense,
    #[error("Management key required")]
    ManagementKeyRequired,
    #[error("Demo limit exceeded")]
    DemoLimitExceeded,
    #[error("Free service limit exceeded")]
    FreeServiceLimitExceeded,
    #[error("Wrong type of key")]
    WrongKeyType,
    #[error("Key expired")]
    KeyExpired,
    #[error("Individual User exceeded Lookup Limit")]
    UserLookupLimitExceeded,
    #[error("Missing or invalid parameters")]
    InvalidParameters,
    #[error("Invalid JSON object")]
    InvalidJson,
    #[error("Endpoint not available")]
    EndpointNotAvailable,
    #[error("Sandbox Mode is not available on this endpoint")]
    SandboxNotAvailable,
    #[error("HTTPS requests only")]
    HttpsRequired,
    #[error("Agreement Not Signed")]
    AgreementNotSigned,
}

impl ApiError {
    /// The provider code this variant is registered under in the General table.
    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => -1,
            Self::UnknownKey => 2,
            Self::AccountOutOfCredit => 3,
            Self::IpNotAllowed => 4,
            Self::UrlNotAllowed => 5,
            Self::ServiceNotAvailableOnKey => 6,
            Self::ServiceNotAvailableOnPlan => 7,
            Self::KeyDailyLimitExceeded => 8,
            Self::AccountSuspended => 9,
            Self::SurgeProtectorTriggered => 10,
            Self::NoValidLicense => 11,
            Self::ManagementKeyRequired => 12,
            Self::DemoLimitExceeded => 13,
            Self::FreeServiceLimitExceeded => 14,
            Self::WrongKeyType => 15,
            Self::KeyExpired => 16,
            Self::UserLookupLimitExceeded => 17,
            Self::InvalidParameters => 18,
            Self::InvalidJson => 19,
            Self::EndpointNotAvailable => 20,
            Self::SandboxNotAvailable => 21,
            Self::HttpsRequired => 22,
            Self::AgreementNotSigned => 23,
        }
    }

    /// General-table lookup without the Unknown fallback.
    pub fn from_code(code: i32) -> Option<Self> {
        GENERAL_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, error)| *error)
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(self) -> RecoverySuggestion {
        match self {
            Self::UnknownKey | Self::WrongKeyType | Self::KeyExpired | Self::ManagementKeyRequired => {
                RecoverySuggestion::CheckCredentials
            }
            Self::IpNotAllowed
            | Self::UrlNotAllowed
            | Self::ServiceNotAvailableOnKey
            | Self::ServiceNotAvailableOnPlan
            | Self::NoValidLicense
            | Self::InvalidParameters
            | Self::InvalidJson
            | Self::EndpointNotAvailable
            | Self::SandboxNotAvailable
            | Self::HttpsRequired
            | Self::AgreementNotSigned => RecoverySuggestion::CheckConfiguration,
            Self::SurgeProtectorTriggered => RecoverySuggestion::RetryWithBackoff,
            _ => RecoverySuggestion::ContactSupport,
        }
    }
}

/// A classified provider error: exactly one family, never both.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ServiceError {
    /// Which of the two disjoint families this error belongs to.
    pub fn family(&self) -> ErrorFamily {
        match self {
            Self::Response(_) => ErrorFamily::Response,
            Self::Api(_) => ErrorFamily::Api,
        }
    }

    /// True for operation-specific, caller-correctable failures.
    pub fn is_response_error(&self) -> bool {
        matches!(self, Self::Response(_))
    }

    /// True for account, key, and service failures.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// The inner [`ResponseError`], if this is one.
    pub fn as_response_error(&self) -> Option<&ResponseError> {
        match self {
            Self::Response(e) => Some(e),
            Self::Api(_) => None,
        }
    }

    /// The inner [`ApiError`], if this is one.
    pub fn as_api_error(&self) -> Option<ApiError> {
        match self {
            Self::Api(e) => Some(*e),
            Self::Response(_) => None,
        }
    }

    /// Suggest recovery actions. `NoResponse` is worth retrying; other response
    /// errors need a corrected request.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self {
            Self::Response(ResponseError::NoResponse) => RecoverySuggestion::RetryWithBackoff,
            Self::Response(_) => RecoverySuggestion::CorrectRequest,
            Self::Api(e) => e.recovery_suggestion(),
        }
    }
}

const FIND_TABLE: &[(i32, ResponseErrorKind)] = &[
    (1001, ResponseErrorKind::InvalidSearchTerm),
    (1002, ResponseErrorKind::InvalidSearchTerm),
    (1003, ResponseErrorKind::CountryInvalid),
    (1004, ResponseErrorKind::LanguagePreferenceInvalid),
    (1005, ResponseErrorKind::NoResponse),
];

const RETRIEVE_TABLE: &[(i32, ResponseErrorKind)] = &[
    (1001, ResponseErrorKind::IdInvalid),
    (1002, ResponseErrorKind::NotAvailable),
];

const GENERAL_TABLE: &[(i32, ApiError)] = &[
    (-1, ApiError::Unknown),
    (2, ApiError::UnknownKey),
    (3, ApiError::AccountOutOfCredit),
    (4, ApiError::IpNotAllowed),
    (5, ApiError::UrlNotAllowed),
    (6, ApiError::ServiceNotAvailableOnKey),
    (7, ApiError::ServiceNotAvailableOnPlan),
    (8, ApiError::KeyDailyLimitExceeded),
    (9, ApiError::AccountSuspended),
    (10, ApiError::SurgeProtectorTriggered),
    (11, ApiError::NoValidLicense),
    (12, ApiError::ManagementKeyRequired),
    (13, ApiError::DemoLimitExceeded),
    (14, ApiError::FreeServiceLimitExceeded),
    (15, ApiError::WrongKeyType),
    (16, ApiError::KeyExpired),
    (17, ApiError::UserLookupLimitExceeded),
    (18, ApiError::InvalidParameters),
    (19, ApiError::InvalidJson),
    (20, ApiError::EndpointNotAvailable),
    (21, ApiError::SandboxNotAvailable),
    (22, ApiError::HttpsRequired),
    (23, ApiError::AgreementNotSigned),
];

static ERROR_MAPPING: ErrorMapping = ErrorMapping {
    find: FIND_TABLE,
    retrieve: RETRIEVE_TABLE,
    general: GENERAL_TABLE,
};

/// The process-wide, read-only code tables.
#[derive(Debug)]
pub struct ErrorMapping {
    find: &'static [(i32, ResponseErrorKind)],
    retrieve: &'static [(i32, ResponseErrorKind)],
    general: &'static [(i32, ApiError)],
}

impl ErrorMapping {
    /// The process-wide mapping.
    pub fn global() -> &'static ErrorMapping {
        &ERROR_MAPPING
    }

    /// Codes reported by the Find operation.
    pub fn find_table(&self) -> &'static [(i32, ResponseErrorKind)] {
        self.find
    }

    /// Codes reported by the Retrieve operation.
    pub fn retrieve_table(&self) -> &'static [(i32, ResponseErrorKind)] {
        self.retrieve
    }

    /// Account and service codes shared by every operation.
    pub fn general_table(&self) -> &'static [(i32, ApiError)] {
        self.general
    }

    /// Walk Find, Retrieve, then General. `None` when no table knows `code`.
    pub fn lookup(&self, code: i32, description: Option<&str>) -> Option<ServiceError> {
        let response_kind = self
            .find
            .iter()
            .chain(self.retrieve.iter())
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, kind)| *kind);

        if let Some(kind) = response_kind {
            return Some(ResponseError::from_kind(kind, description).into());
        }

        self.general
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, error)| ServiceError::Api(*error))
    }
}

/// Classify a provider error code. Total over `i32`: unknown codes become
/// [`ApiError::Unknown`].
///
/// `context` is recorded for diagnostics only. The table order is fixed, so
/// Retrieve-context codes 1001 and 1002 resolve through the Find table.
pub fn classify(code: i32, context: OperationContext) -> ServiceError {
    classify_with_description(code, context, None)
}

/// Like [`classify`], with a provider description used as the message of
/// [`ResponseError::NotAvailable`].
pub fn classify_with_description(
    code: i32,
    context: OperationContext,
    description: Option<&str>,
) -> ServiceError {
    let error = ErrorMapping::global()
        .lookup(code, description)
        .unwrap_or(ServiceError::Api(ApiError::Unknown));

    tracing::trace!(code, %context, family = ?error.family(), error = %error, "classified provider error code");

    error
}
