//! Tests for error classification and the error taxonomy.

use addresscomplete::error::*;
use pretty_assertions::assert_eq;

fn response(error: ResponseError) -> ServiceError {
    ServiceError::Response(error)
}

fn api(error: ApiError) -> ServiceError {
    ServiceError::Api(error)
}

const GENERAL_CASES: [(i32, ApiError, &str); 23] = [
    (-1, ApiError::Unknown, "Unknown error"),
    (2, ApiError::UnknownKey, "Unknown key"),
    (3, ApiError::AccountOutOfCredit, "Account out of credit"),
    (4, ApiError::IpNotAllowed, "Request not allowed from this IP"),
    (5, ApiError::UrlNotAllowed, "Request not allowed from this URL"),
    (6, ApiError::ServiceNotAvailableOnKey, "Web service not available on this key"),
    (7, ApiError::ServiceNotAvailableOnPlan, "Web service not available on your plan"),
    (8, ApiError::KeyDailyLimitExceeded, "Key daily limit exceeded"),
    (9, ApiError::AccountSuspended, "Your account has been suspended"),
    (10, ApiError::SurgeProtectorTriggered, "Surge protector triggered"),
    (11, ApiError::NoValidLicense, "No valid license available"),
    (12, ApiError::ManagementKeyRequired, "Management key required"),
    (13, ApiError::DemoLimitExceeded, "Demo limit exceeded"),
    (14, ApiError::FreeServiceLimitExceeded, "Free service limit exceeded"),
    (15, ApiError::WrongKeyType, "Wrong type of key"),
    (16, ApiError::KeyExpired, "Key expired"),
    (17, ApiError::UserLookupLimitExceeded, "Individual User exceeded Lookup Limit"),
    (18, ApiError::InvalidParameters, "Missing or invalid parameters"),
    (19, ApiError::InvalidJson, "Invalid JSON object"),
    (20, ApiError::EndpointNotAvailable, "Endpoint not available"),
    (21, ApiError::SandboxNotAvailable, "Sandbox Mode is not available on this endpoint"),
    (22, ApiError::HttpsRequired, "HTTPS requests only"),
    (23, ApiError::AgreementNotSigned, "Agreement Not Signed"),
];

#[test]
fn find_codes_classify_with_find_context() {
    let cases = [
        (1001, ResponseError::InvalidSearchTerm),
        (1002, ResponseError::InvalidSearchTerm),
        (1003, ResponseError::CountryInvalid),
        (1004, ResponseError::LanguagePreferenceInvalid),
        (1005, ResponseError::NoResponse),
    ];
    for (code, expected) in cases {
        assert_eq!(classify(code, OperationContext::Find), response(expected), "code {code}");
    }
}

#[test]
fn find_codes_classify_without_context() {
    assert_eq!(
        classify(1003, OperationContext::default()),
        response(ResponseError::CountryInvalid)
    );
    assert_eq!(
        classify(1005, OperationContext::General),
        response(ResponseError::NoResponse)
    );
}

// The Find table is always consulted first, so Retrieve failures carrying
// 1001 or 1002 resolve to the Find meaning. Locked in as current behaviour.
#[test]
fn retrieve_context_codes_resolve_through_find_table() {
    assert_eq!(
        classify(1001, OperationContext::Retrieve),
        response(ResponseError::InvalidSearchTerm)
    );
    assert_eq!(
        classify(1002, OperationContext::Retrieve),
        response(ResponseError::InvalidSearchTerm)
    );
    assert_eq!(
        classify_with_description(1002, OperationContext::Retrieve, Some("Not available")),
        response(ResponseError::InvalidSearchTerm)
    );
}

#[test]
fn retrieve_table_keeps_its_own_meanings() {
    let table = ErrorMapping::global().retrieve_table();
    assert_eq!(
        table,
        &[
            (1001, ResponseErrorKind::IdInvalid),
            (1002, ResponseErrorKind::NotAvailable)
        ]
    );
}

#[test]
fn general_codes_classify_to_api_errors() {
    for (code, expected, _) in GENERAL_CASES {
        assert_eq!(classify(code, OperationContext::General), api(expected), "code {code}");
        assert_eq!(classify(code, OperationContext::Find), api(expected), "code {code}");
        assert_eq!(classify(code, OperationContext::Retrieve), api(expected), "code {code}");
    }
}

#[test]
fn unlisted_codes_classify_as_unknown() {
    for code in [0, 1, 24, 1000, 1006, 9999, -2, -1001, i32::MIN, i32::MAX] {
        assert_eq!(
            classify(code, OperationContext::General),
            api(ApiError::Unknown),
            "code {code}"
        );
    }
}

#[test]
fn api_errors_display_fixed_messages() {
    for (_, error, message) in GENERAL_CASES {
        assert_eq!(error.to_string(), message);
        assert_eq!(api(error).to_string(), message);
    }
}

#[test]
fn response_errors_display_fixed_messages() {
    let cases = [
        (ResponseError::InvalidSearchTerm, "SearchTerm is invalid"),
        (ResponseError::CountryInvalid, "Country code is invalid"),
        (ResponseError::LanguagePreferenceInvalid, "LanguagePreference is invalid"),
        (ResponseError::NoResponse, "No response from the server"),
        (ResponseError::IdInvalid, "ID is invalid"),
        (ResponseError::not_available("Custom message"), "Custom message"),
    ];
    for (error, message) in cases {
        assert_eq!(error.to_string(), message);
        assert_eq!(response(error).to_string(), message);
    }
}

#[test]
fn families_are_disjoint() {
    let response_errors = [
        ResponseError::InvalidSearchTerm,
        ResponseError::CountryInvalid,
        ResponseError::LanguagePreferenceInvalid,
        ResponseError::NoResponse,
        ResponseError::IdInvalid,
        ResponseError::not_available("gone"),
    ];
    for error in response_errors {
        let error = response(error);
        assert!(error.is_response_error());
        assert!(!error.is_api_error());
        assert_eq!(error.family(), ErrorFamily::Response);
        assert!(error.as_api_error().is_none());
    }

    for (_, error, _) in GENERAL_CASES {
        let error = api(error);
        assert!(error.is_api_error());
        assert!(!error.is_response_error());
        assert_eq!(error.family(), ErrorFamily::Api);
        assert!(error.as_response_error().is_none());
    }
}

#[test]
fn every_table_entry_lands_in_its_family() {
    let mapping = ErrorMapping::global();
    for (code, _) in mapping.find_table().iter().chain(mapping.retrieve_table()) {
        assert!(mapping.lookup(*code, None).unwrap().is_response_error());
    }
    for (code, _) in mapping.general_table() {
        assert!(mapping.lookup(*code, None).unwrap().is_api_error());
    }
}

#[test]
fn service_error_helpers_classify_and_keep_details() {
    let mut details = ErrorDetails::new(10);
    details.description = Some("Surge protector triggered".to_string());

    let err = AddressCompleteError::service(OperationContext::Find, details.clone());
    assert_eq!(err.code(), Some(10));
    assert_eq!(err.service_error(), Some(&api(ApiError::SurgeProtectorTriggered)));
    assert_eq!(err.category(), ErrorCategory::Api);
    assert!(err.is_retryable());
    assert_eq!(err.recovery_suggestion(), RecoverySuggestion::RetryWithBackoff);
    assert_eq!(err.to_string(), "Surge protector triggered");
    assert!(matches!(
        err,
        AddressCompleteError::Service { context: OperationContext::Find, details: d, .. } if d == details
    ));
}

#[test]
fn error_helper_mappings_are_stable_for_major_variants() {
    struct Case {
        error: AddressCompleteError,
        expected_category: ErrorCategory,
        expected_retryable: bool,
        expected_recovery: RecoverySuggestion,
    }

    let network_error = reqwest::Client::new()
        .get("http://[::1")
        .build()
        .unwrap_err();
    let serde_error = serde_json::from_str::<serde_json::Value>("{not-json}").unwrap_err();

    let cases = vec![
        Case {
            error: AddressCompleteError::service(OperationContext::Find, ErrorDetails::new(1003)),
            expected_category: ErrorCategory::Response,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::CorrectRequest,
        },
        Case {
            error: AddressCompleteError::service(OperationContext::Find, ErrorDetails::new(1005)),
            expected_category: ErrorCategory::Response,
            expected_retryable: true,
            expected_recovery: RecoverySuggestion::RetryWithBackoff,
        },
        Case {
            error: AddressCompleteError::service(OperationContext::General, ErrorDetails::new(2)),
            expected_category: ErrorCategory::Api,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::CheckCredentials,
        },
        Case {
            error: AddressCompleteError::service(OperationContext::General, ErrorDetails::new(4)),
            expected_category: ErrorCategory::Api,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::CheckConfiguration,
        },
        Case {
            error: AddressCompleteError::service(OperationContext::General, ErrorDetails::new(3)),
            expected_category: ErrorCategory::Api,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::ContactSupport,
        },
        Case {
            error: AddressCompleteError::Http {
                status: 503,
                body: "unavailable".to_string(),
            },
            expected_category: ErrorCategory::Transport,
            expected_retryable: true,
            expected_recovery: RecoverySuggestion::RetryWithBackoff,
        },
        Case {
            error: AddressCompleteError::Http {
                status: 403,
                body: "forbidden".to_string(),
            },
            expected_category: ErrorCategory::Transport,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::CheckCredentials,
        },
        Case {
            error: AddressCompleteError::Http {
                status: 404,
                body: "missing".to_string(),
            },
            expected_category: ErrorCategory::Transport,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::ContactSupport,
        },
        Case {
            error: AddressCompleteError::Network(network_error),
            expected_category: ErrorCategory::Network,
            expected_retryable: true,
            expected_recovery: RecoverySuggestion::RetryWithBackoff,
        },
        Case {
            error: AddressCompleteError::Serialization(serde_error),
            expected_category: ErrorCategory::Serialization,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::ContactSupport,
        },
        Case {
            error: AddressCompleteError::Configuration("missing key".to_string()),
            expected_category: ErrorCategory::Configuration,
            expected_retryable: false,
            expected_recovery: RecoverySuggestion::CheckConfiguration,
        },
    ];

    for case in cases {
        assert_eq!(case.error.category(), case.expected_category, "{}", case.error);
        assert_eq!(case.error.is_retryable(), case.expected_retryable, "{}", case.error);
        assert_eq!(case.error.recovery_suggestion(), case.expected_recovery, "{}", case.error);
    }
}
