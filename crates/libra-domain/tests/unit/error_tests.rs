//! Unit tests for domain error types

use libra_domain::{AuthRejection, CredentialError, Error, TokenError};

#[test]
fn test_configuration_error() {
    let error = Error::configuration("Missing AES key");
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Missing AES key");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert!(error.is_fatal());
}

#[test]
fn test_internal_error_is_not_fatal() {
    let error = Error::internal("Unexpected state");
    match &error {
        Error::Internal { message } => assert_eq!(message, "Unexpected state"),
        _ => panic!("Expected Internal error"),
    }
    assert!(!error.is_fatal());
}

#[test]
fn test_credential_error_display_hides_detail() {
    let error: Error = CredentialError::InvalidKeyEnvelope.into();
    let display = error.to_string();
    assert!(display.contains("invalid key envelope"));
    assert!(!display.to_lowercase().contains("padding"));
}

#[test]
fn test_token_error_maps_to_rejection() {
    assert_eq!(
        AuthRejection::from(TokenError::Expired),
        AuthRejection::TokenExpired
    );
    assert_eq!(
        AuthRejection::from(TokenError::Tampered),
        AuthRejection::TokenTampered
    );
    assert_eq!(
        AuthRejection::from(TokenError::Malformed),
        AuthRejection::TokenMalformed
    );
}

#[test]
fn test_rejection_reason_codes_are_distinct() {
    let rejections = [
        AuthRejection::TokenExpired,
        AuthRejection::TokenTampered,
        AuthRejection::TokenMalformed,
        AuthRejection::AccessDenied,
        AuthRejection::CatalogNotReady,
    ];
    let codes: std::collections::HashSet<_> =
        rejections.iter().map(|r| r.reason_code()).collect();
    assert_eq!(codes.len(), rejections.len());
}

#[test]
fn test_rejection_status_codes() {
    assert_eq!(AuthRejection::TokenExpired.status_code(), 403);
    assert_eq!(AuthRejection::TokenTampered.status_code(), 403);
    assert_eq!(AuthRejection::TokenMalformed.status_code(), 403);
    assert_eq!(AuthRejection::AccessDenied.status_code(), 403);
    assert_eq!(AuthRejection::CatalogNotReady.status_code(), 503);
}
