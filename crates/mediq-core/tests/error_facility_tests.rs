use mediq_core::errors::{
    ErrorInfo, ErrorSource, MediqError, MALFORMED_RESPONSE_MESSAGE, NETWORK_FAILURE_MESSAGE,
};

#[test]
fn test_status_with_upstream_message_keeps_it() {
    let err = MediqError::Status {
        operation: "symptom-suggestion".to_string(),
        status: 429,
        upstream: Some("Rate limit exceeded, retry in a minute".to_string()),
    };

    let info: ErrorInfo = err.into();

    assert_eq!(info.source(), ErrorSource::Remote);
    assert_eq!(info.code(), "ERR_REMOTE");
    assert_eq!(info.status(), Some(429));
    assert_eq!(info.message(), "Rate limit exceeded, retry in a minute");
}

#[test]
fn test_status_without_upstream_uses_generic_message() {
    let err = MediqError::Status {
        operation: "medicine-info".to_string(),
        status: 500,
        upstream: Some("   ".to_string()),
    };

    let info: ErrorInfo = err.into();

    assert_eq!(
        info.message(),
        "The AI service could not complete the request (HTTP 500)."
    );
    assert_eq!(info.operation(), Some("medicine-info"));
}

#[test]
fn test_http_error_is_network_with_generic_message() {
    let err = MediqError::Http {
        operation: "medicine-info".to_string(),
        message: "error trying to connect: tcp connect error".to_string(),
    };

    let info: ErrorInfo = err.into();

    assert_eq!(info.source(), ErrorSource::Network);
    assert_eq!(info.message(), NETWORK_FAILURE_MESSAGE);
    assert!(!info.message().contains("tcp"));
}

#[test]
fn test_malformed_and_decode_are_remote() {
    for err in [
        MediqError::MalformedResponse {
            operation: "medicine-info".to_string(),
            reason: "missing data".to_string(),
        },
        MediqError::Decode {
            operation: "medicine-info".to_string(),
            reason: "missing field `disclaimer`".to_string(),
        },
    ] {
        let info: ErrorInfo = err.into();
        assert_eq!(info.source(), ErrorSource::Remote);
        assert_eq!(info.message(), MALFORMED_RESPONSE_MESSAGE);
    }
}

#[test]
fn test_empty_input_is_validation() {
    let info: ErrorInfo = MediqError::EmptyInput {
        operation: "symptom-suggestion".to_string(),
    }
    .into();

    assert_eq!(info.source(), ErrorSource::Validation);
    assert_eq!(info.code(), "ERR_VALIDATION");
}

#[test]
fn test_error_source_codes_are_distinct() {
    let codes = [
        ErrorSource::Network.code(),
        ErrorSource::Validation.code(),
        ErrorSource::Remote.code(),
    ];
    assert_ne!(codes[0], codes[1]);
    assert_ne!(codes[1], codes[2]);
    assert_ne!(codes[0], codes[2]);
}

#[test]
fn test_error_info_round_trips_through_json() {
    let info = ErrorInfo::new(ErrorSource::Remote)
        .with_operation("medicine-info")
        .with_status(502)
        .with_message("bad gateway");

    let json = serde_json::to_string(&info).unwrap();
    let back: ErrorInfo = serde_json::from_str(&json).unwrap();

    assert_eq!(back, info);
}
