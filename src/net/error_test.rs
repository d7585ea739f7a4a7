use super::*;

#[test]
fn status_error_displays_backend_detail() {
    let err = ApiError::Status {
        status: 401,
        detail: Some("Invalid credentials".to_owned()),
    };
    assert_eq!(err.to_string(), "request failed with status 401: Invalid credentials");
}

#[test]
fn status_error_without_detail_says_so() {
    let err = ApiError::Status { status: 500, detail: None };
    assert_eq!(err.to_string(), "request failed with status 500: no detail");
}

#[test]
fn network_error_displays_cause() {
    let err = ApiError::Network("timed out".to_owned());
    assert_eq!(err.to_string(), "network error: timed out");
}

#[test]
fn serialization_error_displays_cause() {
    let err = ApiError::Serialization("missing field `id`".to_owned());
    assert_eq!(err.to_string(), "malformed response: missing field `id`");
}
