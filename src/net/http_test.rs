use super::*;

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("tok"), "Bearer tok");
}

#[test]
fn auth_header_absent_without_stored_token() {
    assert!(auth_header().is_none());
}

#[test]
fn auth_header_tracks_stored_token() {
    crate::util::session::store_token("tok");
    assert_eq!(auth_header().as_deref(), Some("Bearer tok"));
}

#[test]
fn error_detail_reads_backend_detail_field() {
    assert_eq!(
        error_detail(r#"{"detail":"Invalid credentials"}"#).as_deref(),
        Some("Invalid credentials")
    );
}

#[test]
fn error_detail_absent_for_non_json_bodies() {
    assert!(error_detail("<html>bad gateway</html>").is_none());
}

#[test]
fn error_detail_absent_when_field_missing() {
    assert!(error_detail(r#"{"message":"nope"}"#).is_none());
}
