use super::*;

#[test]
fn login_endpoint_matches_backend_path() {
    assert_eq!(LOGIN_ENDPOINT, "/api/auth/login");
}

#[test]
fn native_login_fails_with_network_error() {
    let credentials = AuthLogin {
        username_or_email: "a@b.com".to_owned(),
        password: "x".to_owned(),
    };
    let result = futures::executor::block_on(login(&credentials));
    assert!(matches!(result, Err(ApiError::Network(_))));
}
