use super::*;
use crate::net::http;

fn sample_session() -> AuthResponse {
    AuthResponse {
        id: "1".to_owned(),
        access_token: "tok".to_owned(),
        username: "a".to_owned(),
        email: "a@b.com".to_owned(),
    }
}

// =============================================================
// set_user_data
// =============================================================

#[test]
fn set_user_data_marks_authenticated() {
    let mut state = AuthState::default();
    state.set_user_data(sample_session());
    assert!(state.is_user_authenticated());
    assert_eq!(state.user_data().map(|u| u.username.as_str()), Some("a"));
}

#[test]
fn set_user_data_stores_token_and_record() {
    let mut state = AuthState::default();
    state.set_user_data(sample_session());
    assert_eq!(session::stored_token().as_deref(), Some("tok"));
    assert_eq!(session::stored_user_data(), Some(sample_session()));
}

#[test]
fn set_user_data_updates_outgoing_auth_header() {
    let mut state = AuthState::default();
    state.set_user_data(sample_session());
    assert_eq!(http::auth_header().as_deref(), Some("Bearer tok"));
}

// =============================================================
// clear_user_data / logout
// =============================================================

#[test]
fn clear_user_data_resets_state_and_storage() {
    let mut state = AuthState::default();
    state.set_user_data(sample_session());
    state.clear_user_data();
    assert!(!state.is_user_authenticated());
    assert!(state.user_data().is_none());
    assert!(session::stored_token().is_none());
    assert!(session::stored_user_data().is_none());
    assert!(http::auth_header().is_none());
}

#[test]
fn logout_equals_clear_user_data() {
    let mut state = AuthState::default();
    state.set_user_data(sample_session());
    state.logout();
    assert_eq!(state, AuthState::default());
}

// =============================================================
// initialize_auth
// =============================================================

#[test]
fn initialize_auth_restores_stored_session() {
    session::store_token("tok");
    session::store_user_data(&sample_session());
    let mut state = AuthState::default();
    state.initialize_auth();
    assert!(state.is_user_authenticated());
    assert_eq!(state.user_data(), Some(&sample_session()));
    assert_eq!(http::auth_header().as_deref(), Some("Bearer tok"));
}

#[test]
fn initialize_auth_normalizes_partial_storage() {
    session::store_token("tok");
    let mut state = AuthState::default();
    state.initialize_auth();
    assert!(!state.is_user_authenticated());
    assert!(session::stored_token().is_none());
}

#[test]
fn initialize_auth_with_empty_storage_stays_logged_out() {
    let mut state = AuthState::default();
    state.initialize_auth();
    assert_eq!(state, AuthState::default());
}

#[test]
fn initialize_auth_is_idempotent() {
    session::store_token("tok");
    session::store_user_data(&sample_session());
    let mut once = AuthState::default();
    once.initialize_auth();
    let mut twice = AuthState::default();
    twice.initialize_auth();
    twice.initialize_auth();
    assert_eq!(once, twice);
    assert_eq!(session::stored_token().as_deref(), Some("tok"));
}

// =============================================================
// login (native builds cannot reach the backend, so only the
// failure path is exercised here)
// =============================================================

#[test]
fn failed_login_clears_partial_state() {
    let mut state = AuthState::default();
    state.set_user_data(sample_session());

    let credentials = AuthLogin {
        username_or_email: "a@b.com".to_owned(),
        password: "x".to_owned(),
    };
    let result = futures::executor::block_on(state.login(&credentials));

    assert!(matches!(result, Err(ApiError::Network(_))));
    assert!(!state.is_user_authenticated());
    assert!(session::stored_token().is_none());
    assert!(session::stored_user_data().is_none());
}
