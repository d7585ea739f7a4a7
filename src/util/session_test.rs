use super::*;

fn sample_user() -> AuthResponse {
    AuthResponse {
        id: "1".to_owned(),
        access_token: "tok".to_owned(),
        username: "a".to_owned(),
        email: "a@b.com".to_owned(),
    }
}

#[test]
fn token_starts_absent() {
    assert!(stored_token().is_none());
}

#[test]
fn token_round_trips() {
    store_token("tok");
    assert_eq!(stored_token().as_deref(), Some("tok"));
}

#[test]
fn store_token_overwrites_previous_value() {
    store_token("old");
    store_token("new");
    assert_eq!(stored_token().as_deref(), Some("new"));
}

#[test]
fn remove_token_clears_value() {
    store_token("tok");
    remove_token();
    assert!(stored_token().is_none());
}

#[test]
fn user_record_round_trips_deep_equal() {
    let user = sample_user();
    store_user_data(&user);
    assert_eq!(stored_user_data(), Some(user));
}

#[test]
fn malformed_user_record_reads_as_absent() {
    write(USER_DATA_KEY, "{not json");
    assert!(stored_user_data().is_none());
}

#[test]
fn remove_user_data_clears_record() {
    store_user_data(&sample_user());
    remove_user_data();
    assert!(stored_user_data().is_none());
}

#[test]
fn token_and_user_record_use_distinct_keys() {
    store_token("tok");
    assert!(stored_user_data().is_none());
    store_user_data(&sample_user());
    remove_user_data();
    assert_eq!(stored_token().as_deref(), Some("tok"));
}
