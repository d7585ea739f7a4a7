use super::*;

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn auth_response_deserializes_login_payload() {
    let session: AuthResponse =
        serde_json::from_str(r#"{"id":"1","access_token":"tok","username":"a","email":"a@b.com"}"#)
            .unwrap();
    assert_eq!(session.id, "1");
    assert_eq!(session.access_token, "tok");
    assert_eq!(session.username, "a");
    assert_eq!(session.email, "a@b.com");
}

#[test]
fn auth_login_serializes_backend_field_names() {
    let credentials = AuthLogin {
        username_or_email: "a@b.com".to_owned(),
        password: "x".to_owned(),
    };
    assert_eq!(
        serde_json::to_string(&credentials).unwrap(),
        r#"{"username_or_email":"a@b.com","password":"x"}"#
    );
}

// =============================================================
// Profile payloads
// =============================================================

#[test]
fn profile_detail_null_images_read_as_none() {
    let detail: ProfileDetail = serde_json::from_str(
        r#"{
            "id":"p1","name":"Alice","cover_image":null,"image_1":null,
            "image_2":null,"image_3":null,"description":null,
            "whatsapp_link":null,"facebook_link":null,
            "created_at":"2024-01-01T00:00:00Z","updated_at":null,"user_id":"1"
        }"#,
    )
    .unwrap();
    assert!(detail.cover_image.is_none());
    assert!(detail.image_1.is_none());
    assert!(detail.updated_at.is_none());
}

#[test]
fn profile_detail_missing_optional_fields_read_as_none() {
    let detail: ProfileDetail = serde_json::from_str(
        r#"{"id":"p1","name":"Alice","created_at":"2024-01-01T00:00:00Z","user_id":"1"}"#,
    )
    .unwrap();
    assert!(detail.cover_image.is_none());
    assert!(detail.description.is_none());
    assert!(detail.whatsapp_link.is_none());
}

#[test]
fn profile_update_serializes_present_fields_only() {
    let update = ProfileUpdate {
        name: Some("X".to_owned()),
        ..ProfileUpdate::default()
    };
    assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"name":"X"}"#);
}

#[test]
fn empty_profile_update_serializes_to_empty_object() {
    assert_eq!(serde_json::to_string(&ProfileUpdate::default()).unwrap(), "{}");
}

// =============================================================
// User payloads
// =============================================================

#[test]
fn user_update_serializes_present_fields_only() {
    let update = UserUpdate {
        email: Some("new@b.com".to_owned()),
        ..UserUpdate::default()
    };
    assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"email":"new@b.com"}"#);
}

#[test]
fn user_response_round_trips() {
    let user = UserResponse {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        email: "a@b.com".to_owned(),
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: None,
    };
    let raw = serde_json::to_string(&user).unwrap();
    assert_eq!(serde_json::from_str::<UserResponse>(&raw).unwrap(), user);
}
