use super::*;

#[test]
fn update_from_fields_treats_empty_drafts_as_absent() {
    let update = update_from_fields("X", "", "  ", "");
    assert_eq!(update.name.as_deref(), Some("X"));
    assert!(update.description.is_none());
    assert!(update.whatsapp_link.is_none());
    assert!(update.facebook_link.is_none());
}

#[test]
fn update_from_fields_trims_drafts() {
    let update = update_from_fields(" X ", " hi ", "", "");
    assert_eq!(update.name.as_deref(), Some("X"));
    assert_eq!(update.description.as_deref(), Some("hi"));
}

#[test]
fn update_from_fields_never_touches_image_slots() {
    let update = update_from_fields("X", "d", "w", "f");
    assert!(update.cover_image.is_none());
    assert!(update.image_1.is_none());
    assert!(update.image_2.is_none());
    assert!(update.image_3.is_none());
}

#[test]
fn validate_password_input_requires_both_fields() {
    assert!(validate_password_input("", "new").is_err());
    assert!(validate_password_input("old", "  ").is_err());
    assert_eq!(
        validate_password_input("old", "new"),
        Ok(ChangePassword {
            old_password: "old".to_owned(),
            new_password: "new".to_owned(),
        })
    );
}
