//! Wire DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror backend payloads so serde
//! round-trips stay lossless. Optional wire fields stay `Option` here;
//! placeholder defaults for image slots are applied at the service
//! layer, never in the schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login request body for `POST /api/auth/login`. Transient; never
/// persisted anywhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthLogin {
    /// Username or email address; the backend accepts either.
    pub username_or_email: String,
    pub password: String,
}

/// The session returned by a successful login: the account identity
/// plus the bearer token proving it on subsequent requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Unique user identifier.
    pub id: String,
    /// Opaque bearer token.
    pub access_token: String,
    pub username: String,
    pub email: String,
}

/// A profile summary as returned by `GET /api/profiles`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    /// Cover image URL; `None` until the owner uploads one.
    pub cover_image: Option<String>,
}

/// Full profile record with the four image slots, free-text
/// description, and social links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetail {
    pub id: String,
    pub name: String,
    pub cover_image: Option<String>,
    pub image_1: Option<String>,
    pub image_2: Option<String>,
    pub image_3: Option<String>,
    pub description: Option<String>,
    pub whatsapp_link: Option<String>,
    pub facebook_link: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last-update timestamp (ISO 8601); absent until the first edit.
    pub updated_at: Option<String>,
    /// Owning user account.
    pub user_id: String,
}

/// Partial patch for profile updates. Absent fields are omitted from
/// the payload and left unchanged server-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_link: Option<String>,
}

/// Registration payload for `POST /api/users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A full account record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last-update timestamp (ISO 8601); absent until the first edit.
    pub updated_at: Option<String>,
}

/// The slimmer account shape returned by `GET /api/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Partial patch for account updates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Payload for `PUT /api/users/change_password/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
}
