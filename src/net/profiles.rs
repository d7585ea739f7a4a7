//! Profile service: list, read, and update profiles.
//!
//! SYSTEM CONTEXT
//! ==============
//! All profile reads funnel through placeholder normalization so image
//! slots handed to the UI are never empty. The own-profile update is a
//! multipart partial patch: present fields only, image files under
//! fixed slot names.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "profiles_test.rs"]
mod profiles_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{Profile, ProfileDetail, ProfileUpdate};

/// Placeholder shown for any image slot the owner has not filled.
pub const DEFAULT_IMAGE: &str = "/assets/images/img1.jpg";

/// Multipart field names for the four image slots.
pub const IMAGE_FIELDS: [&str; 4] = ["cover_image", "image_1", "image_2", "image_3"];

pub(crate) const PROFILES_ENDPOINT: &str = "/api/profiles";
pub(crate) const MY_PROFILE_ENDPOINT: &str = "/api/profiles/me";

pub(crate) fn profile_endpoint(id: &str) -> String {
    format!("/api/profiles/{id}")
}

fn or_default_image(slot: Option<String>) -> Option<String> {
    match slot {
        Some(url) if !url.is_empty() => Some(url),
        _ => Some(DEFAULT_IMAGE.to_owned()),
    }
}

/// Replace a missing or empty cover image with the placeholder.
pub(crate) fn with_default_cover(mut profile: Profile) -> Profile {
    profile.cover_image = or_default_image(profile.cover_image.take());
    profile
}

/// Replace every missing or empty image slot with the placeholder.
pub(crate) fn with_default_images(mut detail: ProfileDetail) -> ProfileDetail {
    detail.cover_image = or_default_image(detail.cover_image.take());
    detail.image_1 = or_default_image(detail.image_1.take());
    detail.image_2 = or_default_image(detail.image_2.take());
    detail.image_3 = or_default_image(detail.image_3.take());
    detail
}

/// Text fields included in the multipart own-profile update: present,
/// non-empty fields only. Absent fields are omitted, not sent as empty.
pub(crate) fn text_fields(data: &ProfileUpdate) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    let mut push = |name: &'static str, value: &Option<String>| {
        if let Some(value) = value
            && !value.is_empty()
        {
            fields.push((name, value.clone()));
        }
    };
    push("name", &data.name);
    push("description", &data.description);
    push("whatsapp_link", &data.whatsapp_link);
    push("facebook_link", &data.facebook_link);
    fields
}

/// Fetch every profile via `GET /api/profiles`, with placeholder cover
/// images applied.
///
/// # Errors
///
/// Propagates failures like every other method; list callers decide how
/// to degrade.
pub async fn get_all_profiles() -> Result<Vec<Profile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::request(gloo_net::http::Request::get(PROFILES_ENDPOINT))
            .send()
            .await
            .map_err(http::transport_error)?;
        let profiles: Vec<Profile> = http::decode(resp).await?;
        Ok(profiles.into_iter().map(with_default_cover).collect())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        http::unavailable()
    }
}

/// Fetch one profile via `GET /api/profiles/:id`.
///
/// # Errors
///
/// Propagates the transport, status, or decode failure untouched.
pub async fn get_profile_by_id(id: &str) -> Result<ProfileDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::request(gloo_net::http::Request::get(&profile_endpoint(id)))
            .send()
            .await
            .map_err(http::transport_error)?;
        let detail: ProfileDetail = http::decode(resp).await?;
        Ok(with_default_images(detail))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        http::unavailable()
    }
}

/// Patch a profile via JSON `PUT /api/profiles/:id`.
///
/// # Errors
///
/// Propagates the transport, status, or decode failure untouched.
pub async fn update_profile(id: &str, data: &ProfileUpdate) -> Result<ProfileDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::request(gloo_net::http::Request::put(&profile_endpoint(id)))
            .json(data)
            .map_err(http::transport_error)?
            .send()
            .await
            .map_err(http::transport_error)?;
        let detail: ProfileDetail = http::decode(resp).await?;
        Ok(with_default_images(detail))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, data);
        http::unavailable()
    }
}

/// Fetch the caller's own profile via `GET /api/profiles/me`.
///
/// # Errors
///
/// Propagates the transport, status, or decode failure untouched.
pub async fn get_my_profile() -> Result<ProfileDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::request(gloo_net::http::Request::get(MY_PROFILE_ENDPOINT))
            .send()
            .await
            .map_err(http::transport_error)?;
        let detail: ProfileDetail = http::decode(resp).await?;
        Ok(with_default_images(detail))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        http::unavailable()
    }
}

/// Image files for the four upload slots of the own-profile editor.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug, Default)]
pub struct ProfileImageFiles {
    pub cover_image: Option<web_sys::File>,
    pub image_1: Option<web_sys::File>,
    pub image_2: Option<web_sys::File>,
    pub image_3: Option<web_sys::File>,
}

#[cfg(feature = "hydrate")]
impl ProfileImageFiles {
    fn slots(&self) -> [(&'static str, Option<&web_sys::File>); 4] {
        [
            (IMAGE_FIELDS[0], self.cover_image.as_ref()),
            (IMAGE_FIELDS[1], self.image_1.as_ref()),
            (IMAGE_FIELDS[2], self.image_2.as_ref()),
            (IMAGE_FIELDS[3], self.image_3.as_ref()),
        ]
    }
}

/// Update the caller's own profile via multipart `PUT /api/profiles/me`.
///
/// Text fields are appended only when present and non-empty; image
/// files ride under the fixed slot names. The browser supplies the
/// multipart content type and boundary.
///
/// # Errors
///
/// Propagates the transport, status, or decode failure untouched.
#[cfg(feature = "hydrate")]
pub async fn update_my_profile(
    data: &ProfileUpdate,
    files: &ProfileImageFiles,
) -> Result<ProfileDetail, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Serialization("form construction failed".to_owned()))?;
    for (name, value) in text_fields(data) {
        form.append_with_str(name, &value)
            .map_err(|_| ApiError::Serialization("form construction failed".to_owned()))?;
    }
    for (name, file) in files.slots() {
        if let Some(file) = file {
            form.append_with_blob_and_filename(name, file, &file.name())
                .map_err(|_| ApiError::Serialization("form construction failed".to_owned()))?;
        }
    }

    let resp = http::request(gloo_net::http::Request::put(MY_PROFILE_ENDPOINT))
        .body(form)
        .map_err(http::transport_error)?
        .send()
        .await
        .map_err(http::transport_error)?;
    let detail: ProfileDetail = http::decode(resp).await?;
    Ok(with_default_images(detail))
}
