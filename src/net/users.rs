//! User account service: CRUD plus password changes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{ChangePassword, UserCreate, UserResponse, UserSummary, UserUpdate};

pub(crate) const USERS_ENDPOINT: &str = "/api/users";
/// The create endpoint keeps the backend's trailing slash.
pub(crate) const CREATE_USER_ENDPOINT: &str = "/api/users/";

pub(crate) fn user_endpoint(id: &str) -> String {
    format!("/api/users/{id}")
}

pub(crate) fn change_password_endpoint(id: &str) -> String {
    format!("/api/users/change_password/{id}")
}

/// Fetch every account via `GET /api/users`.
///
/// # Errors
///
/// Propagates the transport, status, or decode failure untouched.
pub async fn get_all_users() -> Result<Vec<UserSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::request(gloo_net::http::Request::get(USERS_ENDPOINT))
            .send()
            .await
            .map_err(http::transport_error)?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        http::unavailable()
    }
}

/// Fetch one account via `GET /api/users/:id`.
///
/// # Errors
///
/// Propagates the transport, status, or decode failure untouched.
pub async fn get_user_by_id(id: &str) -> Result<UserResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::request(gloo_net::http::Request::get(&user_endpoint(id)))
            .send()
            .await
            .map_err(http::transport_error)?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        http::unavailable()
    }
}

/// Register a new account via `POST /api/users/`.
///
/// # Errors
///
/// Propagates the transport, status, or decode failure untouched.
pub async fn create_user(data: &UserCreate) -> Result<UserResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::request(gloo_net::http::Request::post(CREATE_USER_ENDPOINT))
            .json(data)
            .map_err(http::transport_error)?
            .send()
            .await
            .map_err(http::transport_error)?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        http::unavailable()
    }
}

/// Patch an account via `PUT /api/users/:id`.
///
/// # Errors
///
/// Propagates the transport, status, or decode failure untouched.
pub async fn update_user(id: &str, data: &UserUpdate) -> Result<UserResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::request(gloo_net::http::Request::put(&user_endpoint(id)))
            .json(data)
            .map_err(http::transport_error)?
            .send()
            .await
            .map_err(http::transport_error)?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, data);
        http::unavailable()
    }
}

/// Change an account's password via `PUT /api/users/change_password/:id`.
///
/// # Errors
///
/// Propagates the transport, status, or decode failure untouched.
pub async fn change_password(id: &str, data: &ChangePassword) -> Result<UserResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::request(gloo_net::http::Request::put(&change_password_endpoint(id)))
            .json(data)
            .map_err(http::transport_error)?
            .send()
            .await
            .map_err(http::transport_error)?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, data);
        http::unavailable()
    }
}

/// Delete an account via `DELETE /api/users/:id`. No body is expected.
///
/// # Errors
///
/// Propagates the transport or status failure untouched.
pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::request(gloo_net::http::Request::delete(&user_endpoint(id)))
            .send()
            .await
            .map_err(http::transport_error)?;
        http::expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        http::unavailable()
    }
}
