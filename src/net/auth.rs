//! Auth service: exchanging credentials for a session.
//!
//! Hydrate builds issue real HTTP calls via `gloo-net`; native builds
//! return a network error since the endpoint is only reachable from the
//! browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{AuthLogin, AuthResponse};

pub(crate) const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Exchange credentials for a session via `POST /api/auth/login`.
///
/// The login request itself carries no bearer header; cookies are sent
/// as on every other call.
///
/// # Errors
///
/// Propagates the transport, status, or decode failure untouched.
pub async fn login(credentials: &AuthLogin) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::with_credentials(gloo_net::http::Request::post(LOGIN_ENDPOINT))
            .json(credentials)
            .map_err(http::transport_error)?
            .send()
            .await
            .map_err(http::transport_error)?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        http::unavailable()
    }
}
