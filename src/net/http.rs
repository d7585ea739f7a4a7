//! Shared HTTP plumbing for the REST services.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every service builds its requests through these helpers so the
//! bearer header has a single source of truth: the token most recently
//! written to session storage. Cookies ride along on every call.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(not(feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::util::session;

/// Format a token as an `Authorization` header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// The `Authorization` value for the next outgoing request, if a token
/// is stored.
pub fn auth_header() -> Option<String> {
    session::stored_token().map(|token| bearer(&token))
}

/// Extract the backend's `detail` message from an error body, when the
/// body is JSON and carries one.
pub fn error_detail(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|body| body.detail)
}

/// Stub result for service calls on native (non-browser) builds.
#[cfg(not(feature = "hydrate"))]
pub(crate) fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on the server".to_owned()))
}

#[cfg(feature = "hydrate")]
mod browser {
    use crate::net::error::ApiError;
    use gloo_net::http::{RequestBuilder, Response};

    /// Standard decoration for service requests: cookies plus the
    /// stored bearer token, when one exists.
    pub(crate) fn request(builder: RequestBuilder) -> RequestBuilder {
        authorize(with_credentials(builder))
    }

    /// Attach the stored bearer token, if any.
    pub(crate) fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match super::auth_header() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    /// Send cookies with the request.
    pub(crate) fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        builder.credentials(web_sys::RequestCredentials::Include)
    }

    pub(crate) fn transport_error(err: gloo_net::Error) -> ApiError {
        match err {
            gloo_net::Error::SerdeError(err) => ApiError::Serialization(err.to_string()),
            err => ApiError::Network(err.to_string()),
        }
    }

    /// Decode a response body as `T`, translating non-success statuses
    /// and decode failures into `ApiError`.
    pub(crate) async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<T>().await.map_err(|err| ApiError::Serialization(err.to_string()))
    }

    /// Check a response for success when no body is expected.
    pub(crate) async fn expect_ok(resp: Response) -> Result<(), ApiError> {
        if resp.ok() { Ok(()) } else { Err(status_error(resp).await) }
    }

    async fn status_error(resp: Response) -> ApiError {
        let status = resp.status();
        let detail = resp.text().await.ok().and_then(|body| super::error_detail(&body));
        ApiError::Status { status, detail }
    }
}

#[cfg(feature = "hydrate")]
pub(crate) use browser::*;
