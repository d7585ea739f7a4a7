//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "is a user logged in, and as whom". Every
//! transition keeps session storage in agreement with the in-memory
//! session; the bearer header attached to outgoing requests is derived
//! from that same storage, so a storage write is also the header update.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::{AuthLogin, AuthResponse};
use crate::util::session;

/// Authentication state: the current session, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthResponse>,
    pub is_authenticated: bool,
}

impl AuthState {
    /// Log in with `credentials` and adopt the returned session.
    ///
    /// A failed login clears any partial state before re-raising, so
    /// callers observe the failure and the state is guaranteed clean.
    ///
    /// # Errors
    ///
    /// Propagates the service error untouched.
    pub async fn login(&mut self, credentials: &AuthLogin) -> Result<AuthResponse, ApiError> {
        match crate::net::auth::login(credentials).await {
            Ok(session) => {
                self.set_user_data(session.clone());
                Ok(session)
            }
            Err(err) => {
                self.clear_user_data();
                Err(err)
            }
        }
    }

    /// Adopt `session` as the current identity: set the in-memory
    /// session, mark authenticated, and persist token and user record.
    pub fn set_user_data(&mut self, session: AuthResponse) {
        session::store_token(&session.access_token);
        session::store_user_data(&session);
        self.user = Some(session);
        self.is_authenticated = true;
    }

    /// Drop the current identity and every stored trace of it.
    pub fn clear_user_data(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        session::remove_token();
        session::remove_user_data();
    }

    /// Log out. Equivalent to `clear_user_data`.
    pub fn logout(&mut self) {
        self.clear_user_data();
    }

    /// Restore a session left by a previous page load. With both the
    /// token and the user record present the session is adopted;
    /// anything less is normalized back to logged-out.
    pub fn initialize_auth(&mut self) {
        match (session::stored_token(), session::stored_user_data()) {
            (Some(_), Some(user)) => self.set_user_data(user),
            _ => self.clear_user_data(),
        }
    }

    /// The current session, if logged in.
    pub fn user_data(&self) -> Option<&AuthResponse> {
        self.user.as_ref()
    }

    /// Whether a user is currently logged in.
    pub fn is_user_authenticated(&self) -> bool {
        self.is_authenticated
    }
}
