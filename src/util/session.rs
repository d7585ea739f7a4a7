//! Browser sessionStorage adapter for the auth session.
//!
//! TRADE-OFFS
//! ==========
//! Storage is scoped to the browsing session and holds the raw token
//! plus the serialized user record under two fixed keys. No encryption,
//! no expiry. Native (SSR/test) builds use a thread-local in-memory map
//! so state transitions stay observable in unit tests; server rendering
//! never persists a real session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::AuthResponse;

const TOKEN_KEY: &str = "auth_token";
const USER_DATA_KEY: &str = "user_data";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static FALLBACK: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK.with(|map| map.borrow().get(key).cloned())
    }
}

fn write(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK.with(|map| {
            map.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }
}

fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK.with(|map| {
            map.borrow_mut().remove(key);
        });
    }
}

/// Persist the bearer token for the rest of the browsing session.
pub fn store_token(token: &str) {
    write(TOKEN_KEY, token);
}

/// The stored bearer token, if any.
pub fn stored_token() -> Option<String> {
    read(TOKEN_KEY)
}

/// Forget the stored bearer token.
pub fn remove_token() {
    remove(TOKEN_KEY);
}

/// Persist the session's user record as JSON.
pub fn store_user_data(user: &AuthResponse) {
    let Ok(raw) = serde_json::to_string(user) else {
        return;
    };
    write(USER_DATA_KEY, &raw);
}

/// The cached user record; absent if missing or malformed.
pub fn stored_user_data() -> Option<AuthResponse> {
    let raw = read(USER_DATA_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Forget the cached user record.
pub fn remove_user_data() {
    remove(USER_DATA_KEY);
}
