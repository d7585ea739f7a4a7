//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `error` and `http` hold the shared
//! error taxonomy and request plumbing, and `auth`/`profiles`/`users`
//! wrap one backend service each.

pub mod auth;
pub mod error;
pub mod http;
pub mod profiles;
pub mod types;
pub mod users;
