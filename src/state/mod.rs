//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs provided as `RwSignal` context by the
//! application shell, so components depend on a small explicit model
//! instead of hidden globals.

pub mod auth;
