//! Reusable UI component modules.

pub mod profile_card;
