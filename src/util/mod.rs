//! Small browser-facing utilities: session persistence and form validation.

pub mod session_store;
pub mod validate;
