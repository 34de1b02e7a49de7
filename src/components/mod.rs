//! Reusable view components.

pub mod form_field;
