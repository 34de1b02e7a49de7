//! Client-side form validation.
//!
//! Runs before any network call; a validation failure blocks submission
//! and never reaches the session service.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate an email field: required and roughly `local@domain.tld`.
pub fn email(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Email is required".to_owned());
    }
    if !looks_like_email(value) {
        return Some("Enter a valid email address".to_owned());
    }
    None
}

/// Validate a password field: required, minimum length.
pub fn password(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".to_owned());
    }
    if value.len() < MIN_PASSWORD_LEN {
        return Some(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
    }
    None
}

/// Shape check only; the server is the authority on deliverability.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.split('.').count() >= 2 && !domain.starts_with('.') && !domain.ends_with('.')
}
