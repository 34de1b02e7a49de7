//! REST calls against the remote authentication server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses into a user-facing message string: a non-2xx
//! body's `message` field when present, otherwise a fixed per-operation
//! fallback. A 2xx response that does not carry `{token, user}` is mapped to
//! a fixed malformed-response message so the caller never hangs in a
//! half-authenticated state. No retry, no backoff.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthSuccess, LoginCredentials, RegisterData};

/// Fallback message for a failed login call.
pub const LOGIN_FAILED: &str = "Login failed";

/// Fallback message for a failed register call.
pub const REGISTER_FAILED: &str = "Registration failed";

/// Message for a 2xx response missing the token or user.
pub const MALFORMED_RESPONSE: &str = "Unexpected response from the server";

/// Base URL of the auth server, overridable at compile time.
fn auth_base() -> &'static str {
    option_env!("AUTH_BASE_URL").unwrap_or("http://localhost:9090/auth")
}

/// `POST {base}/login` with `{email, password}`.
///
/// # Errors
///
/// Returns the server-provided message or [`LOGIN_FAILED`].
pub async fn login(credentials: &LoginCredentials) -> Result<AuthSuccess, String> {
    post_auth("login", credentials, LOGIN_FAILED).await
}

/// `POST {base}/register` with `{name, email, password}`.
///
/// # Errors
///
/// Returns the server-provided message or [`REGISTER_FAILED`].
pub async fn register(data: &RegisterData) -> Result<AuthSuccess, String> {
    post_auth("register", data, REGISTER_FAILED).await
}

/// Best-effort logout notification via `POST {base}/logout`. The response
/// is ignored; local session state never depends on this call.
pub async fn notify_logout() {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/logout", auth_base());
        let _ = gloo_net::http::Request::post(&url).send().await;
    }
}

#[cfg(feature = "hydrate")]
async fn post_auth<T: serde::Serialize>(
    endpoint: &str,
    body: &T,
    fallback: &str,
) -> Result<AuthSuccess, String> {
    let url = format!("{}/{endpoint}", auth_base());
    let resp = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|e| {
            leptos::logging::warn!("auth request build failed: {e}");
            fallback.to_owned()
        })?
        .send()
        .await
        .map_err(|e| {
            leptos::logging::warn!("auth request failed: {e}");
            fallback.to_owned()
        })?;

    let text = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(parse_error_message(&text).unwrap_or_else(|| fallback.to_owned()));
    }
    parse_auth_success(&text).map_err(str::to_owned)
}

#[cfg(not(feature = "hydrate"))]
async fn post_auth<T: serde::Serialize>(
    endpoint: &str,
    body: &T,
    fallback: &str,
) -> Result<AuthSuccess, String> {
    let _ = (endpoint, body, fallback);
    Err("not available on server".to_owned())
}

/// Extract a non-empty `message` field from an error response body.
fn parse_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_owned())
    }
}

/// Parse a 2xx body into an [`AuthSuccess`]. A body missing the token or
/// user yields [`MALFORMED_RESPONSE`].
fn parse_auth_success(body: &str) -> Result<AuthSuccess, &'static str> {
    serde_json::from_str(body).map_err(|_| MALFORMED_RESPONSE)
}
