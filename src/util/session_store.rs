//! Persistent session store backed by `localStorage`.
//!
//! Two fixed keys under the `authgate_` namespace hold the raw session
//! token and the JSON-encoded user record. The store is written and
//! cleared only by `net::auth_client`; it exists so a session survives
//! page reloads. A malformed user record is discarded on read and never
//! fatal. Requires a browser environment; all accessors are no-ops
//! elsewhere.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::types::User;

const TOKEN_KEY: &str = "authgate_token";
const USER_KEY: &str = "authgate_user";

/// What a startup read found in `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct PersistedSession {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// Read the persisted session. Missing keys and undecodable user records
/// come back as `None`; the token is returned as stored.
pub fn read() -> PersistedSession {
    PersistedSession {
        token: get_item(TOKEN_KEY),
        user: get_item(USER_KEY).and_then(|raw| decode_user(&raw)),
    }
}

/// Persist a session, overwriting any previous record.
pub fn write(token: &str, user: &User) {
    set_item(TOKEN_KEY, token);
    if let Ok(json) = serde_json::to_string(user) {
        set_item(USER_KEY, &json);
    }
}

/// Delete the persisted session.
pub fn clear() {
    remove_item(TOKEN_KEY);
    remove_item(USER_KEY);
}

/// Decode a stored user record, discarding anything malformed.
fn decode_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        window.local_storage().ok().flatten()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
