//! Wire types shared with the remote authentication server.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A user record as returned by the auth server and mirrored in the
/// persistent session store.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body of `POST {base}/login`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST {base}/register`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful response body of the login and register endpoints. A 2xx
/// response that does not carry both fields is treated as malformed.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AuthSuccess {
    pub token: String,
    pub user: User,
}
