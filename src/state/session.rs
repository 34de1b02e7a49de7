//! Session state machine.
//!
//! DESIGN
//! ======
//! All authentication state lives in one `SessionState` held in an
//! `RwSignal` provided from the root `App`. Transitions are pure: `apply`
//! maps (state, event) to (state, side effects) and never touches the
//! network, storage, or router itself. The driver in `net::auth_client`
//! executes the returned effects, so every transition is testable natively.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Path of the protected area, navigated to after a successful login or
/// registration.
pub const PROTECTED_PATH: &str = "/dashboard";

/// Path of the public entry point, navigated to on logout and by the
/// auth guard.
pub const PUBLIC_PATH: &str = "/login";

/// Process-wide authentication state.
///
/// `user` is only ever set alongside `token`; `loading` is true strictly
/// while a login or register request is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// Whether a session token is present. Synchronous and cheap; this is
    /// the predicate the route guards consult on every navigation.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Classify the current state.
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Authenticating
        } else if self.error.is_some() {
            SessionPhase::AuthError
        } else if self.token.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }
}

/// Derived classification of a `SessionState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticating,
    Authenticated,
    AuthError,
}

/// Events driving the session state machine.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// Startup read of the persisted record. A malformed user record has
    /// already been discarded by the store; a bare token is still honored.
    Rehydrated {
        token: Option<String>,
        user: Option<User>,
    },
    /// A login or register form was submitted.
    SubmitStarted,
    /// The server accepted the credentials and returned a session.
    AuthSucceeded { token: String, user: User },
    /// The server rejected the call, the call failed, or the response was
    /// malformed. `message` is always non-empty.
    AuthRejected { message: String },
    /// The user logged out.
    LoggedOut,
    /// A stale error is being dismissed (e.g. navigating between forms).
    ErrorCleared,
}

/// Side effects a transition requests. The state machine never performs
/// them; `net::auth_client` does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideEffect {
    /// Write token + user to the persistent session store.
    PersistSession { token: String, user: User },
    /// Delete the persistent session store.
    ClearPersisted,
    /// Best-effort logout notification to the server. Its outcome never
    /// affects local state.
    NotifyServerLogout,
    /// Navigate the router to `path`.
    NavigateTo(&'static str),
}

/// Apply one event, returning the next state and the effects to run.
///
/// Concurrent submissions are not deduplicated here: each submission
/// produces its own request and the last response to arrive wins. The
/// forms prevent overlap by disabling submit while `loading`.
pub fn apply(state: &SessionState, event: SessionEvent) -> (SessionState, Vec<SideEffect>) {
    let mut next = state.clone();
    match event {
        SessionEvent::Rehydrated { token, user } => {
            // Optimistic: a stored token is trusted without a server
            // round-trip. Only attach the user when a token exists.
            next.user = if token.is_some() { user } else { None };
            next.token = token;
            (next, Vec::new())
        }
        SessionEvent::SubmitStarted => {
            next.loading = true;
            next.error = None;
            (next, Vec::new())
        }
        SessionEvent::AuthSucceeded { token, user } => {
            next.loading = false;
            next.error = None;
            next.token = Some(token.clone());
            next.user = Some(user.clone());
            (
                next,
                vec![
                    SideEffect::PersistSession { token, user },
                    SideEffect::NavigateTo(PROTECTED_PATH),
                ],
            )
        }
        SessionEvent::AuthRejected { message } => {
            next.loading = false;
            next.error = Some(message);
            (next, Vec::new())
        }
        SessionEvent::LoggedOut => {
            let was_authenticated = next.token.is_some();
            next = SessionState::default();
            let mut effects = vec![SideEffect::ClearPersisted];
            if was_authenticated {
                effects.push(SideEffect::NotifyServerLogout);
            }
            effects.push(SideEffect::NavigateTo(PUBLIC_PATH));
            (next, effects)
        }
        SessionEvent::ErrorCleared => {
            next.error = None;
            (next, Vec::new())
        }
    }
}
