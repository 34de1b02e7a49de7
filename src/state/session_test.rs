use super::*;

fn user(email: &str) -> User {
    User {
        id: "1".to_owned(),
        email: email.to_owned(),
        name: None,
    }
}

fn authenticated() -> SessionState {
    SessionState {
        token: Some("T1".to_owned()),
        user: Some(user("a@b.com")),
        loading: false,
        error: None,
    }
}

// =============================================================
// Defaults and phase classification
// =============================================================

#[test]
fn default_state_is_anonymous() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

#[test]
fn loading_state_is_authenticating() {
    let state = SessionState {
        loading: true,
        ..SessionState::default()
    };
    assert_eq!(state.phase(), SessionPhase::Authenticating);
}

#[test]
fn error_state_is_auth_error() {
    let state = SessionState {
        error: Some("Login failed".to_owned()),
        ..SessionState::default()
    };
    assert_eq!(state.phase(), SessionPhase::AuthError);
}

#[test]
fn token_without_error_is_authenticated() {
    assert_eq!(authenticated().phase(), SessionPhase::Authenticated);
}

// =============================================================
// Login / register transitions
// =============================================================

#[test]
fn submit_sets_loading_and_clears_stale_error() {
    let state = SessionState {
        error: Some("old".to_owned()),
        ..SessionState::default()
    };
    let (next, effects) = apply(&state, SessionEvent::SubmitStarted);
    assert!(next.loading);
    assert!(next.error.is_none());
    assert!(effects.is_empty());
}

#[test]
fn auth_success_persists_and_navigates_to_dashboard() {
    let state = SessionState {
        loading: true,
        ..SessionState::default()
    };
    let (next, effects) = apply(
        &state,
        SessionEvent::AuthSucceeded {
            token: "abc".to_owned(),
            user: user("u@test.com"),
        },
    );
    assert!(next.is_authenticated());
    assert_eq!(next.token.as_deref(), Some("abc"));
    assert_eq!(next.user.as_ref().map(|u| u.email.as_str()), Some("u@test.com"));
    assert!(!next.loading);
    assert_eq!(
        effects,
        vec![
            SideEffect::PersistSession {
                token: "abc".to_owned(),
                user: user("u@test.com"),
            },
            SideEffect::NavigateTo(PROTECTED_PATH),
        ]
    );
}

#[test]
fn auth_rejection_sets_error_and_keeps_token() {
    let state = authenticated();
    let (next, effects) = apply(
        &state,
        SessionEvent::AuthRejected {
            message: "Invalid credentials".to_owned(),
        },
    );
    assert_eq!(next.error.as_deref(), Some("Invalid credentials"));
    assert!(!next.error.as_deref().unwrap_or_default().is_empty());
    assert_eq!(next.token, state.token);
    assert_eq!(next.is_authenticated(), state.is_authenticated());
    assert!(!next.loading);
    assert!(effects.is_empty());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_everything_and_notifies_server() {
    let (next, effects) = apply(&authenticated(), SessionEvent::LoggedOut);
    assert!(!next.is_authenticated());
    assert_eq!(next, SessionState::default());
    assert_eq!(
        effects,
        vec![
            SideEffect::ClearPersisted,
            SideEffect::NotifyServerLogout,
            SideEffect::NavigateTo(PUBLIC_PATH),
        ]
    );
}

#[test]
fn logout_twice_is_a_noop_the_second_time() {
    let (after_first, _) = apply(&authenticated(), SessionEvent::LoggedOut);
    let (after_second, effects) = apply(&after_first, SessionEvent::LoggedOut);
    assert_eq!(after_second, SessionState::default());
    // No server notification without a prior session.
    assert_eq!(
        effects,
        vec![SideEffect::ClearPersisted, SideEffect::NavigateTo(PUBLIC_PATH)]
    );
}

#[test]
fn logout_from_error_state_clears_the_error() {
    let state = SessionState {
        error: Some("Login failed".to_owned()),
        ..SessionState::default()
    };
    let (next, _) = apply(&state, SessionEvent::LoggedOut);
    assert!(next.error.is_none());
    assert_eq!(next.phase(), SessionPhase::Anonymous);
}

// =============================================================
// Rehydration
// =============================================================

#[test]
fn rehydrate_with_token_and_user_is_authenticated() {
    let (next, effects) = apply(
        &SessionState::default(),
        SessionEvent::Rehydrated {
            token: Some("T1".to_owned()),
            user: Some(user("a@b.com")),
        },
    );
    assert!(next.is_authenticated());
    assert_eq!(next.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
    assert!(effects.is_empty());
}

#[test]
fn rehydrate_with_token_but_discarded_user_still_authenticates() {
    // A malformed persisted user record arrives here as `None`.
    let (next, _) = apply(
        &SessionState::default(),
        SessionEvent::Rehydrated {
            token: Some("T1".to_owned()),
            user: None,
        },
    );
    assert!(next.is_authenticated());
    assert!(next.user.is_none());
}

#[test]
fn rehydrate_without_token_ignores_orphan_user() {
    let (next, _) = apply(
        &SessionState::default(),
        SessionEvent::Rehydrated {
            token: None,
            user: Some(user("a@b.com")),
        },
    );
    assert!(!next.is_authenticated());
    assert!(next.user.is_none());
    assert_eq!(next.phase(), SessionPhase::Anonymous);
}

// =============================================================
// Error dismissal
// =============================================================

#[test]
fn clear_error_returns_to_anonymous() {
    let state = SessionState {
        error: Some("Registration failed".to_owned()),
        ..SessionState::default()
    };
    let (next, effects) = apply(&state, SessionEvent::ErrorCleared);
    assert_eq!(next.phase(), SessionPhase::Anonymous);
    assert!(effects.is_empty());
}

#[test]
fn clear_error_does_not_touch_an_existing_session() {
    let state = SessionState {
        error: Some("stale".to_owned()),
        ..authenticated()
    };
    let (next, _) = apply(&state, SessionEvent::ErrorCleared);
    assert!(next.is_authenticated());
    assert_eq!(next.token.as_deref(), Some("T1"));
    assert_eq!(next.phase(), SessionPhase::Authenticated);
}
