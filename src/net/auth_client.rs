//! Session service driving the auth state machine.
//!
//! This is the single owner of the session's side effects: it issues the
//! HTTP calls, reads and writes the persistent session store, and triggers
//! navigation after state transitions. Pages only hand it a signal, the
//! form payload, and a navigate closure from `use_navigate` — there is no
//! ambient service lookup.
//!
//! Submitted requests are not cancelled when the originating page is torn
//! down: the spawned task holds only the session signal (owned by the root
//! `App`) and the router's navigate handle, so a late response still lands
//! in shared state deterministically.

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use leptos::prelude::{GetUntracked, RwSignal, Set};

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{LoginCredentials, RegisterData};
use crate::state::session::{self, SessionEvent, SessionState, SideEffect};
use crate::util::session_store;

/// Rehydrate the session from the persistent store. Called once from the
/// root `App`; the sole entry point for startup state, so a server
/// validation round-trip could later be added here without touching
/// callers. A stored token is trusted optimistically.
pub fn rehydrate(session: RwSignal<SessionState>) {
    let persisted = session_store::read();
    dispatch(
        session,
        SessionEvent::Rehydrated {
            token: persisted.token,
            user: persisted.user,
        },
        &no_navigation,
    );
}

/// Submit a login form. Transitions to loading immediately; the response
/// lands as either a successful session (persisted, navigated to the
/// dashboard) or an error message on the session state. Nothing
/// propagates to the caller.
pub fn submit_login(
    session: RwSignal<SessionState>,
    credentials: LoginCredentials,
    navigate: impl Fn(&str) + 'static,
) {
    dispatch(session, SessionEvent::SubmitStarted, &navigate);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let event = match api::login(&credentials).await {
            Ok(auth) => SessionEvent::AuthSucceeded {
                token: auth.token,
                user: auth.user,
            },
            Err(message) => SessionEvent::AuthRejected { message },
        };
        dispatch(session, event, &navigate);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credentials, navigate);
    }
}

/// Submit a registration form. Same lifecycle as [`submit_login`].
pub fn submit_register(
    session: RwSignal<SessionState>,
    data: RegisterData,
    navigate: impl Fn(&str) + 'static,
) {
    dispatch(session, SessionEvent::SubmitStarted, &navigate);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let event = match api::register(&data).await {
            Ok(auth) => SessionEvent::AuthSucceeded {
                token: auth.token,
                user: auth.user,
            },
            Err(message) => SessionEvent::AuthRejected { message },
        };
        dispatch(session, event, &navigate);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (data, navigate);
    }
}

/// Log out: clear state and the persisted record, notify the server
/// best-effort, navigate to the public entry. Safe and idempotent from
/// any state.
pub fn logout(session: RwSignal<SessionState>, navigate: impl Fn(&str)) {
    dispatch(session, SessionEvent::LoggedOut, &navigate);
}

/// Dismiss a stale error without touching token or user state.
pub fn clear_error(session: RwSignal<SessionState>) {
    dispatch(session, SessionEvent::ErrorCleared, &no_navigation);
}

/// Apply one event to the shared signal and run the requested effects.
fn dispatch(session: RwSignal<SessionState>, event: SessionEvent, navigate: &impl Fn(&str)) {
    let (next, effects) = session::apply(&session.get_untracked(), event);
    session.set(next);
    for effect in effects {
        run_effect(effect, navigate);
    }
}

fn run_effect(effect: SideEffect, navigate: &impl Fn(&str)) {
    match effect {
        SideEffect::PersistSession { token, user } => session_store::write(&token, &user),
        SideEffect::ClearPersisted => session_store::clear(),
        SideEffect::NotifyServerLogout => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(api::notify_logout());
        }
        SideEffect::NavigateTo(path) => navigate(path),
    }
}

/// Navigate handle for events whose transitions never navigate.
fn no_navigation(path: &str) {
    leptos::logging::warn!("unexpected navigation effect to {path}");
}
