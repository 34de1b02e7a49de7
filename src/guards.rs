//! Route guards built on the session's authentication predicate.
//!
//! Both guards are reactive: they re-check `is_authenticated()` whenever
//! the session changes, so a logout on the dashboard or a login on a form
//! page redirects immediately as well as on first render.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{PROTECTED_PATH, PUBLIC_PATH, SessionState};

/// Deny a protected page to anonymous visitors; redirects to the login
/// page. Call from the top of every protected page component.
pub fn use_require_auth(session: RwSignal<SessionState>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate(PUBLIC_PATH, NavigateOptions::default());
        }
    });
}

/// Deny the public-only pages (login, register) to authenticated users;
/// redirects to the protected area.
pub fn use_require_anon(session: RwSignal<SessionState>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate(PROTECTED_PATH, NavigateOptions::default());
        }
    });
}
