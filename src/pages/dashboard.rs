//! Protected dashboard page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guards::use_require_auth;
use crate::net::auth_client;
use crate::state::session::SessionState;

/// Dashboard page — greets the signed-in user and offers logout.
/// Anonymous visitors are redirected to `/login`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    use_require_auth(session);

    let display_name = move || {
        session
            .get()
            .user
            .map(|u| u.name.unwrap_or(u.email))
            .unwrap_or_else(|| "there".to_owned())
    };

    let navigate = use_navigate();
    let on_logout = move |_| {
        let navigate = navigate.clone();
        auth_client::logout(session, move |path| {
            navigate(path, NavigateOptions::default());
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="btn" on:click=on_logout>
                    "Sign Out"
                </button>
            </header>
            <section class="dashboard-page__body">
                <h2>{move || format!("Welcome, {}!", display_name())}</h2>
                <p>"You are signed in."</p>
            </section>
        </div>
    }
}
