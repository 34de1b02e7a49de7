//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::guards::use_require_anon;
use crate::net::auth_client;
use crate::net::types::RegisterData;
use crate::state::session::SessionState;
use crate::util::validate;

/// Registration page. The name field is optional; email and password
/// follow the same rules as login.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    use_require_anon(session);

    Effect::new(move || auth_client::clear_error(session));

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<String>);

    let loading = Signal::derive(move || session.get().loading);
    let banner = Signal::derive(move || field_error.get().or_else(|| session.get().error));

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let message = validate::email(&email.get_untracked())
            .or_else(|| validate::password(&password.get_untracked()));
        if let Some(message) = message {
            field_error.set(Some(message));
            return;
        }
        field_error.set(None);

        let data = RegisterData {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        auth_client::submit_register(session, data, move |path| {
            navigate(path, NavigateOptions::default());
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Create Account"</h2>
                <p class="auth-card__subtitle">"Join us today"</p>

                <Show when=move || banner.get().is_some()>
                    <div class="alert alert--error">{move || banner.get()}</div>
                </Show>

                <form on:submit=on_submit>
                    <FormField
                        label="Full Name"
                        placeholder="Enter your full name"
                        value=name
                        disabled=loading
                    />
                    <FormField
                        label="Email Address"
                        input_type="email"
                        placeholder="Enter your email"
                        value=email
                        disabled=loading
                    />
                    <FormField
                        label="Password"
                        input_type="password"
                        placeholder="Enter your password"
                        value=password
                        disabled=loading
                    />
                    <button type="submit" class="btn btn--primary btn--block" prop:disabled=move || loading.get()>
                        {move || if loading.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>

                <div class="auth-card__footer">
                    <p>"Already have an account? " <A href="/login">"Sign in"</A></p>
                </div>
            </div>
        </div>
    }
}
