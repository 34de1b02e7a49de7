//! Labeled form input bound to a string signal.

use leptos::prelude::*;

/// One labeled input row for the auth forms. Disabled while a submission
/// is in flight so concurrent requests cannot be started from the UI.
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
