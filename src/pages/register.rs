//! Registration page. Validation failures (mismatched passwords, empty
//! fields) are handled inline and never escalate past the submit handler.
//! Success routes to the OTP verification page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::gateway::Gateway;
use crate::net::types::RegisterRequest;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let field_error = RwSignal::new(Option::<&'static str>::None);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        if name.get().trim().is_empty() || email.get().trim().is_empty() {
            field_error.set(Some("Name and email are required"));
            return;
        }
        if password.get().len() < 8 {
            field_error.set(Some("Password must be at least 8 characters"));
            return;
        }
        if password.get() != confirm.get() {
            field_error.set(Some("Passwords do not match"));
            return;
        }
        field_error.set(None);
        submitting.set(true);

        let request = RegisterRequest {
            name: name.get(),
            email: email.get(),
            password: password.get(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&gateway, &request).await {
                Ok(response) => {
                    let target = format!(
                        "/verify-otp?userId={}&email={}",
                        response.user_id, request.email
                    );
                    navigate(&target, NavigateOptions::default());
                }
                Err(_) => {
                    // Gateway already surfaced the failure notice.
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h2>"Create your account"</h2>

            <Show when=move || field_error.get().is_some()>
                <p class="auth-form__error">{move || field_error.get().unwrap_or_default()}</p>
            </Show>

            <form class="auth-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Full name"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email address"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    required
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "Sign up" }}
                </button>
            </form>

            <a href="/login">"Already have an account? Sign in"</a>
        </div>
    }
}
