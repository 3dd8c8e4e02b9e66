//! Login page: password form plus Google OAuth redirect.
//!
//! Preserves the `from` query parameter written by the route guard, so a
//! successful login returns the user to the view they originally asked
//! for. Admin users land on the admin tools instead.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::net::gateway::Gateway;
use crate::net::types::{LoginRequest, Role};
use crate::state::auth::AuthState;
use crate::state::notices::NoticeState;

/// Platform string reported with login requests, for the server's session
/// bookkeeping.
fn platform() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .map(|w| w.navigator())
            .and_then(|n| n.platform().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<Gateway>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let return_path = move || query.get().get("from").unwrap_or_else(|| "/".to_owned());

    // Already signed in (e.g. browser back to /login): skip the form.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = auth.get();
            if !state.loading && state.is_authenticated {
                navigate(&return_path(), NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        submitting.set(true);

        let request = LoginRequest {
            email: email.get(),
            password: password.get(),
            remember_me: remember_me.get(),
            platform: platform(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&gateway, &request).await {
                Ok(response) => {
                    let store = gateway.store();
                    store.set_token(&response.access_token);
                    store.set_user(&response.user);
                    let role = response.user.role;
                    auth.update(|state| state.set_auth(true, Some(response.user)));
                    notices.update(|n| {
                        n.push_success("Login successful!");
                    });
                    let target = if role == Role::Admin {
                        "/admin".to_owned()
                    } else {
                        query.get_untracked().get("from").unwrap_or_else(|| "/".to_owned())
                    };
                    navigate(&target, NavigateOptions { replace: true, ..Default::default() });
                }
                Err(_) => {
                    // Gateway already surfaced the failure notice.
                    submitting.set(false);
                }
            }
        });
    };

    let on_google = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(api::GOOGLE_AUTH_PATH);
            }
        }
    };

    view! {
        <div class="auth-page">
            <h2>"Sign in to your account"</h2>

            <button class="btn btn--oauth" on:click=on_google>
                "Continue with Google"
            </button>

            <form class="auth-form" on:submit=on_submit>
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
                <label class="auth-form__remember">
                    <input
                        type="checkbox"
                        prop:checked=move || remember_me.get()
                        on:change=move |ev| remember_me.set(event_target_checked(&ev))
                    />
                    "Remember me"
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <a href="/forgot-password">"Forgot your password?"</a>
            <a href="/register">"Don't have an account? Sign up"</a>
        </div>
    }
}
