//! OAuth landing page.
//!
//! The provider redirects back to `/oauth/callback?data=<base64 JSON>`
//! carrying `{access_token, user}`. Decode, persist, flip the session to
//! authenticated, and move on; any failure sends the user back to login
//! with an error notice.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::loading_screen::LoadingScreen;
use crate::net::gateway::Gateway;
use crate::net::types::decode_oauth_payload;
use crate::state::auth::AuthState;
use crate::state::notices::NoticeState;

#[component]
pub fn OauthCallbackPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<Gateway>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    Effect::new(move || {
        let payload = query
            .get()
            .get("data")
            .and_then(|data| decode_oauth_payload(&data));

        match payload {
            Some(payload) => {
                let store = gateway.store();
                store.set_token(&payload.access_token);
                store.set_user(&payload.user);
                auth.update(|state| state.set_auth(true, Some(payload.user)));
                notices.update(|n| {
                    n.push_success("Successfully logged in!");
                });
                navigate("/dashboard", NavigateOptions::default());
            }
            None => {
                leptos::logging::warn!("OAuth callback with missing or invalid data");
                notices.update(|n| {
                    n.push_error("Login failed");
                });
                navigate("/login", NavigateOptions::default());
            }
        }
    });

    view! { <LoadingScreen/> }
}
