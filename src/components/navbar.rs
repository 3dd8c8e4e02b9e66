//! Top navigation bar: brand, role-aware links, and the main-session
//! logout action. Logout here only ends the token session; the admin
//! sub-session blob is owned by the admin tools page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::gateway::Gateway;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::storage::{TOKEN_KEY, USER_KEY, USER_ROLE_KEY};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();

    let role = move || auth.get().user.map_or(Role::User, |u| u.role);
    let is_authenticated = move || auth.get().is_authenticated;

    let on_logout = move |_| {
        let store = gateway.store();
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        store.remove(USER_ROLE_KEY);
        auth.update(|state| state.set_auth(false, None));
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"MedStock"</A>
            <div class="navbar__links">
                <Show when=is_authenticated>
                    <A href="/dashboard">"Dashboard"</A>
                </Show>
                <Show when=move || is_authenticated() && role() == Role::Staff>
                    <A href="/staff">"Staff"</A>
                </Show>
                <Show when=move || is_authenticated() && role() == Role::Admin>
                    <A href="/admin">"Admin"</A>
                </Show>
                <Show
                    when=is_authenticated
                    fallback=|| view! { <A href="/login">"Sign in"</A> }
                >
                    <button class="navbar__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
