//! Dashboard: the default inventory view for any authenticated role.
//!
//! If an admin left the app while inside the admin tools, the continuity
//! flag routes them straight back there.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::inventory_table::InventoryTable;
use crate::net::gateway::Gateway;
use crate::net::inventory::fetch_inventory;
use crate::net::types::Role;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();

    // Restore the admin tools view for admins who were last there.
    Effect::new(move || {
        let state = auth.get();
        let is_admin = state.user.as_ref().is_some_and(|u| u.role == Role::Admin);
        if !state.loading && state.is_authenticated && is_admin
            && gateway.store().was_in_admin_view()
        {
            navigate("/admin", NavigateOptions::default());
        }
    });

    let search = RwSignal::new(String::new());
    let items = LocalResource::new(move || {
        let query = search.get();
        async move {
            fetch_inventory(&gateway, Some(query.as_str()))
                .await
                .unwrap_or_default()
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Inventory"</h1>
                <input
                    class="dashboard-page__search"
                    type="search"
                    placeholder="Search items or manufacturers"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </header>

            <Suspense fallback=move || view! { <p>"Loading inventory..."</p> }>
                {move || items.get().map(|list| view! { <InventoryTable items=list/> })}
            </Suspense>
        </div>
    }
}
