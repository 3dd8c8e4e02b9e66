//! Staff view: the location-scoped inventory read the server exposes to
//! the staff role. Same table surface as the dashboard, different scope.

use leptos::prelude::*;

use crate::components::inventory_table::InventoryTable;
use crate::net::gateway::Gateway;
use crate::net::inventory::fetch_inventory;

#[component]
pub fn StaffPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();

    let items = LocalResource::new(move || async move {
        fetch_inventory(&gateway, None).await.unwrap_or_default()
    });

    view! {
        <div class="staff-page">
            <h1>"Staff Inventory"</h1>
            <Suspense fallback=move || view! { <p>"Loading inventory..."</p> }>
                {move || items.get().map(|list| view! { <InventoryTable items=list/> })}
            </Suspense>
        </div>
    }
}
