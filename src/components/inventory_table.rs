//! Read-only inventory table with export links.
//!
//! Deliberately thin: filtering, sorting, and file-format internals are
//! the server's business. This exists so authenticated views have a real
//! data surface flowing through the token gateway.

use leptos::prelude::*;

use crate::net::inventory::{InventoryItem, export_url};

#[component]
pub fn InventoryTable(items: Vec<InventoryItem>) -> impl IntoView {
    view! {
        <div class="inventory">
            <div class="inventory__exports">
                <a href=export_url("csv") download="inventory.csv">"Export CSV"</a>
                <a href=export_url("xlsx") download="inventory.xlsx">"Export XLSX"</a>
            </div>
            <table class="inventory__table">
                <thead>
                    <tr>
                        <th>"Item"</th>
                        <th>"Manufacturer"</th>
                        <th>"Location"</th>
                        <th>"Quantity"</th>
                        <th>"Expiry"</th>
                    </tr>
                </thead>
                <tbody>
                    {items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <tr>
                                    <td>{item.item_name}</td>
                                    <td>{item.manufacturer.unwrap_or_default()}</td>
                                    <td>{item.location.unwrap_or_default()}</td>
                                    <td>{item.quantity}</td>
                                    <td>{item.expiry_date.unwrap_or_default()}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
