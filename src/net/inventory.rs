//! Inventory read and export endpoints.
//!
//! The table rendering and file formats live elsewhere; this module only
//! carries the role-scoped reads through the gateway, which is what makes
//! background refetches subject to the centralized 401 handling.

use serde::Deserialize;

use super::gateway::{ApiError, Gateway};

/// A single inventory line as the server reports it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub item_name: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

/// `GET /api/inventory`, optionally filtered by a search query.
///
/// # Errors
///
/// Propagates the gateway's [`ApiError`].
pub async fn fetch_inventory(
    gateway: &Gateway,
    query: Option<&str>,
) -> Result<Vec<InventoryItem>, ApiError> {
    let path = match query {
        Some(q) if !q.trim().is_empty() => format!("/api/inventory?search={q}"),
        _ => "/api/inventory".to_owned(),
    };
    gateway.get_json(&path).await
}

/// Download URL for a blob-returning export endpoint (`csv` or `xlsx`).
#[must_use]
pub fn export_url(format: &str) -> String {
    format!("/api/inventory/export/{format}")
}
