//! Inventory resources for BigCommerce locations.
//!
//! [`InventoryReader`] fetches one page of inventory records stocked at a
//! location from `GET /v3/inventory/locations/{location_id}/items`. Records
//! are read-only snapshots; pagination is left to the caller, who passes the
//! page filters (e.g. `page`, `limit`) explicitly.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use bigcommerce_api::rest::InventoryReader;
//!
//! let filters = HashMap::from([("sku:in".to_string(), "A,B".to_string())]);
//! let resource = InventoryReader::new(&client)
//!     .get_inventory_for_location(42, &filters)
//!     .await?;
//!
//! for record in &resource.data {
//!     println!("{}: {}", record.identity.sku, record.available_to_sell);
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::config::ApiVersion;
use crate::rest::{decode_or_default, query_string, ResourceError};

/// Identifies one inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Identity {
    /// The SKU of the item.
    pub sku: String,
    /// The variant ID of the item.
    pub variant_id: u64,
    /// The product ID the variant belongs to.
    pub product_id: u64,
}

/// Location-level inventory settings configured in the store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InventorySettings {
    /// Units held back from sale.
    pub safety_stock: i64,
    /// Whether the item is in stock at this location.
    pub is_in_stock: bool,
    /// Low-stock warning threshold.
    pub warning_level: i64,
    /// Bin picking number, if one is assigned.
    pub bin_picking_number: Option<String>,
}

/// The inventory of one item at a location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InventoryRecord {
    /// Which item this record describes.
    pub identity: Identity,
    /// Units available to sell (on hand minus safety stock and reservations).
    pub available_to_sell: i64,
    /// Total units on hand.
    pub total_inventory_onhand: i64,
    /// Location-level settings.
    pub settings: InventorySettings,
}

/// Links to neighbouring pages, as relative query strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationLinks {
    /// Link to the previous page, if any.
    pub previous: Option<String>,
    /// Link to the current page.
    pub current: Option<String>,
    /// Link to the next page, if any.
    pub next: Option<String>,
}

/// Page counters and links for a collection response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
    /// Total number of records across all pages.
    pub total: u64,
    /// Number of records on this page.
    pub count: u64,
    /// Page size.
    pub per_page: u64,
    /// One-based index of this page.
    pub current_page: u64,
    /// Number of pages.
    pub total_pages: u64,
    /// Links to neighbouring pages.
    pub links: PaginationLinks,
}

/// The `meta` block of a v3 collection response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationMeta {
    /// Pagination details.
    pub pagination: Pagination,
}

/// One page of inventory records for a location.
///
/// A `204 No Content` response yields `InventoryResource::default()`: no
/// records and an all-zero `meta`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InventoryResource {
    /// Records in the order the server returned them.
    pub data: Vec<InventoryRecord>,
    /// Pagination metadata.
    pub meta: PaginationMeta,
}

impl InventoryResource {
    /// Returns `true` if the page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the link to the next page, if the server reported one.
    #[must_use]
    pub fn next_link(&self) -> Option<&str> {
        self.meta
            .pagination
            .links
            .next
            .as_deref()
            .filter(|link| !link.is_empty())
    }
}

/// Reads inventory records for a location.
#[derive(Debug, Clone, Copy)]
pub struct InventoryReader<'a> {
    client: &'a RestClient,
}

impl<'a> InventoryReader<'a> {
    const NAME: &'static str = "InventoryResource";

    /// Creates a reader over `client`.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Fetches one page of inventory records stocked at `location_id`.
    ///
    /// Sends `GET /v3/inventory/locations/{location_id}/items?{filters}`.
    /// Filters are passed verbatim, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] or [`ResourceError::Rest`] for
    /// transport failures and non-2xx statuses other than 404,
    /// [`ResourceError::NotFound`] for 404, and [`ResourceError::Decode`] for
    /// a malformed body. A 204 is not an error.
    pub async fn get_inventory_for_location(
        &self,
        location_id: u64,
        filters: &HashMap<String, String>,
    ) -> Result<InventoryResource, ResourceError> {
        let path = format!(
            "{}/inventory/locations/{location_id}/items{}",
            ApiVersion::V3.path_prefix(),
            query_string(filters)
        );

        let response = self.client.get(&path).await?;
        let id = location_id.to_string();
        decode_or_default(&response, Self::NAME, Some(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inventory_resource_deserializes_from_api_response() {
        let body = json!({
            "data": [
                {
                    "identity": {"sku": "SKU-1", "variant_id": 77, "product_id": 12},
                    "available_to_sell": 8,
                    "total_inventory_onhand": 10,
                    "settings": {
                        "safety_stock": 2,
                        "is_in_stock": true,
                        "warning_level": 3,
                        "bin_picking_number": "B-4"
                    }
                }
            ],
            "meta": {
                "pagination": {
                    "total": 1,
                    "count": 1,
                    "per_page": 50,
                    "current_page": 1,
                    "total_pages": 1,
                    "links": {"current": "?page=1&limit=50"}
                }
            }
        });

        let resource: InventoryResource = serde_json::from_value(body).unwrap();

        assert_eq!(resource.data.len(), 1);
        let record = &resource.data[0];
        assert_eq!(record.identity.sku, "SKU-1");
        assert_eq!(record.identity.variant_id, 77);
        assert_eq!(record.identity.product_id, 12);
        assert_eq!(record.available_to_sell, 8);
        assert_eq!(record.total_inventory_onhand, 10);
        assert!(record.settings.is_in_stock);
        assert_eq!(record.settings.bin_picking_number.as_deref(), Some("B-4"));
        assert_eq!(resource.meta.pagination.per_page, 50);
        assert_eq!(
            resource.meta.pagination.links.current.as_deref(),
            Some("?page=1&limit=50")
        );
        assert!(resource.next_link().is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let resource: InventoryResource =
            serde_json::from_value(json!({"data": [{"identity": {"sku": "X"}}]})).unwrap();

        assert_eq!(resource.data[0].identity.sku, "X");
        assert_eq!(resource.data[0].identity.variant_id, 0);
        assert_eq!(resource.data[0].settings, InventorySettings::default());
        assert_eq!(resource.meta, PaginationMeta::default());
    }

    #[test]
    fn test_null_bin_picking_number_is_accepted() {
        let settings: InventorySettings =
            serde_json::from_value(json!({"bin_picking_number": null})).unwrap();
        assert!(settings.bin_picking_number.is_none());
    }

    #[test]
    fn test_next_link_ignores_empty_string() {
        let mut resource = InventoryResource::default();
        assert!(resource.is_empty());

        resource.meta.pagination.links.next = Some(String::new());
        assert!(resource.next_link().is_none());

        resource.meta.pagination.links.next = Some("?page=2".to_string());
        assert_eq!(resource.next_link(), Some("?page=2"));
    }
}
