//! REST resource layer for the BigCommerce API.
//!
//! This module sits between the verb-level [`RestClient`](crate::RestClient)
//! and the caller:
//!
//! - **[`resources`]**: typed facades ([`InventoryReader`], [`ShipmentManager`])
//!   and their models
//! - **[`decode`]**: status interpretation and JSON decoding shared by every
//!   facade, including the `204 No Content` short-circuit
//! - **[`filters`]**: query strings from caller-supplied filter maps
//! - **[`ResourceError`]**: semantic error type for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use bigcommerce_api::rest::{InventoryReader, ShipmentManager};
//!
//! let inventory = InventoryReader::new(&client)
//!     .get_inventory_for_location(42, &HashMap::new())
//!     .await?;
//!
//! let shipments = ShipmentManager::new(&client)
//!     .list_shipments(55, &HashMap::new())
//!     .await?;
//! ```

pub mod decode;
mod errors;
pub mod filters;
pub mod resources;

pub use decode::{decode_or_default, ensure_success, read_body, ResponseBody};
pub use errors::ResourceError;
pub use filters::{join_filters, query_string};
pub use resources::{
    Identity, InventoryReader, InventoryRecord, InventoryResource, InventorySettings, Pagination,
    PaginationLinks, PaginationMeta, Shipment, ShipmentAddress, ShipmentItem, ShipmentManager,
};
