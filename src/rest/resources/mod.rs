//! BigCommerce REST resources.
//!
//! | Facade | API | Resource |
//! |---|---|---|
//! | [`InventoryReader`] | v3 | inventory items at a location |
//! | [`ShipmentManager`] | v2 | shipments of an order |
//!
//! Facades borrow a [`RestClient`](crate::RestClient) and are cheap to create
//! per call site.

mod inventory;
mod shipment;

pub use inventory::{
    Identity, InventoryReader, InventoryRecord, InventoryResource, InventorySettings, Pagination,
    PaginationLinks, PaginationMeta,
};
pub use shipment::{Shipment, ShipmentAddress, ShipmentItem, ShipmentManager};
