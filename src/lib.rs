//! # BigCommerce API Rust Client
//!
//! A Rust client for the BigCommerce REST API, covering location inventory
//! (v3) and order shipments (v2).
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BigCommerceConfig`] and [`BigCommerceConfigBuilder`]
//! - Validated newtypes for the store hash, access token and API host
//! - An async HTTP client that authenticates every request with `X-Auth-Token`
//! - A verb-level [`RestClient`] over a pluggable [`RequestDispatcher`]
//! - Typed facades: [`InventoryReader`] and [`ShipmentManager`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, BigCommerceConfig, RestClient, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri(), "https://api.bigcommerce.com/stores/abc123");
//!
//! let client = RestClient::new(&config);
//! ```
//!
//! ## Reading Inventory
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use bigcommerce_api::InventoryReader;
//!
//! let filters = HashMap::from([("sku:in".to_string(), "A,B".to_string())]);
//! let page = InventoryReader::new(&client)
//!     .get_inventory_for_location(42, &filters)
//!     .await?;
//!
//! for record in &page.data {
//!     println!("{} available: {}", record.identity.sku, record.available_to_sell);
//! }
//! ```
//!
//! ## Managing Shipments
//!
//! ```rust,ignore
//! use bigcommerce_api::{Shipment, ShipmentItem, ShipmentManager};
//!
//! let shipments = ShipmentManager::new(&client);
//!
//! let created = shipments
//!     .create_shipment(
//!         55,
//!         &Shipment {
//!             tracking_number: "1Z999".to_string(),
//!             shipping_provider: "ups".to_string(),
//!             items: vec![ShipmentItem::new(10, 2)],
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//!
//! let mut updated = created.clone();
//! updated.comments = "Left at reception".to_string();
//! shipments.update_shipment(55, &updated).await?;
//!
//! shipments.delete_all_shipments(55).await?;
//! ```
//!
//! ## Testing Against a Fake Transport
//!
//! Anything implementing [`RequestDispatcher`] can stand in for the network:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bigcommerce_api::RestClient;
//!
//! let client = RestClient::with_dispatcher(Arc::new(my_fake_dispatcher));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: clients are `Send + Sync` and cheap to clone
//! - **No retries**: every operation is exactly one HTTP round-trip

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiHost, ApiVersion, BigCommerceConfig, BigCommerceConfigBuilder, ClientId,
    DeletePolicy, StoreHash,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RequestDispatcher, RestClient, RestError,
};

// Re-export resource facades
pub use rest::{
    InventoryReader, InventoryResource, ResourceError, Shipment, ShipmentItem, ShipmentManager,
};

pub use async_trait::async_trait;
