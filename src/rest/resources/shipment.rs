//! Order shipment resources.
//!
//! [`ShipmentManager`] mirrors the `/v2/orders/{order_id}/shipments`
//! sub-resource:
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | GET | `/shipments?{filters}` | [`ShipmentManager::list_shipments`] |
//! | GET | `/shipments/{id}` | [`ShipmentManager::get_shipment`] |
//! | POST | `/shipments` | [`ShipmentManager::create_shipment`] |
//! | PUT | `/shipments/{id}` | [`ShipmentManager::update_shipment`] |
//! | DELETE | `/shipments/{id}` | [`ShipmentManager::delete_shipment`] |
//! | DELETE | `/shipments` | [`ShipmentManager::delete_all_shipments`] |
//!
//! # Writable fields
//!
//! Create and update send only the fields BigCommerce accepts on write; see
//! [`Shipment::writable`]. Server-assigned IDs, `date_created` and both
//! address blocks are only ever received.
//!
//! A shipment that does not cover every line item of its order makes
//! BigCommerce mark the order as partially shipped.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{Shipment, ShipmentItem, ShipmentManager};
//!
//! let shipments = ShipmentManager::new(&client);
//! let created = shipments
//!     .create_shipment(
//!         55,
//!         &Shipment {
//!             tracking_number: "1Z999".to_string(),
//!             items: vec![ShipmentItem::new(10, 2)],
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//!
//! println!("Created shipment {:?}", created.id);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::clients::RestClient;
use crate::config::{ApiVersion, DeletePolicy};
use crate::rest::{decode_or_default, ensure_success, query_string, ResourceError};

/// Treats JSON `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A billing or shipping address attached to a shipment.
///
/// Received on read only; never sent on create or update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ShipmentAddress {
    /// First name of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// First street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_1: Option<String>,
    /// Second street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Country name, e.g. "United States".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Two-letter ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_iso2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One order line covered by a shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShipmentItem {
    /// The order product (line item) ID. Required.
    pub order_product_id: u64,
    /// The catalog product ID, filled in by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Number of units shipped.
    #[serde(default)]
    pub quantity: u32,
}

impl ShipmentItem {
    /// Creates an item shipping `quantity` units of order line `order_product_id`.
    #[must_use]
    pub const fn new(order_product_id: u64, quantity: u32) -> Self {
        Self {
            order_product_id,
            product_id: None,
            quantity,
        }
    }
}

/// A shipment belonging to an order.
///
/// `id`, `order_id`, `customer_id`, `date_created` and the addresses are set
/// by the server. The string fields always serialize, as empty strings when
/// unset.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Shipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    /// The order address this shipment ships to. Writable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_address_id: Option<u64>,
    /// Creation time as sent by the server (RFC 2822).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub tracking_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub merchant_shipping_cost: String,
    #[serde(deserialize_with = "null_as_default")]
    pub shipping_method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub comments: String,
    /// Shipping provider code, e.g. `ups` or `fedex`.
    #[serde(deserialize_with = "null_as_default")]
    pub shipping_provider: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tracking_carrier: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<ShipmentAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShipmentAddress>,

    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<ShipmentItem>,
}

impl Shipment {
    const NAME: &'static str = "Shipment";

    /// Returns a copy holding only the fields BigCommerce accepts on write.
    ///
    /// Kept: `order_address_id`, `tracking_number`, `shipping_method`,
    /// `comments`, `shipping_provider`, `tracking_carrier` and `items`.
    /// Everything else is reset to its default, so the server-assigned IDs,
    /// `date_created` and both addresses are omitted from the JSON and
    /// `merchant_shipping_cost` is sent as `""`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::rest::{Shipment, ShipmentAddress};
    ///
    /// let shipment = Shipment {
    ///     id: Some(9),
    ///     tracking_number: "1Z999".to_string(),
    ///     billing_address: Some(ShipmentAddress::default()),
    ///     ..Default::default()
    /// };
    ///
    /// let writable = shipment.writable();
    /// assert_eq!(writable.id, None);
    /// assert_eq!(writable.billing_address, None);
    /// assert_eq!(writable.tracking_number, "1Z999");
    /// ```
    #[must_use]
    pub fn writable(&self) -> Self {
        Self {
            order_address_id: self.order_address_id,
            tracking_number: self.tracking_number.clone(),
            shipping_method: self.shipping_method.clone(),
            comments: self.comments.clone(),
            shipping_provider: self.shipping_provider.clone(),
            tracking_carrier: self.tracking_carrier.clone(),
            items: self.items.clone(),
            ..Self::default()
        }
    }

    fn write_body(&self) -> Result<serde_json::Value, ResourceError> {
        serde_json::to_value(self.writable()).map_err(|source| ResourceError::Encode {
            resource: Self::NAME,
            source,
        })
    }
}

/// Manages the shipments of orders.
#[derive(Debug, Clone, Copy)]
pub struct ShipmentManager<'a> {
    client: &'a RestClient,
}

impl<'a> ShipmentManager<'a> {
    /// Creates a manager over `client`.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    fn collection_path(order_id: u64) -> String {
        format!(
            "{}/orders/{order_id}/shipments",
            ApiVersion::V2.path_prefix()
        )
    }

    fn member_path(order_id: u64, shipment_id: u64) -> String {
        format!("{}/{shipment_id}", Self::collection_path(order_id))
    }

    /// Lists the shipments of an order.
    ///
    /// Sends `GET /v2/orders/{order_id}/shipments?{filters}`. A 204 yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport failures, non-2xx statuses
    /// and malformed bodies.
    pub async fn list_shipments(
        &self,
        order_id: u64,
        filters: &HashMap<String, String>,
    ) -> Result<Vec<Shipment>, ResourceError> {
        let path = format!(
            "{}{}",
            Self::collection_path(order_id),
            query_string(filters)
        );
        let response = self.client.get(&path).await?;
        decode_or_default(&response, Shipment::NAME, None)
    }

    /// Fetches a single shipment.
    ///
    /// Sends `GET /v2/orders/{order_id}/shipments/{shipment_id}`. A 204 yields
    /// `Shipment::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for 404, and [`ResourceError`] for
    /// transport failures, other non-2xx statuses and malformed bodies.
    pub async fn get_shipment(
        &self,
        order_id: u64,
        shipment_id: u64,
    ) -> Result<Shipment, ResourceError> {
        let response = self
            .client
            .get(&Self::member_path(order_id, shipment_id))
            .await?;
        let id = shipment_id.to_string();
        decode_or_default(&response, Shipment::NAME, Some(&id))
    }

    /// Creates a shipment on an order.
    ///
    /// Sends `POST /v2/orders/{order_id}/shipments` with the
    /// [writable](Shipment::writable) fields of `shipment`. Returns the
    /// shipment as stored by the server; a 204 yields `Shipment::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for encoding failures, transport failures,
    /// non-2xx statuses and malformed bodies.
    pub async fn create_shipment(
        &self,
        order_id: u64,
        shipment: &Shipment,
    ) -> Result<Shipment, ResourceError> {
        let body = shipment.write_body()?;
        let response = self
            .client
            .post(&Self::collection_path(order_id), body)
            .await?;
        decode_or_default(&response, Shipment::NAME, None)
    }

    /// Updates an existing shipment, addressed by `shipment.id`.
    ///
    /// Sends `PUT /v2/orders/{order_id}/shipments/{shipment.id}` with the
    /// [writable](Shipment::writable) fields of `shipment`. Returns the
    /// shipment as stored by the server; a 204 yields `Shipment::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without sending anything if
    /// `shipment.id` is `None`, and [`ResourceError`] for encoding failures,
    /// transport failures, non-2xx statuses and malformed bodies.
    pub async fn update_shipment(
        &self,
        order_id: u64,
        shipment: &Shipment,
    ) -> Result<Shipment, ResourceError> {
        let shipment_id = shipment.id.ok_or(ResourceError::MissingId {
            resource: Shipment::NAME,
            operation: "update",
        })?;

        let body = shipment.write_body()?;
        let response = self
            .client
            .put(&Self::member_path(order_id, shipment_id), body)
            .await?;
        let id = shipment_id.to_string();
        decode_or_default(&response, Shipment::NAME, Some(&id))
    }

    /// Deletes one shipment of an order.
    ///
    /// Sends `DELETE /v2/orders/{order_id}/shipments/{shipment_id}` and
    /// discards the body. Under [`DeletePolicy::StatusBlind`] (the default)
    /// any response counts as success.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport failures, and under
    /// [`DeletePolicy::Strict`] also for non-2xx statuses.
    pub async fn delete_shipment(
        &self,
        order_id: u64,
        shipment_id: u64,
    ) -> Result<(), ResourceError> {
        let path = Self::member_path(order_id, shipment_id);
        let id = shipment_id.to_string();
        self.delete(&path, Some(&id)).await
    }

    /// Deletes every shipment of an order.
    ///
    /// Sends `DELETE /v2/orders/{order_id}/shipments`; status handling is the
    /// same as [`delete_shipment`](Self::delete_shipment).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport failures, and under
    /// [`DeletePolicy::Strict`] also for non-2xx statuses.
    pub async fn delete_all_shipments(&self, order_id: u64) -> Result<(), ResourceError> {
        self.delete(&Self::collection_path(order_id), None).await
    }

    async fn delete(&self, path: &str, id: Option<&str>) -> Result<(), ResourceError> {
        let response = self.client.delete(path).await?;

        match self.client.delete_policy() {
            DeletePolicy::Strict => ensure_success(&response, Shipment::NAME, id),
            DeletePolicy::StatusBlind => {
                if !response.is_ok() {
                    tracing::warn!(
                        path,
                        status = response.code,
                        "Ignoring non-success status on shipment delete"
                    );
                }
                Ok(())
            }
        }
    }
}
