//! Resource-specific error types for REST API operations.
//!
//! The status of a response is mapped as follows:
//!
//! - **204**: not an error; the caller gets a zero value
//! - **404**: [`ResourceError::NotFound`]
//! - **Other non-2xx**: [`ResourceError::Http`] wrapping an [`HttpResponseError`]
//!
//! A 2xx body that is not valid JSON for the expected type becomes
//! [`ResourceError::Decode`].
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{ResourceError, ShipmentManager};
//!
//! match ShipmentManager::new(&client).get_shipment(55, 1).await {
//!     Ok(shipment) => println!("Tracking: {}", shipment.tracking_number),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{resource} {id} not found");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{HttpError, HttpResponseError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Shipment").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// The operation needs an ID the caller did not supply.
    #[error("Cannot {operation} {resource} without an id")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "update").
        operation: &'static str,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The type name of the resource being decoded.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be encoded.
    #[error("Failed to encode {resource} request: {source}")]
    Encode {
        /// The type name of the resource being encoded.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Creates a `ResourceError` from a non-successful HTTP status.
    ///
    /// - 404 -> `NotFound`
    /// - Other -> `Http(HttpError::Response(..))` carrying the body text
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::rest::ResourceError;
    ///
    /// let error = ResourceError::from_http_response(404, "", "Shipment", Some("9"), None);
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &str,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            _ => Self::Http(HttpError::Response(HttpResponseError {
                code,
                message: body.to_string(),
                error_reference: request_id.map(ToString::to_string),
            })),
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// Returns the HTTP status code behind this error, if there was one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Http(HttpError::Response(e)) => Some(e.code),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
