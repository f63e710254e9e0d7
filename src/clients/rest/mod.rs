//! REST API client for the BigCommerce API.
//!
//! - [`RestClient`]: verb methods (`get`, `post`, `put`, `delete`) over a
//!   shared [`RequestDispatcher`](crate::clients::RequestDispatcher)
//! - [`RestError`]: error type for REST API operations
//!
//! # Path Normalization
//!
//! Paths are relative to the store base URI and always start with `/`:
//! `v2/orders/1/shipments` becomes `/v2/orders/1/shipments`. Query strings are
//! passed through untouched.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
