//! HTTP client types for BigCommerce API communication.
//!
//! # Overview
//!
//! - [`RequestDispatcher`]: the transport trait every facade depends on
//! - [`HttpClient`]: the reqwest-backed dispatcher with auth headers
//! - [`HttpRequest`] / [`HttpResponse`]: one request/response cycle
//! - [`HttpMethod`], [`DataType`]: request method and body content type
//! - [`rest::RestClient`]: verb-level client over a dispatcher
//!
//! No request is ever retried. A dispatcher reports transport failures only;
//! status codes are interpreted by [`crate::rest::decode`].

mod dispatcher;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use dispatcher::RequestDispatcher;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, NO_CONTENT};

pub use rest::{RestClient, RestError};
