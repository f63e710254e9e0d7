//! The transport seam shared by every resource facade.
//!
//! [`RequestDispatcher`] sends one [`HttpRequest`] and hands back the raw
//! [`HttpResponse`]. Authentication, connection pooling, TLS and timeouts all
//! belong to the implementor; [`HttpClient`](crate::clients::HttpClient) is
//! the reqwest-backed default.

use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Sends authenticated requests to the BigCommerce API.
///
/// Implementations must return `Ok` for every response that arrived,
/// whatever its status code, and `Err` only when the request was invalid or
/// the transport failed.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use bigcommerce_api::clients::{HttpError, HttpRequest, HttpResponse, RequestDispatcher};
///
/// struct AlwaysEmpty;
///
/// #[bigcommerce_api::async_trait]
/// impl RequestDispatcher for AlwaysEmpty {
///     async fn dispatch(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(204, HashMap::new(), Vec::new()))
///     }
/// }
/// ```
#[async_trait]
pub trait RequestDispatcher: Send + Sync {
    /// Sends `request` and returns the response without interpreting its status.
    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

#[async_trait]
impl<T: RequestDispatcher + ?Sized> RequestDispatcher for Arc<T> {
    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).dispatch(request).await
    }
}
