//! HTTP-specific error types for the BigCommerce API client.
//!
//! - [`HttpResponseError`]: a non-2xx response from the API
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: unified error type for all HTTP-related failures
//!
//! The dispatcher itself never produces [`HttpError::Response`]; status codes
//! are interpreted by the response decoder in [`crate::rest`].

use thiserror::Error;

/// Error describing a non-successful HTTP response.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 422,
///     message: r#"[{"status":422,"message":"The field 'items' is invalid."}]"#.to_string(),
///     error_reference: None,
/// };
///
/// assert!(error.to_string().contains("422"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, as text.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// ```rust,ignore
/// match dispatcher.dispatch(request).await {
///     Ok(response) => { /* status not yet interpreted */ }
///     Err(HttpError::InvalidRequest(e)) => { /* never sent */ }
///     Err(HttpError::Network(e)) => { /* transport failure */ }
///     Err(HttpError::Response(e)) => { /* non-2xx, raised by the decoder */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code_in_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"title":"Not Found"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"HTTP 404: {"title":"Not Found"}"#);
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use post without specifying data."
        );
    }

    #[test]
    fn test_invalid_request_error_missing_body_type() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_http_error_wraps_variants_transparently() {
        let error: HttpError = InvalidHttpRequestError::MissingBodyType.into();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );

        let error: HttpError = HttpResponseError {
            code: 500,
            message: "boom".to_string(),
            error_reference: Some("req-1".to_string()),
        }
        .into();
        assert!(matches!(error, HttpError::Response(ref e) if e.code == 500));
    }
}
