//! REST-specific error types for the BigCommerce API client.
//!
//! - [`RestError::InvalidPath`]: a REST API path failed validation
//! - [`RestError::Http`]: wraps underlying HTTP errors

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_path_error_includes_path_in_message() {
        let error = RestError::InvalidPath {
            path: "?page=2".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: ?page=2");
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 500,
            message: "Internal Server Error".to_string(),
            error_reference: None,
        });

        let rest_error: RestError = http_error.into();
        assert!(matches!(rest_error, RestError::Http(_)));
        assert!(rest_error.to_string().contains("Internal Server Error"));
    }
}
