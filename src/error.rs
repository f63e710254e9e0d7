//! Configuration error types for the BigCommerce API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid credentials or hosts are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store hash cannot be empty.
    #[error("Store hash cannot be empty. Please provide the hash from your store's API path.")]
    EmptyStoreHash,

    /// Store hash contains characters that cannot appear in a URL path segment.
    #[error("Invalid store hash '{hash}'. Expected only ASCII letters and digits.")]
    InvalidStoreHash {
        /// The invalid hash that was provided.
        hash: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid API account access token.")]
    EmptyAccessToken,

    /// Client ID was provided but is empty.
    #[error("Client ID cannot be empty when provided.")]
    EmptyClientId,

    /// API version is not one BigCommerce serves.
    #[error("Invalid API version '{version}'. Expected 'v2' or 'v3'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API host URL is invalid.
    #[error("Invalid API host '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://api.bigcommerce.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },
}
