//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction so that a built
//! [`BigCommerceConfig`](crate::BigCommerceConfig) always holds usable values.

use crate::error::ConfigError;
use std::fmt;

/// The store hash identifying a BigCommerce store.
///
/// This is the `{store_hash}` segment of
/// `https://api.bigcommerce.com/stores/{store_hash}/`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StoreHash;
///
/// let hash = StoreHash::new("abc123").unwrap();
/// assert_eq!(hash.as_ref(), "abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreHash(String);

impl StoreHash {
    /// Creates a new validated store hash.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreHash`] if the hash is empty, or
    /// [`ConfigError::InvalidStoreHash`] if it contains anything other than
    /// ASCII letters and digits.
    pub fn new(hash: impl Into<String>) -> Result<Self, ConfigError> {
        let hash = hash.into().trim().to_string();
        if hash.is_empty() {
            return Err(ConfigError::EmptyStoreHash);
        }
        if !hash.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidStoreHash { hash });
        }
        Ok(Self(hash))
    }
}

impl AsRef<str> for StoreHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An API account access token, sent as `X-Auth-Token`.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)`.
///
/// ```rust
/// use bigcommerce_api::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// An API account client ID, sent as `X-Auth-Client`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API host, used to point the client at a proxy or test server.
///
/// Only `http` and `https` schemes are accepted. A trailing slash is dropped
/// so that paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiHost;
///
/// let host = ApiHost::new("http://localhost:3000/").unwrap();
/// assert_eq!(host.as_ref(), "http://localhost:3000");
/// assert_eq!(host.scheme(), "http");
/// assert_eq!(host.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl ApiHost {
    /// The production BigCommerce API host.
    pub const DEFAULT: &'static str = "https://api.bigcommerce.com";

    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidApiHost { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        if !matches!(&url[..scheme_end], "http" | "https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl Default for ApiHost {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_hash_rejects_empty_string() {
        assert!(matches!(StoreHash::new(""), Err(ConfigError::EmptyStoreHash)));
        assert!(matches!(StoreHash::new("  "), Err(ConfigError::EmptyStoreHash)));
    }

    #[test]
    fn test_store_hash_rejects_path_characters() {
        assert!(matches!(
            StoreHash::new("abc/123"),
            Err(ConfigError::InvalidStoreHash { hash }) if hash == "abc/123"
        ));
        assert!(StoreHash::new("abc 123").is_err());
    }

    #[test]
    fn test_store_hash_trims_whitespace() {
        let hash = StoreHash::new(" abc123 ").unwrap();
        assert_eq!(hash.as_ref(), "abc123");
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_client_id_rejects_empty_string() {
        assert!(matches!(ClientId::new(""), Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_api_host_validates_format() {
        let host = ApiHost::new("https://api.bigcommerce.com").unwrap();
        assert_eq!(host.scheme(), "https");
        assert_eq!(host.host_name(), "api.bigcommerce.com");

        let host = ApiHost::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(host.scheme(), "http");
        assert_eq!(host.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_api_host_rejects_invalid() {
        assert!(ApiHost::new("api.bigcommerce.com").is_err());
        assert!(ApiHost::new("https://").is_err());
        assert!(ApiHost::new("ftp://api.bigcommerce.com").is_err());
    }

    #[test]
    fn test_api_host_default_matches_production() {
        let host = ApiHost::default();
        assert_eq!(host.as_ref(), ApiHost::DEFAULT);
        assert_eq!(host.scheme(), "https");
        assert_eq!(host.host_name(), "api.bigcommerce.com");
        assert_eq!(host, ApiHost::new(ApiHost::DEFAULT).unwrap());
    }
}
