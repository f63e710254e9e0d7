//! Configuration types for the BigCommerce API client.
//!
//! # Overview
//!
//! - [`BigCommerceConfig`]: credentials, host, and request policy for a store
//! - [`BigCommerceConfigBuilder`]: builder for [`BigCommerceConfig`]
//! - [`StoreHash`], [`AccessToken`], [`ClientId`], [`ApiHost`]: validated newtypes
//! - [`ApiVersion`]: the `/v2` and `/v3` API path prefixes
//! - [`DeletePolicy`]: how delete operations treat the response status
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, BigCommerceConfig, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.store_hash().as_ref(), "abc123");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiHost, ClientId, StoreHash};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// How delete operations interpret the HTTP status of the response.
///
/// BigCommerce answers a successful delete with `204 No Content`. Existing
/// callers of this API treat any completed round-trip as a successful delete,
/// so that remains the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Any response is success; only transport failures are errors.
    ///
    /// A non-2xx status is logged at `warn` level and otherwise ignored.
    #[default]
    StatusBlind,
    /// Non-2xx responses are reported as errors.
    Strict,
}

/// Configuration for a BigCommerce store connection.
///
/// `BigCommerceConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{
///     AccessToken, ApiHost, BigCommerceConfig, ClientId, DeletePolicy, StoreHash,
/// };
///
/// let config = BigCommerceConfig::builder()
///     .store_hash(StoreHash::new("abc123").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .client_id(ClientId::new("client").unwrap())
///     .api_host(ApiHost::new("http://localhost:8080").unwrap())
///     .delete_policy(DeletePolicy::Strict)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.delete_policy(), DeletePolicy::Strict);
/// ```
#[derive(Clone, Debug)]
pub struct BigCommerceConfig {
    store_hash: StoreHash,
    access_token: AccessToken,
    client_id: Option<ClientId>,
    api_host: ApiHost,
    user_agent_prefix: Option<String>,
    delete_policy: DeletePolicy,
}

impl BigCommerceConfig {
    /// Creates a new builder for constructing a `BigCommerceConfig`.
    #[must_use]
    pub fn builder() -> BigCommerceConfigBuilder {
        BigCommerceConfigBuilder::new()
    }

    /// Returns the store hash.
    #[must_use]
    pub const fn store_hash(&self) -> &StoreHash {
        &self.store_hash
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the client ID, if configured.
    #[must_use]
    pub const fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    /// Returns the API host (the production host unless overridden).
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the delete status policy.
    #[must_use]
    pub const fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    /// Returns the store base URI, e.g. `https://api.bigcommerce.com/stores/abc123`.
    #[must_use]
    pub fn base_uri(&self) -> String {
        format!(
            "{}/stores/{}",
            self.api_host.as_ref(),
            self.store_hash.as_ref()
        )
    }
}

// Verify BigCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceConfig>();
};

/// Builder for constructing [`BigCommerceConfig`] instances.
///
/// Required fields are `store_hash` and `access_token`.
///
/// # Defaults
///
/// - `client_id`: `None`
/// - `api_host`: `https://api.bigcommerce.com`
/// - `user_agent_prefix`: `None`
/// - `delete_policy`: [`DeletePolicy::StatusBlind`]
#[derive(Debug, Default)]
pub struct BigCommerceConfigBuilder {
    store_hash: Option<StoreHash>,
    access_token: Option<AccessToken>,
    client_id: Option<ClientId>,
    api_host: Option<ApiHost>,
    user_agent_prefix: Option<String>,
    delete_policy: Option<DeletePolicy>,
}

impl BigCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store hash (required).
    #[must_use]
    pub fn store_hash(mut self, hash: StoreHash) -> Self {
        self.store_hash = Some(hash);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the client ID sent as `X-Auth-Client`.
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Overrides the API host.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how delete operations treat non-2xx responses.
    #[must_use]
    pub const fn delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = Some(policy);
        self
    }

    /// Builds the [`BigCommerceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_hash` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<BigCommerceConfig, ConfigError> {
        let store_hash = self
            .store_hash
            .ok_or(ConfigError::MissingRequiredField {
                field: "store_hash",
            })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(BigCommerceConfig {
            store_hash,
            access_token,
            client_id: self.client_id,
            api_host: self.api_host.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            delete_policy: self.delete_policy.unwrap_or_default(),
        })
    }
}
