//! REST client for the BigCommerce API.
//!
//! [`RestClient`] turns verb calls into [`HttpRequest`]s and hands them to a
//! shared [`RequestDispatcher`].

use std::sync::Arc;

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse, RequestDispatcher};
use crate::config::{BigCommerceConfig, DeletePolicy};

/// REST API client for a BigCommerce store.
///
/// Provides `get`, `post`, `put` and `delete` with path normalization. The
/// client is cheap to clone: clones share the same dispatcher.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{AccessToken, BigCommerceConfig, RestClient, StoreHash};
///
/// let config = BigCommerceConfig::builder()
///     .store_hash(StoreHash::new("abc123").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .build()?;
///
/// let client = RestClient::new(&config);
/// let response = client.get("/v2/orders/55/shipments").await?;
/// ```
#[derive(Clone)]
pub struct RestClient {
    dispatcher: Arc<dyn RequestDispatcher>,
    delete_policy: DeletePolicy,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("delete_policy", &self.delete_policy)
            .finish_non_exhaustive()
    }
}

impl RestClient {
    /// Creates a REST client backed by a new [`HttpClient`] for `config`.
    #[must_use]
    pub fn new(config: &BigCommerceConfig) -> Self {
        Self {
            dispatcher: Arc::new(HttpClient::new(config)),
            delete_policy: config.delete_policy(),
        }
    }

    /// Creates a REST client around an injected dispatcher.
    ///
    /// The delete policy defaults to [`DeletePolicy::StatusBlind`].
    #[must_use]
    pub fn with_dispatcher(dispatcher: Arc<dyn RequestDispatcher>) -> Self {
        Self {
            dispatcher,
            delete_policy: DeletePolicy::default(),
        }
    }

    /// Returns a copy of this client using `policy` for deletes.
    #[must_use]
    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    /// Returns the delete status policy.
    #[must_use]
    pub const fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for transport failures.
    pub async fn get(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for transport failures.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body)).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for transport failures.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body)).await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for transport failures.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None).await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.dispatcher.dispatch(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// Ensures exactly one leading `/` and rejects paths that are empty once
/// slashes are removed. Any query string is left untouched.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim_start_matches('/');

    if path.is_empty() || path.starts_with('?') {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("/{path}"))
}
