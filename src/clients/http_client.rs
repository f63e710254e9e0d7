//! HTTP client for BigCommerce API communication.
//!
//! This module provides [`HttpClient`], the reqwest-backed
//! [`RequestDispatcher`] that injects the store's authentication headers.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::dispatcher::RequestDispatcher;
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::BigCommerceConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to a BigCommerce store.
///
/// The client handles:
/// - Base URI construction from the store hash and API host
/// - Default headers including User-Agent, `X-Auth-Token` and `X-Auth-Client`
/// - Lowercasing response headers and collecting the raw body
///
/// It performs no retries and never turns a status code into an error.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{BigCommerceConfig, StoreHash, AccessToken};
/// use bigcommerce_api::clients::{HttpClient, HttpMethod, HttpRequest, RequestDispatcher};
///
/// let config = BigCommerceConfig::builder()
///     .store_hash(StoreHash::new("abc123").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let request = HttpRequest::builder(HttpMethod::Get, "/v2/orders/1/shipments")
///     .build()
///     .unwrap();
///
/// let response = client.dispatch(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.bigcommerce.com/stores/abc123`).
    base_uri: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured store.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &BigCommerceConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self::with_reqwest_client(config, client)
    }

    /// Creates a client around an existing reqwest client.
    ///
    /// Use this to share a connection pool or set transport options such as
    /// timeouts and proxies.
    #[must_use]
    pub fn with_reqwest_client(config: &BigCommerceConfig, client: reqwest::Client) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}BigCommerce API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Auth-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );
        if let Some(client_id) = config.client_id() {
            default_headers.insert("X-Auth-Client".to_string(), client_id.as_ref().to_string());
        }

        Self {
            client,
            base_uri: config.base_uri(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl RequestDispatcher for HttpClient {
    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = request.body_bytes() {
            req_builder = req_builder.body(body);
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Dispatching BigCommerce API request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Received BigCommerce API response"
        );

        Ok(HttpResponse::new(code, res_headers, body))
    }
}
