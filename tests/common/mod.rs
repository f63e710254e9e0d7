//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use bigcommerce_api::{
    AccessToken, ApiHost, BigCommerceConfig, ClientId, DeletePolicy, HttpClient, RestClient,
    StoreHash,
};
use wiremock::MockServer;

pub const STORE_HASH: &str = "abc123";
pub const ACCESS_TOKEN: &str = "test-token";

/// Builds a config pointing at `server` for store `abc123`.
pub fn config_for(server: &MockServer, policy: DeletePolicy) -> BigCommerceConfig {
    BigCommerceConfig::builder()
        .store_hash(StoreHash::new(STORE_HASH).unwrap())
        .access_token(AccessToken::new(ACCESS_TOKEN).unwrap())
        .client_id(ClientId::new("test-client").unwrap())
        .api_host(ApiHost::new(server.uri()).unwrap())
        .delete_policy(policy)
        .build()
        .unwrap()
}

/// Builds a REST client talking to `server` over HTTP.
pub fn client_for(server: &MockServer) -> RestClient {
    RestClient::new(&config_for(server, DeletePolicy::StatusBlind))
}

/// Builds a REST client talking to `server` with the given delete policy.
pub fn client_with_policy(server: &MockServer, policy: DeletePolicy) -> RestClient {
    RestClient::with_dispatcher(Arc::new(HttpClient::new(&config_for(server, policy))))
        .with_delete_policy(policy)
}

/// Path of `suffix` under the test store.
pub fn store_path(suffix: &str) -> String {
    format!("/stores/{STORE_HASH}{suffix}")
}
