//! Common test utilities for the Asaas client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use asaas::{Asaas, ClientConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

/// API key used by every test client.
pub const API_KEY: &str = "test-api-key";

/// Configuration pointed at the mock server, with instant retries.
pub fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(API_KEY)
        .with_base_url(server.uri())
        .with_backoff_factor(0.0)
}

/// Client pointed at the mock server.
pub fn client(server: &MockServer) -> Asaas {
    Asaas::with_config(config(server)).expect("valid test configuration")
}

/// A customer record as the API returns it.
pub fn customer(id: &str, name: &str) -> Value {
    json!({
        "object": "customer",
        "id": id,
        "name": name,
        "cpfCnpj": "24971563792",
        "email": format!("{id}@example.com"),
        "deleted": false
    })
}

/// A list page as the API returns it.
pub fn page(data: Vec<Value>, offset: u64, limit: u32, has_more: bool, total: u64) -> Value {
    json!({
        "object": "list",
        "hasMore": has_more,
        "totalCount": total,
        "limit": limit,
        "offset": offset,
        "data": data
    })
}
