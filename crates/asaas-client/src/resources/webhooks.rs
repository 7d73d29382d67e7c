use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::transport::HttpTransport;
use crate::types::NewWebhook;

const BASE_PATH: &str = "/v3/webhooks";

/// Webhook endpoint configuration (`/v3/webhooks`).
///
/// See [`crate::webhooks`] for handling deliveries.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    http: &'a HttpTransport,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Register an endpoint.
    pub async fn create(&self, webhook: &NewWebhook) -> Result<Record> {
        self.http.post(BASE_PATH, webhook).await
    }

    /// One page of registered endpoints.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Retrieve an endpoint.
    pub async fn get(&self, webhook_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{webhook_id}"), &Params::new())
            .await
    }

    /// Change an endpoint.
    pub async fn update<B: Serialize + ?Sized>(&self, webhook_id: &str, update: &B) -> Result<Record> {
        self.http
            .put(&format!("{BASE_PATH}/{webhook_id}"), update)
            .await
    }

    /// Remove an endpoint.
    pub async fn delete(&self, webhook_id: &str) -> Result<Record> {
        self.http
            .delete(&format!("{BASE_PATH}/{webhook_id}"), &Params::new())
            .await
    }

    /// Resume a delivery queue paused after repeated failures.
    pub async fn remove_backoff(&self, webhook_id: &str) -> Result<Record> {
        self.http
            .post_empty(&format!("{BASE_PATH}/{webhook_id}/removeBackoff"))
            .await
    }
}
