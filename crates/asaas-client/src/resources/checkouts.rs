use serde::Serialize;

use asaas_core::{Record, Result};

use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/checkouts";

/// Hosted checkout sessions (`/v3/checkouts`).
#[derive(Debug, Clone, Copy)]
pub struct Checkouts<'a> {
    http: &'a HttpTransport,
}

impl<'a> Checkouts<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Open a checkout session.
    pub async fn create<B: Serialize + ?Sized>(&self, checkout: &B) -> Result<Record> {
        self.http.post(BASE_PATH, checkout).await
    }

    /// Cancel an open checkout session.
    pub async fn cancel(&self, checkout_id: &str) -> Result<Record> {
        self.http
            .post_empty(&format!("{BASE_PATH}/{checkout_id}/cancel"))
            .await
    }
}
