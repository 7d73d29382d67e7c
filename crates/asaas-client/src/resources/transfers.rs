use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::pagination::Paginator;
use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/transfers";

/// Bank, PIX and internal transfers (`/v3/transfers`).
#[derive(Debug, Clone, Copy)]
pub struct Transfers<'a> {
    http: &'a HttpTransport,
}

impl<'a> Transfers<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Create a transfer.
    pub async fn create<B: Serialize + ?Sized>(&self, transfer: &B) -> Result<Record> {
        self.http.post(&format!("{BASE_PATH}/"), transfer).await
    }

    /// One page of transfers, filtered by `dateCreated[ge]`, `type` and the like.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Every transfer matching `params`.
    #[must_use]
    pub fn list_all(&self, params: &Params) -> Paginator<'a> {
        Paginator::new(self.http, BASE_PATH, params.clone())
    }

    /// Retrieve a transfer.
    pub async fn get(&self, transfer_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{transfer_id}"), &Params::new())
            .await
    }

    /// Cancel a scheduled transfer.
    pub async fn cancel(&self, transfer_id: &str) -> Result<Record> {
        self.http
            .delete(&format!("{BASE_PATH}/{transfer_id}/cancel"), &Params::new())
            .await
    }
}
