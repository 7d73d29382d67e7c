use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::pagination::Paginator;
use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/chargebacks";

/// Card chargebacks (`/v3/chargebacks`).
#[derive(Debug, Clone, Copy)]
pub struct Chargebacks<'a> {
    http: &'a HttpTransport,
}

impl<'a> Chargebacks<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// One page of chargebacks.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(&format!("{BASE_PATH}/"), params).await
    }

    /// Every chargeback matching `params`.
    #[must_use]
    pub fn list_all(&self, params: &Params) -> Paginator<'a> {
        Paginator::new(self.http, format!("{BASE_PATH}/"), params.clone())
    }

    /// Contest a chargeback.
    pub async fn create_dispute<B: Serialize + ?Sized>(
        &self,
        chargeback_id: &str,
        dispute: &B,
    ) -> Result<Record> {
        self.http
            .post(&format!("{BASE_PATH}/{chargeback_id}/dispute"), dispute)
            .await
    }
}
