use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::pagination::Paginator;
use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/bill";

/// Bill payments (`/v3/bill`).
#[derive(Debug, Clone, Copy)]
pub struct Bill<'a> {
    http: &'a HttpTransport,
}

impl<'a> Bill<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Schedule the payment of a bill.
    pub async fn create<B: Serialize + ?Sized>(&self, bill: &B) -> Result<Record> {
        self.http.post(BASE_PATH, bill).await
    }

    /// One page of bill payments.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Every bill payment.
    #[must_use]
    pub fn list_all(&self, params: &Params) -> Paginator<'a> {
        Paginator::new(self.http, BASE_PATH, params.clone())
    }

    /// Retrieve a bill payment.
    pub async fn get(&self, bill_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{bill_id}"), &Params::new())
            .await
    }

    /// Cancel a scheduled bill payment.
    pub async fn cancel(&self, bill_id: &str) -> Result<Record> {
        self.http
            .post_empty(&format!("{BASE_PATH}/{bill_id}/cancel"))
            .await
    }

    /// Check a bill by `identificationField` or `barCode` without paying it.
    pub async fn simulate<B: Serialize + ?Sized>(&self, simulation: &B) -> Result<Record> {
        self.http
            .post(&format!("{BASE_PATH}/simulate"), simulation)
            .await
    }
}
