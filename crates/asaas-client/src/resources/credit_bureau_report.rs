use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::pagination::Paginator;
use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/creditBureauReport";

/// Credit bureau (Serasa) reports (`/v3/creditBureauReport`).
#[derive(Debug, Clone, Copy)]
pub struct CreditBureauReport<'a> {
    http: &'a HttpTransport,
}

impl<'a> CreditBureauReport<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Request a report for a `customer` or `cpfCnpj` in a given `state`.
    pub async fn create<B: Serialize + ?Sized>(&self, request: &B) -> Result<Record> {
        self.http.post(BASE_PATH, request).await
    }

    /// One page of reports, filtered by `startDate`/`endDate`.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Every report matching `params`.
    #[must_use]
    pub fn list_all(&self, params: &Params) -> Paginator<'a> {
        Paginator::new(self.http, BASE_PATH, params.clone())
    }

    /// Retrieve a report.
    pub async fn get(&self, report_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{report_id}"), &Params::new())
            .await
    }
}
