use asaas_core::{Page, Params, Result};

use crate::pagination::Paginator;
use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/financialTransactions";

/// Account statement (`/v3/financialTransactions`).
#[derive(Debug, Clone, Copy)]
pub struct FinancialTransactions<'a> {
    http: &'a HttpTransport,
}

impl<'a> FinancialTransactions<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// One page of statement entries, filtered by `startDate`, `finishDate`
    /// and `order`.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Every statement entry matching `params`.
    #[must_use]
    pub fn list_all(&self, params: &Params) -> Paginator<'a> {
        Paginator::new(self.http, BASE_PATH, params.clone())
    }
}
