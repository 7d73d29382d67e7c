use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/invoices";

/// Service invoices (`/v3/invoices`).
#[derive(Debug, Clone, Copy)]
pub struct Invoices<'a> {
    http: &'a HttpTransport,
}

impl<'a> Invoices<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Schedule an invoice.
    pub async fn schedule<B: Serialize + ?Sized>(&self, invoice: &B) -> Result<Record> {
        self.http.post(BASE_PATH, invoice).await
    }

    /// One page of invoices.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Retrieve an invoice.
    pub async fn get(&self, invoice_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{invoice_id}"), &Params::new())
            .await
    }

    /// Change a scheduled invoice.
    pub async fn update<B: Serialize + ?Sized>(&self, invoice_id: &str, update: &B) -> Result<Record> {
        self.http
            .put(&format!("{BASE_PATH}/{invoice_id}"), update)
            .await
    }

    /// Issue a scheduled invoice now.
    pub async fn authorize(&self, invoice_id: &str) -> Result<Record> {
        self.http
            .post_empty(&format!("{BASE_PATH}/{invoice_id}/authorize"))
            .await
    }

    /// Cancel an invoice.
    pub async fn cancel(&self, invoice_id: &str) -> Result<Record> {
        self.http
            .post_empty(&format!("{BASE_PATH}/{invoice_id}/cancel"))
            .await
    }
}
