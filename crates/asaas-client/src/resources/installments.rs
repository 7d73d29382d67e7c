use serde::Serialize;
use serde_json::{json, Value};

use asaas_core::{Page, Params, Record, Result};

use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/installments";

/// Installment plans (`/v3/installments`).
#[derive(Debug, Clone, Copy)]
pub struct Installments<'a> {
    http: &'a HttpTransport,
}

impl<'a> Installments<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    fn path(installment_id: &str, action: &str) -> String {
        format!("{BASE_PATH}/{installment_id}/{action}")
    }

    /// Create an installment plan.
    pub async fn create<B: Serialize + ?Sized>(&self, installment: &B) -> Result<Record> {
        self.http.post(&format!("{BASE_PATH}/"), installment).await
    }

    /// One page of installment plans.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Retrieve an installment plan.
    pub async fn get(&self, installment_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{installment_id}"), &Params::new())
            .await
    }

    /// Remove an installment plan.
    pub async fn delete(&self, installment_id: &str) -> Result<Record> {
        self.http
            .delete(&format!("{BASE_PATH}/{installment_id}"), &Params::new())
            .await
    }

    /// Charges of an installment plan, optionally filtered by `status`.
    pub async fn list_payments(&self, installment_id: &str, params: &Params) -> Result<Record> {
        self.http
            .get(&Self::path(installment_id, "payments"), params)
            .await
    }

    /// Cancel the pending and overdue charges of a plan.
    pub async fn cancel_payments(&self, installment_id: &str) -> Result<Record> {
        self.http
            .delete(&Self::path(installment_id, "payments"), &Params::new())
            .await
    }

    /// Payment book (carnê) of a plan, with optional `sort`/`order`.
    pub async fn get_payment_book(&self, installment_id: &str, params: &Params) -> Result<Record> {
        self.http
            .get(&Self::path(installment_id, "paymentBook"), params)
            .await
    }

    /// Refund a card installment plan.
    pub async fn refund<B: Serialize + ?Sized>(
        &self,
        installment_id: &str,
        refund: &B,
    ) -> Result<Record> {
        self.http
            .post(&Self::path(installment_id, "refund"), refund)
            .await
    }

    /// Replace the splits of a plan.
    pub async fn update_splits(&self, installment_id: &str, splits: &[Value]) -> Result<Record> {
        self.http
            .put(
                &Self::path(installment_id, "splits"),
                &json!({ "splits": splits }),
            )
            .await
    }
}
