use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/lean/payments";

/// Payments with compact responses (`/v3/lean/payments`).
#[derive(Debug, Clone, Copy)]
pub struct LeanPayments<'a> {
    http: &'a HttpTransport,
}

impl<'a> LeanPayments<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    fn path(payment_id: &str, action: &str) -> String {
        format!("{BASE_PATH}/{payment_id}/{action}")
    }

    /// Create a payment.
    pub async fn create<B: Serialize + ?Sized>(&self, payment: &B) -> Result<Record> {
        self.http.post(&format!("{BASE_PATH}/"), payment).await
    }

    /// One page of payments.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Retrieve a payment.
    pub async fn get(&self, payment_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{payment_id}"), &Params::new())
            .await
    }

    /// Change a payment.
    pub async fn update<B: Serialize + ?Sized>(&self, payment_id: &str, update: &B) -> Result<Record> {
        self.http
            .put(&format!("{BASE_PATH}/{payment_id}"), update)
            .await
    }

    /// Remove a payment.
    pub async fn delete(&self, payment_id: &str) -> Result<Record> {
        self.http
            .delete(&format!("{BASE_PATH}/{payment_id}"), &Params::new())
            .await
    }

    /// Restore a removed payment.
    pub async fn restore(&self, payment_id: &str) -> Result<Record> {
        self.http.post_empty(&Self::path(payment_id, "restore")).await
    }

    /// Refund a payment.
    pub async fn refund<B: Serialize + ?Sized>(&self, payment_id: &str, refund: &B) -> Result<Record> {
        self.http.post(&Self::path(payment_id, "refund"), refund).await
    }

    /// Capture an authorized card payment.
    pub async fn capture_authorized(&self, payment_id: &str) -> Result<Record> {
        self.http
            .post_empty(&Self::path(payment_id, "captureAuthorizedPayment"))
            .await
    }

    /// Mark a payment as received in cash.
    pub async fn receive_in_cash<B: Serialize + ?Sized>(
        &self,
        payment_id: &str,
        receipt: &B,
    ) -> Result<Record> {
        self.http
            .post(&Self::path(payment_id, "receiveInCash"), receipt)
            .await
    }

    /// Undo a cash receipt.
    pub async fn undo_received_in_cash(&self, payment_id: &str) -> Result<Record> {
        self.http
            .post_empty(&Self::path(payment_id, "undoReceivedInCash"))
            .await
    }
}
