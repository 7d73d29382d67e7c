use serde::Serialize;
use serde_json::json;

use asaas_core::{Page, Params, Record, Result};

use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/paymentDunnings";

/// Debt recovery of overdue payments (`/v3/paymentDunnings`).
#[derive(Debug, Clone, Copy)]
pub struct PaymentDunnings<'a> {
    http: &'a HttpTransport,
}

impl<'a> PaymentDunnings<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    fn path(dunning_id: &str, action: &str) -> String {
        format!("{BASE_PATH}/{dunning_id}/{action}")
    }

    /// Open a dunning for an overdue payment.
    pub async fn create<B: Serialize + ?Sized>(&self, dunning: &B) -> Result<Record> {
        self.http.post(BASE_PATH, dunning).await
    }

    /// One page of dunnings.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Retrieve a dunning.
    pub async fn get(&self, dunning_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{dunning_id}"), &Params::new())
            .await
    }

    /// Cancel a dunning.
    pub async fn cancel(&self, dunning_id: &str) -> Result<Record> {
        self.http.post_empty(&Self::path(dunning_id, "cancel")).await
    }

    /// Resend the supporting documents of a dunning.
    pub async fn resend_documents<B: Serialize + ?Sized>(
        &self,
        dunning_id: &str,
        documents: &B,
    ) -> Result<Record> {
        self.http
            .post(&Self::path(dunning_id, "documents"), documents)
            .await
    }

    /// One page of events of a dunning.
    pub async fn list_history(&self, dunning_id: &str, params: &Params) -> Result<Page> {
        self.http
            .list(&Self::path(dunning_id, "history"), params)
            .await
    }

    /// One page of partial payments received through a dunning.
    pub async fn list_partial_payments(&self, dunning_id: &str, params: &Params) -> Result<Page> {
        self.http
            .list(&Self::path(dunning_id, "partialPayments"), params)
            .await
    }

    /// Simulate a dunning for `payment_id`.
    pub async fn simulate(&self, payment_id: &str) -> Result<Record> {
        self.http
            .post(
                &format!("{BASE_PATH}/simulate"),
                &json!({ "payment": payment_id }),
            )
            .await
    }

    /// One page of payments eligible for a dunning.
    pub async fn list_available_payments(&self, params: &Params) -> Result<Page> {
        self.http
            .list(&format!("{BASE_PATH}/paymentsAvailableForDunning"), params)
            .await
    }
}
