use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/pix";

/// PIX keys, QR codes, transactions and automatic PIX (`/v3/pix`).
#[derive(Debug, Clone, Copy)]
pub struct Pix<'a> {
    http: &'a HttpTransport,
}

impl<'a> Pix<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    fn path(suffix: &str) -> String {
        format!("{BASE_PATH}/{suffix}")
    }

    // Address keys

    /// Register a PIX key, usually `{"type": "EVP"}`.
    pub async fn create_address_key<B: Serialize + ?Sized>(&self, key: &B) -> Result<Record> {
        self.http.post(&Self::path("addressKeys"), key).await
    }

    /// One page of PIX keys, filtered by `status`.
    pub async fn list_address_keys(&self, params: &Params) -> Result<Page> {
        self.http.list(&Self::path("addressKeys"), params).await
    }

    /// Retrieve a PIX key.
    pub async fn get_address_key(&self, key_id: &str) -> Result<Record> {
        self.http
            .get(&Self::path(&format!("addressKeys/{key_id}")), &Params::new())
            .await
    }

    /// Remove a PIX key.
    pub async fn delete_address_key(&self, key_id: &str) -> Result<Record> {
        self.http
            .delete(&Self::path(&format!("addressKeys/{key_id}")), &Params::new())
            .await
    }

    // QR codes

    /// Create a static QR code.
    pub async fn create_static_qr_code<B: Serialize + ?Sized>(&self, qr_code: &B) -> Result<Record> {
        self.http.post(&Self::path("qrCodes/static"), qr_code).await
    }

    /// Remove a static QR code.
    pub async fn delete_static_qr_code(&self, qr_code_id: &str) -> Result<Record> {
        self.http
            .delete(
                &Self::path(&format!("qrCodes/static/{qr_code_id}")),
                &Params::new(),
            )
            .await
    }

    /// Pay a QR code given its `payload` and `value`.
    pub async fn pay_qr_code<B: Serialize + ?Sized>(&self, payment: &B) -> Result<Record> {
        self.http.post(&Self::path("qrCodes/pay"), payment).await
    }

    /// Decode a QR code `payload` without paying it.
    pub async fn decode_qr_code<B: Serialize + ?Sized>(&self, qr_code: &B) -> Result<Record> {
        self.http.post(&Self::path("qrCodes/decode"), qr_code).await
    }

    /// Remaining key lookups in the rate-limit bucket.
    pub async fn get_token_bucket(&self) -> Result<Record> {
        self.http
            .get(&Self::path("tokenBucket/addressKey"), &Params::new())
            .await
    }

    // Transactions

    /// One page of PIX transactions.
    pub async fn list_transactions(&self, params: &Params) -> Result<Page> {
        self.http.list(&Self::path("transactions"), params).await
    }

    /// Retrieve a PIX transaction.
    pub async fn get_transaction(&self, transaction_id: &str) -> Result<Record> {
        self.http
            .get(
                &Self::path(&format!("transactions/{transaction_id}")),
                &Params::new(),
            )
            .await
    }

    /// Cancel a scheduled PIX transaction.
    pub async fn cancel_transaction(&self, transaction_id: &str) -> Result<Record> {
        self.http
            .post_empty(&Self::path(&format!("transactions/{transaction_id}/cancel")))
            .await
    }

    // Recurring transactions

    /// One page of recurring PIX transactions.
    pub async fn list_recurrings(&self, params: &Params) -> Result<Page> {
        self.http
            .list(&Self::path("transactions/recurrings"), params)
            .await
    }

    /// Retrieve a recurring PIX transaction.
    pub async fn get_recurring(&self, recurring_id: &str) -> Result<Record> {
        self.http
            .get(
                &Self::path(&format!("transactions/recurrings/{recurring_id}")),
                &Params::new(),
            )
            .await
    }

    /// Cancel a recurring PIX transaction.
    pub async fn cancel_recurring(&self, recurring_id: &str) -> Result<Record> {
        self.http
            .post_empty(&Self::path(&format!(
                "transactions/recurrings/{recurring_id}/cancel"
            )))
            .await
    }

    /// One page of the scheduled items of a recurring transaction.
    pub async fn list_recurring_items(&self, recurring_id: &str, params: &Params) -> Result<Page> {
        self.http
            .list(
                &Self::path(&format!("transactions/recurrings/{recurring_id}/items")),
                params,
            )
            .await
    }

    /// Cancel one scheduled item of a recurring transaction.
    pub async fn cancel_recurring_item(&self, item_id: &str) -> Result<Record> {
        self.http
            .post_empty(&Self::path(&format!(
                "transactions/recurrings/items/{item_id}/cancel"
            )))
            .await
    }

    // Automatic PIX

    /// Create an automatic PIX authorization.
    pub async fn create_automatic_authorization<B: Serialize + ?Sized>(
        &self,
        authorization: &B,
    ) -> Result<Record> {
        self.http
            .post(&Self::path("automatic/authorizations"), authorization)
            .await
    }

    /// One page of automatic PIX authorizations.
    pub async fn list_automatic_authorizations(&self, params: &Params) -> Result<Page> {
        self.http
            .list(&Self::path("automatic/authorizations"), params)
            .await
    }

    /// Retrieve an automatic PIX authorization.
    pub async fn get_automatic_authorization(&self, authorization_id: &str) -> Result<Record> {
        self.http
            .get(
                &Self::path(&format!("automatic/authorizations/{authorization_id}")),
                &Params::new(),
            )
            .await
    }

    /// Cancel an automatic PIX authorization.
    pub async fn cancel_automatic_authorization(&self, authorization_id: &str) -> Result<Record> {
        self.http
            .delete(
                &Self::path(&format!("automatic/authorizations/{authorization_id}")),
                &Params::new(),
            )
            .await
    }

    /// Retrieve an automatic PIX payment instruction.
    pub async fn get_payment_instruction(&self, instruction_id: &str) -> Result<Record> {
        self.http
            .get(
                &Self::path(&format!("automatic/paymentInstructions/{instruction_id}")),
                &Params::new(),
            )
            .await
    }

    /// Automatic PIX payment instructions, optionally filtered by `paymentId`.
    pub async fn list_payment_instructions(&self, params: &Params) -> Result<Record> {
        self.http
            .get(&Self::path("automatic/paymentInstructions"), params)
            .await
    }
}
