use reqwest::Method;
use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::pagination::Paginator;
use crate::transport::{FileUpload, HttpTransport};
use crate::types::{CashReceipt, CreditCardPayment, NewPayment, PaymentFilter, PaymentUpdate, RefundRequest};

const BASE_PATH: &str = "/v3/payments";

/// Payments, also called charges (`/v3/payments`).
#[derive(Debug, Clone, Copy)]
pub struct Payments<'a> {
    http: &'a HttpTransport,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    fn path(payment_id: &str, action: &str) -> String {
        format!("{BASE_PATH}/{payment_id}/{action}")
    }

    /// Create a payment.
    pub async fn create(&self, payment: &NewPayment) -> Result<Record> {
        self.http.post(&format!("{BASE_PATH}/"), payment).await
    }

    /// One page of payments.
    pub async fn list(&self, filter: &PaymentFilter) -> Result<Page> {
        self.http.list(BASE_PATH, &filter.to_params()).await
    }

    /// Every payment matching `filter`; `offset` and `limit` are ignored.
    #[must_use]
    pub fn list_all(&self, filter: &PaymentFilter) -> Paginator<'a> {
        Paginator::new(self.http, BASE_PATH, filter.to_params())
    }

    /// Retrieve a payment.
    pub async fn get(&self, payment_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{payment_id}"), &Params::new())
            .await
    }

    /// Change the fields set in `update`.
    pub async fn update(&self, payment_id: &str, update: &PaymentUpdate) -> Result<Record> {
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

    /// Refund a received payment, fully or partially.
    pub async fn refund(&self, payment_id: &str, refund: &RefundRequest) -> Result<Record> {
        self.http.post(&Self::path(payment_id, "refund"), refund).await
    }

    /// Refund a bank slip payment.
    pub async fn refund_bank_slip(&self, payment_id: &str) -> Result<Record> {
        self.http
            .post_empty(&Self::path(payment_id, "bankSlip/refund"))
            .await
    }

    /// Capture a card payment created with `authorized_only`.
    pub async fn capture_authorized(&self, payment_id: &str) -> Result<Record> {
        self.http
            .post_empty(&Self::path(payment_id, "captureAuthorizedPayment"))
            .await
    }

    /// Pay an existing charge with a credit card.
    pub async fn pay_with_credit_card(
        &self,
        payment_id: &str,
        card: &CreditCardPayment,
    ) -> Result<Record> {
        self.http
            .post(&Self::path(payment_id, "payWithCreditCard"), card)
            .await
    }

    /// Mark a payment as received in cash.
    pub async fn receive_in_cash(&self, payment_id: &str, receipt: &CashReceipt) -> Result<Record> {
        self.http
            .post(&Self::path(payment_id, "receiveInCash"), receipt)
            .await
    }

    /// Undo [`Payments::receive_in_cash`].
    pub async fn undo_received_in_cash(&self, payment_id: &str) -> Result<Record> {
        self.http
            .post_empty(&Self::path(payment_id, "undoReceivedInCash"))
            .await
    }

    /// Simulate fees and net values of a sale.
    pub async fn simulate<B: Serialize + ?Sized>(&self, simulation: &B) -> Result<Record> {
        self.http
            .post(&format!("{BASE_PATH}/simulate"), simulation)
            .await
    }

    /// Current status of a payment.
    pub async fn get_status(&self, payment_id: &str) -> Result<Record> {
        self.http
            .get(&Self::path(payment_id, "status"), &Params::new())
            .await
    }

    /// Billing information: bank slip line, PIX code and card data.
    pub async fn get_billing_info(&self, payment_id: &str) -> Result<Record> {
        self.http
            .get(&Self::path(payment_id, "billingInfo"), &Params::new())
            .await
    }

    /// When and how often the payer viewed the invoice.
    pub async fn get_viewing_info(&self, payment_id: &str) -> Result<Record> {
        self.http
            .get(&Self::path(payment_id, "viewingInfo"), &Params::new())
            .await
    }

    /// Bank slip identification field (linha digitável).
    pub async fn get_identification_field(&self, payment_id: &str) -> Result<Record> {
        self.http
            .get(&Self::path(payment_id, "identificationField"), &Params::new())
            .await
    }

    /// PIX QR code of a payment.
    pub async fn get_pix_qr_code(&self, payment_id: &str) -> Result<Record> {
        self.http
            .get(&Self::path(payment_id, "pixQrCode"), &Params::new())
            .await
    }

    /// Payment creation limits of the account.
    pub async fn get_limits(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/limits"), &Params::new())
            .await
    }

    /// Refunds issued for a payment.
    pub async fn list_refunds(&self, payment_id: &str) -> Result<Record> {
        self.http
            .get(&Self::path(payment_id, "refunds"), &Params::new())
            .await
    }

    /// Chargeback of a payment.
    pub async fn get_chargeback(&self, payment_id: &str) -> Result<Record> {
        self.http
            .get(&Self::path(payment_id, "chargeback"), &Params::new())
            .await
    }

    /// Escrow of a payment.
    pub async fn get_escrow(&self, payment_id: &str) -> Result<Record> {
        self.http
            .get(&Self::path(payment_id, "escrow"), &Params::new())
            .await
    }

    /// Attach a document to a payment.
    ///
    /// `fields` carries the optional `availableAfterPayment` and `type` form
    /// values.
    pub async fn upload_document(
        &self,
        payment_id: &str,
        file: &FileUpload,
        fields: &Params,
    ) -> Result<Record> {
        self.http
            .upload(Method::POST, &Self::path(payment_id, "documents"), file, fields)
            .await
    }

    /// Documents attached to a payment.
    pub async fn list_documents(&self, payment_id: &str) -> Result<Record> {
        self.http
            .get(&Self::path(payment_id, "documents"), &Params::new())
            .await
    }

    /// One attached document.
    pub async fn get_document(&self, payment_id: &str, document_id: &str) -> Result<Record> {
        self.http
            .get(
                &Self::path(payment_id, &format!("documents/{document_id}")),
                &Params::new(),
            )
            .await
    }

    /// Change the settings of an attached document.
    pub async fn update_document<B: Serialize + ?Sized>(
        &self,
        payment_id: &str,
        document_id: &str,
        settings: &B,
    ) -> Result<Record> {
        self.http
            .put(
                &Self::path(payment_id, &format!("documents/{document_id}")),
                settings,
            )
            .await
    }

    /// Remove an attached document.
    pub async fn delete_document(&self, payment_id: &str, document_id: &str) -> Result<Record> {
        self.http
            .delete(
                &Self::path(payment_id, &format!("documents/{document_id}")),
                &Params::new(),
            )
            .await
    }

    /// One page of splits paid by this account.
    pub async fn list_paid_splits(&self, params: &Params) -> Result<Page> {
        self.http
            .list(&format!("{BASE_PATH}/splits/paid"), params)
            .await
    }

    /// One split paid by this account.
    pub async fn get_paid_split(&self, split_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/splits/paid/{split_id}"), &Params::new())
            .await
    }

    /// One page of splits received by this account.
    pub async fn list_received_splits(&self, params: &Params) -> Result<Page> {
        self.http
            .list(&format!("{BASE_PATH}/splits/received"), params)
            .await
    }

    /// One split received by this account.
    pub async fn get_received_split(&self, split_id: &str) -> Result<Record> {
        self.http
            .get(
                &format!("{BASE_PATH}/splits/received/{split_id}"),
                &Params::new(),
            )
            .await
    }
}
