use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::pagination::Paginator;
use crate::transport::HttpTransport;
use crate::types::{CreditCardPayment, NewSubscription, SubscriptionFilter};

const BASE_PATH: &str = "/v3/subscriptions";

/// Recurring charges (`/v3/subscriptions`).
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    http: &'a HttpTransport,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    fn path(subscription_id: &str, action: &str) -> String {
        format!("{BASE_PATH}/{subscription_id}/{action}")
    }

    /// Create a subscription.
    pub async fn create(&self, subscription: &NewSubscription) -> Result<Record> {
        self.http.post(&format!("{BASE_PATH}/"), subscription).await
    }

    /// One page of subscriptions.
    pub async fn list(&self, filter: &SubscriptionFilter) -> Result<Page> {
        self.http.list(BASE_PATH, &filter.to_params()).await
    }

    /// Every subscription matching `filter`; `offset` and `limit` are ignored.
    #[must_use]
    pub fn list_all(&self, filter: &SubscriptionFilter) -> Paginator<'a> {
        Paginator::new(self.http, BASE_PATH, filter.to_params())
    }

    /// Retrieve a subscription.
    pub async fn get(&self, subscription_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{subscription_id}"), &Params::new())
            .await
    }

    /// Change a subscription. `updatePendingPayments` also rewrites open charges.
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        subscription_id: &str,
        update: &B,
    ) -> Result<Record> {
        self.http
            .put(&format!("{BASE_PATH}/{subscription_id}"), update)
            .await
    }

    /// Remove a subscription.
    pub async fn delete(&self, subscription_id: &str) -> Result<Record> {
        self.http
            .delete(&format!("{BASE_PATH}/{subscription_id}"), &Params::new())
            .await
    }

    /// Charges generated by a subscription, optionally filtered by `status`.
    pub async fn list_payments(&self, subscription_id: &str, params: &Params) -> Result<Record> {
        self.http
            .get(&Self::path(subscription_id, "payments"), params)
            .await
    }

    /// Payment book (carnê) for `month`/`year`, with optional `sort`/`order`.
    pub async fn get_payment_book(&self, subscription_id: &str, params: &Params) -> Result<Record> {
        self.http
            .get(&Self::path(subscription_id, "paymentBook"), params)
            .await
    }

    /// Replace the card charged by a subscription.
    pub async fn update_credit_card(
        &self,
        subscription_id: &str,
        card: &CreditCardPayment,
    ) -> Result<Record> {
        self.http
            .put(&Self::path(subscription_id, "creditCard"), card)
            .await
    }

    /// Configure automatic invoice issuing.
    pub async fn create_invoice_settings<B: Serialize + ?Sized>(
        &self,
        subscription_id: &str,
        settings: &B,
    ) -> Result<Record> {
        self.http
            .post(&Self::path(subscription_id, "invoiceSettings"), settings)
            .await
    }

    /// Invoice settings of a subscription.
    pub async fn get_invoice_settings(&self, subscription_id: &str) -> Result<Record> {
        self.http
            .get(&Self::path(subscription_id, "invoiceSettings"), &Params::new())
            .await
    }

    /// Change the invoice settings of a subscription.
    pub async fn update_invoice_settings<B: Serialize + ?Sized>(
        &self,
        subscription_id: &str,
        settings: &B,
    ) -> Result<Record> {
        self.http
            .put(&Self::path(subscription_id, "invoiceSettings"), settings)
            .await
    }

    /// Stop issuing invoices for a subscription.
    pub async fn delete_invoice_settings(&self, subscription_id: &str) -> Result<Record> {
        self.http
            .delete(&Self::path(subscription_id, "invoiceSettings"), &Params::new())
            .await
    }

    /// One page of invoices issued for a subscription.
    pub async fn list_invoices(&self, subscription_id: &str, params: &Params) -> Result<Page> {
        self.http
            .list(&Self::path(subscription_id, "invoices"), params)
            .await
    }
}
