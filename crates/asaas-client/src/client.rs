//! The `Asaas` client handle.

use std::sync::Arc;

use asaas_core::{ClientConfig, Result};

use crate::resources::{
    Accounts, Anticipations, Bill, Chargebacks, Checkouts, CreditBureauReport, CreditCard,
    Customers, Escrow, Finance, FinancialTransactions, FiscalInfo, Installments, Invoices,
    LeanPayments, MobilePhoneRecharges, MyAccount, Notifications, PaymentDunnings, PaymentLinks,
    Payments, Pix, Sandbox, Subscriptions, Transfers, Wallets, Webhooks,
};
use crate::transport::HttpTransport;

/// Asaas API client.
///
/// Cloning is cheap: clones share one connection pool, which is released
/// when the last handle is dropped or [closed](Asaas::close). Resource
/// clients borrow the handle, so they cannot outlive it.
#[derive(Debug, Clone)]
pub struct Asaas {
    http: Arc<HttpTransport>,
}

impl Asaas {
    /// Production client with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`AsaasError::Configuration`](asaas_core::AsaasError::Configuration)
    /// if `api_key` is empty or not a valid header value.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Sandbox client with default settings.
    ///
    /// # Errors
    ///
    /// Same as [`Asaas::new`].
    pub fn sandbox(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key).with_sandbox(true))
    }

    /// Client built from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AsaasError::Configuration`](asaas_core::AsaasError::Configuration)
    /// if the configuration is invalid.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = HttpTransport::new(config)?;
        tracing::debug!(
            base_url = %http.config().base_url(),
            sandbox = http.config().is_sandbox(),
            "Asaas client created"
        );
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Client configured from `ASAAS_*` environment variables.
    ///
    /// Numeric variables that cannot be parsed fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AsaasError::Configuration`](asaas_core::AsaasError::Configuration)
    /// if `ASAAS_API_KEY` is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Configuration of this client.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Release this handle. The pool closes once no clone remains.
    pub fn close(self) {
        drop(self);
    }

    /// Subaccounts.
    #[must_use]
    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(&self.http)
    }

    /// Receivable anticipations.
    #[must_use]
    pub fn anticipations(&self) -> Anticipations<'_> {
        Anticipations::new(&self.http)
    }

    /// Bill payments.
    #[must_use]
    pub fn bill(&self) -> Bill<'_> {
        Bill::new(&self.http)
    }

    /// Card chargebacks.
    #[must_use]
    pub fn chargebacks(&self) -> Chargebacks<'_> {
        Chargebacks::new(&self.http)
    }

    /// Hosted checkout sessions.
    #[must_use]
    pub fn checkouts(&self) -> Checkouts<'_> {
        Checkouts::new(&self.http)
    }

    /// Credit bureau reports.
    #[must_use]
    pub fn credit_bureau_report(&self) -> CreditBureauReport<'_> {
        CreditBureauReport::new(&self.http)
    }

    /// Card tokenization.
    #[must_use]
    pub fn credit_card(&self) -> CreditCard<'_> {
        CreditCard::new(&self.http)
    }

    /// Customers.
    #[must_use]
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(&self.http)
    }

    /// Escrowed payments.
    #[must_use]
    pub fn escrow(&self) -> Escrow<'_> {
        Escrow::new(&self.http)
    }

    /// Balance and statistics.
    #[must_use]
    pub fn finance(&self) -> Finance<'_> {
        Finance::new(&self.http)
    }

    /// Account statement.
    #[must_use]
    pub fn financial_transactions(&self) -> FinancialTransactions<'_> {
        FinancialTransactions::new(&self.http)
    }

    /// Fiscal settings and code tables.
    #[must_use]
    pub fn fiscal_info(&self) -> FiscalInfo<'_> {
        FiscalInfo::new(&self.http)
    }

    /// Installment plans.
    #[must_use]
    pub fn installments(&self) -> Installments<'_> {
        Installments::new(&self.http)
    }

    /// Service invoices.
    #[must_use]
    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(&self.http)
    }

    /// Payments with compact responses.
    #[must_use]
    pub fn lean(&self) -> LeanPayments<'_> {
        LeanPayments::new(&self.http)
    }

    /// Prepaid phone top-ups.
    #[must_use]
    pub fn mobile_phone_recharges(&self) -> MobilePhoneRecharges<'_> {
        MobilePhoneRecharges::new(&self.http)
    }

    /// The authenticated account.
    #[must_use]
    pub fn my_account(&self) -> MyAccount<'_> {
        MyAccount::new(&self.http)
    }

    /// Customer notification settings.
    #[must_use]
    pub fn notifications(&self) -> Notifications<'_> {
        Notifications::new(&self.http)
    }

    /// Debt recovery.
    #[must_use]
    pub fn payment_dunnings(&self) -> PaymentDunnings<'_> {
        PaymentDunnings::new(&self.http)
    }

    /// Payment links.
    #[must_use]
    pub fn payment_links(&self) -> PaymentLinks<'_> {
        PaymentLinks::new(&self.http)
    }

    /// Payments.
    #[must_use]
    pub fn payments(&self) -> Payments<'_> {
        Payments::new(&self.http)
    }

    /// PIX.
    #[must_use]
    pub fn pix(&self) -> Pix<'_> {
        Pix::new(&self.http)
    }

    /// Sandbox-only test actions.
    #[must_use]
    pub fn sandbox_actions(&self) -> Sandbox<'_> {
        Sandbox::new(&self.http)
    }

    /// Subscriptions.
    #[must_use]
    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(&self.http)
    }

    /// Transfers.
    #[must_use]
    pub fn transfers(&self) -> Transfers<'_> {
        Transfers::new(&self.http)
    }

    /// Wallets.
    #[must_use]
    pub fn wallets(&self) -> Wallets<'_> {
        Wallets::new(&self.http)
    }

    /// Webhook endpoint configuration.
    #[must_use]
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(&self.http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asaas_core::{AsaasError, SANDBOX_URL};

    fn unreachable_client() -> Asaas {
        Asaas::with_config(
            ClientConfig::new("key")
                .with_base_url("http://127.0.0.1:9")
                .with_max_retries(0),
        )
        .unwrap()
    }

    #[test]
    fn sandbox_constructor_targets_sandbox() {
        let client = Asaas::sandbox("key").unwrap();
        assert!(client.config().is_sandbox());
        assert_eq!(client.config().base_url(), SANDBOX_URL);
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(
            Asaas::new("").unwrap_err(),
            AsaasError::Configuration(_)
        ));
    }

    #[test]
    fn clones_share_one_transport() {
        let client = Asaas::new("key").unwrap();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.http, &clone.http));

        let pool = Arc::downgrade(&client.http);
        client.close();
        assert!(pool.upgrade().is_some());
        clone.close();
        assert!(pool.upgrade().is_none());
    }

    #[tokio::test]
    async fn pool_is_released_when_a_call_fails() {
        async fn fetch(client: Asaas) -> Result<()> {
            client.customers().get("cus_1").await?;
            Ok(())
        }

        let client = unreachable_client();
        let pool = Arc::downgrade(&client.http);

        let err = fetch(client).await.unwrap_err();
        assert!(matches!(
            err,
            AsaasError::Connection(_) | AsaasError::Timeout(_) | AsaasError::Http(_)
        ));
        assert!(pool.upgrade().is_none());
    }

    #[tokio::test]
    async fn sandbox_actions_refuse_production() {
        let client = unreachable_client();
        let err = client
            .sandbox_actions()
            .confirm_payment("pay_1")
            .await
            .unwrap_err();
        assert!(matches!(err, AsaasError::Configuration(_)));
    }
}
