use asaas_core::{AsaasError, Record, Result};

use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/sandbox/payment";

/// Test-only actions of the sandbox environment (`/v3/sandbox/payment`).
///
/// Every call fails with [`AsaasError::Configuration`] before any request is
/// sent unless the client selects the sandbox environment or its base URL is
/// [`SANDBOX_URL`](asaas_core::SANDBOX_URL).
#[derive(Debug, Clone, Copy)]
pub struct Sandbox<'a> {
    http: &'a HttpTransport,
}

impl<'a> Sandbox<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    fn ensure_sandbox(&self) -> Result<()> {
        if self.http.config().targets_sandbox() {
            Ok(())
        } else {
            Err(AsaasError::Configuration(
                "sandbox endpoints require a sandbox client".into(),
            ))
        }
    }

    /// Confirm a payment as if it had been paid.
    pub async fn confirm_payment(&self, payment_id: &str) -> Result<Record> {
        self.ensure_sandbox()?;
        self.http
            .post_empty(&format!("{BASE_PATH}/{payment_id}/confirm"))
            .await
    }

    /// Make a pending payment overdue.
    pub async fn force_overdue(&self, payment_id: &str) -> Result<Record> {
        self.ensure_sandbox()?;
        self.http
            .post_empty(&format!("{BASE_PATH}/{payment_id}/overdue"))
            .await
    }
}
