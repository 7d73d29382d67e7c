use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::pagination::Paginator;
use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/anticipations";

/// Receivable anticipations (`/v3/anticipations`).
#[derive(Debug, Clone, Copy)]
pub struct Anticipations<'a> {
    http: &'a HttpTransport,
}

impl<'a> Anticipations<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Request an anticipation of a payment or installment.
    pub async fn create<B: Serialize + ?Sized>(&self, anticipation: &B) -> Result<Record> {
        self.http.post(BASE_PATH, anticipation).await
    }

    /// One page of anticipations, filtered by `payment`, `installment` or `status`.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Every anticipation matching `params`.
    #[must_use]
    pub fn list_all(&self, params: &Params) -> Paginator<'a> {
        Paginator::new(self.http, BASE_PATH, params.clone())
    }

    /// Retrieve an anticipation.
    pub async fn get(&self, anticipation_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{anticipation_id}"), &Params::new())
            .await
    }

    /// Cancel a pending anticipation.
    pub async fn cancel(&self, anticipation_id: &str) -> Result<Record> {
        self.http
            .post_empty(&format!("{BASE_PATH}/{anticipation_id}/cancel"))
            .await
    }

    /// Simulate an anticipation without requesting it.
    pub async fn simulate<B: Serialize + ?Sized>(&self, simulation: &B) -> Result<Record> {
        self.http
            .post(&format!("{BASE_PATH}/simulate"), simulation)
            .await
    }

    /// Change the automatic anticipation settings.
    pub async fn update_auto_config<B: Serialize + ?Sized>(&self, config: &B) -> Result<Record> {
        self.http
            .put(&format!("{BASE_PATH}/configurations"), config)
            .await
    }

    /// Automatic anticipation settings.
    pub async fn get_auto_config(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/configurations"), &Params::new())
            .await
    }

    /// Anticipation limits of the account.
    pub async fn get_limits(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/limits"), &Params::new())
            .await
    }
}
