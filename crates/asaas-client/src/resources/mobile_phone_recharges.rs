use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/mobilePhoneRecharges";

/// Prepaid phone top-ups (`/v3/mobilePhoneRecharges`).
#[derive(Debug, Clone, Copy)]
pub struct MobilePhoneRecharges<'a> {
    http: &'a HttpTransport,
}

impl<'a> MobilePhoneRecharges<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Request a top-up of `value` for `phoneNumber`.
    pub async fn create<B: Serialize + ?Sized>(&self, recharge: &B) -> Result<Record> {
        self.http.post(BASE_PATH, recharge).await
    }

    /// One page of top-ups.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Retrieve a top-up.
    pub async fn get(&self, recharge_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{recharge_id}"), &Params::new())
            .await
    }

    /// Cancel a pending top-up.
    pub async fn cancel(&self, recharge_id: &str) -> Result<Record> {
        self.http
            .post_empty(&format!("{BASE_PATH}/{recharge_id}/cancel"))
            .await
    }

    /// Carrier and allowed values for a phone number.
    pub async fn get_provider(&self, phone_number: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{phone_number}/provider"), &Params::new())
            .await
    }
}
