use asaas_core::{Params, Record, Result};

use crate::transport::HttpTransport;
use crate::types::PaymentFilter;

const BASE_PATH: &str = "/v3/finance";

/// Balance and statistics (`/v3/finance`).
#[derive(Debug, Clone, Copy)]
pub struct Finance<'a> {
    http: &'a HttpTransport,
}

impl<'a> Finance<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Current account balance.
    pub async fn get_balance(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/balance"), &Params::new())
            .await
    }

    /// Totals of the payments matching `filter`.
    ///
    /// The page window of the filter is not sent.
    pub async fn get_payment_statistics(&self, filter: &PaymentFilter) -> Result<Record> {
        let mut params = filter.to_params();
        params.remove("offset");
        params.remove("limit");
        self.http
            .get(&format!("{BASE_PATH}/payment/statistics"), &params)
            .await
    }

    /// Split totals of the account.
    pub async fn get_split_statistics(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/split/statistics"), &Params::new())
            .await
    }
}
