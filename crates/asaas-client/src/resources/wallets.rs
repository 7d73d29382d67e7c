use asaas_core::{Params, Record, Result};

use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/wallets";

/// Wallet ids used in split configurations (`/v3/wallets`).
#[derive(Debug, Clone, Copy)]
pub struct Wallets<'a> {
    http: &'a HttpTransport,
}

impl<'a> Wallets<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Wallets of the account.
    pub async fn get(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/"), &Params::new())
            .await
    }
}
