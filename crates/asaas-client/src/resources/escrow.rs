use serde::Serialize;

use asaas_core::{Record, Result};

use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/escrow";

/// Escrowed payments (`/v3/escrow`).
#[derive(Debug, Clone, Copy)]
pub struct Escrow<'a> {
    http: &'a HttpTransport,
}

impl<'a> Escrow<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Release an escrowed payment early.
    pub async fn finish<B: Serialize + ?Sized>(&self, escrow_id: &str, body: &B) -> Result<Record> {
        self.http
            .post(&format!("{BASE_PATH}/{escrow_id}/finish"), body)
            .await
    }
}
