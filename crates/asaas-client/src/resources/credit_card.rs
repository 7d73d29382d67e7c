use asaas_core::{Record, Result};

use crate::transport::HttpTransport;
use crate::types::TokenizeCreditCard;

const BASE_PATH: &str = "/v3/creditCard";

/// Card tokenization (`/v3/creditCard`).
#[derive(Debug, Clone, Copy)]
pub struct CreditCard<'a> {
    http: &'a HttpTransport,
}

impl<'a> CreditCard<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Tokenize a card. The returned `creditCardToken` replaces raw card data
    /// in later payments.
    pub async fn tokenize(&self, card: &TokenizeCreditCard) -> Result<Record> {
        self.http
            .post(&format!("{BASE_PATH}/tokenizeCreditCard"), card)
            .await
    }
}
