use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::pagination::Paginator;
use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/accounts";

/// Subaccounts (`/v3/accounts`).
#[derive(Debug, Clone, Copy)]
pub struct Accounts<'a> {
    http: &'a HttpTransport,
}

impl<'a> Accounts<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Create a subaccount. The response carries its API key, shown only once.
    pub async fn create<B: Serialize + ?Sized>(&self, account: &B) -> Result<Record> {
        self.http.post(BASE_PATH, account).await
    }

    /// One page of subaccounts, filtered by `cpfCnpj`, `email`, `name` or `walletId`.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Every subaccount matching `params`.
    #[must_use]
    pub fn list_all(&self, params: &Params) -> Paginator<'a> {
        Paginator::new(self.http, BASE_PATH, params.clone())
    }

    /// Retrieve a subaccount.
    pub async fn get(&self, account_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{account_id}"), &Params::new())
            .await
    }

    /// Issue a new API key for a subaccount.
    pub async fn create_access_token(&self, account_id: &str) -> Result<Record> {
        self.http
            .post_empty(&format!("{BASE_PATH}/{account_id}/accessTokens"))
            .await
    }

    /// API keys of a subaccount.
    pub async fn list_access_tokens(&self, account_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{account_id}/accessTokens"), &Params::new())
            .await
    }

    /// Update an API key of a subaccount.
    pub async fn update_access_token(&self, account_id: &str, token_id: &str) -> Result<Record> {
        self.http
            .put(
                &format!("{BASE_PATH}/{account_id}/accessTokens/{token_id}"),
                &serde_json::json!({}),
            )
            .await
    }

    /// Revoke an API key of a subaccount.
    pub async fn delete_access_token(&self, account_id: &str, token_id: &str) -> Result<Record> {
        self.http
            .delete(
                &format!("{BASE_PATH}/{account_id}/accessTokens/{token_id}"),
                &Params::new(),
            )
            .await
    }

    /// Save the escrow configuration of a subaccount.
    pub async fn save_escrow<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        escrow: &B,
    ) -> Result<Record> {
        self.http
            .post(&format!("{BASE_PATH}/{account_id}/escrow"), escrow)
            .await
    }

    /// Escrow configuration of a subaccount.
    pub async fn get_escrow(&self, account_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{account_id}/escrow"), &Params::new())
            .await
    }

    /// Save the escrow configuration applied to new subaccounts.
    pub async fn create_default_escrow<B: Serialize + ?Sized>(&self, escrow: &B) -> Result<Record> {
        self.http.post(&format!("{BASE_PATH}/escrow"), escrow).await
    }

    /// Escrow configuration applied to new subaccounts.
    pub async fn get_default_escrow(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/escrow"), &Params::new())
            .await
    }
}
