use reqwest::Method;
use serde::Serialize;

use asaas_core::{Params, Record, Result};

use crate::transport::{FileUpload, HttpTransport};

const BASE_PATH: &str = "/v3/myAccount";

/// The authenticated account (`/v3/myAccount`).
#[derive(Debug, Clone, Copy)]
pub struct MyAccount<'a> {
    http: &'a HttpTransport,
}

impl<'a> MyAccount<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Commercial data of the account.
    pub async fn get_commercial_info(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/commercialInfo/"), &Params::new())
            .await
    }

    /// Change the commercial data of the account.
    pub async fn update_commercial_info<B: Serialize + ?Sized>(&self, info: &B) -> Result<Record> {
        self.http
            .post(&format!("{BASE_PATH}/commercialInfo/"), info)
            .await
    }

    /// Save the look of the payment checkout.
    pub async fn save_checkout_config<B: Serialize + ?Sized>(&self, config: &B) -> Result<Record> {
        self.http
            .post(&format!("{BASE_PATH}/paymentCheckoutConfig/"), config)
            .await
    }

    /// Look of the payment checkout.
    pub async fn get_checkout_config(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/paymentCheckoutConfig/"), &Params::new())
            .await
    }

    /// Bank account number of the account.
    pub async fn get_account_number(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/accountNumber"), &Params::new())
            .await
    }

    /// Fees charged to the account.
    pub async fn get_fees(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/fees/"), &Params::new())
            .await
    }

    /// Approval status of the account.
    pub async fn get_status(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/status/"), &Params::new())
            .await
    }

    /// Send a file for the pending document group `document_id`.
    pub async fn upload_document(&self, document_id: &str, file: &FileUpload) -> Result<Record> {
        self.http
            .upload(
                Method::POST,
                &format!("{BASE_PATH}/documents/{document_id}"),
                file,
                &Params::new(),
            )
            .await
    }

    /// Documents still required to approve the account.
    pub async fn list_pending_documents(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/documents"), &Params::new())
            .await
    }

    /// One sent document file.
    pub async fn get_document_file(&self, file_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/documents/files/{file_id}"), &Params::new())
            .await
    }

    /// Replace a sent document file.
    pub async fn update_document_file(&self, file_id: &str, file: &FileUpload) -> Result<Record> {
        self.http
            .upload(
                Method::POST,
                &format!("{BASE_PATH}/documents/files/{file_id}"),
                file,
                &Params::new(),
            )
            .await
    }

    /// Remove a sent document file.
    pub async fn delete_document_file(&self, file_id: &str) -> Result<Record> {
        self.http
            .delete(&format!("{BASE_PATH}/documents/files/{file_id}"), &Params::new())
            .await
    }

    /// Close the account.
    pub async fn delete_account(&self, remove_reason: &str) -> Result<Record> {
        self.http
            .delete(
                &format!("{BASE_PATH}/"),
                &Params::new().set("removeReason", remove_reason),
            )
            .await
    }
}
