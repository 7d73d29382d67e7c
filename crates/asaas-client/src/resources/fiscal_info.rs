use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/fiscalInfo";

/// Invoice issuing settings and fiscal code tables (`/v3/fiscalInfo`).
#[derive(Debug, Clone, Copy)]
pub struct FiscalInfo<'a> {
    http: &'a HttpTransport,
}

impl<'a> FiscalInfo<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Create or replace the fiscal settings of the account.
    pub async fn create_or_update<B: Serialize + ?Sized>(&self, info: &B) -> Result<Record> {
        self.http.post(&format!("{BASE_PATH}/"), info).await
    }

    /// Fiscal settings of the account.
    pub async fn get(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/"), &Params::new())
            .await
    }

    /// Configure issuing through the national invoice portal.
    pub async fn configure_national_portal<B: Serialize + ?Sized>(
        &self,
        config: &B,
    ) -> Result<Record> {
        self.http
            .post(&format!("{BASE_PATH}/nationalPortal"), config)
            .await
    }

    /// Settings accepted by the account's municipality.
    pub async fn list_municipal_options(&self) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/municipalOptions"), &Params::new())
            .await
    }

    /// One page of federal service codes, filtered by `description`.
    pub async fn list_federal_service_codes(&self, params: &Params) -> Result<Page> {
        self.http
            .list(&format!("{BASE_PATH}/federalServiceCodes"), params)
            .await
    }

    /// One page of municipal services, filtered by `description`.
    pub async fn list_services(&self, params: &Params) -> Result<Page> {
        self.http
            .list(&format!("{BASE_PATH}/services"), params)
            .await
    }

    /// One page of NBS codes.
    pub async fn list_nbs_codes(&self, params: &Params) -> Result<Page> {
        self.http
            .list(&format!("{BASE_PATH}/nbsCodes"), params)
            .await
    }

    /// One page of operation indicator codes.
    pub async fn list_operation_indicator_codes(&self, params: &Params) -> Result<Page> {
        self.http
            .list(&format!("{BASE_PATH}/operationIndicatorCodes"), params)
            .await
    }

    /// One page of tax classification codes.
    pub async fn list_tax_classification_codes(&self, params: &Params) -> Result<Page> {
        self.http
            .list(&format!("{BASE_PATH}/taxClassificationCodes"), params)
            .await
    }

    /// One page of tax situation codes.
    pub async fn list_tax_situation_codes(&self, params: &Params) -> Result<Page> {
        self.http
            .list(&format!("{BASE_PATH}/taxSituationCodes"), params)
            .await
    }
}
