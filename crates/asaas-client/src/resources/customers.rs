use asaas_core::{Page, Params, Record, Result};

use crate::pagination::Paginator;
use crate::transport::HttpTransport;
use crate::types::{CustomerFilter, CustomerUpdate, NewCustomer};

const BASE_PATH: &str = "/v3/customers";

/// Customers (`/v3/customers`).
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    http: &'a HttpTransport,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Create a customer.
    pub async fn create(&self, customer: &NewCustomer) -> Result<Record> {
        self.http.post(BASE_PATH, customer).await
    }

    /// One page of customers.
    pub async fn list(&self, filter: &CustomerFilter) -> Result<Page> {
        self.http.list(BASE_PATH, &filter.to_params()).await
    }

    /// Every customer matching `filter`; `offset` and `limit` are ignored.
    #[must_use]
    pub fn list_all(&self, filter: &CustomerFilter) -> Paginator<'a> {
        Paginator::new(self.http, BASE_PATH, filter.to_params())
    }

    /// Retrieve a customer, e.g. `cus_000005401844`.
    pub async fn get(&self, customer_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{customer_id}"), &Params::new())
            .await
    }

    /// Change the fields set in `update`.
    pub async fn update(&self, customer_id: &str, update: &CustomerUpdate) -> Result<Record> {
        self.http
            .put(&format!("{BASE_PATH}/{customer_id}"), update)
            .await
    }

    /// Remove a customer. Removed customers can be restored.
    pub async fn delete(&self, customer_id: &str) -> Result<Record> {
        self.http
            .delete(&format!("{BASE_PATH}/{customer_id}"), &Params::new())
            .await
    }

    /// Restore a removed customer.
    pub async fn restore(&self, customer_id: &str) -> Result<Record> {
        self.http
            .post_empty(&format!("{BASE_PATH}/{customer_id}/restore"))
            .await
    }

    /// Notification settings of a customer.
    pub async fn get_notifications(&self, customer_id: &str) -> Result<Record> {
        self.http
            .get(
                &format!("{BASE_PATH}/{customer_id}/notifications"),
                &Params::new(),
            )
            .await
    }
}
