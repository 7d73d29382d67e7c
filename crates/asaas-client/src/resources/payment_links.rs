use reqwest::Method;
use serde::Serialize;

use asaas_core::{Page, Params, Record, Result};

use crate::transport::{FileUpload, HttpTransport};

const BASE_PATH: &str = "/v3/paymentLinks";

/// Shareable payment links (`/v3/paymentLinks`).
#[derive(Debug, Clone, Copy)]
pub struct PaymentLinks<'a> {
    http: &'a HttpTransport,
}

impl<'a> PaymentLinks<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    fn image_path(link_id: &str, image_id: &str) -> String {
        format!("{BASE_PATH}/{link_id}/images/{image_id}")
    }

    /// Create a payment link.
    pub async fn create<B: Serialize + ?Sized>(&self, link: &B) -> Result<Record> {
        self.http.post(BASE_PATH, link).await
    }

    /// One page of payment links.
    pub async fn list(&self, params: &Params) -> Result<Page> {
        self.http.list(BASE_PATH, params).await
    }

    /// Retrieve a payment link.
    pub async fn get(&self, link_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{link_id}"), &Params::new())
            .await
    }

    /// Change a payment link.
    pub async fn update<B: Serialize + ?Sized>(&self, link_id: &str, update: &B) -> Result<Record> {
        self.http
            .put(&format!("{BASE_PATH}/{link_id}"), update)
            .await
    }

    /// Remove a payment link.
    pub async fn delete(&self, link_id: &str) -> Result<Record> {
        self.http
            .delete(&format!("{BASE_PATH}/{link_id}"), &Params::new())
            .await
    }

    /// Restore a removed payment link.
    pub async fn restore(&self, link_id: &str) -> Result<Record> {
        self.http
            .post_empty(&format!("{BASE_PATH}/{link_id}/restore"))
            .await
    }

    /// Add an image to a payment link.
    pub async fn add_image(&self, link_id: &str, image: &FileUpload) -> Result<Record> {
        self.http
            .upload(
                Method::POST,
                &format!("{BASE_PATH}/{link_id}/images"),
                image,
                &Params::new(),
            )
            .await
    }

    /// Images of a payment link.
    pub async fn list_images(&self, link_id: &str) -> Result<Record> {
        self.http
            .get(&format!("{BASE_PATH}/{link_id}/images"), &Params::new())
            .await
    }

    /// One image of a payment link.
    pub async fn get_image(&self, link_id: &str, image_id: &str) -> Result<Record> {
        self.http
            .get(&Self::image_path(link_id, image_id), &Params::new())
            .await
    }

    /// Make an image the main one of its payment link.
    pub async fn set_main_image(&self, link_id: &str, image_id: &str) -> Result<Record> {
        self.http
            .put(
                &format!("{}/setAsMain", Self::image_path(link_id, image_id)),
                &serde_json::json!({}),
            )
            .await
    }

    /// Remove an image from a payment link.
    pub async fn delete_image(&self, link_id: &str, image_id: &str) -> Result<Record> {
        self.http
            .delete(&Self::image_path(link_id, image_id), &Params::new())
            .await
    }
}
