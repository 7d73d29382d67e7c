use serde::Serialize;

use asaas_core::{Record, Result};

use crate::transport::HttpTransport;

const BASE_PATH: &str = "/v3/notifications";

/// Customer notification settings (`/v3/notifications`).
///
/// Use [`Customers::get_notifications`](crate::resources::Customers::get_notifications)
/// to read them.
#[derive(Debug, Clone, Copy)]
pub struct Notifications<'a> {
    http: &'a HttpTransport,
}

impl<'a> Notifications<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// Change one notification.
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        notification_id: &str,
        update: &B,
    ) -> Result<Record> {
        self.http
            .put(&format!("{BASE_PATH}/{notification_id}"), update)
            .await
    }

    /// Change several notifications of one customer at once.
    pub async fn update_batch<B: Serialize + ?Sized>(&self, batch: &B) -> Result<Record> {
        self.http.put(&format!("{BASE_PATH}/batch"), batch).await
    }
}
