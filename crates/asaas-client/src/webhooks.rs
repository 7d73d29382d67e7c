//! Helpers for receiving webhook deliveries.
//!
//! Asaas sends each event as a JSON `POST` carrying the token configured on
//! the webhook (see [`NewWebhook::auth_token`](crate::NewWebhook::auth_token))
//! in the [`WEBHOOK_TOKEN_HEADER`] header. The receiving server is the
//! caller's; these helpers only authenticate and decode the delivery.
//!
//! ```
//! use asaas::webhooks::{verify_webhook_token, WebhookEvent};
//!
//! let body = br#"{"id":"evt_1","event":"PAYMENT_RECEIVED","payment":{"id":"pay_1","value":10.0}}"#;
//! assert!(verify_webhook_token(Some("s3cret"), "s3cret"));
//!
//! let event = WebhookEvent::parse(body).unwrap();
//! assert_eq!(event.event, "PAYMENT_RECEIVED");
//! assert_eq!(event.payment().unwrap()["id"], "pay_1");
//! ```

use serde::Deserialize;
use serde_json::Value;

use asaas_core::{Record, Result};

/// Header carrying the webhook authentication token.
pub const WEBHOOK_TOKEN_HEADER: &str = "asaas-access-token";

/// A decoded webhook delivery.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    /// Event id, stable across redeliveries. Use it to deduplicate.
    #[serde(default)]
    pub id: Option<String>,
    /// Event name, e.g. `PAYMENT_RECEIVED` or `TRANSFER_DONE`.
    pub event: String,
    /// When the event was created, as sent by the API.
    #[serde(default)]
    pub date_created: Option<String>,
    /// Every other top-level field, keyed by object name (`payment`,
    /// `transfer`, `invoice`, ...).
    #[serde(flatten)]
    pub objects: Record,
}

impl WebhookEvent {
    /// Decode a delivery body.
    ///
    /// # Errors
    ///
    /// Returns [`AsaasError::Serialization`](asaas_core::AsaasError::Serialization)
    /// if the body is not a JSON object with an `event` field.
    pub fn parse(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Object of the event named `name`.
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&Record> {
        self.objects.get(name).and_then(Value::as_object)
    }

    /// The payment carried by `PAYMENT_*` events.
    #[must_use]
    pub fn payment(&self) -> Option<&Record> {
        self.object("payment")
    }

    /// Event family: the part of the name before the first `_`.
    #[must_use]
    pub fn category(&self) -> &str {
        self.event
            .split_once('_')
            .map_or(self.event.as_str(), |(category, _)| category)
    }
}

/// Check the [`WEBHOOK_TOKEN_HEADER`] value of a delivery against the
/// configured token.
///
/// Comparison is constant-time. A missing header or an empty configured
/// token never matches.
#[must_use]
pub fn verify_webhook_token(received: Option<&str>, expected: &str) -> bool {
    let Some(received) = received else {
        tracing::warn!(header = WEBHOOK_TOKEN_HEADER, "Webhook delivery without token header");
        return false;
    };
    if expected.is_empty() {
        tracing::warn!("Webhook token not configured, rejecting delivery");
        return false;
    }

    let matches = constant_time_eq(received.as_bytes(), expected.as_bytes());
    if !matches {
        tracing::warn!("Webhook token mismatch");
    }
    matches
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}
