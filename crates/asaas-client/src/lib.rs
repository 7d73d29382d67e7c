//! Asaas Client SDK.
//!
//! An async client for the Asaas payment platform REST API v3. Every API
//! resource group has a thin client reached through [`Asaas`]; calls return
//! records as JSON maps ([`Record`]) or single pages ([`Page`]), and list
//! endpoints can be walked lazily with a [`Paginator`].
//!
//! Idempotent requests (GET, PUT, DELETE) are retried with exponential
//! backoff on 5xx responses, timeouts and connection failures. Error
//! responses map to typed [`AsaasError`] variants.
//!
//! # Example
//!
//! ```no_run
//! use asaas::{Asaas, BillingType, NewCustomer, NewPayment};
//! use chrono::NaiveDate;
//!
//! # async fn example() -> Result<(), asaas::AsaasError> {
//! let client = Asaas::sandbox("your-api-key")?;
//!
//! let customer = client
//!     .customers()
//!     .create(&NewCustomer {
//!         email: Some("joao@example.com".into()),
//!         ..NewCustomer::new("João Silva", "12345678901")
//!     })
//!     .await?;
//!
//! let due = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let payment = client
//!     .payments()
//!     .create(&NewPayment::new(
//!         customer["id"].as_str().unwrap_or_default(),
//!         BillingType::Pix,
//!         150.0,
//!         due,
//!     ))
//!     .await?;
//!
//! println!("Created payment {}", payment["id"]);
//! client.close();
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
pub mod pagination;
pub mod resources;
pub mod transport;
mod types;
pub mod webhooks;

pub use asaas_core::{
    into_record, AsaasError, ClientConfig, Environment, FieldError, Page, Params, Record, Result,
    PRODUCTION_URL, SANDBOX_URL,
};
pub use client::Asaas;
pub use pagination::{Paginator, DEFAULT_PAGE_SIZE};
pub use transport::FileUpload;
pub use types::*;
pub use webhooks::{verify_webhook_token, WebhookEvent};
