//! Core types for the Asaas SDK.
//!
//! This crate holds everything the HTTP layer needs but that does not itself
//! touch the network:
//!
//! - **Configuration**: `ClientConfig`, `Environment`
//! - **Errors**: `AsaasError`, `FieldError` and the status-code mapping
//! - **Pages**: `Page`, `Record`
//! - **Query parameters**: `Params`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod page;
pub mod params;

pub use config::{
    ClientConfig, Environment, DEFAULT_BACKOFF_FACTOR, DEFAULT_MAX_RETRIES,
    DEFAULT_TIMEOUT_SECONDS, PRODUCTION_URL, SANDBOX_URL,
};
pub use error::{AsaasError, FieldError, Result};
pub use page::{into_record, Page, Record, DEFAULT_PAGE_LIMIT};
pub use params::Params;
