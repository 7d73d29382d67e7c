//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::{AsaasError, Result};

/// Production API base URL.
pub const PRODUCTION_URL: &str = "https://api.asaas.com";

/// Sandbox API base URL.
pub const SANDBOX_URL: &str = "https://sandbox.asaas.com/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Default number of retries for transient failures.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default exponential backoff factor, in seconds.
pub const DEFAULT_BACKOFF_FACTOR: f64 = 0.5;

/// Asaas environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live environment.
    #[default]
    Production,
    /// Isolated test environment with extra test-only endpoints.
    Sandbox,
}

impl Environment {
    /// Base URL for this environment.
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Sandbox => SANDBOX_URL,
        }
    }
}

/// Configuration for an Asaas client.
///
/// Built once and never mutated afterwards: fields are private, the `with_*`
/// methods consume and return the value.
///
/// ```
/// use std::time::Duration;
/// use asaas_core::ClientConfig;
///
/// let config = ClientConfig::new("my-api-key")
///     .with_sandbox(true)
///     .with_timeout(Duration::from_secs(10))
///     .with_max_retries(5);
///
/// assert_eq!(config.base_url(), "https://sandbox.asaas.com/api");
/// assert_eq!(config.max_retries(), 5);
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    environment: Environment,
    base_url: Option<String>,
    timeout: Duration,
    max_retries: u32,
    backoff_factor: f64,
    user_agent: String,
}

impl ClientConfig {
    /// Create a production configuration with default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            environment: Environment::Production,
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            user_agent: concat!("asaas-rust-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | variable | default |
    /// |----------|---------|
    /// | `ASAAS_API_KEY` | required |
    /// | `ASAAS_SANDBOX` | `false` |
    /// | `ASAAS_BASE_URL` | derived from the environment |
    /// | `ASAAS_TIMEOUT_SECONDS` | `30` |
    /// | `ASAAS_MAX_RETRIES` | `3` |
    /// | `ASAAS_BACKOFF_FACTOR` | `0.5` |
    ///
    /// Unparseable numeric values fall back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`AsaasError::Configuration`] if `ASAAS_API_KEY` is missing or
    /// the resulting configuration is invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("ASAAS_API_KEY")
            .ok_or_else(|| AsaasError::Configuration("ASAAS_API_KEY is not set".into()))?;

        let sandbox = lookup("ASAAS_SANDBOX")
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"));

        let mut config = Self::new(api_key)
            .with_sandbox(sandbox)
            .with_timeout(Duration::from_secs(
                lookup("ASAAS_TIMEOUT_SECONDS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            ))
            .with_max_retries(
                lookup("ASAAS_MAX_RETRIES")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_MAX_RETRIES),
            )
            .with_backoff_factor(
                lookup("ASAAS_BACKOFF_FACTOR")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_BACKOFF_FACTOR),
            );

        if let Some(url) = lookup("ASAAS_BASE_URL").filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url);
        }

        tracing::debug!(
            environment = ?config.environment,
            base_url = %config.base_url(),
            max_retries = config.max_retries,
            "Loaded Asaas configuration from environment"
        );

        config.validate()?;
        Ok(config)
    }

    /// Select the sandbox (`true`) or production (`false`) environment.
    #[must_use]
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.environment = if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        };
        self
    }

    /// Select an environment.
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the base URL. Takes precedence over the environment.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Per-attempt request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Number of retries after the first attempt for transient failures.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Backoff factor in seconds; retry `n` waits `factor * 2^n`.
    #[must_use]
    pub fn with_backoff_factor(mut self, backoff_factor: f64) -> Self {
        self.backoff_factor = backoff_factor;
        self
    }

    /// `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Check the configuration for values that can never work.
    ///
    /// # Errors
    ///
    /// Returns [`AsaasError::Configuration`] for an empty API key, a zero
    /// timeout or a negative or non-finite backoff factor.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(AsaasError::Configuration("api_key is required".into()));
        }
        if self.timeout.is_zero() {
            return Err(AsaasError::Configuration("timeout must be positive".into()));
        }
        if !self.backoff_factor.is_finite() || self.backoff_factor < 0.0 {
            return Err(AsaasError::Configuration(format!(
                "backoff_factor must be a non-negative number, got {}",
                self.backoff_factor
            )));
        }
        Ok(())
    }

    /// API key sent in the `access_token` header.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Selected environment.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Whether the sandbox environment is selected.
    #[must_use]
    pub fn is_sandbox(&self) -> bool {
        self.environment == Environment::Sandbox
    }

    /// Whether requests go to the sandbox, either by environment or because
    /// the base URL override is the sandbox URL.
    #[must_use]
    pub fn targets_sandbox(&self) -> bool {
        self.is_sandbox() || self.base_url() == SANDBOX_URL
    }

    /// Effective base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    /// Per-attempt request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Retry budget for transient failures.
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Backoff factor in seconds.
    #[must_use]
    pub fn backoff_factor(&self) -> f64 {
        self.backoff_factor
    }

    /// `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url())
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("backoff_factor", &self.backoff_factor)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
