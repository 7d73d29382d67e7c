//! HTTP transport: authentication, serialization, retries and error mapping.
//!
//! Every resource call funnels through [`HttpTransport::request`]. A request
//! is retried when it is idempotent (GET, PUT, DELETE) and fails with a 5xx
//! response, a timeout or a connection error. Retry `n` (counted from 0)
//! sleeps `backoff_factor * 2^n` seconds, capped at [`MAX_BACKOFF`]. POST
//! requests are sent exactly once.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use asaas_core::{into_record, AsaasError, ClientConfig, Page, Params, Record, Result};

/// Upper bound for a single backoff delay.
pub const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Header carrying the API key.
pub const AUTH_HEADER: &str = "access_token";

/// A file sent as multipart form data.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// File name reported to the API.
    pub file_name: String,
    /// Raw file contents.
    pub content: Vec<u8>,
    /// MIME type, e.g. `application/pdf`. Left to the server when `None`.
    pub content_type: Option<String>,
}

impl FileUpload {
    /// Create an upload from a file name and its contents.
    #[must_use]
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
            content_type: None,
        }
    }

    /// Set the MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Request payload.
#[derive(Debug, Clone)]
pub enum Body {
    /// No body.
    Empty,
    /// JSON body, already serialized so that retries can resend it.
    Json(Value),
    /// Multipart form: the file under `field`, plus plain text fields.
    Multipart {
        /// Form field name of the file.
        field: String,
        /// The file.
        file: FileUpload,
        /// Additional text fields.
        fields: Params,
    },
}

impl Body {
    /// Serialize `body` to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AsaasError::Serialization`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(body)?))
    }

    fn multipart_form(field: &str, file: &FileUpload, fields: &Params) -> Result<Form> {
        let mut part = Part::bytes(file.content.clone()).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| AsaasError::Http(format!("invalid content type: {e}")))?;
        }

        let mut form = Form::new().part(field.to_string(), part);
        for (key, value) in fields.iter() {
            form = form.text(key.to_string(), value.to_string());
        }
        Ok(form)
    }
}

/// Authenticated HTTP transport bound to one base URL.
///
/// Holds the connection pool shared by every resource client of an
/// [`Asaas`](crate::Asaas) instance.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Build a transport from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AsaasError::Configuration`] if the configuration is invalid
    /// or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(config.api_key()).map_err(|_| {
            AsaasError::Configuration("api_key contains characters not allowed in a header".into())
        })?;
        api_key.set_sensitive(true);
        headers.insert(AUTH_HEADER, api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .default_headers(headers)
            .build()
            .map_err(|e| AsaasError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Configuration this transport was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `path` with query parameters.
    ///
    /// # Errors
    ///
    /// Returns the mapped [`AsaasError`] on failure.
    pub async fn get(&self, path: &str, params: &Params) -> Result<Record> {
        self.request(Method::GET, path, params, Body::Empty).await
    }

    /// POST a JSON body to `path`.
    ///
    /// # Errors
    ///
    /// Returns the mapped [`AsaasError`] on failure.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Record> {
        self.request(Method::POST, path, &Params::new(), Body::json(body)?)
            .await
    }

    /// POST an empty JSON object to `path`, as action endpoints expect.
    ///
    /// # Errors
    ///
    /// Returns the mapped [`AsaasError`] on failure.
    pub async fn post_empty(&self, path: &str) -> Result<Record> {
        self.request(Method::POST, path, &Params::new(), Body::Json(json!({})))
            .await
    }

    /// PUT a JSON body to `path`.
    ///
    /// # Errors
    ///
    /// Returns the mapped [`AsaasError`] on failure.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Record> {
        self.request(Method::PUT, path, &Params::new(), Body::json(body)?)
            .await
    }

    /// DELETE `path` with query parameters.
    ///
    /// # Errors
    ///
    /// Returns the mapped [`AsaasError`] on failure.
    pub async fn delete(&self, path: &str, params: &Params) -> Result<Record> {
        self.request(Method::DELETE, path, params, Body::Empty).await
    }

    /// Send `file` as multipart form data under the `file` field.
    ///
    /// # Errors
    ///
    /// Returns the mapped [`AsaasError`] on failure.
    pub async fn upload(
        &self,
        method: Method,
        path: &str,
        file: &FileUpload,
        fields: &Params,
    ) -> Result<Record> {
        let body = Body::Multipart {
            field: "file".to_string(),
            file: file.clone(),
            fields: fields.clone(),
        };
        self.request(method, path, &Params::new(), body).await
    }

    /// GET one page of a list endpoint.
    ///
    /// # Errors
    ///
    /// Returns the mapped [`AsaasError`] on failure, or
    /// [`AsaasError::Serialization`] if the page cannot be decoded as `T`.
    pub async fn list<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<Page<T>> {
        let value = self.execute(Method::GET, path, params, &Body::Empty).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Send a request and decode the response into a [`Record`].
    ///
    /// # Errors
    ///
    /// Returns the mapped [`AsaasError`] on failure.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        body: Body,
    ) -> Result<Record> {
        self.execute(method, path, params, &body)
            .await
            .map(into_record)
    }

    /// Retry loop around [`HttpTransport::send_once`].
    async fn execute(&self, method: Method, path: &str, params: &Params, body: &Body) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url(), path);
        let retries = if is_idempotent(&method) {
            self.config.max_retries()
        } else {
            0
        };

        let mut attempt = 0;
        loop {
            match self.send_once(&method, &url, params, body).await {
                Err(error) if attempt < retries && error.is_retryable() => {
                    let delay = backoff_delay(self.config.backoff_factor(), attempt);
                    tracing::warn!(
                        method = %method,
                        url = %url,
                        attempt = attempt + 1,
                        max_retries = retries,
                        delay_ms = delay.as_millis(),
                        error = %error,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                outcome => return outcome,
            }
        }
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        params: &Params,
        body: &Body,
    ) -> Result<Value> {
        let mut request = self.client.request(method.clone(), url);
        if !params.is_empty() {
            request = request.query(params);
        }
        request = match body {
            Body::Empty => request,
            Body::Json(value) => request.json(value),
            Body::Multipart { field, file, fields } => {
                request.multipart(Body::multipart_form(field, file, fields)?)
            }
        };

        tracing::debug!(method = %method, url = %url, "Sending Asaas request");
        let started = Instant::now();

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "Asaas response received"
        );

        let value = decode_body(&text);
        if status.is_success() {
            Ok(value)
        } else {
            Err(AsaasError::from_response(status.as_u16(), &value))
        }
    }
}

impl Drop for HttpTransport {
    fn drop(&mut self) {
        tracing::debug!(base_url = %self.config.base_url(), "Closing Asaas HTTP session");
    }
}

fn is_idempotent(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::PUT | Method::DELETE | Method::HEAD | Method::OPTIONS
    )
}

/// Delay before retry `attempt` (0-based): `factor * 2^attempt` seconds.
fn backoff_delay(factor: f64, attempt: u32) -> Duration {
    let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
    Duration::try_from_secs_f64(factor * 2f64.powi(exponent))
        .unwrap_or(MAX_BACKOFF)
        .min(MAX_BACKOFF)
}

/// Decode a response body: empty → `{}`, invalid JSON → `{"raw": text}`.
fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return json!({});
    }
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}

fn map_transport_error(error: reqwest::Error) -> AsaasError {
    if error.is_timeout() {
        AsaasError::Timeout(error.to_string())
    } else if error.is_connect() {
        AsaasError::Connection(error.to_string())
    } else {
        AsaasError::Http(error.to_string())
    }
}
