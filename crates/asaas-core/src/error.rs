//! Error types for the Asaas SDK.
//!
//! Every failure the SDK can produce is an [`AsaasError`]. HTTP error
//! responses are mapped by status code in [`AsaasError::from_response`]:
//!
//! | status | variant |
//! |--------|---------|
//! | 400 | [`AsaasError::Validation`] |
//! | 401 | [`AsaasError::Authentication`] |
//! | 404 | [`AsaasError::NotFound`] |
//! | 429 | [`AsaasError::RateLimit`] |
//! | any other non-2xx | [`AsaasError::Api`] |

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result type for Asaas operations.
pub type Result<T> = std::result::Result<T, AsaasError>;

/// A single field-level error from an Asaas error payload.
///
/// The API reports errors as `{"errors": [{"code": "...", "description": "..."}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Machine-readable error code (e.g. `invalid_cpfCnpj`).
    #[serde(default = "unknown_code")]
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

fn unknown_code() -> String {
    "unknown".to_string()
}

/// Errors that can occur when talking to the Asaas API.
#[derive(Debug, thiserror::Error)]
pub enum AsaasError {
    /// 400 Bad Request: the payload failed validation.
    #[error("validation error: {message}")]
    Validation {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Field-level errors as returned by the API.
        errors: Vec<FieldError>,
    },

    /// 401 Unauthorized: missing or invalid API key.
    #[error("authentication error: {message}")]
    Authentication {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Field-level errors as returned by the API.
        errors: Vec<FieldError>,
    },

    /// 404 Not Found.
    #[error("not found: {message}")]
    NotFound {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Field-level errors as returned by the API.
        errors: Vec<FieldError>,
    },

    /// 429 Too Many Requests.
    #[error("rate limited: {message}")]
    RateLimit {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Field-level errors as returned by the API.
        errors: Vec<FieldError>,
    },

    /// Any other non-2xx response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Field-level errors as returned by the API.
        errors: Vec<FieldError>,
    },

    /// The request timed out.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The connection could not be established.
    #[error("connection error: {0}")]
    Connection(String),

    /// Any other transport failure (invalid URL, broken body, TLS setup).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl AsaasError {
    /// Map a non-2xx status and its parsed body to the matching error variant.
    ///
    /// `body` is the decoded JSON response (an empty object when the response
    /// had no body). Field errors are read from its `errors` array.
    #[must_use]
    pub fn from_response(status: u16, body: &Value) -> Self {
        let errors = parse_field_errors(body);
        let message = if errors.is_empty() {
            format!("HTTP {status}")
        } else {
            join_field_errors(&errors)
        };

        match status {
            400 => Self::Validation { status, message, errors },
            401 => Self::Authentication { status, message, errors },
            404 => Self::NotFound { status, message, errors },
            429 => Self::RateLimit { status, message, errors },
            _ => Self::Api { status, message, errors },
        }
    }

    /// HTTP status code, for errors that came from an API response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { status, .. }
            | Self::Authentication { status, .. }
            | Self::NotFound { status, .. }
            | Self::RateLimit { status, .. }
            | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Field-level errors carried by the response, empty for transport errors.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { errors, .. }
            | Self::Authentication { errors, .. }
            | Self::NotFound { errors, .. }
            | Self::RateLimit { errors, .. }
            | Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Whether an idempotent request failing with this error may be retried.
    ///
    /// True for server errors (5xx), timeouts and connection failures.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { status, .. } => (500..600).contains(status),
            Self::Timeout(_) | Self::Connection(_) => true,
            _ => false,
        }
    }
}

fn parse_field_errors(body: &Value) -> Vec<FieldError> {
    body.get("errors")
        .and_then(|errors| serde_json::from_value(errors.clone()).ok())
        .unwrap_or_default()
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("[{}] {}", e.code, e.description))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_mapping_is_exhaustive() {
        let body = json!({});
        assert!(matches!(
            AsaasError::from_response(400, &body),
            AsaasError::Validation { status: 400, .. }
        ));
        assert!(matches!(
            AsaasError::from_response(401, &body),
            AsaasError::Authentication { status: 401, .. }
        ));
        assert!(matches!(
            AsaasError::from_response(404, &body),
            AsaasError::NotFound { status: 404, .. }
        ));
        assert!(matches!(
            AsaasError::from_response(429, &body),
            AsaasError::RateLimit { status: 429, .. }
        ));
        for status in [402, 403, 409, 422, 500, 502, 503] {
            assert!(matches!(
                AsaasError::from_response(status, &body),
                AsaasError::Api { status: s, .. } if s == status
            ));
        }
    }

    #[test]
    fn field_errors_are_carried_unchanged() {
        let body = json!({
            "errors": [
                {"code": "invalid_cpfCnpj", "description": "CPF/CNPJ inválido"},
                {"code": "invalid_value", "description": "Valor deve ser maior que zero"}
            ]
        });
        let err = AsaasError::from_response(400, &body);

        assert_eq!(
            err.errors(),
            &[
                FieldError {
                    code: "invalid_cpfCnpj".into(),
                    description: "CPF/CNPJ inválido".into(),
                },
                FieldError {
                    code: "invalid_value".into(),
                    description: "Valor deve ser maior que zero".into(),
                },
            ]
        );
        assert_eq!(
            err.to_string(),
            "validation error: [invalid_cpfCnpj] CPF/CNPJ inválido; \
             [invalid_value] Valor deve ser maior que zero"
        );
    }

    #[test]
    fn missing_errors_fall_back_to_status_message() {
        let err = AsaasError::from_response(503, &json!({"raw": "upstream down"}));
        assert_eq!(err.to_string(), "API error: 503 - HTTP 503");
        assert!(err.errors().is_empty());
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn partial_field_error_uses_defaults() {
        let err = AsaasError::from_response(400, &json!({"errors": [{"description": "bad"}]}));
        assert_eq!(err.errors()[0].code, "unknown");
        assert_eq!(err.to_string(), "validation error: [unknown] bad");
    }

    #[test]
    fn retryable_classification() {
        assert!(AsaasError::from_response(500, &json!({})).is_retryable());
        assert!(AsaasError::from_response(504, &json!({})).is_retryable());
        assert!(AsaasError::Timeout("slow".into()).is_retryable());
        assert!(AsaasError::Connection("refused".into()).is_retryable());

        assert!(!AsaasError::from_response(400, &json!({})).is_retryable());
        assert!(!AsaasError::from_response(401, &json!({})).is_retryable());
        assert!(!AsaasError::from_response(429, &json!({})).is_retryable());
        assert!(!AsaasError::from_response(409, &json!({})).is_retryable());
        assert!(!AsaasError::Configuration("x".into()).is_retryable());
    }
}
