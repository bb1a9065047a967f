//! Error types for the Pharia Data client
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Nothing in the client recovers from an error locally: validation,
//! transport and decode failures all reach the caller unchanged.

use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Input Errors (CLI)
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status code carried by the error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the error was raised before any request left the client
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::MissingRequiredField { .. })
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Take a required value out of an optional input field
pub(crate) fn require<T: Clone>(value: &Option<T>, field: &str) -> Result<T> {
    value.clone().ok_or_else(|| Error::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("media_type");
        assert_eq!(err.to_string(), "Missing required field: media_type");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_status() {
        assert_eq!(Error::http_status(404, "").status(), Some(404));
        assert_eq!(Error::http_status(500, "boom").status(), Some(500));
        assert_eq!(Error::config("x").status(), None);
        assert_eq!(Error::decode("x").status(), None);
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::missing_field("name").is_validation());
        assert!(!Error::http_status(400, "").is_validation());
        assert!(!Error::config("x").is_validation());
    }

    #[test]
    fn test_require() {
        let present = Some("value".to_string());
        assert_eq!(require(&present, "name").unwrap(), "value");

        let absent: Option<String> = None;
        let err = require(&absent, "name").unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { ref field } if field == "name"));
    }
}
