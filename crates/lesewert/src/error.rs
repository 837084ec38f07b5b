//! Error types for Lesewert.
//!
//! This module defines all error types used throughout the library. All errors
//! inherit from `LesewertError` and follow Rust error handling best practices:
//!
//! - Use `thiserror` for automatic `Error` trait implementation
//! - Preserve error chains with `#[source]` attributes
//! - Include context in error messages (field names, config values, etc.)
//!
//! # Error Handling Philosophy
//!
//! **System errors MUST always bubble up unchanged:**
//! - `LesewertError::Io` (from `std::io::Error`) - File system errors, permission errors
//! - These indicate real system problems that users need to know about
//!
//! **Application errors are wrapped with context:**
//! - `Validation` - Missing or empty analysis input, invalid parameters
//! - `External` - TextRazor transport or status failures (recoverable; the
//!   analyzer falls back to local extraction and only logs these)
//! - `Config` - Malformed or unreadable configuration
//!
//! # Example
//!
//! ```rust
//! use lesewert::{LesewertError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     let trimmed = text.trim();
//!     if trimmed.is_empty() {
//!         return Err(LesewertError::validation("Text is required"));
//!     }
//!     Ok(trimmed)
//! }
//! ```
use thiserror::Error;

/// Result type alias using `LesewertError`.
///
/// This is the standard return type for all fallible operations in Lesewert.
pub type Result<T> = std::result::Result<T, LesewertError>;

/// Main error type for all Lesewert operations.
///
/// # Variants
///
/// - `Io` - File system and I/O errors (always bubble up)
/// - `Validation` - Input validation errors (empty text, invalid host, parameters)
/// - `Serialization` - JSON serialization errors
/// - `External` - Upstream topic/entity service errors (network, status, decode)
/// - `Config` - Configuration loading/parsing errors
/// - `Other` - Catch-all for uncommon errors
#[derive(Debug, Error)]
pub enum LesewertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("External service error: {message}")]
    External {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for LesewertError {
    fn from(err: serde_json::Error) -> Self {
        LesewertError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<toml::de::Error> for LesewertError {
    fn from(err: toml::de::Error) -> Self {
        LesewertError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl LesewertError {
    /// Create a Validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Validation error with source
    pub fn validation_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Serialization error with source
    pub fn serialization_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an External error
    pub fn external<S: Into<String>>(message: S) -> Self {
        Self::External {
            message: message.into(),
            source: None,
        }
    }

    /// Create an External error with source
    pub fn external_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::External {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Config error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Config error with source
    pub fn config_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LesewertError = io_err.into();
        assert!(matches!(err, LesewertError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_validation_error() {
        let err = LesewertError::validation("Text is required");
        assert_eq!(err.to_string(), "Validation error: Text is required");
    }

    #[test]
    fn test_validation_error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad param");
        let err = LesewertError::validation_with_source("invalid input", source);
        assert_eq!(err.to_string(), "Validation error: invalid input");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_serialization_error() {
        let err = LesewertError::serialization("JSON parse error");
        assert_eq!(err.to_string(), "Serialization error: JSON parse error");
    }

    #[test]
    fn test_external_error() {
        let err = LesewertError::external("TextRazor returned status 403");
        assert_eq!(err.to_string(), "External service error: TextRazor returned status 403");
    }

    #[test]
    fn test_external_error_with_source() {
        let source = std::io::Error::other("connection refused");
        let err = LesewertError::external_with_source("request failed", source);
        assert_eq!(err.to_string(), "External service error: request failed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_error() {
        let err = LesewertError::config("invalid TOML in lesewert.toml");
        assert_eq!(err.to_string(), "Configuration error: invalid TOML in lesewert.toml");
    }

    #[test]
    fn test_other_error() {
        let err = LesewertError::Other("unexpected error".to_string());
        assert_eq!(err.to_string(), "unexpected error");
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: LesewertError = json_err.into();
        assert!(matches!(err, LesewertError::Serialization { .. }));
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not [valid toml").unwrap_err();
        let err: LesewertError = toml_err.into();
        assert!(matches!(err, LesewertError::Serialization { .. }));
    }

    #[test]
    fn test_io_error_bubbles_unchanged() {
        fn read_file() -> Result<String> {
            let content = std::fs::read_to_string("/no/such/lesewert.toml")?;
            Ok(content)
        }

        let result = read_file();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), LesewertError::Io(_)));
    }

    #[test]
    fn test_error_debug() {
        let err = LesewertError::validation("test");
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Validation"));
    }
}
