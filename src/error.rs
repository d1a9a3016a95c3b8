//! Error types for the Stormpath SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use stormpath::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("", "secret");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKeyId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key id cannot be empty.
    #[error("API key id cannot be empty. Please provide a valid Stormpath API key id.")]
    EmptyApiKeyId,

    /// API key secret cannot be empty.
    #[error("API key secret cannot be empty. Please provide a valid Stormpath API key secret.")]
    EmptyApiKeySecret,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an http(s) URL such as 'https://api.stormpath.com/v1'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Page size is outside the range the service accepts.
    #[error("Invalid page size {size}. Expected a value between 1 and 100.")]
    InvalidPageSize {
        /// The rejected page size.
        size: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_id_error_message() {
        let error = ConfigError::EmptyApiKeyId;
        let message = error.to_string();
        assert!(message.contains("API key id cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nope"));
        assert!(message.contains("http(s)"));
    }

    #[test]
    fn test_invalid_page_size_error_message() {
        let error = ConfigError::InvalidPageSize { size: 500 };
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_key" };
        let message = error.to_string();
        assert!(message.contains("api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiKeySecret;
        let _: &dyn std::error::Error = &error;
    }
}
