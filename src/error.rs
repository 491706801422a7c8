//! Error types for client configuration.
//!
//! This module contains the errors raised while assembling credentials and
//! configuration, before any request is sent.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. A [`ConfigError`] is the "invalid credentials" kind:
//! no client exists until all four OAuth secrets are present and non-empty.
//!
//! # Example
//!
//! ```rust
//! use bricklink_api::{ConsumerKey, ConfigError};
//!
//! let result = ConsumerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Consumer key cannot be empty.
    #[error("Consumer key cannot be empty. Please provide a valid BrickLink consumer key.")]
    EmptyConsumerKey,

    /// Consumer secret cannot be empty.
    #[error("Consumer secret cannot be empty. Please provide a valid BrickLink consumer secret.")]
    EmptyConsumerSecret,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid BrickLink access token.")]
    EmptyAccessToken,

    /// Token secret cannot be empty.
    #[error("Token secret cannot be empty. Please provide a valid BrickLink token secret.")]
    EmptyTokenSecret,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://api.bricklink.com/api/store/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to initialize the HTTP client: {reason}")]
    ClientInitialization {
        /// The error reported by the HTTP library.
        reason: String,
    },
}

impl ConfigError {
    /// Returns `true` if this error means one of the OAuth secrets is absent.
    #[must_use]
    pub const fn is_invalid_credentials(&self) -> bool {
        matches!(
            self,
            Self::EmptyConsumerKey
                | Self::EmptyConsumerSecret
                | Self::EmptyAccessToken
                | Self::EmptyTokenSecret
                | Self::MissingRequiredField { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_consumer_key_error_message() {
        let error = ConfigError::EmptyConsumerKey;
        let message = error.to_string();
        assert!(message.contains("Consumer key cannot be empty"));
        assert!(message.contains("BrickLink consumer key"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "token" };
        let message = error.to_string();
        assert!(message.contains("token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_base_url_is_not_a_credentials_error() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nope".to_string(),
        };
        assert!(!error.is_invalid_credentials());
        assert!(error.to_string().contains("ftp://nope"));
    }

    #[test]
    fn test_secret_errors_are_credentials_errors() {
        assert!(ConfigError::EmptyConsumerSecret.is_invalid_credentials());
        assert!(ConfigError::EmptyAccessToken.is_invalid_credentials());
        assert!(ConfigError::EmptyTokenSecret.is_invalid_credentials());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyTokenSecret;
        let _: &dyn std::error::Error = &error;
    }
}
