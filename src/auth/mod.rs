//! Authentication types for the BrickLink API client.
//!
//! BrickLink uses OAuth 1.0a with pre-issued tokens: there is no
//! authorization dance, the four secrets are created on the BrickLink
//! website and handed to the client once.
//!
//! # Overview
//!
//! - [`Credentials`]: The four validated OAuth secrets
//! - [`oauth`]: HMAC-SHA1 request signing
//!
//! # Example
//!
//! ```rust
//! use bricklink_api::auth::Credentials;
//!
//! let credentials = Credentials::new("ck", "cs", "token", "token-secret").unwrap();
//! assert_eq!(credentials.token().as_ref(), "token");
//!
//! // An empty secret is rejected before any request can be made
//! assert!(Credentials::new("ck", "cs", "", "token-secret").is_err());
//! ```

pub mod oauth;

use crate::config::{AccessToken, ConsumerKey, ConsumerSecret, TokenSecret};
use crate::error::ConfigError;

/// The consumer key/secret and access token/secret pair used to sign requests.
///
/// `Debug` output masks both secrets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    token: AccessToken,
    token_secret: TokenSecret,
}

impl Credentials {
    /// Validates and bundles the four OAuth secrets.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first empty value, in argument order.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_parts(
            ConsumerKey::new(consumer_key)?,
            ConsumerSecret::new(consumer_secret)?,
            AccessToken::new(token)?,
            TokenSecret::new(token_secret)?,
        ))
    }

    /// Bundles already-validated secrets.
    #[must_use]
    pub const fn from_parts(
        consumer_key: ConsumerKey,
        consumer_secret: ConsumerSecret,
        token: AccessToken,
        token_secret: TokenSecret,
    ) -> Self {
        Self {
            consumer_key,
            consumer_secret,
            token,
            token_secret,
        }
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the access token.
    #[must_use]
    pub const fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Returns the token secret.
    #[must_use]
    pub const fn token_secret(&self) -> &TokenSecret {
        &self.token_secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_reject_each_empty_secret() {
        assert_eq!(
            Credentials::new("", "cs", "tk", "ts"),
            Err(ConfigError::EmptyConsumerKey)
        );
        assert_eq!(
            Credentials::new("ck", "", "tk", "ts"),
            Err(ConfigError::EmptyConsumerSecret)
        );
        assert_eq!(
            Credentials::new("ck", "cs", "", "ts"),
            Err(ConfigError::EmptyAccessToken)
        );
        assert_eq!(
            Credentials::new("ck", "cs", "tk", ""),
            Err(ConfigError::EmptyTokenSecret)
        );
    }

    #[test]
    fn test_credentials_debug_masks_secrets() {
        let credentials = Credentials::new("ck", "very-secret", "tk", "other-secret").unwrap();
        let debug_str = format!("{credentials:?}");

        assert!(!debug_str.contains("very-secret"));
        assert!(!debug_str.contains("other-secret"));
        assert!(debug_str.contains("ck"));
    }
}
