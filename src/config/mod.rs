//! Configuration types for the BrickLink API client.
//!
//! # Overview
//!
//! - [`BricklinkConfig`]: The configuration struct holding credentials and transport settings
//! - [`BricklinkConfigBuilder`]: A builder for constructing [`BricklinkConfig`] instances
//! - [`ConsumerKey`], [`ConsumerSecret`], [`AccessToken`], [`TokenSecret`]: validated OAuth secrets
//! - [`BaseUrl`]: The versioned API root
//!
//! # Example
//!
//! ```rust
//! use bricklink_api::{AccessToken, BricklinkConfig, ConsumerKey, ConsumerSecret, TokenSecret};
//!
//! let config = BricklinkConfig::builder()
//!     .consumer_key(ConsumerKey::new("consumer-key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("consumer-secret").unwrap())
//!     .token(AccessToken::new("token").unwrap())
//!     .token_secret(TokenSecret::new("token-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, ConsumerKey, ConsumerSecret, TokenSecret};

use crate::auth::Credentials;
use crate::error::ConfigError;

/// Configuration for the BrickLink API client.
///
/// # Thread Safety
///
/// `BricklinkConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct BricklinkConfig {
    credentials: Credentials,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl BricklinkConfig {
    /// Creates a new builder for constructing a `BricklinkConfig`.
    #[must_use]
    pub fn builder() -> BricklinkConfigBuilder {
        BricklinkConfigBuilder::new()
    }

    /// Creates a configuration with default transport settings from
    /// already-validated credentials.
    #[must_use]
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: BaseUrl::default(),
            user_agent_prefix: None,
        }
    }

    /// Returns the OAuth credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify BricklinkConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BricklinkConfig>();
};

/// Builder for constructing [`BricklinkConfig`] instances.
///
/// The four OAuth secrets are required. Defaults:
///
/// - `base_url`: [`BaseUrl::DEFAULT`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct BricklinkConfigBuilder {
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    token: Option<AccessToken>,
    token_secret: Option<TokenSecret>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl BricklinkConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the token secret (required).
    #[must_use]
    pub fn token_secret(mut self, secret: TokenSecret) -> Self {
        self.token_secret = Some(secret);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BricklinkConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] naming the first unset secret.
    pub fn build(self) -> Result<BricklinkConfig, ConfigError> {
        let consumer_key = self
            .consumer_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_key",
            })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;
        let token_secret = self
            .token_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "token_secret",
            })?;

        Ok(BricklinkConfig {
            credentials: Credentials::from_parts(
                consumer_key,
                consumer_secret,
                token,
                token_secret,
            ),
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
