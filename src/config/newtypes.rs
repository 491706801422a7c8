//! Validated newtype wrappers for the OAuth secrets and the API base URL.
//!
//! Each wrapper validates its contents on construction. Secret values are
//! masked in `Debug` output so they never end up in logs.

use crate::error::ConfigError;
use std::fmt;

/// A validated BrickLink consumer key.
///
/// # Example
///
/// ```rust
/// use bricklink_api::ConsumerKey;
///
/// let key = ConsumerKey::new("my-consumer-key").unwrap();
/// assert_eq!(key.as_ref(), "my-consumer-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerKey(String);

impl ConsumerKey {
    /// Creates a new validated consumer key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyConsumerKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ConsumerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated BrickLink consumer secret.
///
/// The `Debug` implementation prints `ConsumerSecret(*****)`.
///
/// ```rust
/// use bricklink_api::ConsumerSecret;
///
/// let secret = ConsumerSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ConsumerSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerSecret(String);

impl ConsumerSecret {
    /// Creates a new validated consumer secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyConsumerSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ConsumerSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConsumerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConsumerSecret(*****)")
    }
}

/// A validated BrickLink access token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated BrickLink token secret, masked in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenSecret(String);

impl TokenSecret {
    /// Creates a new validated token secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTokenSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyTokenSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for TokenSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret(*****)")
    }
}

/// The versioned API root every resource path is resolved against.
///
/// Trailing slashes are stripped so that joining with a relative path
/// always yields exactly one separator.
///
/// ```rust
/// use bricklink_api::BaseUrl;
///
/// let url = BaseUrl::new("http://127.0.0.1:8080/api/").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080/api");
/// assert_eq!(url.join("orders/1"), "http://127.0.0.1:8080/api/orders/1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The production BrickLink Store API root.
    pub const DEFAULT: &'static str = "https://api.bricklink.com/api/store/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless the URL starts with
    /// `http://` or `https://` and has a host part.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }

    /// Joins a relative resource path onto this root.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_key_rejects_empty() {
        assert!(matches!(
            ConsumerKey::new(""),
            Err(ConfigError::EmptyConsumerKey)
        ));
    }

    #[test]
    fn test_each_secret_reports_its_own_error() {
        assert!(matches!(
            ConsumerSecret::new(String::new()),
            Err(ConfigError::EmptyConsumerSecret)
        ));
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            TokenSecret::new(""),
            Err(ConfigError::EmptyTokenSecret)
        ));
    }

    #[test]
    fn test_secrets_are_masked_in_debug() {
        let consumer_secret = ConsumerSecret::new("super-secret").unwrap();
        let token_secret = TokenSecret::new("also-secret").unwrap();

        assert_eq!(format!("{consumer_secret:?}"), "ConsumerSecret(*****)");
        assert_eq!(format!("{token_secret:?}"), "TokenSecret(*****)");
    }

    #[test]
    fn test_base_url_default() {
        assert_eq!(
            BaseUrl::default().as_ref(),
            "https://api.bricklink.com/api/store/v1"
        );
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://api.bricklink.com/api/store/v1/").unwrap();
        assert_eq!(url.as_ref(), "https://api.bricklink.com/api/store/v1");
        assert_eq!(
            url.join("/colors"),
            "https://api.bricklink.com/api/store/v1/colors"
        );
    }

    #[test]
    fn test_base_url_rejects_missing_scheme_or_host() {
        assert!(BaseUrl::new("api.bricklink.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("ftp://api.bricklink.com").is_err());
    }
}
