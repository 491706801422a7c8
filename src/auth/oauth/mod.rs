//! OAuth 1.0a request signing for the BrickLink API.
//!
//! Every request to BrickLink carries an `Authorization: OAuth ...` header
//! signed with HMAC-SHA1 over the method, the URL without its query, and
//! all query and protocol parameters.
//!
//! - [`OAuthSigner`]: Produces the header for one request
//! - [`hmac`]: Encoding and signature primitives
//!
//! # Example
//!
//! ```rust
//! use bricklink_api::auth::Credentials;
//! use bricklink_api::auth::oauth::OAuthSigner;
//! use bricklink_api::HttpMethod;
//!
//! let credentials = Credentials::new("ck", "cs", "tk", "ts").unwrap();
//! let signer = OAuthSigner::new(credentials);
//!
//! let header = signer.authorization_header(
//!     HttpMethod::Get,
//!     "https://api.bricklink.com/api/store/v1/orders",
//!     &[("direction".to_string(), "in".to_string())],
//! );
//! assert!(header.starts_with("OAuth "));
//! assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
//! ```

pub mod hmac;

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::auth::Credentials;
use crate::clients::HttpMethod;

use self::hmac::{compute_signature, percent_encode, signature_base_string, signing_key};

/// The only signature method BrickLink accepts.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// OAuth protocol version sent with every request.
pub const OAUTH_VERSION: &str = "1.0";

/// Length of the generated `oauth_nonce`.
pub const NONCE_LENGTH: usize = 32;

/// Signs requests with a fixed set of credentials.
///
/// The signer holds no mutable state; each call draws a fresh nonce and
/// timestamp, so one signer can be shared across tasks.
#[derive(Clone, Debug)]
pub struct OAuthSigner {
    credentials: Credentials,
}

// Verify OAuthSigner is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthSigner>();
};

impl OAuthSigner {
    /// Creates a signer for the given credentials.
    #[must_use]
    pub const fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Returns the credentials this signer uses.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Builds the `Authorization` header for a request.
    ///
    /// `url` is the full request URL without its query string; `query` holds
    /// the query parameters exactly as they will be sent.
    #[must_use]
    pub fn authorization_header(
        &self,
        method: HttpMethod,
        url: &str,
        query: &[(String, String)],
    ) -> String {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.authorization_header_with(method, url, query, &generate_nonce(), &timestamp)
    }

    /// Builds the `Authorization` header with a caller-supplied nonce and timestamp.
    #[must_use]
    pub fn authorization_header_with(
        &self,
        method: HttpMethod,
        url: &str,
        query: &[(String, String)],
        nonce: &str,
        timestamp: &str,
    ) -> String {
        let mut oauth_params: Vec<(&str, String)> = vec![
            (
                "oauth_consumer_key",
                self.credentials.consumer_key().as_ref().to_string(),
            ),
            ("oauth_nonce", nonce.to_string()),
            ("oauth_signature_method", SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp", timestamp.to_string()),
            ("oauth_token", self.credentials.token().as_ref().to_string()),
            ("oauth_version", OAUTH_VERSION.to_string()),
        ];

        let all_params: Vec<(&str, &str)> = oauth_params
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .chain(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .collect();

        let base_string = signature_base_string(method.as_str(), url, &all_params);
        let key = signing_key(
            self.credentials.consumer_secret().as_ref(),
            self.credentials.token_secret().as_ref(),
        );
        oauth_params.push(("oauth_signature", compute_signature(&base_string, &key)));
        oauth_params.sort_by(|a, b| a.0.cmp(b.0));

        let fields = oauth_params
            .iter()
            .map(|(k, v)| format!("{k}=\"{}\"", percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("OAuth {fields}")
    }
}

/// Generates a random alphanumeric nonce of [`NONCE_LENGTH`] characters.
#[must_use]
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_signer() -> OAuthSigner {
        OAuthSigner::new(
            Credentials::new(
                "xvz1evFS4wEEPTGEFPHBog",
                "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
                "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
                "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_authorization_header_matches_reference_signature() {
        let query = vec![
            (
                "status".to_string(),
                "Hello Ladies + Gentlemen, a signed OAuth request!".to_string(),
            ),
            ("include_entities".to_string(), "true".to_string()),
        ];

        let header = reference_signer().authorization_header_with(
            HttpMethod::Post,
            "https://api.twitter.com/1/statuses/update.json",
            &query,
            "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
            "1318622958",
        );

        assert!(header.contains("oauth_signature=\"tnnArxj06cWHq44gCs1OSKk%2FjLY%3D\""));
        assert!(header.contains("oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\""));
        assert!(header.contains("oauth_timestamp=\"1318622958\""));
    }

    #[test]
    fn test_authorization_header_fields_are_sorted() {
        let header = reference_signer().authorization_header_with(
            HttpMethod::Get,
            "https://api.bricklink.com/api/store/v1/colors",
            &[],
            "nonce",
            "1",
        );

        let names: Vec<&str> = header
            .trim_start_matches("OAuth ")
            .split(", ")
            .filter_map(|field| field.split('=').next())
            .collect();
        assert_eq!(
            names,
            vec![
                "oauth_consumer_key",
                "oauth_nonce",
                "oauth_signature",
                "oauth_signature_method",
                "oauth_timestamp",
                "oauth_token",
                "oauth_version",
            ]
        );
    }

    #[test]
    fn test_query_parameters_change_the_signature() {
        let signer = reference_signer();
        let url = "https://api.bricklink.com/api/store/v1/orders";
        let plain = signer.authorization_header_with(HttpMethod::Get, url, &[], "n", "1");
        let filtered = signer.authorization_header_with(
            HttpMethod::Get,
            url,
            &[("direction".to_string(), "out".to_string())],
            "n",
            "1",
        );

        assert_ne!(plain, filtered);
    }

    #[test]
    fn test_generate_nonce_is_alphanumeric() {
        let nonce = generate_nonce();
        assert_eq!(nonce.len(), NONCE_LENGTH);
        assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(nonce, generate_nonce());
    }

    #[test]
    fn test_header_never_contains_secrets() {
        let header = reference_signer().authorization_header(
            HttpMethod::Delete,
            "https://api.bricklink.com/api/store/v1/coupons/1",
            &[],
        );

        assert!(!header.contains("kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw"));
        assert!(!header.contains("LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE"));
    }
}
