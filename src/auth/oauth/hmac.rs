//! HMAC-SHA1 signature primitives for OAuth 1.0a.
//!
//! This module implements the pieces of RFC 5849 section 3.4 that do not
//! depend on time or randomness: percent encoding, the signature base
//! string, the signing key, and the signature itself.
//!
//! # Example
//!
//! ```rust
//! use bricklink_api::auth::oauth::hmac::{compute_signature, signing_key};
//!
//! let key = signing_key("consumer secret", "token secret");
//! assert_eq!(key, "consumer%20secret&token%20secret");
//!
//! let signature = compute_signature("GET&https%3A%2F%2Fexample.com&", &key);
//! assert_eq!(signature.len(), 28); // Base64 of 20 bytes
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Percent-encodes a value using the RFC 3986 unreserved set.
///
/// Only `A-Z a-z 0-9 - . _ ~` pass through; everything else, including
/// spaces and `+`, becomes `%XX`.
#[must_use]
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Normalizes request parameters into the `k=v&k=v` form used in the base string.
///
/// Keys and values are encoded first, then sorted by key and value.
#[must_use]
pub fn normalize_parameters<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k.as_ref()), percent_encode(v.as_ref())))
        .collect();
    encoded.sort();

    encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the signature base string: `METHOD&enc(url)&enc(params)`.
///
/// `base_url` must not contain a query string; query parameters belong in
/// `params` together with the `oauth_*` protocol parameters.
#[must_use]
pub fn signature_base_string<K, V>(method: &str, base_url: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(base_url),
        percent_encode(&normalize_parameters(params))
    )
}

/// Builds the HMAC key from the consumer secret and token secret.
#[must_use]
pub fn signing_key(consumer_secret: &str, token_secret: &str) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    )
}

/// Computes the base64-encoded HMAC-SHA1 of `base_string` under `key`.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(base_string: &str, key: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(base_string.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}
