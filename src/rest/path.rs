//! Path building for BrickLink resource endpoints.
//!
//! Endpoint paths are templates with `{name}` placeholders. Values are
//! percent-encoded as single path segments, so an item number such as
//! `3001/old` cannot escape its segment.
//!
//! # Example
//!
//! ```rust
//! use bricklink_api::rest::build_path;
//!
//! let path = build_path("items/{type}/{no}/price", &[("type", "SET"), ("no", "75281-1")]);
//! assert_eq!(path, "items/SET/75281-1/price");
//! ```

use crate::auth::oauth::hmac::percent_encode;
use crate::clients::RestError;

/// Interpolates percent-encoded segment values into a path template.
///
/// Placeholders with no matching value are left untouched.
#[must_use]
pub fn build_path(template: &str, segments: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in segments {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &percent_encode(value));
    }

    result
}

/// Rejects an empty or whitespace-only required identifier.
///
/// # Errors
///
/// Returns [`RestError::InvalidArgument`] naming `field`.
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, RestError> {
    if value.trim().is_empty() {
        return Err(RestError::InvalidArgument { field });
    }
    Ok(value)
}
