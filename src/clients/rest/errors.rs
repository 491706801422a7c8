//! Error types for BrickLink REST operations.
//!
//! [`RestError`] is the one error type every resource method returns. It
//! separates failures the API reported in `meta.code` from failures below
//! the envelope and from arguments rejected before any request was sent.
//!
//! # Error Handling
//!
//! | `meta.code`   | Variant                        |
//! |---------------|--------------------------------|
//! | 404           | [`RestError::NotFound`]        |
//! | 429           | [`RestError::RateLimited`]     |
//! | 401, 403      | [`RestError::Authentication`]  |
//! | any other     | [`RestError::Api`]             |
//!
//! # Example
//!
//! ```rust,ignore
//! use bricklink_api::RestError;
//!
//! match client.colors().get_color(999).await {
//!     Ok(color) => println!("{:?}", color.name),
//!     Err(RestError::NotFound(failure)) => println!("No such color: {}", failure.message),
//!     Err(RestError::RateLimited(_)) => println!("Slow down"),
//!     Err(RestError::Authentication(_)) => println!("Check your OAuth tokens"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::clients::HttpError;

/// A failure reported by the API in the response envelope.
///
/// Carries the `meta.code`, the server message, and the raw envelope for
/// diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    /// The `meta.code` from the envelope.
    pub code: i64,
    /// The `meta.message` from the envelope, or `"Unknown error"` when absent.
    pub message: String,
    /// The full response body.
    pub envelope: Value,
}

/// Error type for REST operations against the BrickLink API.
#[derive(Debug, Error)]
pub enum RestError {
    /// A required argument was empty; no request was sent.
    #[error("Invalid argument: '{field}' is required and cannot be empty")]
    InvalidArgument {
        /// The name of the rejected argument.
        field: &'static str,
    },

    /// The resource does not exist (`meta.code` 404).
    #[error("Not found ({}): {}", .0.code, .0.message)]
    NotFound(ApiFailure),

    /// The API rate limit was exceeded (`meta.code` 429).
    #[error("Rate limited ({}): {}", .0.code, .0.message)]
    RateLimited(ApiFailure),

    /// The credentials were rejected (`meta.code` 401 or 403).
    #[error("Authentication failed ({}): {}", .0.code, .0.message)]
    Authentication(ApiFailure),

    /// Any other non-200 `meta.code`.
    #[error("BrickLink API error ({}): {}", .0.code, .0.message)]
    Api(ApiFailure),

    /// The body was JSON but not a `{meta, data}` envelope.
    #[error("Malformed response envelope: {body}")]
    MalformedEnvelope {
        /// The response body as received.
        body: Value,
    },

    /// The request could not be sent or the response could not be read.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The `data` payload did not match the expected record shape.
    #[error("Failed to decode {resource} payload: {source}")]
    Decode {
        /// The record type being decoded.
        resource: &'static str,
        /// The underlying serde error.
        source: serde_json::Error,
    },

    /// A request body or parameter set could not be serialized.
    #[error("Failed to encode {resource} request: {source}")]
    Encode {
        /// The record type being encoded.
        resource: &'static str,
        /// The underlying serde error.
        source: serde_json::Error,
    },

    /// A network operation was invoked on a value not bound to a live client.
    #[error("{resource} is not associated with a live client; cannot {operation}")]
    Unassociated {
        /// The entity type.
        resource: &'static str,
        /// The operation that was attempted.
        operation: &'static str,
    },
}

impl RestError {
    /// Classifies a non-200 `meta.code` into the matching variant.
    #[must_use]
    pub fn from_meta(code: i64, message: Option<&str>, envelope: Value) -> Self {
        let failure = ApiFailure {
            code,
            message: message.unwrap_or("Unknown error").to_string(),
            envelope,
        };
        match code {
            404 => Self::NotFound(failure),
            429 => Self::RateLimited(failure),
            401 | 403 => Self::Authentication(failure),
            _ => Self::Api(failure),
        }
    }

    /// Returns the API failure details if the API reported this error.
    #[must_use]
    pub const fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::NotFound(f) | Self::RateLimited(f) | Self::Authentication(f) | Self::Api(f) => {
                Some(f)
            }
            _ => None,
        }
    }

    /// Returns the `meta.code` if the API reported this error.
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        self.failure().map(|f| f.code)
    }

    /// Returns `true` for [`RestError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
