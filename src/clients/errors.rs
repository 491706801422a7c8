//! Transport-level error types.
//!
//! These errors describe failures below the response envelope: the request
//! could not be built, the network exchange failed, or the body was not JSON.
//! They are surfaced unchanged by the envelope normalizer.
//!
//! # Example
//!
//! ```rust,ignore
//! use bricklink_api::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Body: {}", response.body),
//!     Err(HttpError::InvalidBody { status, body }) => {
//!         println!("Non-JSON response ({status}): {body}");
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method that rejected the body.
        method: String,
    },
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be parsed as JSON.
    #[error("Response with status {status} is not valid JSON: {body}")]
    InvalidBody {
        /// The HTTP status code of the response.
        status: u16,
        /// The raw response text.
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_body_not_allowed() {
        let error = InvalidHttpRequestError::BodyNotAllowed {
            method: "delete".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot send a body with delete.");
    }

    #[test]
    fn test_invalid_body_error_includes_status_and_text() {
        let error = HttpError::InvalidBody {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("502"));
        assert!(message.contains("Bad Gateway"));
    }

    #[test]
    fn test_invalid_request_converts_into_http_error() {
        let error: HttpError = InvalidHttpRequestError::EmptyPath.into();
        assert!(matches!(
            error,
            HttpError::InvalidRequest(InvalidHttpRequestError::EmptyPath)
        ));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::EmptyPath;
        let _ = invalid;

        let http: &dyn std::error::Error = &HttpError::InvalidBody {
            status: 200,
            body: String::new(),
        };
        let _ = http;
    }
}
