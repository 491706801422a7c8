//! The BrickLink response envelope.
//!
//! Every response body has the shape `{"meta": {"code", "message",
//! "description"}, "data": ...}`. Success is decided by `meta.code` alone;
//! the HTTP status of a response whose body is an envelope is ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::clients::rest::RestError;

/// The `meta` block of a response envelope.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Meta {
    /// Application-level status code; 200 means success.
    pub code: i64,
    /// Short status message.
    #[serde(default)]
    pub message: Option<String>,
    /// Longer human-readable explanation.
    #[serde(default)]
    pub description: Option<String>,
}

impl Meta {
    /// Reads the `meta` block of a response body.
    ///
    /// Returns `None` when the body is not an object, has no `meta`, or the
    /// `meta` block has no integer `code`.
    #[must_use]
    pub fn from_body(body: &Value) -> Option<Self> {
        body.get("meta")
            .and_then(|meta| Self::deserialize(meta).ok())
    }

    /// Returns `true` when `code` is 200.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == 200
    }
}

/// Unwraps a response envelope into its `data` payload.
///
/// A `meta.code` of 200 yields `data`, or `null` when the envelope carries
/// no `data`. Any other code becomes the matching [`RestError`] variant with
/// the server message and the whole envelope attached.
///
/// # Errors
///
/// - [`RestError::MalformedEnvelope`] if the body has no usable `meta`
/// - [`RestError::NotFound`], [`RestError::RateLimited`],
///   [`RestError::Authentication`] or [`RestError::Api`] for a non-200 code
///
/// # Example
///
/// ```rust
/// use bricklink_api::clients::rest::normalize;
/// use serde_json::json;
///
/// let data = normalize(json!({
///     "meta": {"code": 200, "message": "OK"},
///     "data": {"color_id": 5}
/// }))
/// .unwrap();
/// assert_eq!(data, json!({"color_id": 5}));
///
/// let error = normalize(json!({"meta": {"code": 404, "message": "Not found"}})).unwrap_err();
/// assert!(error.is_not_found());
/// ```
pub fn normalize(body: Value) -> Result<Value, RestError> {
    let Some(meta) = Meta::from_body(&body) else {
        return Err(RestError::MalformedEnvelope { body });
    };

    if meta.is_success() {
        return Ok(match body {
            Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
            _ => Value::Null,
        });
    }

    tracing::debug!(
        code = meta.code,
        message = meta.message.as_deref().unwrap_or_default(),
        description = meta.description.as_deref().unwrap_or_default(),
        "BrickLink API reported an error"
    );
    Err(RestError::from_meta(meta.code, meta.message.as_deref(), body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_returns_data_exactly() {
        let data = json!([{"order_id": 1}, {"order_id": 2}]);
        let body = json!({"meta": {"code": 200, "message": "OK"}, "data": data.clone()});

        assert_eq!(normalize(body).unwrap(), data);
    }

    #[test]
    fn test_success_without_data_is_null() {
        let body = json!({"meta": {"code": 200, "message": "OK"}});
        assert_eq!(normalize(body).unwrap(), Value::Null);
    }

    #[test]
    fn test_not_found_carries_message_and_envelope() {
        let body = json!({
            "meta": {"code": 404, "message": "Not found", "description": "No color"}
        });
        let error = normalize(body.clone()).unwrap_err();

        match error {
            RestError::NotFound(failure) => {
                assert_eq!(failure.code, 404);
                assert_eq!(failure.message, "Not found");
                assert_eq!(failure.envelope, body);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_rate_limit_keeps_server_message() {
        let body = json!({"meta": {"code": 429, "message": "Too many requests"}});
        match normalize(body).unwrap_err() {
            RestError::RateLimited(failure) => assert_eq!(failure.message, "Too many requests"),
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn test_auth_codes_map_to_authentication() {
        for code in [401, 403] {
            let body = json!({"meta": {"code": code, "message": "Denied"}});
            assert!(matches!(
                normalize(body).unwrap_err(),
                RestError::Authentication(_)
            ));
        }
    }

    #[test]
    fn test_other_codes_map_to_api_error_with_default_message() {
        let body = json!({"meta": {"code": 400}});
        match normalize(body).unwrap_err() {
            RestError::Api(failure) => {
                assert_eq!(failure.code, 400);
                assert_eq!(failure.message, "Unknown error");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_meta_is_malformed() {
        let body = json!({"data": {"color_id": 5}});
        assert!(matches!(
            normalize(body).unwrap_err(),
            RestError::MalformedEnvelope { .. }
        ));
    }

    #[test]
    fn test_non_object_body_is_malformed() {
        assert!(matches!(
            normalize(json!([1, 2, 3])).unwrap_err(),
            RestError::MalformedEnvelope { .. }
        ));
    }

    #[test]
    fn test_meta_without_integer_code_is_malformed() {
        let body = json!({"meta": {"code": "200", "message": "OK"}, "data": {}});
        assert!(matches!(
            normalize(body).unwrap_err(),
            RestError::MalformedEnvelope { .. }
        ));
    }

    #[test]
    fn test_codes_outside_http_range_are_api_errors() {
        for code in [-1_i64, 70000] {
            let body = json!({"meta": {"code": code, "message": "Odd"}});
            match normalize(body).unwrap_err() {
                RestError::Api(failure) => assert_eq!(failure.code, code),
                other => panic!("expected Api, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_meta_from_body_reads_description() {
        let meta = Meta::from_body(&json!({
            "meta": {"code": 400, "message": "Bad", "description": "Missing field"}
        }))
        .unwrap();
        assert_eq!(meta.description.as_deref(), Some("Missing field"));
        assert!(!meta.is_success());
    }
}
