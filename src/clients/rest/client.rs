//! REST client implementation for the BrickLink Store API.
//!
//! This module provides the [`RestClient`] type: one signed HTTP exchange per
//! call, with the response envelope unwrapped into its `data` payload.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::rest::{normalize, RestError};
use crate::clients::{HttpClient, HttpMethod, HttpRequest, QueryParams};
use crate::config::BricklinkConfig;
use crate::error::ConfigError;

/// REST API client for the BrickLink Store API.
///
/// Provides `get`, `post`, `put` and `delete` methods that return the
/// envelope's `data` payload, plus typed variants that decode it.
///
/// Calls are independent: the client keeps no per-request state and
/// repeating a call sends a new request.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bricklink_api::{BricklinkConfig, RestClient};
///
/// let client = RestClient::new(&config)?;
///
/// // GET request
/// let order = client.get("orders/12345678", None).await?;
///
/// // PUT request with body
/// let body = serde_json::json!({"field": "status", "value": "SHIPPED"});
/// client.put("orders/12345678/status", None, body).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ClientInitialization`] if the HTTP client
    /// cannot be created.
    pub fn new(config: &BricklinkConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request and returns the `data` payload.
    ///
    /// # Errors
    ///
    /// Returns a [`RestError`] for transport failures, malformed envelopes,
    /// or any non-200 `meta.code`.
    pub async fn get(&self, path: &str, query: Option<QueryParams>) -> Result<Value, RestError> {
        self.request(HttpMethod::Get, path, query, None).await
    }

    /// Sends a POST request with a JSON body and returns the `data` payload.
    ///
    /// # Errors
    ///
    /// Returns a [`RestError`] for transport failures, malformed envelopes,
    /// or any non-200 `meta.code`.
    pub async fn post(
        &self,
        path: &str,
        query: Option<QueryParams>,
        body: Value,
    ) -> Result<Value, RestError> {
        self.request(HttpMethod::Post, path, query, Some(body)).await
    }

    /// Sends a PUT request and returns the `data` payload.
    ///
    /// # Errors
    ///
    /// Returns a [`RestError`] for transport failures, malformed envelopes,
    /// or any non-200 `meta.code`.
    pub async fn put(
        &self,
        path: &str,
        query: Option<QueryParams>,
        body: Value,
    ) -> Result<Value, RestError> {
        self.request(HttpMethod::Put, path, query, Some(body)).await
    }

    /// Sends a DELETE request and returns the `data` payload.
    ///
    /// # Errors
    ///
    /// Returns a [`RestError`] for transport failures, malformed envelopes,
    /// or any non-200 `meta.code`.
    pub async fn delete(&self, path: &str, query: Option<QueryParams>) -> Result<Value, RestError> {
        self.request(HttpMethod::Delete, path, query, None).await
    }

    /// Sends one request and unwraps the response envelope.
    ///
    /// Unset query parameters are never sent. The body is attached only for
    /// POST and PUT; a body on GET or DELETE is rejected before sending.
    ///
    /// # Errors
    ///
    /// - [`RestError::Http`] if the request is invalid, the exchange fails,
    ///   or the body is not JSON
    /// - [`RestError::MalformedEnvelope`] if the body is JSON without `meta`
    /// - the classified API error for any non-200 `meta.code`
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<QueryParams>,
        body: Option<Value>,
    ) -> Result<Value, RestError> {
        let mut builder = HttpRequest::builder(method, path);

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;
        let response = self.http_client.request(request).await?;
        let status = response.code;

        normalize(response.body).map_err(|e| {
            tracing::debug!(status, path, error = %e, "BrickLink request failed");
            e
        })
    }

    /// Sends one request and decodes the `data` payload into `T`.
    ///
    /// `resource` names the record type in decode errors.
    ///
    /// # Errors
    ///
    /// Everything [`request`](Self::request) returns, plus
    /// [`RestError::Decode`] if `data` does not match `T`.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        method: HttpMethod,
        path: &str,
        query: Option<QueryParams>,
        body: Option<Value>,
    ) -> Result<T, RestError> {
        let data = self.request(method, path, query, body).await?;
        decode(resource, data)
    }

    /// Sends a GET request and decodes the `data` payload into `T`.
    ///
    /// # Errors
    ///
    /// See [`request_as`](Self::request_as).
    pub async fn get_as<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        query: Option<QueryParams>,
    ) -> Result<T, RestError> {
        self.request_as(resource, HttpMethod::Get, path, query, None)
            .await
    }
}

/// Decodes a `data` payload into a typed record.
///
/// # Errors
///
/// Returns [`RestError::Decode`] naming `resource` if the shapes differ.
pub fn decode<T: DeserializeOwned>(resource: &'static str, data: Value) -> Result<T, RestError> {
    serde_json::from_value(data).map_err(|source| RestError::Decode { resource, source })
}

/// Serializes a request body.
///
/// # Errors
///
/// Returns [`RestError::Encode`] naming `resource` if serialization fails.
pub fn encode<T: Serialize>(resource: &'static str, body: &T) -> Result<Value, RestError> {
    serde_json::to_value(body).map_err(|source| RestError::Encode { resource, source })
}

/// Builds query parameters from a parameter struct.
///
/// # Errors
///
/// Returns [`RestError::Encode`] naming `resource` if serialization fails.
pub fn encode_query<T: Serialize>(
    resource: &'static str,
    params: &T,
) -> Result<QueryParams, RestError> {
    QueryParams::from_serialize(params).map_err(|source| RestError::Encode { resource, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;
    use crate::config::{AccessToken, ConsumerKey, ConsumerSecret, TokenSecret};
    use serde::Deserialize;
    use serde_json::json;

    fn create_test_config() -> BricklinkConfig {
        BricklinkConfig::builder()
            .consumer_key(ConsumerKey::new("ck").unwrap())
            .consumer_secret(ConsumerSecret::new("cs").unwrap())
            .token(AccessToken::new("tk").unwrap())
            .token_secret(TokenSecret::new("ts").unwrap())
            .build()
            .unwrap()
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Shade {
        color_id: u32,
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }

    #[test]
    fn test_decode_success() {
        let shade: Shade = decode("Shade", json!({"color_id": 5})).unwrap();
        assert_eq!(shade, Shade { color_id: 5 });
    }

    #[test]
    fn test_decode_failure_names_resource() {
        let error = decode::<Shade>("Shade", json!({"color_id": "red"})).unwrap_err();
        assert!(matches!(error, RestError::Decode { resource: "Shade", .. }));
    }

    #[test]
    fn test_encode_query_drops_none() {
        #[derive(Serialize)]
        struct Params {
            color_id: Option<u32>,
            box_included: bool,
        }

        let query = encode_query(
            "Params",
            &Params {
                color_id: None,
                box_included: true,
            },
        )
        .unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("box_included"), Some(&json!(true)));
    }

    #[tokio::test]
    async fn test_body_on_get_is_rejected_before_sending() {
        let client = RestClient::new(&create_test_config()).unwrap();
        let error = client
            .request(HttpMethod::Get, "colors", None, Some(json!({})))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            RestError::Http(crate::clients::HttpError::InvalidRequest(
                InvalidHttpRequestError::BodyNotAllowed { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_empty_path_is_rejected_before_sending() {
        let client = RestClient::new(&create_test_config()).unwrap();
        let error = client.get("", None).await.unwrap_err();

        assert!(matches!(
            error,
            RestError::Http(crate::clients::HttpError::InvalidRequest(
                InvalidHttpRequestError::EmptyPath
            ))
        ));
    }
}
