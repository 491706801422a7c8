//! HTTP request types for the BrickLink API client.
//!
//! This module provides the [`HttpRequest`] type and its builder, plus
//! [`QueryParams`], the scalar query mapping that drops unset values.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the BrickLink API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the uppercase method name used on the wire and in signatures.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` for methods that may carry a request body.
    #[must_use]
    pub const fn allows_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Query parameters for a request, keyed by name.
///
/// Values are JSON scalars so booleans and numbers stay native until the
/// transport encodes them. Inserting `None` or `null` leaves the key unset,
/// which is how optional filters are omitted.
///
/// # Example
///
/// ```rust
/// use bricklink_api::clients::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.insert("direction", "in");
/// params.insert_opt("status", None::<&str>);
/// params.insert("filed", false);
///
/// assert_eq!(
///     params.to_pairs(),
///     vec![
///         ("direction".to_string(), "in".to_string()),
///         ("filed".to_string(), "false".to_string()),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams(BTreeMap<String, Value>);

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter. A `null` value removes the key instead.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        match value.into() {
            Value::Null => {
                self.0.remove(&key);
            }
            value => {
                self.0.insert(key, value);
            }
        }
    }

    /// Sets a parameter only when `value` is `Some`.
    pub fn insert_opt<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Returns the native value of a parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the parameter is set.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of set parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the parameters as unencoded `(name, value)` pairs, sorted by name.
    ///
    /// Strings are used verbatim, booleans become `true`/`false`, numbers use
    /// their JSON form.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| {
                let rendered = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), rendered)
            })
            .collect()
    }

    /// Builds parameters from a serializable struct.
    ///
    /// Each top-level field becomes one parameter; `None` fields serialize to
    /// `null` and are dropped.
    ///
    /// # Errors
    ///
    /// Returns the serde error if `params` does not serialize, or serializes
    /// to something other than a JSON object.
    pub fn from_serialize<T: Serialize>(params: &T) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(params)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            Value::Null => Ok(Self::new()),
            other => Err(serde::ser::Error::custom(format!(
                "query parameters must serialize to an object, got {other}"
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// An HTTP request to be sent to the BrickLink API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use bricklink_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "orders")
///     .query_param("direction", "out")
///     .build()
///     .unwrap();
///
/// let put_request = HttpRequest::builder(HttpMethod::Put, "orders/1/status")
///     .body(json!({"field": "status", "value": "SHIPPED"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the API base URL.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<Value>,
    /// Query parameters to append to the URL.
    pub query: QueryParams,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - the path is empty after trimming slashes
    /// - a body is set on a GET or DELETE request
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.body.is_some() && !self.http_method.allows_body() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<Value>,
    query: QueryParams,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: QueryParams::new(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Replaces all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.insert(key, value);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}
