//! HTTP client for BrickLink API communication.
//!
//! This module provides the [`HttpClient`] type, which signs and sends a
//! single request and parses the response body as JSON.

use std::collections::HashMap;

use crate::auth::oauth::hmac::percent_encode;
use crate::auth::oauth::OAuthSigner;
use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, BricklinkConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making signed requests to the BrickLink API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Query string encoding (RFC 3986, the same rules used for signing)
/// - OAuth 1.0a `Authorization` header generation
/// - Default headers including User-Agent and Accept
///
/// Each call to [`request`](Self::request) performs exactly one HTTP
/// exchange. There are no retries.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bricklink_api::{BricklinkConfig, HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "colors")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API root every request path is joined onto.
    base_url: BaseUrl,
    /// Request signer holding the OAuth credentials.
    signer: OAuthSigner,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ClientInitialization`] if the underlying
    /// reqwest client cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &BricklinkConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}BrickLink API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::ClientInitialization {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            signer: OAuthSigner::new(config.credentials().clone()),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for a request, including its encoded query string.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let url = self.base_url.join(&request.path);
        let pairs = request.query.to_pairs();
        if pairs.is_empty() {
            return url;
        }
        format!("{url}?{}", encode_query(&pairs))
    }

    /// Sends an HTTP request to the BrickLink API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL and query string construction
    /// - Request signing
    /// - JSON body parsing
    ///
    /// The HTTP status does not decide success here: any response whose
    /// body is JSON is returned as an [`HttpResponse`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - The body is not JSON (`InvalidBody`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);
        let pairs = request.query.to_pairs();
        let full_url = self.url_for(&request);

        let mut headers = self.default_headers.clone();
        headers.insert(
            "Authorization".to_string(),
            self.signer
                .authorization_header(request.http_method, &url, &pairs),
        );
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        let mut req_builder = match request.http_method {
            crate::clients::http_request::HttpMethod::Get => self.client.get(&full_url),
            crate::clients::http_request::HttpMethod::Post => self.client.post(&full_url),
            crate::clients::http_request::HttpMethod::Put => self.client.put(&full_url),
            crate::clients::http_request::HttpMethod::Delete => self.client.delete(&full_url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = request.http_method.as_str(),
            path = %request.path,
            "Sending BrickLink API request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let body_text = res.text().await?;

        let body = serde_json::from_str(&body_text).map_err(|_| HttpError::InvalidBody {
            status: code,
            body: body_text.clone(),
        })?;

        Ok(HttpResponse::new(code, body))
    }
}

/// Encodes `(name, value)` pairs as a query string with RFC 3986 escaping.
fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
