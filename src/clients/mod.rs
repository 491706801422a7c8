//! HTTP client types for BrickLink API communication.
//!
//! This module provides the transport layer: OAuth-signed requests sent to
//! the versioned API root and JSON response parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`QueryParams`]: Query parameters that drop unset values
//! - [`rest::RestClient`]: The envelope-aware REST client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use bricklink_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "orders")
//!     .query_param("direction", "in")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, QueryParams};
pub use http_response::HttpResponse;

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
