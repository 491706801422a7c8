//! # BrickLink Store API for Rust
//!
//! An async client for the BrickLink Store API, providing OAuth 1.0a request
//! signing, response envelope handling and typed facades for every resource
//! family a BrickLink store exposes.
//!
//! ## Overview
//!
//! This crate provides:
//! - A root [`Bricklink`] client built from the four OAuth secrets
//! - Type-safe configuration via [`BricklinkConfig`] and [`BricklinkConfigBuilder`]
//! - Validated newtypes for the consumer key/secret and access token/secret
//! - HMAC-SHA1 request signing via [`auth::oauth`]
//! - Envelope normalization: a successful call yields the `data` payload,
//!   anything else yields a classified [`RestError`]
//! - Typed resource facades via [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bricklink_api::Bricklink;
//!
//! let client = Bricklink::new("consumer-key", "consumer-secret", "token", "token-secret")?;
//!
//! let order = client.orders().get_order(12345678).await?;
//! println!("Order {} is {:?}", order.order_id.unwrap_or_default(), order.status);
//! ```
//!
//! ## Configuration
//!
//! Use the builder when you need to point the client somewhere other than
//! the production API, or to prefix the user agent:
//!
//! ```rust
//! use bricklink_api::{
//!     AccessToken, BaseUrl, Bricklink, BricklinkConfig, ConsumerKey, ConsumerSecret,
//!     TokenSecret,
//! };
//!
//! let config = BricklinkConfig::builder()
//!     .consumer_key(ConsumerKey::new("consumer-key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("consumer-secret").unwrap())
//!     .token(AccessToken::new("token").unwrap())
//!     .token_secret(TokenSecret::new("token-secret").unwrap())
//!     .base_url(BaseUrl::new("http://127.0.0.1:8080").unwrap())
//!     .user_agent_prefix("MyStore/1.0")
//!     .build()
//!     .unwrap();
//!
//! let client = Bricklink::with_config(&config).unwrap();
//! ```
//!
//! ## Error Handling
//!
//! Every facade call returns `Result<T, RestError>`. The API reports
//! failures inside the response body, so the HTTP status is ignored and the
//! envelope's `meta.code` decides the error kind:
//!
//! ```rust,ignore
//! use bricklink_api::RestError;
//!
//! match client.colors().get_color(999).await {
//!     Ok(color) => println!("{:?}", color.name),
//!     Err(RestError::NotFound(failure)) => println!("no such color: {}", failure.message),
//!     Err(RestError::RateLimited(_)) => println!("slow down"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Entities That Fetch More
//!
//! Orders and catalog items returned by the client keep a weak link to it,
//! so they can fetch related data without the caller passing the client
//! back in:
//!
//! ```rust,ignore
//! let order = client.orders().get_order(12345678).await?;
//! let items = order.fetch_items().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Empty secrets and empty identifiers are rejected
//!   before any request is sent
//! - **One call, one request**: No retries, caching or pagination
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

mod bricklink;

pub use bricklink::Bricklink;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{
    AccessToken, BaseUrl, BricklinkConfig, BricklinkConfigBuilder, ConsumerKey, ConsumerSecret,
    TokenSecret,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::rest::ApiFailure;
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, QueryParams, RestClient, RestError,
};
