//! REST client for the BrickLink Store API.
//!
//! This module provides the layer between the signed HTTP transport and the
//! resource facades. It unwraps the `{meta, data}` envelope every BrickLink
//! response uses and turns non-200 `meta.code` values into typed errors.
//!
//! # Overview
//!
//! - [`RestClient`]: The REST client with `get()`, `post()`, `put()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//! - [`normalize`]: The envelope classification on its own
//!
//! # Example
//!
//! ```rust,ignore
//! use bricklink_api::{BricklinkConfig, RestClient};
//!
//! let client = RestClient::new(&config)?;
//! let colors = client.get("colors", None).await?;
//! println!("Colors: {colors}");
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call is one HTTP exchange; a 429 surfaces as
//! [`RestError::RateLimited`] for the caller to handle.

mod client;
mod envelope;
mod errors;

pub use client::{decode, encode, encode_query, RestClient};
pub use envelope::{normalize, Meta};
pub use errors::{ApiFailure, RestError};
