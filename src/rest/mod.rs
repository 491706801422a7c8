//! Resource layer for the BrickLink Store API.
//!
//! This module provides the facades that turn endpoint-shaped calls into
//! requests on the shared [`RestClient`](crate::clients::RestClient):
//!
//! - **[`resources`]**: one facade per resource family, plus typed records
//! - **Path building**: template interpolation with per-segment encoding
//! - **[`ClientLink`]**: the weak handle returned entities use for follow-up
//!   lookups
//!
//! # Overview
//!
//! Every facade method computes a path and a parameter set, rejects empty
//! required identifiers with [`RestError::InvalidArgument`](crate::RestError)
//! before any request, and sends exactly one request. Errors from the
//! envelope normalizer propagate unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use bricklink_api::Bricklink;
//! use bricklink_api::rest::resources::OrderListParams;
//!
//! let client = Bricklink::new("ck", "cs", "token", "token-secret")?;
//!
//! let order = client.orders().get_order(12345678).await?;
//! println!("Status: {:?}", order.status);
//!
//! // The order can fetch its own items
//! for batch in order.fetch_items().await? {
//!     println!("{} lots", batch.len());
//! }
//! ```

mod link;
mod path;

pub mod resources;

// Public exports
pub use link::ClientLink;
pub use path::{build_path, require};
