//! Store setting resource implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{RestClient, RestError};
use crate::rest::build_path;

/// A shipping method configured in your store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingMethod {
    /// Shipping method ID.
    pub method_id: Option<u64>,
    /// Method name.
    pub name: Option<String>,
    /// Note shown to buyers.
    pub note: Option<String>,
    /// Whether insurance is offered.
    pub insurance: Option<bool>,
    /// Whether this is the default method.
    pub is_default: Option<bool>,
    /// Whether the method is available.
    pub is_available: Option<bool>,
}

/// Facade for the setting endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SettingApi<'a> {
    client: &'a Arc<RestClient>,
}

impl<'a> SettingApi<'a> {
    /// Creates the facade over a shared client.
    #[must_use]
    pub const fn new(client: &'a Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists your shipping methods.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_shipping_methods(&self) -> Result<Vec<ShippingMethod>, RestError> {
        self.client
            .get_as("ShippingMethod", "settings/shipping_methods", None)
            .await
    }

    /// Retrieves one shipping method.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_shipping_method(&self, method_id: u64) -> Result<ShippingMethod, RestError> {
        let path = build_path(
            "settings/shipping_methods/{id}",
            &[("id", &method_id.to_string())],
        );
        self.client.get_as("ShippingMethod", &path, None).await
    }
}
