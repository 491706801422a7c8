//! Category resource implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{RestClient, RestError};
use crate::rest::build_path;

/// A catalog category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Category {
    /// Category ID.
    pub category_id: Option<u32>,
    /// Category name.
    pub category_name: Option<String>,
    /// Parent category ID; 0 for a main category.
    pub parent_id: Option<u32>,
}

/// Facade for the category endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CategoryApi<'a> {
    client: &'a Arc<RestClient>,
}

impl<'a> CategoryApi<'a> {
    /// Creates the facade over a shared client.
    #[must_use]
    pub const fn new(client: &'a Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists all catalog categories.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_category_list(&self) -> Result<Vec<Category>, RestError> {
        self.client.get_as("Category", "categories", None).await
    }

    /// Retrieves one category.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_category(&self, category_id: u32) -> Result<Category, RestError> {
        let path = build_path("categories/{id}", &[("id", &category_id.to_string())]);
        self.client.get_as("Category", &path, None).await
    }
}
