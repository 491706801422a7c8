//! Color resource implementation.
//!
//! The API names color fields `color_id`, `color_name`, `color_code` and
//! `color_type`; [`Color`] exposes them as `id`, `name`, `hex_code` and
//! `category`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{RestClient, RestError};
use crate::rest::build_path;

/// A catalog color.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Color {
    /// Color ID.
    #[serde(rename = "color_id")]
    pub id: Option<u32>,
    /// Color name.
    #[serde(rename = "color_name")]
    pub name: Option<String>,
    /// Hex RGB code without `#`.
    #[serde(rename = "color_code")]
    pub hex_code: Option<String>,
    /// Color group, e.g. `"Solid"` or `"Transparent"`.
    #[serde(rename = "color_type")]
    pub category: Option<String>,
}

/// Facade for the color endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ColorApi<'a> {
    client: &'a Arc<RestClient>,
}

impl<'a> ColorApi<'a> {
    /// Creates the facade over a shared client.
    #[must_use]
    pub const fn new(client: &'a Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists all catalog colors.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_color_list(&self) -> Result<Vec<Color>, RestError> {
        self.client.get_as("Color", "colors", None).await
    }

    /// Retrieves one color.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::NotFound`] for an unknown color ID, or another
    /// [`RestError`] if the request fails.
    pub async fn get_color(&self, color_id: u32) -> Result<Color, RestError> {
        let path = build_path("colors/{id}", &[("id", &color_id.to_string())]);
        self.client.get_as("Color", &path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_color_field_names() {
        let color: Color = serde_json::from_value(json!({
            "color_id": 5,
            "color_name": "Red",
            "color_code": "C91A09",
            "color_type": "Solid"
        }))
        .unwrap();

        assert_eq!(color.id, Some(5));
        assert_eq!(color.name.as_deref(), Some("Red"));
        assert_eq!(color.hex_code.as_deref(), Some("C91A09"));
        assert_eq!(color.category.as_deref(), Some("Solid"));
    }
}
