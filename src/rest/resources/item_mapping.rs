//! Item mapping resource implementation.
//!
//! Translates between BrickLink catalog numbers and LEGO element IDs
//! (part-color codes).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::rest::encode_query;
use crate::clients::{RestClient, RestError};
use crate::rest::{build_path, require};

use super::common::{ItemRef, ItemType};

/// A catalog item in one color and its element ID.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ItemMapping {
    /// The catalog item.
    pub item: Option<ItemRef>,
    /// Color ID.
    pub color_id: Option<u32>,
    /// Color name.
    pub color_name: Option<String>,
    /// LEGO element ID.
    pub element_id: Option<String>,
}

#[derive(Serialize)]
struct ElementIdParams {
    color_id: Option<u32>,
}

/// Facade for the item mapping endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ItemMappingApi<'a> {
    client: &'a Arc<RestClient>,
}

impl<'a> ItemMappingApi<'a> {
    /// Creates the facade over a shared client.
    #[must_use]
    pub const fn new(client: &'a Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists element IDs of a part, in one color or all of them.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `no` is empty, or another
    /// [`RestError`] if the request fails.
    pub async fn get_element_id(
        &self,
        item_type: ItemType,
        no: &str,
        color_id: Option<u32>,
    ) -> Result<Vec<ItemMapping>, RestError> {
        let no = require("no", no)?;
        let path = build_path(
            "item_mapping/{type}/{no}",
            &[("type", item_type.as_str()), ("no", no)],
        );
        let query = encode_query("ElementIdParams", &ElementIdParams { color_id })?;
        self.client
            .get_as("ItemMapping", &path, Some(query))
            .await
    }

    /// Looks up the catalog item and color of an element ID.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `element_id` is empty, or
    /// another [`RestError`] if the request fails.
    pub async fn get_item_number(&self, element_id: &str) -> Result<Vec<ItemMapping>, RestError> {
        let element_id = require("element_id", element_id)?;
        let path = build_path("item_mapping/{element_id}", &[("element_id", element_id)]);
        self.client.get_as("ItemMapping", &path, None).await
    }
}
