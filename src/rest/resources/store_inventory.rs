//! Store inventory resource implementation.
//!
//! This module provides [`StoreInventoryApi`] for the lots in your store.
//!
//! # Quantity Updates
//!
//! Updates change the quantity by a signed delta rather than setting it:
//! [`InventoryUpdate::quantity_delta`] of `5` serializes as `"+5"`.
//!
//! # Example
//!
//! ```rust,ignore
//! use bricklink_api::rest::resources::{InventoryListParams, InventoryUpdate};
//!
//! let params = InventoryListParams {
//!     item_type: Some("PART".to_string()),
//!     color_id: Some("1,5".to_string()),
//!     ..Default::default()
//! };
//! let lots = client.store_inventory().get_store_inventories(&params).await?;
//!
//! let update = InventoryUpdate {
//!     quantity_delta: Some(-3),
//!     ..Default::default()
//! };
//! client.store_inventory().update_store_inventory(101, &update).await?;
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::clients::rest::{decode, encode, encode_query};
use crate::clients::{RestClient, RestError};
use crate::rest::{build_path, require};

use super::common::{Condition, ItemRef};

/// A lot in your store inventory.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Inventory {
    /// Unique lot ID.
    pub inventory_id: Option<u64>,
    /// The catalog item.
    pub item: Option<ItemRef>,
    /// Color ID.
    pub color_id: Option<u32>,
    /// Color name.
    pub color_name: Option<String>,
    /// Quantity in stock.
    pub quantity: Option<i64>,
    /// Condition.
    pub new_or_used: Option<Condition>,
    /// Completeness of a set: `C`, `B` or `S`.
    pub completeness: Option<String>,
    /// Unit price.
    pub unit_price: Option<Decimal>,
    /// ID of the parent lot when bound.
    pub bind_id: Option<u64>,
    /// Lot description.
    pub description: Option<String>,
    /// Private remarks.
    pub remarks: Option<String>,
    /// Sold in multiples of this quantity.
    pub bulk: Option<u32>,
    /// Keep the lot when its quantity reaches zero.
    pub is_retain: Option<bool>,
    /// Whether the lot is in a stockroom.
    pub is_stock_room: Option<bool>,
    /// Stockroom `A`, `B` or `C`.
    pub stock_room_id: Option<String>,
    /// When the lot was created.
    pub date_created: Option<DateTime<Utc>>,
    /// Your cost.
    pub my_cost: Option<Decimal>,
    /// Sale discount in percent.
    pub sale_rate: Option<u32>,
    /// First tier quantity.
    pub tier_quantity1: Option<u32>,
    /// First tier price.
    pub tier_price1: Option<Decimal>,
    /// Second tier quantity.
    pub tier_quantity2: Option<u32>,
    /// Second tier price.
    pub tier_price2: Option<Decimal>,
    /// Third tier quantity.
    pub tier_quantity3: Option<u32>,
    /// Third tier price.
    pub tier_price3: Option<Decimal>,
}

/// Body for creating a lot.
///
/// `item.no`, `item.type`, `color_id`, `quantity`, `unit_price` and
/// `new_or_used` are required by the API; the rest are omitted when unset.
/// Tier pricing needs all six tier fields.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct NewInventory {
    /// The catalog item.
    pub item: ItemRef,
    /// Color ID.
    pub color_id: u32,
    /// Quantity.
    pub quantity: u32,
    /// Unit price.
    pub unit_price: Decimal,
    /// Condition.
    pub new_or_used: Condition,

    /// Completeness, only for sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completeness: Option<String>,

    /// Lot description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Private remarks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// Sold in multiples of this quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk: Option<u32>,

    /// Keep the lot when its quantity reaches zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_retain: Option<bool>,

    /// Put the lot in a stockroom.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_stock_room: Option<bool>,

    /// Stockroom, only when `is_stock_room` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_room_id: Option<String>,

    /// Your cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_cost: Option<Decimal>,

    /// Sale discount in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_rate: Option<u32>,

    /// First tier quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_quantity1: Option<u32>,

    /// First tier price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_price1: Option<Decimal>,

    /// Second tier quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_quantity2: Option<u32>,

    /// Second tier price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_price2: Option<Decimal>,

    /// Third tier quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_quantity3: Option<u32>,

    /// Third tier price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_price3: Option<Decimal>,
}

impl NewInventory {
    fn validate(&self) -> Result<(), RestError> {
        require("item.no", self.item.no.as_deref().unwrap_or_default())?;
        if self.item.item_type.is_none() {
            return Err(RestError::InvalidArgument { field: "item.type" });
        }
        Ok(())
    }
}

/// Partial update of a lot. Unset fields are left unchanged.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct InventoryUpdate {
    /// Change in quantity; serialized with an explicit sign.
    #[serde(
        rename = "quantity",
        serialize_with = "serialize_delta",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity_delta: Option<i64>,

    /// Unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,

    /// Lot description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Private remarks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// Sold in multiples of this quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk: Option<u32>,

    /// Keep the lot when its quantity reaches zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_retain: Option<bool>,

    /// Move the lot into or out of a stockroom.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_stock_room: Option<bool>,

    /// Stockroom, only when `is_stock_room` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_room_id: Option<String>,

    /// Your cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_cost: Option<Decimal>,

    /// Sale discount in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_rate: Option<u32>,

    /// First tier quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_quantity1: Option<u32>,

    /// First tier price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_price1: Option<Decimal>,

    /// Second tier quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_quantity2: Option<u32>,

    /// Second tier price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_price2: Option<Decimal>,

    /// Third tier quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_quantity3: Option<u32>,

    /// Third tier price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_price3: Option<Decimal>,
}

fn serialize_delta<S: Serializer>(delta: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
    match delta {
        Some(n) => serializer.serialize_str(&format!("{n:+}")),
        None => serializer.serialize_none(),
    }
}

/// Filters for listing lots.
///
/// Each filter takes a comma-separated list; prefix a value with `-` to
/// exclude it. Unset filters match everything.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryListParams {
    /// Item types, e.g. `"PART,-SET"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,

    /// Statuses: `Y` available, `S`/`B`/`C` stockroom, `N` unavailable, `R` reserved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Main category IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// Color IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_id: Option<String>,
}

/// Facade for the store inventory endpoints.
#[derive(Debug, Clone, Copy)]
pub struct StoreInventoryApi<'a> {
    client: &'a Arc<RestClient>,
}

impl<'a> StoreInventoryApi<'a> {
    /// Creates the facade over a shared client.
    #[must_use]
    pub const fn new(client: &'a Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists lots matching the filters.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_store_inventories(
        &self,
        params: &InventoryListParams,
    ) -> Result<Vec<Inventory>, RestError> {
        let query = encode_query("InventoryListParams", params)?;
        self.client
            .get_as("Inventory", "inventories", Some(query))
            .await
    }

    /// Retrieves one lot.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_store_inventory(&self, inventory_id: u64) -> Result<Inventory, RestError> {
        let path = build_path("inventories/{id}", &[("id", &inventory_id.to_string())]);
        self.client.get_as("Inventory", &path, None).await
    }

    /// Creates one lot.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if the item number or type is
    /// missing, or another [`RestError`] if the request fails.
    pub async fn create_store_inventory(
        &self,
        inventory: &NewInventory,
    ) -> Result<Inventory, RestError> {
        inventory.validate()?;
        let body = encode("NewInventory", inventory)?;
        let data = self.client.post("inventories", None, body).await?;
        decode("Inventory", data)
    }

    /// Creates several lots in one request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `inventories` is empty or any
    /// lot lacks its item number or type, or another [`RestError`] if the
    /// request fails.
    pub async fn create_store_inventories(
        &self,
        inventories: &[NewInventory],
    ) -> Result<Value, RestError> {
        if inventories.is_empty() {
            return Err(RestError::InvalidArgument {
                field: "inventories",
            });
        }
        for inventory in inventories {
            inventory.validate()?;
        }
        let body = encode("NewInventory", &inventories)?;
        self.client.post("inventories", None, body).await
    }

    /// Updates one lot.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn update_store_inventory(
        &self,
        inventory_id: u64,
        update: &InventoryUpdate,
    ) -> Result<Inventory, RestError> {
        let path = build_path("inventories/{id}", &[("id", &inventory_id.to_string())]);
        let body = encode("InventoryUpdate", update)?;
        let data = self.client.put(&path, None, body).await?;
        decode("Inventory", data)
    }

    /// Deletes one lot.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn delete_store_inventory(&self, inventory_id: u64) -> Result<Value, RestError> {
        let path = build_path("inventories/{id}", &[("id", &inventory_id.to_string())]);
        self.client.delete(&path, None).await
    }
}
