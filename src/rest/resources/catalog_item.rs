//! Catalog item resource implementation.
//!
//! This module provides [`CatalogItemApi`] for the BrickLink catalog: item
//! details, images, superset and subset listings, price guides and the
//! colors an item is known in.
//!
//! # Linked Lookups
//!
//! A [`CatalogItem`] returned by [`CatalogItemApi::get_item`] can run the
//! other catalog lookups for itself:
//!
//! ```rust,ignore
//! use bricklink_api::rest::resources::{ItemType, PriceGuideParams};
//!
//! let item = client.catalog_items().get_item(ItemType::Part, "3001").await?;
//! let colors = item.known_colors().await?;
//! let guide = item.price_guide(&PriceGuideParams::default()).await?;
//! ```

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::rest::encode_query;
use crate::clients::{RestClient, RestError};
use crate::rest::{build_path, require, ClientLink};

use super::common::{Condition, GuideType, ItemRef, ItemType, Region, VatOption};

/// An item in the BrickLink catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogItem {
    /// Item number.
    pub no: Option<String>,
    /// Item name.
    pub name: Option<String>,
    /// Item type.
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
    /// Main category ID.
    pub category_id: Option<u32>,
    /// Alternate item number.
    pub alternate_no: Option<String>,
    /// Image URL.
    pub image_url: Option<String>,
    /// Thumbnail URL.
    pub thumbnail_url: Option<String>,
    /// Weight in grams.
    pub weight: Option<Decimal>,
    /// Length in studs.
    pub dim_x: Option<Decimal>,
    /// Width in studs.
    pub dim_y: Option<Decimal>,
    /// Height in studs.
    pub dim_z: Option<Decimal>,
    /// Release year.
    pub year_released: Option<u16>,
    /// Short description.
    pub description: Option<String>,
    /// Whether the item is obsolete.
    pub is_obsolete: Option<bool>,
    /// Language of an instruction or book.
    pub language_code: Option<String>,

    /// Client that returned this item. Detached for items built or
    /// deserialized by the caller.
    #[serde(skip)]
    pub link: ClientLink,
}

impl CatalogItem {
    fn lookup(
        &self,
        operation: &'static str,
    ) -> Result<(Arc<RestClient>, ItemType, &str), RestError> {
        let client = self.link.client("CatalogItem", operation)?;
        let item_type = self
            .item_type
            .ok_or(RestError::InvalidArgument { field: "type" })?;
        let no = require("no", self.no.as_deref().unwrap_or_default())?;
        Ok((client, item_type, no))
    }

    /// Fetches the image of this item in a color (`0` for the default).
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Unassociated`] if this item is not bound to a live
    /// client, or any error of [`CatalogItemApi::get_item_image`].
    pub async fn image(&self, color_id: u32) -> Result<ItemImage, RestError> {
        let (client, item_type, no) = self.lookup("fetch image")?;
        CatalogItemApi::new(&client)
            .get_item_image(item_type, no, color_id)
            .await
    }

    /// Fetches the items this item appears in.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Unassociated`] if this item is not bound to a live
    /// client, or any error of [`CatalogItemApi::get_supersets`].
    pub async fn supersets(&self, color_id: Option<u32>) -> Result<Vec<SupersetEntry>, RestError> {
        let (client, item_type, no) = self.lookup("fetch supersets")?;
        CatalogItemApi::new(&client)
            .get_supersets(item_type, no, color_id)
            .await
    }

    /// Fetches the items included in this item.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Unassociated`] if this item is not bound to a live
    /// client, or any error of [`CatalogItemApi::get_subsets`].
    pub async fn subsets(&self, params: &SubsetParams) -> Result<Vec<SubsetEntry>, RestError> {
        let (client, item_type, no) = self.lookup("fetch subsets")?;
        CatalogItemApi::new(&client)
            .get_subsets(item_type, no, params)
            .await
    }

    /// Fetches the price guide of this item.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Unassociated`] if this item is not bound to a live
    /// client, or any error of [`CatalogItemApi::get_price_guide`].
    pub async fn price_guide(&self, params: &PriceGuideParams) -> Result<PriceGuide, RestError> {
        let (client, item_type, no) = self.lookup("fetch price guide")?;
        CatalogItemApi::new(&client)
            .get_price_guide(item_type, no, params)
            .await
    }

    /// Fetches the colors this item is known in.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Unassociated`] if this item is not bound to a live
    /// client, or any error of [`CatalogItemApi::get_known_colors`].
    pub async fn known_colors(&self) -> Result<Vec<KnownColor>, RestError> {
        let (client, item_type, no) = self.lookup("fetch known colors")?;
        CatalogItemApi::new(&client)
            .get_known_colors(item_type, no)
            .await
    }
}

/// Image URLs of an item in one color.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ItemImage {
    /// Item number.
    pub no: Option<String>,
    /// Item type.
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
    /// Color ID.
    pub color_id: Option<u32>,
    /// Thumbnail URL.
    pub thumbnail_url: Option<String>,
    /// Full size image URL.
    pub large_url: Option<String>,
}

/// Items containing the queried item, grouped by color.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SupersetEntry {
    /// Color of the queried item in these supersets.
    pub color_id: Option<u32>,
    /// The containing items.
    #[serde(default)]
    pub entries: Vec<SupersetItem>,
}

/// One containing item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SupersetItem {
    /// The containing item.
    pub item: Option<ItemRef>,
    /// How many of the queried item it contains.
    pub quantity: Option<u32>,
    /// `A` alternate, `C` counterpart, `E` extra, `R` regular.
    pub appears_as: Option<String>,
}

/// Items included in the queried item, grouped by match.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SubsetEntry {
    /// Match ID shared by alternate and counterpart items; 0 otherwise.
    pub match_no: Option<u32>,
    /// The included items.
    #[serde(default)]
    pub entries: Vec<SubsetItem>,
}

/// One included item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SubsetItem {
    /// The included item.
    pub item: Option<ItemRef>,
    /// Color ID.
    pub color_id: Option<u32>,
    /// Regular quantity.
    pub quantity: Option<u32>,
    /// Extra quantity.
    pub extra_quantity: Option<u32>,
    /// Whether this is an alternate.
    pub is_alternate: Option<bool>,
    /// Whether this is a counterpart.
    pub is_counterpart: Option<bool>,
}

/// Price statistics for an item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PriceGuide {
    /// The item.
    pub item: Option<ItemRef>,
    /// Condition.
    pub new_or_used: Option<Condition>,
    /// Currency of the amounts.
    pub currency_code: Option<String>,
    /// Lowest price.
    pub min_price: Option<Decimal>,
    /// Highest price.
    pub max_price: Option<Decimal>,
    /// Average price.
    pub avg_price: Option<Decimal>,
    /// Quantity-weighted average price.
    pub qty_avg_price: Option<Decimal>,
    /// Number of lots or sales.
    pub unit_quantity: Option<u32>,
    /// Total number of items.
    pub total_quantity: Option<u32>,
    /// Individual listings or sales.
    #[serde(default)]
    pub price_detail: Vec<PriceDetail>,
}

/// One listing or sale in a price guide.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PriceDetail {
    /// Quantity.
    pub quantity: Option<u32>,
    /// Unit price.
    pub unit_price: Option<Decimal>,
    /// Seller country (sold guides).
    pub seller_country_code: Option<String>,
    /// Buyer country (sold guides).
    pub buyer_country_code: Option<String>,
}

/// A color an item is known in.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct KnownColor {
    /// Color ID.
    pub color_id: Option<u32>,
    /// Quantity of the item in this color across the catalog.
    pub quantity: Option<u32>,
}

#[derive(Serialize)]
struct SupersetParams {
    color_id: Option<u32>,
}

/// Options for subset listings.
///
/// The four flags are always sent; `color_id` only when set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SubsetParams {
    /// Color of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_id: Option<u32>,

    /// Include the original box.
    #[serde(rename = "box")]
    pub include_box: bool,

    /// Include the instruction.
    pub instruction: bool,

    /// Break minifigures into parts.
    pub break_minifigs: bool,

    /// Break subsets into their own items.
    pub break_subsets: bool,
}

/// Options for price guides.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PriceGuideParams {
    /// Color of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_id: Option<u32>,

    /// Current listings (`Stock`) or sales of the last six months (`Sold`).
    pub guide_type: GuideType,

    /// Condition.
    pub new_or_used: Condition,

    /// Restrict to sellers in this country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Restrict to sellers in this region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,

    /// Currency of the amounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// VAT handling.
    pub vat: VatOption,
}

/// Facade for the catalog item endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CatalogItemApi<'a> {
    client: &'a Arc<RestClient>,
}

impl<'a> CatalogItemApi<'a> {
    /// Creates the facade over a shared client.
    #[must_use]
    pub const fn new(client: &'a Arc<RestClient>) -> Self {
        Self { client }
    }

    fn item_path(template: &str, item_type: ItemType, no: &str) -> Result<String, RestError> {
        let no = require("no", no)?;
        Ok(build_path(
            template,
            &[("type", item_type.as_str()), ("no", no)],
        ))
    }

    /// Retrieves a catalog item.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `no` is empty, or another
    /// [`RestError`] if the request fails.
    pub async fn get_item(&self, item_type: ItemType, no: &str) -> Result<CatalogItem, RestError> {
        let path = Self::item_path("items/{type}/{no}", item_type, no)?;
        let mut item: CatalogItem = self.client.get_as("CatalogItem", &path, None).await?;
        item.item_type.get_or_insert(item_type);
        item.no.get_or_insert_with(|| no.to_string());
        item.link = ClientLink::new(self.client);
        Ok(item)
    }

    /// Retrieves the image of an item in a color (`0` for the default).
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `no` is empty, or another
    /// [`RestError`] if the request fails.
    pub async fn get_item_image(
        &self,
        item_type: ItemType,
        no: &str,
        color_id: u32,
    ) -> Result<ItemImage, RestError> {
        let path = Self::item_path("items/{type}/{no}/images/{color_id}", item_type, no)?;
        let path = build_path(&path, &[("color_id", &color_id.to_string())]);
        self.client.get_as("ItemImage", &path, None).await
    }

    /// Lists the items an item appears in.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `no` is empty, or another
    /// [`RestError`] if the request fails.
    pub async fn get_supersets(
        &self,
        item_type: ItemType,
        no: &str,
        color_id: Option<u32>,
    ) -> Result<Vec<SupersetEntry>, RestError> {
        let path = Self::item_path("items/{type}/{no}/supersets", item_type, no)?;
        let query = encode_query("SupersetParams", &SupersetParams { color_id })?;
        self.client
            .get_as("SupersetEntry", &path, Some(query))
            .await
    }

    /// Lists the items included in an item.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `no` is empty, or another
    /// [`RestError`] if the request fails.
    pub async fn get_subsets(
        &self,
        item_type: ItemType,
        no: &str,
        params: &SubsetParams,
    ) -> Result<Vec<SubsetEntry>, RestError> {
        let path = Self::item_path("items/{type}/{no}/subsets", item_type, no)?;
        let query = encode_query("SubsetParams", params)?;
        self.client.get_as("SubsetEntry", &path, Some(query)).await
    }

    /// Retrieves the price guide of an item.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `no` is empty, or another
    /// [`RestError`] if the request fails.
    pub async fn get_price_guide(
        &self,
        item_type: ItemType,
        no: &str,
        params: &PriceGuideParams,
    ) -> Result<PriceGuide, RestError> {
        let path = Self::item_path("items/{type}/{no}/price", item_type, no)?;
        let query = encode_query("PriceGuideParams", params)?;
        self.client.get_as("PriceGuide", &path, Some(query)).await
    }

    /// Lists the colors an item is known in.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `no` is empty, or another
    /// [`RestError`] if the request fails.
    pub async fn get_known_colors(
        &self,
        item_type: ItemType,
        no: &str,
    ) -> Result<Vec<KnownColor>, RestError> {
        let path = Self::item_path("items/{type}/{no}/colors", item_type, no)?;
        self.client.get_as("KnownColor", &path, None).await
    }
}
