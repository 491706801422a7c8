//! Coupon resource implementation.
//!
//! This module provides [`CouponApi`] for store coupons you created or
//! received.
//!
//! # Example
//!
//! ```rust,ignore
//! use bricklink_api::rest::resources::{CouponListParams, NewCoupon};
//! use rust_decimal::Decimal;
//!
//! let coupon = NewCoupon {
//!     buyer_name: "brickfan".to_string(),
//!     discount_type: "F".to_string(),
//!     discount_amount: Some(Decimal::new(500, 2)),
//!     ..Default::default()
//! };
//! let created = client.coupons().create_coupon(&coupon).await?;
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::rest::{decode, encode, encode_query};
use crate::clients::{RestClient, RestError};
use crate::rest::{build_path, require};

use super::common::Direction;

/// A store coupon.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Coupon {
    /// Unique coupon ID.
    pub coupon_id: Option<u64>,
    /// When the coupon was issued.
    pub date_issued: Option<DateTime<Utc>>,
    /// When the coupon expires.
    pub date_expire: Option<DateTime<Utc>>,
    /// Seller username.
    pub seller_name: Option<String>,
    /// Buyer username.
    pub buyer_name: Option<String>,
    /// Store name.
    pub store_name: Option<String>,
    /// `O` open, `S` redeemed, `D` denied, `E` expired.
    pub status: Option<String>,
    /// Remarks shown to the buyer.
    pub remarks: Option<String>,
    /// Order the coupon was redeemed on.
    pub order_id: Option<u64>,
    /// Currency code.
    pub currency_code: Option<String>,
    /// Display currency code.
    pub disp_currency_code: Option<String>,
    /// `F` fixed amount or `S` percentage.
    pub discount_type: Option<String>,
    /// Fixed discount amount.
    pub discount_amount: Option<Decimal>,
    /// Percentage discount.
    pub discount_rate: Option<u32>,
    /// Cap on a percentage discount.
    pub max_discount_amount: Option<Decimal>,
    /// Minimum order subtotal.
    pub tier_price1: Option<Decimal>,
    /// Discount rate at the first tier.
    pub tier_discount_rate1: Option<u32>,
    /// Which items the coupon applies to.
    pub applies_to: Option<AppliesTo>,
}

/// Item restriction of a coupon.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppliesTo {
    /// `A` all items or `E` all except sale items.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Exclude items on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub except_on_sale: Option<bool>,
}

/// Body for creating a coupon.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct NewCoupon {
    /// Buyer the coupon is for.
    pub buyer_name: String,

    /// `F` fixed amount or `S` percentage.
    pub discount_type: String,

    /// Fixed discount amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Decimal>,

    /// Percentage discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<u32>,

    /// Cap on a percentage discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount_amount: Option<Decimal>,

    /// Remarks shown to the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// Which items the coupon applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<AppliesTo>,
}

/// Partial update of a coupon. Unset fields are left unchanged.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CouponUpdate {
    /// `F` fixed amount or `S` percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,

    /// Fixed discount amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Decimal>,

    /// Percentage discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<u32>,

    /// Cap on a percentage discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount_amount: Option<Decimal>,

    /// Remarks shown to the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// Which items the coupon applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<AppliesTo>,
}

/// Parameters for listing coupons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CouponListParams {
    /// Created (`Out`, the default) or received (`In`) coupons.
    pub direction: Direction,

    /// Statuses to include, comma-separated; prefix with `-` to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Default for CouponListParams {
    fn default() -> Self {
        Self {
            direction: Direction::Out,
            status: None,
        }
    }
}

/// Facade for the coupon endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CouponApi<'a> {
    client: &'a Arc<RestClient>,
}

impl<'a> CouponApi<'a> {
    /// Creates the facade over a shared client.
    #[must_use]
    pub const fn new(client: &'a Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists coupons you created or received.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_coupons(&self, params: &CouponListParams) -> Result<Vec<Coupon>, RestError> {
        let query = encode_query("CouponListParams", params)?;
        self.client.get_as("Coupon", "coupons", Some(query)).await
    }

    /// Retrieves one coupon.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_coupon(&self, coupon_id: u64) -> Result<Coupon, RestError> {
        let path = build_path("coupons/{id}", &[("id", &coupon_id.to_string())]);
        self.client.get_as("Coupon", &path, None).await
    }

    /// Creates a coupon for a buyer.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `buyer_name` is empty, or
    /// another [`RestError`] if the request fails.
    pub async fn create_coupon(&self, coupon: &NewCoupon) -> Result<Coupon, RestError> {
        require("buyer_name", &coupon.buyer_name)?;
        let body = encode("NewCoupon", coupon)?;
        let data = self.client.post("coupons", None, body).await?;
        decode("Coupon", data)
    }

    /// Updates a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn update_coupon(
        &self,
        coupon_id: u64,
        update: &CouponUpdate,
    ) -> Result<Coupon, RestError> {
        let path = build_path("coupons/{id}", &[("id", &coupon_id.to_string())]);
        let body = encode("CouponUpdate", update)?;
        let data = self.client.put(&path, None, body).await?;
        decode("Coupon", data)
    }

    /// Deletes a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn delete_coupon(&self, coupon_id: u64) -> Result<Value, RestError> {
        let path = build_path("coupons/{id}", &[("id", &coupon_id.to_string())]);
        self.client.delete(&path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coupon_list_defaults_to_outgoing() {
        let query = encode_query("CouponListParams", &CouponListParams::default()).unwrap();
        assert_eq!(query.get("direction"), Some(&json!("out")));
        assert!(!query.contains_key("status"));
    }

    #[test]
    fn test_new_coupon_body() {
        let coupon = NewCoupon {
            buyer_name: "brickfan".to_string(),
            discount_type: "S".to_string(),
            discount_rate: Some(10),
            applies_to: Some(AppliesTo {
                scope: Some("A".to_string()),
                except_on_sale: Some(true),
            }),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(coupon).unwrap(),
            json!({
                "buyer_name": "brickfan",
                "discount_type": "S",
                "discount_rate": 10,
                "applies_to": {"type": "A", "except_on_sale": true}
            })
        );
    }

    #[test]
    fn test_coupon_update_empty_body() {
        assert_eq!(
            serde_json::to_value(CouponUpdate::default()).unwrap(),
            json!({})
        );
    }
}
