//! Order resource implementation.
//!
//! This module provides [`OrderApi`], the facade for orders you received or
//! placed, and the order records it returns.
//!
//! # Order Items
//!
//! Items are grouped in batches: [`OrderApi::get_order_items`] returns one
//! inner `Vec` per batch. An [`Order`] obtained from a facade can fetch its
//! own items with [`Order::fetch_items`].
//!
//! # Example
//!
//! ```rust,ignore
//! use bricklink_api::rest::resources::{OrderListParams, OrderStatus, StatusUpdate};
//!
//! let orders = client.orders().get_orders(&OrderListParams::default()).await?;
//! for order in &orders {
//!     println!("{:?} {:?}", order.order_id, order.status);
//! }
//!
//! let order = client.orders().get_order(12345678).await?;
//! let batches = order.fetch_items().await?;
//!
//! client
//!     .orders()
//!     .update_order_status(12345678, &StatusUpdate::order_status(OrderStatus::Shipped))
//!     .await?;
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::rest::{decode, encode, encode_query};
use crate::clients::{HttpMethod, QueryParams, RestClient, RestError};
use crate::rest::{build_path, ClientLink};

use super::common::{Condition, Direction, ItemRef};
use super::feedback::Feedback;

/// Order status values used by the status endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Newly placed.
    Pending,
    /// Updated by the buyer.
    Updated,
    /// Seller is processing.
    Processing,
    /// Ready for payment.
    Ready,
    /// Paid.
    Paid,
    /// Packed.
    Packed,
    /// Shipped.
    Shipped,
    /// Received by the buyer.
    Received,
    /// Completed.
    Completed,
    /// Order cancel request.
    #[serde(rename = "OCR")]
    Ocr,
    /// Non-paying buyer.
    #[serde(rename = "NPB")]
    Npb,
    /// Non-paying buyer alert.
    #[serde(rename = "NPX")]
    Npx,
    /// Non-responding seller.
    #[serde(rename = "NRS")]
    Nrs,
    /// Non-shipping seller.
    #[serde(rename = "NSS")]
    Nss,
    /// Cancelled.
    Cancelled,
    /// Purged.
    Purged,
}

impl OrderStatus {
    /// Returns the name the API uses for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Updated => "UPDATED",
            Self::Processing => "PROCESSING",
            Self::Ready => "READY",
            Self::Paid => "PAID",
            Self::Packed => "PACKED",
            Self::Shipped => "SHIPPED",
            Self::Received => "RECEIVED",
            Self::Completed => "COMPLETED",
            Self::Ocr => "OCR",
            Self::Npb => "NPB",
            Self::Npx => "NPX",
            Self::Nrs => "NRS",
            Self::Nss => "NSS",
            Self::Cancelled => "CANCELLED",
            Self::Purged => "PURGED",
        }
    }
}

/// Payment status values used by the payment status endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    /// No payment yet.
    None,
    /// Buyer sent payment.
    Sent,
    /// Seller received payment.
    Received,
    /// Payment is clearing.
    Clearing,
    /// Payment was returned.
    Returned,
    /// Payment bounced.
    Bounced,
    /// Payment completed.
    Completed,
}

impl PaymentStatus {
    /// Returns the name the API uses for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Sent => "Sent",
            Self::Received => "Received",
            Self::Clearing => "Clearing",
            Self::Returned => "Returned",
            Self::Bounced => "Bounced",
            Self::Completed => "Completed",
        }
    }
}

/// An order you received or placed.
///
/// Money fields decode from BrickLink's decimal strings; display-currency
/// fields in [`Order::disp_cost`] keep the server's formatting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    /// Unique order ID.
    pub order_id: Option<u64>,
    /// When the order was placed.
    pub date_ordered: Option<DateTime<Utc>>,
    /// When the status last changed.
    pub date_status_changed: Option<DateTime<Utc>>,
    /// Seller username.
    pub seller_name: Option<String>,
    /// Store name.
    pub store_name: Option<String>,
    /// Buyer username.
    pub buyer_name: Option<String>,
    /// Buyer e-mail address.
    pub buyer_email: Option<String>,
    /// Number of orders the buyer placed with this store.
    pub buyer_order_count: Option<u32>,
    /// Whether the buyer requested insurance.
    pub require_insurance: Option<bool>,
    /// Order status, e.g. `"PENDING"`.
    pub status: Option<String>,
    /// Whether an invoice was sent.
    pub is_invoiced: Option<bool>,
    /// Whether the order is filed.
    pub is_filed: Option<bool>,
    /// Whether a drive thru e-mail was sent.
    pub drive_thru_sent: Option<bool>,
    /// Seller remarks.
    pub remarks: Option<String>,
    /// Total number of items.
    pub total_count: Option<u32>,
    /// Number of distinct lots.
    pub unique_count: Option<u32>,
    /// Total weight in grams.
    pub total_weight: Option<Decimal>,
    /// Payment details.
    pub payment: Option<Payment>,
    /// Shipping details.
    pub shipping: Option<Shipping>,
    /// Cost in the seller's currency.
    pub cost: Option<Cost>,
    /// Cost in the buyer's display currency.
    pub disp_cost: Option<DisplayCost>,

    /// Client that returned this order. Detached for orders built or
    /// deserialized by the caller.
    #[serde(skip)]
    pub link: ClientLink,
}

impl Order {
    /// Fetches the item batches of this order with one request.
    ///
    /// # Errors
    ///
    /// - [`RestError::Unassociated`] if this order is not bound to a live client
    /// - [`RestError::InvalidArgument`] if `order_id` is unset
    /// - any error of [`OrderApi::get_order_items`]
    pub async fn fetch_items(&self) -> Result<Vec<Vec<OrderItem>>, RestError> {
        let client = self.link.client("Order", "fetch items")?;
        let order_id = self
            .order_id
            .ok_or(RestError::InvalidArgument { field: "order_id" })?;
        OrderApi::new(&client).get_order_items(order_id).await
    }
}

/// Payment details of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Payment {
    /// Payment method.
    pub method: Option<String>,
    /// Currency code.
    pub currency_code: Option<String>,
    /// When payment was made.
    pub date_paid: Option<DateTime<Utc>>,
    /// Payment status, e.g. `"Received"`.
    pub status: Option<String>,
}

/// Shipping details of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Shipping {
    /// Shipping method ID.
    pub method_id: Option<u64>,
    /// Shipping method name.
    pub method: Option<String>,
    /// Tracking numbers.
    pub tracking_no: Option<String>,
    /// Tracking link.
    pub tracking_link: Option<String>,
    /// When the order shipped.
    pub date_shipped: Option<DateTime<Utc>>,
    /// Destination address.
    pub address: Option<ShippingAddress>,
}

/// Destination address of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingAddress {
    /// Recipient name.
    pub name: Option<AddressName>,
    /// The full address as one string.
    pub full: Option<String>,
    /// First address line.
    pub address1: Option<String>,
    /// Second address line.
    pub address2: Option<String>,
    /// ISO country code.
    pub country_code: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
}

/// Recipient name of a shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AddressName {
    /// Full name.
    pub full: Option<String>,
    /// First name.
    pub first: Option<String>,
    /// Last name.
    pub last: Option<String>,
}

/// Order cost in the seller's currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Cost {
    /// Currency code.
    pub currency_code: Option<String>,
    /// Total price of the items.
    pub subtotal: Option<Decimal>,
    /// Total with all charges.
    pub grand_total: Option<Decimal>,
    /// Extra charge 1.
    pub etc1: Option<Decimal>,
    /// Extra charge 2.
    pub etc2: Option<Decimal>,
    /// Insurance.
    pub insurance: Option<Decimal>,
    /// Shipping.
    pub shipping: Option<Decimal>,
    /// Credit applied.
    pub credit: Option<Decimal>,
    /// Coupon discount.
    pub coupon: Option<Decimal>,
    /// VAT percentage.
    pub vat_rate: Option<Decimal>,
    /// VAT amount.
    pub vat_amount: Option<Decimal>,
}

/// Order cost in the buyer's display currency, as formatted by the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DisplayCost {
    /// Currency code.
    pub currency_code: Option<String>,
    /// Total price of the items.
    pub subtotal: Option<String>,
    /// Total with all charges.
    pub grand_total: Option<String>,
    /// Extra charge 1.
    pub etc1: Option<String>,
    /// Extra charge 2.
    pub etc2: Option<String>,
    /// Insurance.
    pub insurance: Option<String>,
    /// Shipping.
    pub shipping: Option<String>,
    /// Credit applied.
    pub credit: Option<String>,
    /// Coupon discount.
    pub coupon: Option<String>,
    /// VAT percentage.
    pub vat_rate: Option<String>,
    /// VAT amount.
    pub vat_amount: Option<String>,
}

/// One lot of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderItem {
    /// Store inventory lot this item came from.
    pub inventory_id: Option<u64>,
    /// The catalog item.
    pub item: Option<ItemRef>,
    /// Color ID.
    pub color_id: Option<u32>,
    /// Color name.
    pub color_name: Option<String>,
    /// Quantity ordered.
    pub quantity: Option<i64>,
    /// Condition.
    pub new_or_used: Option<Condition>,
    /// Completeness of a set: `C`, `B` or `S`.
    pub completeness: Option<String>,
    /// Original unit price.
    pub unit_price: Option<Decimal>,
    /// Unit price after tiered discounts.
    pub unit_price_final: Option<Decimal>,
    /// Unit price in display currency.
    pub disp_unit_price: Option<String>,
    /// Final unit price in display currency.
    pub disp_unit_price_final: Option<String>,
    /// Currency code of the prices.
    pub currency_code: Option<String>,
    /// Display currency code.
    pub disp_currency_code: Option<String>,
    /// Seller remarks.
    pub remarks: Option<String>,
    /// Lot description.
    pub description: Option<String>,
    /// Weight in grams.
    pub weight: Option<Decimal>,
}

/// A message exchanged about an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderMessage {
    /// Subject line.
    pub subject: Option<String>,
    /// Message text.
    pub body: Option<String>,
    /// Sender username.
    pub from: Option<String>,
    /// Recipient username.
    pub to: Option<String>,
    /// When the message was sent.
    #[serde(rename = "dateSent")]
    pub date_sent: Option<DateTime<Utc>>,
}

/// Parameters for listing orders.
///
/// `direction` and `filed` are always sent; `status` only when set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// Received (`in`) or placed (`out`) orders.
    pub direction: Direction,

    /// Statuses to include, comma-separated; prefix with `-` to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// List filed instead of unfiled orders.
    pub filed: bool,
}

/// Partial update of an order. Unset fields are left unchanged.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct OrderUpdate {
    /// Shipping changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingUpdate>,

    /// Cost changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<CostUpdate>,

    /// File or unfile the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_filed: Option<bool>,

    /// Seller remarks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Shipping fields of an [`OrderUpdate`].
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ShippingUpdate {
    /// Shipping date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_shipped: Option<DateTime<Utc>>,

    /// Tracking numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_no: Option<String>,

    /// Tracking link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_link: Option<String>,

    /// Shipping method ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_id: Option<u64>,
}

/// Cost fields of an [`OrderUpdate`].
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CostUpdate {
    /// Shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Decimal>,

    /// Insurance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Decimal>,

    /// Credit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<Decimal>,

    /// Extra charge 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etc1: Option<Decimal>,

    /// Extra charge 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etc2: Option<Decimal>,
}

/// Body of the status and payment status endpoints.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusUpdate {
    /// `"status"` or `"payment_status"`.
    pub field: String,
    /// The new value.
    pub value: String,
}

impl StatusUpdate {
    /// Sets the order status.
    #[must_use]
    pub fn order_status(status: OrderStatus) -> Self {
        Self {
            field: "status".to_string(),
            value: status.as_str().to_string(),
        }
    }

    /// Sets the payment status.
    #[must_use]
    pub fn payment_status(status: PaymentStatus) -> Self {
        Self {
            field: "payment_status".to_string(),
            value: status.as_str().to_string(),
        }
    }
}

/// Facade for the order endpoints.
#[derive(Debug, Clone, Copy)]
pub struct OrderApi<'a> {
    client: &'a Arc<RestClient>,
}

impl<'a> OrderApi<'a> {
    /// Creates the facade over a shared client.
    #[must_use]
    pub const fn new(client: &'a Arc<RestClient>) -> Self {
        Self { client }
    }

    fn linked(&self, mut order: Order) -> Order {
        order.link = ClientLink::new(self.client);
        order
    }

    /// Lists orders you received or placed.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_orders(&self, params: &OrderListParams) -> Result<Vec<Order>, RestError> {
        let query = encode_query("OrderListParams", params)?;
        let orders: Vec<Order> = self.client.get_as("Order", "orders", Some(query)).await?;
        Ok(orders.into_iter().map(|o| self.linked(o)).collect())
    }

    /// Retrieves one order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::NotFound`] if the order does not exist, or another
    /// [`RestError`] if the request fails.
    pub async fn get_order(&self, order_id: u64) -> Result<Order, RestError> {
        let path = build_path("orders/{id}", &[("id", &order_id.to_string())]);
        let order = self.client.get_as("Order", &path, None).await?;
        Ok(self.linked(order))
    }

    /// Retrieves the item batches of an order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_order_items(&self, order_id: u64) -> Result<Vec<Vec<OrderItem>>, RestError> {
        let path = build_path("orders/{id}/items", &[("id", &order_id.to_string())]);
        self.client.get_as("OrderItem", &path, None).await
    }

    /// Retrieves the messages of an order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_order_messages(&self, order_id: u64) -> Result<Vec<OrderMessage>, RestError> {
        let path = build_path("orders/{id}/messages", &[("id", &order_id.to_string())]);
        self.client.get_as("OrderMessage", &path, None).await
    }

    /// Retrieves the feedback left on an order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_order_feedback(&self, order_id: u64) -> Result<Vec<Feedback>, RestError> {
        let path = build_path("orders/{id}/feedback", &[("id", &order_id.to_string())]);
        self.client.get_as("Feedback", &path, None).await
    }

    /// Updates shipping, cost, filing, or remarks of an order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn update_order(
        &self,
        order_id: u64,
        update: &OrderUpdate,
    ) -> Result<Order, RestError> {
        let path = build_path("orders/{id}", &[("id", &order_id.to_string())]);
        let body = encode("OrderUpdate", update)?;
        let data = self.client.put(&path, None, body).await?;
        Ok(self.linked(decode("Order", data)?))
    }

    /// Updates the status of an order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn update_order_status(
        &self,
        order_id: u64,
        update: &StatusUpdate,
    ) -> Result<Value, RestError> {
        let path = build_path("orders/{id}/status", &[("id", &order_id.to_string())]);
        let body = encode("StatusUpdate", update)?;
        self.client.put(&path, None, body).await
    }

    /// Updates the payment status of an order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn update_payment_status(
        &self,
        order_id: u64,
        update: &StatusUpdate,
    ) -> Result<Value, RestError> {
        let path = build_path("orders/{id}/payment_status", &[("id", &order_id.to_string())]);
        let body = encode("StatusUpdate", update)?;
        self.client.put(&path, None, body).await
    }

    /// Sends a drive thru e-mail for an order, optionally copying yourself.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn send_drive_thru(&self, order_id: u64, mail_me: bool) -> Result<Value, RestError> {
        let path = build_path("orders/{id}/drive_thru", &[("id", &order_id.to_string())]);
        let query: QueryParams = [("mail_me", mail_me)].into_iter().collect();
        self.client
            .request(HttpMethod::Put, &path, Some(query), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_order_list_params_defaults() {
        let query = encode_query("OrderListParams", &OrderListParams::default()).unwrap();
        assert_eq!(query.get("direction"), Some(&json!("in")));
        assert_eq!(query.get("filed"), Some(&json!(false)));
        assert!(!query.contains_key("status"));
    }

    #[test]
    fn test_order_decodes_typed_fields() {
        let order: Order = serde_json::from_value(json!({
            "order_id": 12345678,
            "date_ordered": "2023-01-15T10:30:00.000Z",
            "status": "PENDING",
            "buyer_name": "test_buyer",
            "total_count": 10,
            "payment": {"method": "PayPal", "currency_code": "USD", "date_paid": null, "status": "None"},
            "cost": {"currency_code": "USD", "subtotal": "20.00", "grand_total": "25.00", "shipping": "5.00"},
            "disp_cost": {"currency_code": "USD", "subtotal": "$20.00", "grand_total": "$25.00"}
        }))
        .unwrap();

        assert_eq!(order.order_id, Some(12_345_678));
        assert_eq!(order.status.as_deref(), Some("PENDING"));
        assert_eq!(
            order.cost.unwrap().grand_total,
            Some(Decimal::from_str("25.00").unwrap())
        );
        assert_eq!(order.disp_cost.unwrap().grand_total.as_deref(), Some("$25.00"));
        assert_eq!(order.payment.unwrap().date_paid, None);
        assert!(!order.link.is_live());
    }

    #[tokio::test]
    async fn test_deserialized_order_cannot_fetch_items() {
        let order: Order = serde_json::from_value(json!({"order_id": 1})).unwrap();
        let error = order.fetch_items().await.unwrap_err();
        assert!(matches!(
            error,
            RestError::Unassociated {
                resource: "Order",
                operation: "fetch items"
            }
        ));
    }

    #[test]
    fn test_status_update_bodies() {
        assert_eq!(
            serde_json::to_value(StatusUpdate::order_status(OrderStatus::Shipped)).unwrap(),
            json!({"field": "status", "value": "SHIPPED"})
        );
        assert_eq!(
            serde_json::to_value(StatusUpdate::order_status(OrderStatus::Npb)).unwrap(),
            json!({"field": "status", "value": "NPB"})
        );
        assert_eq!(
            serde_json::to_value(StatusUpdate::payment_status(PaymentStatus::Received)).unwrap(),
            json!({"field": "payment_status", "value": "Received"})
        );
    }

    #[test]
    fn test_status_names_match_serde() {
        for status in [OrderStatus::Pending, OrderStatus::Ocr, OrderStatus::Purged] {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
        }
        assert_eq!(
            serde_json::to_value(PaymentStatus::None).unwrap(),
            json!(PaymentStatus::None.as_str())
        );
    }

    #[test]
    fn test_order_update_omits_unset_fields() {
        let update = OrderUpdate {
            shipping: Some(ShippingUpdate {
                tracking_no: Some("1Z999".to_string()),
                ..Default::default()
            }),
            is_filed: Some(true),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"shipping": {"tracking_no": "1Z999"}, "is_filed": true})
        );
    }

    #[test]
    fn test_order_message_date_field_name() {
        let message: OrderMessage = serde_json::from_value(json!({
            "subject": "Hi",
            "dateSent": "2023-01-16T08:00:00.000Z"
        }))
        .unwrap();
        assert!(message.date_sent.is_some());
    }
}
