//! BrickLink Store API resources.
//!
//! Each module pairs a facade with the records its endpoints return:
//!
//! | Facade                    | Endpoints under           |
//! |---------------------------|---------------------------|
//! | [`OrderApi`]              | `orders`                  |
//! | [`StoreInventoryApi`]     | `inventories`             |
//! | [`CatalogItemApi`]        | `items`                   |
//! | [`FeedbackApi`]           | `feedback`                |
//! | [`ColorApi`]              | `colors`                  |
//! | [`CategoryApi`]           | `categories`              |
//! | [`PushNotificationApi`]   | `notifications`           |
//! | [`CouponApi`]             | `coupons`                 |
//! | [`SettingApi`]            | `settings`                |
//! | [`MemberApi`]             | `members`                 |
//! | [`ItemMappingApi`]        | `item_mapping`            |
//!
//! Facades borrow the client of a [`Bricklink`](crate::Bricklink) and are
//! cheap to create per call:
//!
//! ```rust,ignore
//! use bricklink_api::rest::resources::{ItemType, SubsetParams};
//!
//! let colors = client.colors().get_color_list().await?;
//!
//! let params = SubsetParams {
//!     include_box: true,
//!     instruction: true,
//!     ..Default::default()
//! };
//! let parts = client
//!     .catalog_items()
//!     .get_subsets(ItemType::Set, "75281-1", &params)
//!     .await?;
//! ```

mod catalog_item;
mod category;
mod color;
pub mod common;
mod coupon;
mod feedback;
mod item_mapping;
mod member;
mod order;
mod push_notification;
mod setting;
mod store_inventory;

pub use catalog_item::{
    CatalogItem, CatalogItemApi, ItemImage, KnownColor, PriceDetail, PriceGuide,
    PriceGuideParams, SubsetEntry, SubsetItem, SubsetParams, SupersetEntry, SupersetItem,
};
pub use category::{Category, CategoryApi};
pub use color::{Color, ColorApi};
pub use common::{Condition, Direction, GuideType, ItemRef, ItemType, Region, VatOption};
pub use coupon::{AppliesTo, Coupon, CouponApi, CouponListParams, CouponUpdate, NewCoupon};
pub use feedback::{Feedback, FeedbackApi, FeedbackReply, NewFeedback};
pub use item_mapping::{ItemMapping, ItemMappingApi};
pub use member::{MemberApi, MemberNote, MemberRating, RatingCounts};
pub use order::{
    AddressName, Cost, CostUpdate, DisplayCost, Order, OrderApi, OrderItem, OrderListParams,
    OrderMessage, OrderStatus, OrderUpdate, Payment, PaymentStatus, Shipping, ShippingAddress,
    ShippingUpdate, StatusUpdate,
};
pub use push_notification::{Notification, PushNotificationApi};
pub use setting::{SettingApi, ShippingMethod};
pub use store_inventory::{
    Inventory, InventoryListParams, InventoryUpdate, NewInventory, StoreInventoryApi,
};

// Verify facade and record types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrderApi<'static>>();
    assert_send_sync::<CatalogItemApi<'static>>();
    assert_send_sync::<Order>();
    assert_send_sync::<CatalogItem>();
};
