//! The root client.
//!
//! [`Bricklink`] owns the shared [`RestClient`] and hands out one facade per
//! resource family. Facades borrow the client, so creating one per call is
//! free.

use std::sync::Arc;

use crate::auth::Credentials;
use crate::clients::RestClient;
use crate::config::BricklinkConfig;
use crate::error::ConfigError;
use crate::rest::resources::{
    CatalogItemApi, CategoryApi, ColorApi, CouponApi, FeedbackApi, ItemMappingApi, MemberApi,
    OrderApi, PushNotificationApi, SettingApi, StoreInventoryApi,
};

/// Client for the BrickLink Store API.
///
/// # Thread Safety
///
/// `Bricklink` is `Clone`, `Send` and `Sync`. Clones share one connection
/// pool and one set of credentials.
///
/// # Example
///
/// ```rust,ignore
/// use bricklink_api::Bricklink;
///
/// let client = Bricklink::new("consumer-key", "consumer-secret", "token", "token-secret")?;
///
/// let order = client.orders().get_order(12345678).await?;
/// let colors = client.colors().get_color_list().await?;
/// ```
#[derive(Clone, Debug)]
pub struct Bricklink {
    rest: Arc<RestClient>,
}

// Verify Bricklink is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Bricklink>();
};

impl Bricklink {
    /// Creates a client from the four OAuth secrets.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first empty secret, in argument
    /// order, or [`ConfigError::ClientInitialization`] if the HTTP client
    /// cannot be created.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bricklink_api::{Bricklink, ConfigError};
    ///
    /// let result = Bricklink::new("ck", "cs", "", "ts");
    /// assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
    /// ```
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let credentials = Credentials::new(consumer_key, consumer_secret, token, token_secret)?;
        Self::with_config(&BricklinkConfig::from_credentials(credentials))
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ClientInitialization`] if the HTTP client
    /// cannot be created.
    pub fn with_config(config: &BricklinkConfig) -> Result<Self, ConfigError> {
        tracing::debug!(base_url = %config.base_url(), "Creating BrickLink client");
        Ok(Self {
            rest: Arc::new(RestClient::new(config)?),
        })
    }

    /// Returns the shared REST client for raw calls.
    #[must_use]
    pub const fn rest(&self) -> &Arc<RestClient> {
        &self.rest
    }

    /// Orders you received or placed.
    #[must_use]
    pub const fn orders(&self) -> OrderApi<'_> {
        OrderApi::new(&self.rest)
    }

    /// Your store inventory.
    #[must_use]
    pub const fn store_inventory(&self) -> StoreInventoryApi<'_> {
        StoreInventoryApi::new(&self.rest)
    }

    /// The catalog.
    #[must_use]
    pub const fn catalog_items(&self) -> CatalogItemApi<'_> {
        CatalogItemApi::new(&self.rest)
    }

    /// Feedback you received or posted.
    #[must_use]
    pub const fn feedback(&self) -> FeedbackApi<'_> {
        FeedbackApi::new(&self.rest)
    }

    /// Catalog colors.
    #[must_use]
    pub const fn colors(&self) -> ColorApi<'_> {
        ColorApi::new(&self.rest)
    }

    /// Catalog categories.
    #[must_use]
    pub const fn categories(&self) -> CategoryApi<'_> {
        CategoryApi::new(&self.rest)
    }

    /// Unread push notifications.
    #[must_use]
    pub const fn push_notifications(&self) -> PushNotificationApi<'_> {
        PushNotificationApi::new(&self.rest)
    }

    /// Store coupons.
    #[must_use]
    pub const fn coupons(&self) -> CouponApi<'_> {
        CouponApi::new(&self.rest)
    }

    /// Store settings.
    #[must_use]
    pub const fn settings(&self) -> SettingApi<'_> {
        SettingApi::new(&self.rest)
    }

    /// Member ratings and notes.
    #[must_use]
    pub const fn members(&self) -> MemberApi<'_> {
        MemberApi::new(&self.rest)
    }

    /// Element ID mapping.
    #[must_use]
    pub const fn item_mapping(&self) -> ItemMappingApi<'_> {
        ItemMappingApi::new(&self.rest)
    }
}
