//! Push notification resource implementation.
//!
//! BrickLink queues a notification whenever an order, message or feedback
//! changes. [`PushNotificationApi::get_notifications`] returns the unread
//! ones.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{RestClient, RestError};

/// An unread notification.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Notification {
    /// `Order`, `Message` or `Feedback`.
    pub event_type: Option<String>,
    /// ID of the changed resource.
    pub resource_id: Option<u64>,
    /// When the change happened.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Facade for the push notification endpoint.
#[derive(Debug, Clone, Copy)]
pub struct PushNotificationApi<'a> {
    client: &'a Arc<RestClient>,
}

impl<'a> PushNotificationApi<'a> {
    /// Creates the facade over a shared client.
    #[must_use]
    pub const fn new(client: &'a Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists unread notifications.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_notifications(&self) -> Result<Vec<Notification>, RestError> {
        self.client
            .get_as("Notification", "notifications", None)
            .await
    }
}
