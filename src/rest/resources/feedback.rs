//! Feedback resource implementation.
//!
//! Feedback is left per order by buyer and seller. [`FeedbackApi`] lists
//! what you received or posted, posts new feedback and replies to feedback
//! you received.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::rest::{encode, encode_query};
use crate::clients::{RestClient, RestError};
use crate::rest::{build_path, require};

use super::common::Direction;

/// Feedback left on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Feedback {
    /// Unique feedback ID.
    pub feedback_id: Option<u64>,
    /// Order the feedback is about.
    pub order_id: Option<u64>,
    /// Author username.
    pub from: Option<String>,
    /// Recipient username.
    pub to: Option<String>,
    /// When the feedback was left.
    pub date_rated: Option<DateTime<Utc>>,
    /// 0 praise, 1 neutral, 2 complaint.
    pub rating: Option<u8>,
    /// Whether the author rated as seller (`S`) or buyer (`B`).
    pub rating_of_bs: Option<String>,
    /// Feedback text.
    pub comment: Option<String>,
    /// Reply from the recipient.
    pub reply: Option<String>,
}

/// Body for posting feedback.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct NewFeedback {
    /// Order to rate.
    pub order_id: u64,
    /// 0 praise, 1 neutral, 2 complaint.
    pub rating: u8,
    /// Feedback text.
    pub comment: String,
}

/// Body for replying to feedback.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct FeedbackReply {
    /// Reply text.
    pub reply: String,
}

#[derive(Serialize)]
struct FeedbackListParams {
    direction: Direction,
}

/// Facade for the feedback endpoints.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackApi<'a> {
    client: &'a Arc<RestClient>,
}

impl<'a> FeedbackApi<'a> {
    /// Creates the facade over a shared client.
    #[must_use]
    pub const fn new(client: &'a Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists feedback you received (`In`) or posted (`Out`).
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_feedback_list(
        &self,
        direction: Direction,
    ) -> Result<Vec<Feedback>, RestError> {
        let query = encode_query("FeedbackListParams", &FeedbackListParams { direction })?;
        self.client.get_as("Feedback", "feedback", Some(query)).await
    }

    /// Retrieves one feedback entry.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn get_feedback(&self, feedback_id: u64) -> Result<Feedback, RestError> {
        let path = build_path("feedback/{id}", &[("id", &feedback_id.to_string())]);
        self.client.get_as("Feedback", &path, None).await
    }

    /// Posts feedback about an order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the request fails or the API reports an error.
    pub async fn post_feedback(&self, feedback: &NewFeedback) -> Result<Value, RestError> {
        let body = encode("NewFeedback", feedback)?;
        self.client.post("feedback", None, body).await
    }

    /// Replies to feedback you received.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if the reply is empty, or another
    /// [`RestError`] if the request fails.
    pub async fn reply_feedback(
        &self,
        feedback_id: u64,
        reply: &FeedbackReply,
    ) -> Result<Value, RestError> {
        require("reply", &reply.reply)?;
        let path = build_path("feedback/{id}/reply", &[("id", &feedback_id.to_string())]);
        let body = encode("FeedbackReply", reply)?;
        self.client.post(&path, None, body).await
    }
}
