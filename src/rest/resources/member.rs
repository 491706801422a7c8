//! Member resource implementation.
//!
//! Members are addressed by username. Usernames are percent-encoded as a
//! single path segment, and an empty username is rejected before sending.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::rest::{decode, encode};
use crate::clients::{RestClient, RestError};
use crate::rest::{build_path, require};

/// Feedback rating summary of a member.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MemberRating {
    /// Username.
    pub user_name: Option<String>,
    /// Feedback counts.
    pub rating: Option<RatingCounts>,
}

/// Feedback counts by kind.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub struct RatingCounts {
    /// Praise count.
    pub praise: Option<u32>,
    /// Neutral count.
    pub neutral: Option<u32>,
    /// Complaint count.
    pub complaint: Option<u32>,
}

/// Your private note on a member.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MemberNote {
    /// Note ID. Read-only.
    #[serde(skip_serializing)]
    pub note_id: Option<u64>,

    /// Username the note is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Note text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_text: Option<String>,

    /// When the note was written. Read-only.
    #[serde(skip_serializing)]
    pub date_noted: Option<DateTime<Utc>>,
}

impl MemberNote {
    /// A note with the given text.
    #[must_use]
    pub fn new(note_text: impl Into<String>) -> Self {
        Self {
            note_text: Some(note_text.into()),
            ..Default::default()
        }
    }
}

/// Facade for the member endpoints.
#[derive(Debug, Clone, Copy)]
pub struct MemberApi<'a> {
    client: &'a Arc<RestClient>,
}

impl<'a> MemberApi<'a> {
    /// Creates the facade over a shared client.
    #[must_use]
    pub const fn new(client: &'a Arc<RestClient>) -> Self {
        Self { client }
    }

    fn member_path(template: &str, username: &str) -> Result<String, RestError> {
        let username = require("username", username)?;
        Ok(build_path(template, &[("username", username)]))
    }

    /// Retrieves the feedback ratings of a member.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `username` is empty, or
    /// another [`RestError`] if the request fails.
    pub async fn get_member_rating(&self, username: &str) -> Result<MemberRating, RestError> {
        let path = Self::member_path("members/{username}/ratings", username)?;
        self.client.get_as("MemberRating", &path, None).await
    }

    /// Retrieves your note on a member.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `username` is empty, or
    /// another [`RestError`] if the request fails.
    pub async fn get_member_note(&self, username: &str) -> Result<MemberNote, RestError> {
        let path = Self::member_path("members/{username}/notes", username)?;
        self.client.get_as("MemberNote", &path, None).await
    }

    /// Creates a note on a member.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `username` or the note text
    /// is empty, or another [`RestError`] if the request fails.
    pub async fn create_member_note(
        &self,
        username: &str,
        note: &MemberNote,
    ) -> Result<MemberNote, RestError> {
        let path = Self::member_path("members/{username}/notes", username)?;
        require("note_text", note.note_text.as_deref().unwrap_or_default())?;
        let body = encode("MemberNote", note)?;
        let data = self.client.post(&path, None, body).await?;
        decode("MemberNote", data)
    }

    /// Updates your note on a member.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `username` or the note text
    /// is empty, or another [`RestError`] if the request fails.
    pub async fn update_member_note(
        &self,
        username: &str,
        note: &MemberNote,
    ) -> Result<MemberNote, RestError> {
        let path = Self::member_path("members/{username}/notes", username)?;
        require("note_text", note.note_text.as_deref().unwrap_or_default())?;
        let body = encode("MemberNote", note)?;
        let data = self.client.put(&path, None, body).await?;
        decode("MemberNote", data)
    }

    /// Deletes your note on a member.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidArgument`] if `username` is empty, or
    /// another [`RestError`] if the request fails.
    pub async fn delete_member_note(&self, username: &str) -> Result<Value, RestError> {
        let path = Self::member_path("members/{username}/notes", username)?;
        self.client.delete(&path, None).await
    }
}
