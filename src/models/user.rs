//! Account models.

use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;

/// An account as returned by the user endpoints and the login reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Numeric account id.
    id: u64,

    /// Account name.
    name: String,

    /// RFC 3339 timestamp of account creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,

    /// Account level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<u32>,

    /// Remaining upload slots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    upload_limit: Option<u32>,

    /// URL of the account's avatar, if one is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,

    /// Rating bucket of the avatar image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_rating: Option<String>,

    /// Email address. Only present on the caller's own account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,

    /// Number of favorites this account has given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    favorite_count: Option<u64>,

    /// Number of favorites on this account's uploads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    post_favorite_count: Option<u64>,

    /// Number of votes this account has cast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vote_count: Option<u64>,

    /// Number of submissions this account has uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    post_upload_count: Option<u64>,

    /// Paid subscription tier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subscription_level: Option<u32>,
}

impl User {
    /// Returns the numeric account id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the account name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the account creation timestamp (if present).
    pub fn created_at(&self) -> Option<&str> {
        str_opt_ref!(self.created_at)
    }

    /// Returns the account level (if present).
    pub fn level(&self) -> Option<u32> {
        self.level
    }

    /// Returns the remaining upload slots (if present).
    pub fn upload_limit(&self) -> Option<u32> {
        self.upload_limit
    }

    /// Returns the avatar URL (if present).
    pub fn avatar_url(&self) -> Option<&str> {
        str_opt_ref!(self.avatar_url)
    }

    /// Returns the rating bucket of the avatar image (if present).
    pub fn avatar_rating(&self) -> Option<&str> {
        str_opt_ref!(self.avatar_rating)
    }

    /// Returns the email address (own account only).
    pub fn email(&self) -> Option<&str> {
        str_opt_ref!(self.email)
    }

    /// Returns the number of favorites this account has given.
    pub fn favorite_count(&self) -> Option<u64> {
        self.favorite_count
    }

    /// Returns the number of favorites on this account's uploads.
    pub fn post_favorite_count(&self) -> Option<u64> {
        self.post_favorite_count
    }

    /// Returns the number of votes this account has cast.
    pub fn vote_count(&self) -> Option<u64> {
        self.vote_count
    }

    /// Returns the number of submissions this account has uploaded.
    pub fn post_upload_count(&self) -> Option<u64> {
        self.post_upload_count
    }

    /// Returns the paid subscription tier (if any).
    pub fn subscription_level(&self) -> Option<u32> {
        self.subscription_level
    }
}

/// Compact author record embedded in submissions, books and comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Numeric account id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,

    /// Account name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    /// URL of the account's avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,

    /// Rating bucket of the avatar image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_rating: Option<String>,
}

impl Author {
    /// Returns the numeric account id (if present).
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Returns the account name (if present).
    pub fn name(&self) -> Option<&str> {
        str_opt_ref!(self.name)
    }

    /// Returns the avatar URL (if present).
    pub fn avatar(&self) -> Option<&str> {
        str_opt_ref!(self.avatar)
    }

    /// Returns the rating bucket of the avatar image (if present).
    pub fn avatar_rating(&self) -> Option<&str> {
        str_opt_ref!(self.avatar_rating)
    }
}

/// One row of the per-category notification matrix.
///
/// Sent back verbatim by [`Client::set_notification_settings`].
///
/// [`Client::set_notification_settings`]: crate::Client::set_notification_settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NotificationSetting {
    /// Notification category this row configures.
    pub category_id: u32,
    /// Notify by email.
    pub is_email: bool,
    /// Notify by push message.
    pub is_push: bool,
}
