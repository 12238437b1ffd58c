//! Private message models.

use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;
use crate::models::user::Author;

/// A private message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dmail {
    /// Numeric message id.
    id: u64,

    /// Sending account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from: Option<Author>,

    /// Receiving account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<Author>,

    /// Message title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    /// Message body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,

    /// Whether the receiver has opened the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_read: Option<bool>,

    /// RFC 3339 timestamp of creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
}

impl Dmail {
    /// Returns the numeric message id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the sending account (if present).
    pub fn from(&self) -> Option<&Author> {
        self.from.as_ref()
    }

    /// Returns the receiving account (if present).
    pub fn to(&self) -> Option<&Author> {
        self.to.as_ref()
    }

    /// Returns the message title (if present).
    pub fn title(&self) -> Option<&str> {
        str_opt_ref!(self.title)
    }

    /// Returns the message body (if present).
    pub fn body(&self) -> Option<&str> {
        str_opt_ref!(self.body)
    }

    /// Returns whether the receiver has opened the message (if
    /// present).
    pub fn is_read(&self) -> Option<bool> {
        self.is_read
    }

    /// Returns the creation timestamp (if present).
    pub fn created_at(&self) -> Option<&str> {
        str_opt_ref!(self.created_at)
    }
}
