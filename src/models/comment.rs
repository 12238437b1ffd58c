//! Comment models.

use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;
use crate::models::user::Author;

/// A comment on a submission or book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Numeric comment id.
    id: u64,

    /// Id of the record the comment was left on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    post_id: Option<u64>,

    /// Account that wrote the comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<Author>,

    /// Comment text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,

    /// Net score from plus and minus votes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<i64>,

    /// Id of the comment this one replies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_id: Option<u64>,

    /// RFC 3339 timestamp of creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
}

impl Comment {
    /// Returns the numeric comment id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the id of the record the comment was left on (if
    /// present).
    pub fn post_id(&self) -> Option<u64> {
        self.post_id
    }

    /// Returns the commenting account (if present).
    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    /// Returns the comment text (if present).
    pub fn body(&self) -> Option<&str> {
        str_opt_ref!(self.body)
    }

    /// Returns the net score (if present).
    pub fn score(&self) -> Option<i64> {
        self.score
    }

    /// Returns the id of the parent comment (if present).
    pub fn parent_id(&self) -> Option<u64> {
        self.parent_id
    }

    /// Returns the creation timestamp (if present).
    pub fn created_at(&self) -> Option<&str> {
        str_opt_ref!(self.created_at)
    }
}
