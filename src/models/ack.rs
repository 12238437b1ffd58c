//! Acknowledgement payloads returned by write endpoints.

use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;

/// Bare success flag returned by settings updates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusAck {
    success: bool,
}

impl StatusAck {
    /// Returns whether the API accepted the change.
    pub fn success(&self) -> bool {
        self.success
    }
}

/// Reply to adding or removing a favorite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteAck {
    /// Whether the API accepted the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    success: Option<bool>,

    /// Id of the affected submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    post_id: Option<u64>,

    /// Id of the affected book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pool_id: Option<u64>,

    /// Names of accounts that favorited the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    favorited_users: Option<String>,

    /// Score of the record after the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<i64>,
}

impl FavoriteAck {
    /// Returns whether the API accepted the change.
    pub fn success(&self) -> Option<bool> {
        self.success
    }

    /// Returns the id of the affected submission (if one was targeted).
    pub fn post_id(&self) -> Option<u64> {
        self.post_id
    }

    /// Returns the id of the affected book (if one was targeted).
    pub fn pool_id(&self) -> Option<u64> {
        self.pool_id
    }

    /// Returns the names of accounts that favorited the record.
    pub fn favorited_users(&self) -> Option<&str> {
        str_opt_ref!(self.favorited_users)
    }

    /// Returns the score of the record after the change.
    pub fn score(&self) -> Option<i64> {
        self.score
    }
}

/// Reply to casting or removing a vote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteAck {
    /// Whether the API accepted the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    success: Option<bool>,

    /// Id of the affected submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    post_id: Option<u64>,

    /// Id of the affected book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pool_id: Option<u64>,

    /// Number of votes on the record after the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vote_count: Option<u64>,

    /// Score of the record after the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<i64>,
}

impl VoteAck {
    /// Returns whether the API accepted the change.
    pub fn success(&self) -> Option<bool> {
        self.success
    }

    /// Returns the id of the affected submission (if one was targeted).
    pub fn post_id(&self) -> Option<u64> {
        self.post_id
    }

    /// Returns the id of the affected book (if one was targeted).
    pub fn pool_id(&self) -> Option<u64> {
        self.pool_id
    }

    /// Returns the number of votes on the record after the change.
    pub fn vote_count(&self) -> Option<u64> {
        self.vote_count
    }

    /// Returns the score of the record after the change.
    pub fn score(&self) -> Option<i64> {
        self.score
    }
}
