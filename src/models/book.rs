//! Book (pool) models.

use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;
use crate::models::post::{Submission, Tag};
use crate::models::user::Author;

/// A book, called a pool on the wire: an ordered collection of
/// submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Numeric book id.
    id: u64,

    /// English title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name_en: Option<String>,

    /// Japanese title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name_ja: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    /// Account that created the book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<Author>,

    /// Whether the book is visible to everyone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_public: Option<bool>,

    /// Rating bucket of the book as a whole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<String>,

    /// Total number of posts in the book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    post_count: Option<u64>,

    /// Number of pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pages_count: Option<u64>,

    /// Number of posts visible to the current viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    visible_post_count: Option<u64>,

    /// Posts contained in the book, when the endpoint includes them.
    #[serde(default)]
    posts: Vec<Submission>,

    /// Number of favorites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fav_count: Option<u64>,

    /// Number of votes cast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vote_count: Option<u64>,

    /// Sum of all vote scores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_score: Option<i64>,

    /// Number of comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment_count: Option<u64>,

    /// Whether the logged in account has favorited this book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_favorited: Option<bool>,

    /// Vote the logged in account has cast on this book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_vote: Option<i64>,

    /// Tags attached to the book.
    #[serde(default)]
    tags: Vec<Tag>,
}

impl Book {
    /// Returns the numeric book id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the English title (if present).
    pub fn name_en(&self) -> Option<&str> {
        str_opt_ref!(self.name_en)
    }

    /// Returns the Japanese title (if present).
    pub fn name_ja(&self) -> Option<&str> {
        str_opt_ref!(self.name_ja)
    }

    /// Returns the description (if present).
    pub fn description(&self) -> Option<&str> {
        str_opt_ref!(self.description)
    }

    /// Returns the creating account (if present).
    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    /// Returns whether the book is visible to everyone (if present).
    pub fn is_public(&self) -> Option<bool> {
        self.is_public
    }

    /// Returns the rating bucket of the book (if present).
    pub fn rating(&self) -> Option<&str> {
        str_opt_ref!(self.rating)
    }

    /// Returns the total number of posts in the book (if present).
    pub fn post_count(&self) -> Option<u64> {
        self.post_count
    }

    /// Returns the number of pages (if present).
    pub fn pages_count(&self) -> Option<u64> {
        self.pages_count
    }

    /// Returns the number of posts visible to the current viewer (if
    /// present).
    pub fn visible_post_count(&self) -> Option<u64> {
        self.visible_post_count
    }

    /// Returns the posts contained in the book.
    pub fn posts(&self) -> &[Submission] {
        &self.posts
    }

    /// Returns the number of favorites (if present).
    pub fn fav_count(&self) -> Option<u64> {
        self.fav_count
    }

    /// Returns the number of votes cast (if present).
    pub fn vote_count(&self) -> Option<u64> {
        self.vote_count
    }

    /// Returns the sum of all vote scores (if present).
    pub fn total_score(&self) -> Option<i64> {
        self.total_score
    }

    /// Returns the number of comments (if present).
    pub fn comment_count(&self) -> Option<u64> {
        self.comment_count
    }

    /// Returns whether the logged in account has favorited this book.
    /// Only present when logged in.
    pub fn is_favorited(&self) -> Option<bool> {
        self.is_favorited
    }

    /// Returns the vote the logged in account has cast. Only present
    /// when logged in.
    pub fn user_vote(&self) -> Option<i64> {
        self.user_vote
    }

    /// Returns the tags attached to the book.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}
