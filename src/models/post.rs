//! Submission (post) models.

use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;
use crate::models::user::Author;

/// A single submission.
///
/// Media URLs can be absent when the submission is premium-gated or
/// carries restricted tags and the client is not logged in with an
/// account that may see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Numeric submission id.
    id: u64,

    /// Rating bucket: `s`, `q` or `e`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<String>,

    /// Moderation status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,

    /// Account that uploaded the submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<Author>,

    /// URL of the full-size file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_url: Option<String>,

    /// URL of the resized sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sample_url: Option<String>,

    /// URL of the thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    preview_url: Option<String>,

    /// Width of the full-size file in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<u32>,

    /// Height of the full-size file in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<u32>,

    /// Size of the full-size file in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_size: Option<u64>,

    /// MIME type of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_type: Option<String>,

    /// MD5 hash of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    md5: Option<String>,

    /// Source the submission was taken from, usually a URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,

    /// Id of the parent submission, for variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_id: Option<u64>,

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

    /// Whether the logged in account has favorited this submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_favorited: Option<bool>,

    /// Vote the logged in account has cast on this submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_vote: Option<i64>,

    /// Tags attached to the submission.
    #[serde(default)]
    tags: Vec<Tag>,
}

impl Submission {
    /// Returns the numeric submission id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the rating bucket (if present).
    pub fn rating(&self) -> Option<&str> {
        str_opt_ref!(self.rating)
    }

    /// Returns the moderation status (if present).
    pub fn status(&self) -> Option<&str> {
        str_opt_ref!(self.status)
    }

    /// Returns the uploading account (if present).
    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    /// Returns the URL of the full-size file (if visible).
    pub fn file_url(&self) -> Option<&str> {
        str_opt_ref!(self.file_url)
    }

    /// Returns the URL of the resized sample (if visible).
    pub fn sample_url(&self) -> Option<&str> {
        str_opt_ref!(self.sample_url)
    }

    /// Returns the URL of the thumbnail (if visible).
    pub fn preview_url(&self) -> Option<&str> {
        str_opt_ref!(self.preview_url)
    }

    /// Returns the width of the full-size file in pixels (if present).
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Returns the height of the full-size file in pixels (if present).
    pub fn height(&self) -> Option<u32> {
        self.height
    }

    /// Returns the size of the full-size file in bytes (if present).
    pub fn file_size(&self) -> Option<u64> {
        self.file_size
    }

    /// Returns the MIME type of the file (if present).
    pub fn file_type(&self) -> Option<&str> {
        str_opt_ref!(self.file_type)
    }

    /// Returns the MD5 hash of the file (if present).
    pub fn md5(&self) -> Option<&str> {
        str_opt_ref!(self.md5)
    }

    /// Returns the source of the submission (if present).
    pub fn source(&self) -> Option<&str> {
        str_opt_ref!(self.source)
    }

    /// Returns the id of the parent submission (if present).
    pub fn parent_id(&self) -> Option<u64> {
        self.parent_id
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

    /// Returns whether the logged in account has favorited this
    /// submission. Only present when logged in.
    pub fn is_favorited(&self) -> Option<bool> {
        self.is_favorited
    }

    /// Returns the vote the logged in account has cast. Only present
    /// when logged in.
    pub fn user_vote(&self) -> Option<i64> {
        self.user_vote
    }

    /// Returns the tags attached to the submission.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// A tag entry as embedded in submissions and books.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Numeric tag id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,

    /// Canonical tag name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    /// English tag name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name_en: Option<String>,

    /// Japanese tag name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name_ja: Option<String>,

    /// Numeric tag category.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    kind: Option<u32>,

    /// Number of submissions carrying the tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    post_count: Option<u64>,

    /// Number of books carrying the tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pool_count: Option<u64>,

    /// Most severe rating bucket among records carrying the tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<String>,
}

impl Tag {
    /// Returns the numeric tag id (if present).
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Returns the canonical tag name (if present).
    pub fn name(&self) -> Option<&str> {
        str_opt_ref!(self.name)
    }

    /// Returns the English tag name (if present).
    pub fn name_en(&self) -> Option<&str> {
        str_opt_ref!(self.name_en)
    }

    /// Returns the Japanese tag name (if present).
    pub fn name_ja(&self) -> Option<&str> {
        str_opt_ref!(self.name_ja)
    }

    /// Returns the numeric tag category (if present).
    pub fn kind(&self) -> Option<u32> {
        self.kind
    }

    /// Returns the number of submissions carrying the tag (if present).
    pub fn post_count(&self) -> Option<u64> {
        self.post_count
    }

    /// Returns the number of books carrying the tag (if present).
    pub fn pool_count(&self) -> Option<u64> {
        self.pool_count
    }

    /// Returns the most severe rating bucket among records carrying the
    /// tag (if present).
    pub fn rating(&self) -> Option<&str> {
        str_opt_ref!(self.rating)
    }
}
