//! Request configuration for searches and post/book interactions.
//!
//! The search endpoints take most of their filters as a single
//! space-separated `tags` value. The emission order of the generated
//! tokens is part of the wire contract and must not be reordered.

use chrono::NaiveDate;

/// Calendar-only format the API expects in `date:` tokens.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Sort orders accepted by the search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    /// Most popular first.
    Popularity,
    /// Newest first.
    #[default]
    Date,
    /// Highest quality first.
    Quality,
    /// Shuffled.
    Random,
    /// Most recently favorited first.
    RecentlyFavorited,
    /// Most recently voted first.
    RecentlyVoted,
}

impl SearchOrder {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Date => "date",
            Self::Quality => "quality",
            Self::Random => "random",
            Self::RecentlyFavorited => "recently_favorited",
            Self::RecentlyVoted => "recently_voted",
        }
    }
}

/// Nudity rating filters. All three buckets are included by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    /// Everyone.
    pub g: bool,
    /// Younger teenagers.
    pub r15: bool,
    /// Adults.
    pub r18: bool,
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            g: true,
            r15: true,
            r18: true,
        }
    }
}

impl Rating {
    /// No `rating:` tokens are emitted when every bucket is enabled.
    ///
    /// The site's G/R15/R18 toggles map onto the API's q/s/e buckets.
    fn push_tags(self, tags: &mut Vec<String>) {
        if self.g && self.r15 && self.r18 {
            return;
        }
        if self.g {
            tags.push("rating:q".to_string());
        }
        if self.r15 {
            tags.push("rating:s".to_string());
        }
        if self.r18 {
            tags.push("rating:e".to_string());
        }
    }
}

/// Restricts a search to a day or to an inclusive range of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    /// Submissions from a single calendar day.
    On(NaiveDate),
    /// Submissions between two calendar days.
    Between(NaiveDate, NaiveDate),
}

impl DateFilter {
    fn to_tag(self) -> String {
        match self {
            Self::On(day) => format!("date:{}", day.format(DATE_FORMAT)),
            Self::Between(start, end) => format!(
                "date:{}..{}",
                start.format(DATE_FORMAT),
                end.format(DATE_FORMAT)
            ),
        }
    }
}

/// Size or aspect-ratio filter for submission searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaSize {
    /// No size filter.
    #[default]
    Any,
    /// Large images.
    Large,
    /// Huge images.
    Huge,
    /// Very tall or very wide images.
    Long,
    /// Wallpaper-sized images.
    Wallpaper,
    /// 16:9 aspect ratio.
    Ratio16x9,
    /// 4:3 aspect ratio.
    Ratio4x3,
    /// 3:2 aspect ratio.
    Ratio3x2,
    /// 1:1 aspect ratio.
    Ratio1x1,
}

impl MediaSize {
    fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Large => "large",
            Self::Huge => "huge",
            Self::Long => "long",
            Self::Wallpaper => "wallpaper",
            Self::Ratio16x9 => "16:9",
            Self::Ratio4x3 => "4:3",
            Self::Ratio3x2 => "3:2",
            Self::Ratio1x1 => "1:1",
        }
    }
}

/// Media type filter for submission searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileType {
    /// No type filter.
    #[default]
    Any,
    /// Videos only.
    Video,
    /// Animated gifs only.
    Gif,
}

impl FileType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Video => "video",
            Self::Gif => "gif",
        }
    }
}

/// Controls whether pages already grouped into books show up in search
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HidePostsInBooks {
    /// Book pages always show up.
    Never,
    /// Book pages never show up.
    Always,
    /// Book pages are hidden only in sufficiently large tags.
    #[default]
    InLargerTags,
}

impl HidePostsInBooks {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Always => "always",
            Self::InLargerTags => "in-larger-tags",
        }
    }
}

/// Filters for [`Client::search_submissions`].
///
/// Start from [`SubmissionQuery::default`] and override what you need:
///
/// ```
/// use sankaku::search::{Rating, SearchOrder, SubmissionQuery};
///
/// let query = SubmissionQuery {
///     order_by: SearchOrder::Random,
///     rating: Rating { g: false, r15: false, r18: true },
///     tags: vec!["yuri".to_string(), "-yaoi".to_string()],
///     ..SubmissionQuery::default()
/// };
/// ```
///
/// [`Client::search_submissions`]: crate::Client::search_submissions
#[derive(Debug, Clone)]
pub struct SubmissionQuery {
    /// Sort order. Defaults to [`SearchOrder::Date`].
    pub order_by: SearchOrder,
    /// Number of submissions per page, at most 100. Defaults to 40.
    pub limit: u32,
    /// Opaque cursor to the next page, from a previous reply's meta.
    pub next: Option<String>,
    /// Opaque cursor to the previous page, from a previous reply's meta.
    pub prev: Option<String>,
    /// Nudity rating filters.
    pub rating: Rating,
    /// Restrict the search to a day or a range of days.
    pub date: Option<DateFilter>,
    /// Whether pages grouped into books are hidden.
    pub hide_posts_in_books: HidePostsInBooks,
    /// Filters away everything below this threshold, from 1 to 5.
    pub threshold: u8,
    /// Size or aspect-ratio filter.
    pub size: MediaSize,
    /// Media type filter.
    pub file_type: FileType,
    /// Show submissions recommended for this account name.
    pub recommended_for: Option<String>,
    /// Show submissions favorited by this account name.
    pub favorited_by: Option<String>,
    /// Show submissions voted on by this account name.
    pub voted_by: Option<String>,
    /// Free-form tags, `-` prefixed to exclude (e.g. `yuri`, `-yaoi`).
    pub tags: Vec<String>,
}

impl Default for SubmissionQuery {
    fn default() -> Self {
        Self {
            order_by: SearchOrder::Date,
            limit: 40,
            next: None,
            prev: None,
            rating: Rating::default(),
            date: None,
            hide_posts_in_books: HidePostsInBooks::default(),
            threshold: 1,
            size: MediaSize::default(),
            file_type: FileType::default(),
            recommended_for: None,
            favorited_by: None,
            voted_by: None,
            tags: Vec::new(),
        }
    }
}

impl SubmissionQuery {
    /// Assembles the `tags` value. Token order is a wire contract.
    pub(crate) fn tag_string(&self) -> String {
        let mut tags = Vec::new();
        if self.order_by != SearchOrder::Date {
            tags.push(format!("order:{}", self.order_by.as_str()));
        }
        if let Some(name) = &self.recommended_for {
            tags.push(format!("fav:{name}"));
        }
        if let Some(name) = &self.voted_by {
            tags.push(format!("voted:{name}"));
        }
        if let Some(name) = &self.favorited_by {
            tags.push(format!("user:{name}"));
        }
        self.rating.push_tags(&mut tags);
        if self.file_type != FileType::Any {
            tags.push(format!("file_type:{}", self.file_type.as_str()));
        }
        if self.size != MediaSize::Any {
            tags.push(format!("+{}", self.size.as_str()));
        }
        if let Some(date) = self.date {
            tags.push(date.to_tag());
        }
        tags.extend(self.tags.iter().cloned());
        tags.join(" ")
    }
}

/// Filters for [`Client::search_books`].
///
/// [`Client::search_books`]: crate::Client::search_books
#[derive(Debug, Clone)]
pub struct BookQuery {
    /// Sort order. Defaults to [`SearchOrder::Popularity`].
    pub order_by: SearchOrder,
    /// Number of books per page. Defaults to 40.
    pub limit: u32,
    /// Opaque cursor to the next page, from a previous reply's meta.
    pub next: Option<String>,
    /// Opaque cursor to the previous page, from a previous reply's meta.
    pub prev: Option<String>,
    /// Nudity rating filters.
    pub rating: Rating,
    /// Include books that contain no posts.
    pub show_empty: bool,
    /// Show books favorited by this account name.
    pub favorited_by: Option<String>,
    /// Show books voted on by this account name.
    pub voted_by: Option<String>,
    /// Free-form tags, `-` prefixed to exclude.
    pub tags: Vec<String>,
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            order_by: SearchOrder::Popularity,
            limit: 40,
            next: None,
            prev: None,
            rating: Rating::default(),
            show_empty: false,
            favorited_by: None,
            voted_by: None,
            tags: Vec::new(),
        }
    }
}

impl BookQuery {
    /// Assembles the `tags` value. Unlike submissions, the order token
    /// is always emitted.
    pub(crate) fn tag_string(&self) -> String {
        let mut tags = vec![format!("order:{}", self.order_by.as_str())];
        self.rating.push_tags(&mut tags);
        if self.show_empty {
            tags.push("show_empty:true".to_string());
        }
        if let Some(name) = &self.voted_by {
            tags.push(format!("voted:{name}"));
        }
        if let Some(name) = &self.favorited_by {
            tags.push(format!("user:{name}"));
        }
        tags.extend(self.tags.iter().cloned());
        tags.join(" ")
    }
}

/// Which kind of record an interaction endpoint targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetKind {
    /// A single post.
    #[default]
    Submission,
    /// A book (called a pool on the wire).
    Book,
}

impl TargetKind {
    pub(crate) fn segment(self) -> &'static str {
        match self {
            Self::Submission => "posts",
            Self::Book => "pools",
        }
    }
}

/// Selects the comment thread of a submission or book.
#[derive(Debug, Clone)]
pub struct CommentQuery {
    /// What kind of record the comments belong to.
    pub kind: TargetKind,
    /// Id of the submission or book.
    pub id: u64,
    /// Number of comments per page. Defaults to 10.
    pub limit: u32,
    /// Page number, starting at 1.
    pub page: u32,
}

impl CommentQuery {
    /// Comments of the submission with the given id, first page.
    pub fn new(id: u64) -> Self {
        Self {
            kind: TargetKind::Submission,
            id,
            limit: 10,
            page: 1,
        }
    }
}

/// Pagination for the private message listing.
#[derive(Debug, Clone)]
pub struct DmailQuery {
    /// Number of messages per page. Defaults to 20.
    pub limit: u32,
    /// Page number, starting at 1.
    pub page: u32,
}

impl Default for DmailQuery {
    fn default() -> Self {
        Self { limit: 20, page: 1 }
    }
}

/// Adds or removes a favorite on a submission or book.
#[derive(Debug, Clone)]
pub struct LikeQuery {
    /// What kind of record to favorite.
    pub kind: TargetKind,
    /// Id of the submission or book.
    pub id: u64,
    /// Remove the favorite instead of adding it.
    pub remove: bool,
}

impl LikeQuery {
    /// Favorite the submission with the given id.
    pub fn new(id: u64) -> Self {
        Self {
            kind: TargetKind::Submission,
            id,
            remove: false,
        }
    }
}

/// Adds, changes or removes a vote on a submission or book.
#[derive(Debug, Clone)]
pub struct VoteQuery {
    /// What kind of record to vote on.
    pub kind: TargetKind,
    /// Id of the submission or book.
    pub id: u64,
    /// Score from 1 to 5. Zero removes the vote.
    pub score: u8,
}

impl VoteQuery {
    /// Vote on the submission with the given id.
    pub fn new(id: u64, score: u8) -> Self {
        Self {
            kind: TargetKind::Submission,
            id,
            score,
        }
    }
}

/// Direction of a comment vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentScore {
    /// Upvote.
    Plus,
    /// Downvote.
    Minus,
}

impl CommentScore {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::Minus => "minus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_submission_query_emits_no_tags() {
        assert_eq!(SubmissionQuery::default().tag_string(), "");
    }

    #[test]
    fn order_and_rating_come_before_user_tags() {
        let query = SubmissionQuery {
            order_by: SearchOrder::Random,
            rating: Rating {
                g: true,
                r15: false,
                r18: true,
            },
            tags: vec!["yuri".to_string(), "-yaoi".to_string()],
            ..SubmissionQuery::default()
        };
        assert_eq!(
            query.tag_string(),
            "order:random rating:q rating:e yuri -yaoi"
        );
    }

    #[test]
    fn unfiltered_rating_emits_nothing() {
        let query = SubmissionQuery {
            order_by: SearchOrder::Quality,
            ..SubmissionQuery::default()
        };
        assert_eq!(query.tag_string(), "order:quality");
    }

    #[test]
    fn account_filters_follow_a_fixed_order() {
        let query = SubmissionQuery {
            order_by: SearchOrder::Popularity,
            recommended_for: Some("alice".to_string()),
            favorited_by: Some("bob".to_string()),
            voted_by: Some("carol".to_string()),
            ..SubmissionQuery::default()
        };
        assert_eq!(
            query.tag_string(),
            "order:popularity fav:alice voted:carol user:bob"
        );
    }

    #[test]
    fn size_and_file_type_tokens() {
        let query = SubmissionQuery {
            size: MediaSize::Ratio16x9,
            file_type: FileType::Gif,
            ..SubmissionQuery::default()
        };
        assert_eq!(query.tag_string(), "file_type:gif +16:9");
    }

    #[test]
    fn single_date_uses_calendar_only_format() {
        let day = NaiveDate::from_ymd_opt(2021, 3, 31).unwrap();
        let query = SubmissionQuery {
            date: Some(DateFilter::On(day)),
            ..SubmissionQuery::default()
        };
        assert_eq!(query.tag_string(), "date:31.03.2021");
    }

    #[test]
    fn date_range_joins_with_two_dots() {
        let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap();
        let query = SubmissionQuery {
            date: Some(DateFilter::Between(start, end)),
            ..SubmissionQuery::default()
        };
        assert_eq!(query.tag_string(), "date:01.01.2021..31.01.2021");
    }

    #[test]
    fn book_query_always_emits_an_order() {
        assert_eq!(BookQuery::default().tag_string(), "order:popularity");
    }

    #[test]
    fn book_query_token_order() {
        let query = BookQuery {
            order_by: SearchOrder::Random,
            rating: Rating {
                g: false,
                r15: false,
                r18: true,
            },
            show_empty: true,
            favorited_by: Some("bob".to_string()),
            voted_by: Some("carol".to_string()),
            tags: vec!["original".to_string()],
            ..BookQuery::default()
        };
        assert_eq!(
            query.tag_string(),
            "order:random rating:e show_empty:true voted:carol user:bob original"
        );
    }

    #[test]
    fn target_kinds_map_to_wire_segments() {
        assert_eq!(TargetKind::Submission.segment(), "posts");
        assert_eq!(TargetKind::Book.segment(), "pools");
    }
}
