//! Post records and listing pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single post decoded from a listing.
///
/// # Examples
///
/// ```
/// use herald_core::PostRecordBuilder;
///
/// let post = PostRecordBuilder::default()
///     .id("abc123")
///     .fullname("t3_abc123")
///     .title("Cat sat on a Mat")
///     .author("whiskers")
///     .build()
///     .unwrap();
///
/// assert_eq!(post.fullname(), "t3_abc123");
/// assert_eq!(*post.score(), 0);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct PostRecord {
    /// Short id, e.g. `abc123`
    id: String,
    /// Thing name, e.g. `t3_abc123`; used for cursors and comment targets
    fullname: String,
    /// Post title
    title: String,
    /// Author account name
    author: String,
    /// Linked URL (or the post itself for self posts)
    #[builder(default)]
    url: String,
    /// Site-relative permalink
    #[builder(default)]
    permalink: String,
    /// Subreddit name
    #[builder(default)]
    subreddit: String,
    /// Net score
    #[builder(default)]
    score: i64,
    /// Number of comments
    #[builder(default)]
    comment_count: u64,
    /// Creation time in seconds since the Unix epoch
    #[builder(default)]
    created_at_epoch_seconds: i64,
}

impl PostRecord {
    /// Creation time as a UTC timestamp, if representable.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at_epoch_seconds, 0)
    }
}

/// Ordered page of posts, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_more::From)]
pub struct ListingPage {
    posts: Vec<PostRecord>,
}

impl ListingPage {
    /// Create a page from records already in listing order.
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Self { posts }
    }

    /// Records in listing order.
    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    /// The newest record, which becomes the next `before` cursor.
    pub fn first(&self) -> Option<&PostRecord> {
        self.posts.first()
    }

    /// Number of records on the page.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// True when the page has no records.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Consume the page, yielding its records.
    pub fn into_posts(self) -> Vec<PostRecord> {
        self.posts
    }
}

impl IntoIterator for ListingPage {
    type Item = PostRecord;
    type IntoIter = std::vec::IntoIter<PostRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.into_iter()
    }
}
