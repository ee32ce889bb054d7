//! Conversions from Reddit envelopes into core types.

use super::json_models::{ListingEnvelope, RedditPostJson};
use herald_core::{ListingPage, PostRecord, PostRecordBuilder};
use herald_error::{DecodeError, HeraldResult};

/// Convert one listing child into a core post record.
pub(crate) fn post_from_json(post: RedditPostJson) -> Result<PostRecord, DecodeError> {
    PostRecordBuilder::default()
        .id(post.id)
        .fullname(post.name)
        .title(post.title)
        .author(post.author)
        .url(post.url)
        .permalink(post.permalink)
        .subreddit(post.subreddit)
        .score(post.score)
        .comment_count(post.num_comments)
        .created_at_epoch_seconds(post.created_utc as i64)
        .build()
        .map_err(|e| DecodeError::new(format!("Invalid post record: {}", e)))
}

/// Decode a listing body, all or nothing.
pub(crate) fn decode_listing(body: &str) -> HeraldResult<ListingPage> {
    let envelope: ListingEnvelope = serde_json::from_str(body)
        .map_err(|e| DecodeError::new(format!("Failed to parse listing: {}", e)))?;

    let posts = envelope
        .data
        .children
        .into_iter()
        .map(|child| post_from_json(child.data))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ListingPage::new(posts))
}
