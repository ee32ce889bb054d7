//! Collaborator traits.

use async_trait::async_trait;
use herald_core::{
    Credentials, LexicalExample, ListingPage, ListingRequest, ListingSort, PostRecord, Session,
};
use herald_error::{AlertError, HeraldError, HeraldResult};
use std::sync::Arc;

/// The content platform the bot polls and comments on.
///
/// Implementations are expected to share one request budget across all
/// methods.
#[async_trait]
pub trait ContentPlatform: Send + Sync {
    /// Log in and acquire a session.
    ///
    /// # Errors
    ///
    /// Returns an auth error if the credentials are rejected or the
    /// response cannot be understood.
    async fn login(&self, credentials: &Credentials) -> HeraldResult<Session>;

    /// Fetch one page of a listing, newest first.
    ///
    /// # Errors
    ///
    /// Returns a transport error on network failure and a decode error if
    /// the envelope is malformed. A malformed envelope never yields an
    /// empty page.
    async fn fetch_listing(
        &self,
        request: &ListingRequest,
        session: &Session,
    ) -> HeraldResult<ListingPage>;

    /// Fetch an author's submissions.
    async fn fetch_author_posts(
        &self,
        author: &str,
        sort: ListingSort,
        limit: u32,
        session: &Session,
    ) -> HeraldResult<ListingPage>;

    /// Submit a comment on `target` (a post fullname).
    ///
    /// # Errors
    ///
    /// Returns a publish error unless the platform confirms the comment.
    async fn publish(&self, target: &str, text: &str, session: &Session) -> HeraldResult<()>;
}

/// Dictionary service that supplies usage examples.
#[async_trait]
pub trait LexiconSource: Send + Sync {
    /// Look up the top usage example for `word`.
    ///
    /// A word with no example yields an empty [`LexicalExample`], not an error.
    async fn top_example(&self, word: &str) -> HeraldResult<LexicalExample>;
}

/// What a composer gets to work with for one candidate post.
#[derive(Debug, Clone, Copy)]
pub struct CompositionContext<'a> {
    /// The candidate post
    pub post: &'a PostRecord,
    /// The bot's session, for composers that need further lookups
    pub session: &'a Session,
}

/// Turns a candidate post into comment text.
#[async_trait]
pub trait Composer: Send + Sync {
    /// Compose a comment for the candidate.
    ///
    /// An empty string means "nothing to say"; the caller skips the post.
    async fn compose_comment(&self, context: CompositionContext<'_>) -> HeraldResult<String>;
}

/// Side channel used to report a fatal error.
#[async_trait]
pub trait Alerter: Send + Sync {
    /// Deliver an alert describing `error`.
    async fn alert(&self, error: &HeraldError) -> Result<(), AlertError>;
}

// Shared handles delegate, so one collaborator can serve the loop and a test
// or a second consumer.

#[async_trait]
impl<T: LexiconSource + ?Sized> LexiconSource for Arc<T> {
    async fn top_example(&self, word: &str) -> HeraldResult<LexicalExample> {
        (**self).top_example(word).await
    }
}

#[async_trait]
impl<T: Composer + ?Sized> Composer for Arc<T> {
    async fn compose_comment(&self, context: CompositionContext<'_>) -> HeraldResult<String> {
        (**self).compose_comment(context).await
    }
}

#[async_trait]
impl<T: Alerter + ?Sized> Alerter for Arc<T> {
    async fn alert(&self, error: &HeraldError) -> Result<(), AlertError> {
        (**self).alert(error).await
    }
}
