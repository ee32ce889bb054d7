//! `herald compose`: preview a comment without posting it.

use herald_bot::{BotVariant, HeraldConfig, HistoryComposer, LexicalComposer};
use herald_core::{PostRecordBuilder, Session};
use herald_error::{ConfigError, HeraldResult};
use herald_interface::{Composer, CompositionContext, ContentPlatform};
use herald_rate_limit::RequestPacer;
use herald_social::{RedditClient, WordnikClient};
use std::sync::Arc;
use tracing::{info, instrument};

/// Compose a comment for a post with `title` by `author` and return it.
///
/// The lexical variant only needs the Wordnik key. The history variant
/// logs in to read the author's submissions but never posts.
#[instrument(skip(config), fields(variant = %config.bot.variant))]
pub async fn compose_preview(
    config: &HeraldConfig,
    title: &str,
    author: Option<&str>,
) -> HeraldResult<String> {
    let post = PostRecordBuilder::default()
        .id("preview")
        .fullname("t3_preview")
        .title(title)
        .author(author.unwrap_or_default())
        .build()
        .map_err(|e| ConfigError::new(format!("Invalid preview post: {}", e)))?;

    let timeout = config.schedule.request_timeout();

    let comment = match config.bot.variant {
        BotVariant::Lexical => {
            let composer = LexicalComposer::new(WordnikClient::new(config.wordnik.clone(), timeout)?);
            // The lexicon never reads the session.
            let session = Session::new("", "");
            composer
                .compose_comment(CompositionContext {
                    post: &post,
                    session: &session,
                })
                .await?
        }
        BotVariant::History => {
            if author.is_none() {
                return Err(ConfigError::new("--author is required for the history variant").into());
            }
            let pacer = RequestPacer::new(config.schedule.request_interval());
            let platform = Arc::new(RedditClient::new(config.reddit.clone(), pacer, timeout)?);
            let session = platform.login(&config.reddit.credentials()).await?;
            let composer = HistoryComposer::new(platform, config.history.clone());
            composer
                .compose_comment(CompositionContext {
                    post: &post,
                    session: &session,
                })
                .await?
        }
    };

    info!(empty = comment.is_empty(), "Composed preview");
    Ok(comment)
}
