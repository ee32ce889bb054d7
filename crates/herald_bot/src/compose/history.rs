//! Author-history composer: tabulate the author's other posts.

use async_trait::async_trait;
use herald_core::PostRecord;
use herald_error::HeraldResult;
use herald_interface::{Composer, CompositionContext, ContentPlatform};
use std::fmt::Write;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::HistoryConfig;

/// Site root used for permalinks in the rendered table.
const SITE_URL: &str = "https://www.reddit.com";

const FOOTER: &str =
    "*I'm a bot. This table lists the author's top public submissions and is updated only when the post is made.*";

/// Make a string safe to put inside a markdown table cell.
pub fn escape_table_cell(text: &str) -> String {
    text.replace('|', "&#124;")
}

/// Render the history comment for `author`.
///
/// `posts` are listed in the order given; the target post should already be
/// filtered out.
///
/// ```
/// use herald_bot::render_history_comment;
///
/// let comment = render_history_comment("whiskers", &[]);
/// assert!(comment.starts_with("This appears to be u/whiskers's first post"));
/// ```
pub fn render_history_comment(author: &str, posts: &[PostRecord]) -> String {
    let mut out = String::new();

    match posts.len() {
        0 => {
            let _ = write!(
                out,
                "This appears to be u/{}'s first post here. Welcome!\n\n{}",
                author, FOOTER
            );
            return out;
        }
        1 => {
            let _ = write!(out, "Here is u/{}'s top post:\n\n", author);
        }
        count => {
            let _ = write!(out, "Here are u/{}'s top {} posts:\n\n", author, count);
        }
    }

    out.push_str("Score | Title | Link | Comments | Permalink | Date | Subreddit\n");
    out.push_str("---:|:---|:---|---:|:---|:---|:---\n");

    for post in posts {
        let date = post
            .created_at()
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{} | {} | [link]({}) | {} | [comments]({}{}) | {} | r/{}",
            post.score(),
            escape_table_cell(post.title()),
            post.url(),
            post.comment_count(),
            SITE_URL,
            post.permalink(),
            date,
            post.subreddit()
        );
    }

    out.push('\n');
    out.push_str(FOOTER);
    out
}

/// Composer that fetches the author's submissions and renders them.
pub struct HistoryComposer<P> {
    platform: Arc<P>,
    settings: HistoryConfig,
}

impl<P: ContentPlatform> HistoryComposer<P> {
    /// Create a composer that reads submissions through `platform`.
    pub fn new(platform: Arc<P>, settings: HistoryConfig) -> Self {
        Self { platform, settings }
    }
}

#[async_trait]
impl<P: ContentPlatform> Composer for HistoryComposer<P> {
    #[instrument(skip(self, context), fields(post = %context.post.fullname(), author = %context.post.author()))]
    async fn compose_comment(&self, context: CompositionContext<'_>) -> HeraldResult<String> {
        let author = context.post.author();
        if author.is_empty() || author == "[deleted]" {
            debug!("Author unavailable");
            return Ok(String::new());
        }

        // One extra so the target itself can be dropped without shortening the table.
        let page = self
            .platform
            .fetch_author_posts(
                author,
                self.settings.sort,
                self.settings.top_posts.saturating_add(1),
                context.session,
            )
            .await?;

        let posts: Vec<PostRecord> = page
            .into_posts()
            .into_iter()
            .filter(|post| post.fullname() != context.post.fullname())
            .take(self.settings.top_posts as usize)
            .collect();

        debug!(count = posts.len(), "Rendering history");
        Ok(render_history_comment(author, &posts))
    }
}
