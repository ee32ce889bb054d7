//! Lexical-example composer: quote a dictionary example for a title word.

use async_trait::async_trait;
use herald_core::LexicalExample;
use herald_error::HeraldResult;
use herald_interface::{Composer, CompositionContext, LexiconSource};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^A-Za-z ]").expect("Valid letter class regex"));

/// Words of `title` in the order they are tried against the lexicon.
///
/// Every character outside `[A-Za-z ]` becomes a space and the title is
/// split on single spaces. Words are ordered by length, then byte-wise,
/// and walked from the end, so the longest word comes first and ties go to
/// the byte-wise larger word.
///
/// ```
/// use herald_bot::candidate_words;
///
/// assert_eq!(candidate_words("Cat sat on a Mat"), ["sat", "Mat", "Cat", "on", "a"]);
/// ```
pub fn candidate_words(title: &str) -> Vec<String> {
    let cleaned = NON_LETTERS.replace_all(title, " ");

    let mut words: Vec<&str> = cleaned.split(' ').filter(|word| !word.is_empty()).collect();
    words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    let mut words: Vec<String> = words.into_iter().rev().map(str::to_string).collect();
    // Repeated words would only repeat the lookup.
    words.dedup();
    words
}

/// Render the comment for `word` and its example.
pub fn render_lexical_comment(word: &str, example: &LexicalExample) -> String {
    format!(
        "Top example usage of *{}* from [Wordnik](http://www.wordnik.com/):\n\n>{}\n\n[Origin.]({})\n\n*I'm a bot and unaffiliated with Wordnik.*",
        word,
        example.text(),
        example.source_url()
    )
}

/// Composer that looks up title words in a [`LexiconSource`].
///
/// The first word with a non-empty example wins. A title with no usable
/// word yields an empty comment.
pub struct LexicalComposer<L> {
    lexicon: L,
}

impl<L: LexiconSource> LexicalComposer<L> {
    /// Create a composer backed by `lexicon`.
    pub fn new(lexicon: L) -> Self {
        Self { lexicon }
    }
}

#[async_trait]
impl<L: LexiconSource> Composer for LexicalComposer<L> {
    #[instrument(skip(self, context), fields(post = %context.post.fullname()))]
    async fn compose_comment(&self, context: CompositionContext<'_>) -> HeraldResult<String> {
        for word in candidate_words(context.post.title()) {
            let example = self.lexicon.top_example(&word).await?;
            if example.is_empty() {
                debug!(word = %word, "No example");
                continue;
            }
            debug!(word = %word, "Found example");
            return Ok(render_lexical_comment(&word, &example));
        }
        Ok(String::new())
    }
}
