//! Dictionary lookup results.

use serde::{Deserialize, Serialize};

/// A representative usage example for a word.
///
/// An empty `text` means the lexicon had nothing for the word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LexicalExample {
    /// Where the example was quoted from
    #[serde(default, rename = "url")]
    source_url: String,
    /// The example sentence
    #[serde(default)]
    text: String,
}

impl LexicalExample {
    /// Create an example from its source URL and text.
    pub fn new(source_url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            text: text.into(),
        }
    }

    /// True when the lexicon returned no usable text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
