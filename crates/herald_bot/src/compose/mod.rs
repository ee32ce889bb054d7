//! Comment composers.

mod history;
mod lexical;

pub use history::{HistoryComposer, escape_table_cell, render_history_comment};
pub use lexical::{LexicalComposer, candidate_words, render_lexical_comment};
