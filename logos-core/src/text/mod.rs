//! Text handling: tokenization, traversable publication bodies and word lists.
//!
//! - `tokenizer`: splits a line into words
//! - `body`: the `PublicationBody` capability set and its in-memory implementation
//! - `word_list`: keyword membership lookups

/// Word splitting (punctuation and whitespace separated).
pub mod tokenizer;

/// Dual line/word cursor over tokenized text.
pub mod body;

/// Set of keywords used for membership tests.
pub mod word_list;

pub use body::{PublicationBody, TextBody};
pub use tokenizer::{split_words, word_length};
pub use word_list::WordList;
