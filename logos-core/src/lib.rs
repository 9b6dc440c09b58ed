//! Publication analysis library.
//!
//! This crate turns a body of text (a "publication") into:
//! - A dual cursor over its lines and words
//! - Quality metrics (word counts, averages, keyword matches)
//! - A word-level n-gram Markov matrix with row-normalized probabilities
//!
//! The text traversal is abstracted behind the `PublicationBody` trait so
//! metric functions and the matrix builder work with any backing store.

/// Error type shared by the whole crate.
pub mod error;

/// Tokenizer, publication bodies and word lists.
///
/// Everything related to turning raw lines into traversable words.
pub mod text;

/// N-gram keys and the Markov transition matrix.
pub mod model;

/// Metric functions computed over a `PublicationBody`.
pub mod metrics;

/// Analysis configuration and aggregated results.
pub mod analysis;

/// Scored, authored publication record.
pub mod publication;

/// I/O utilities (file loading, folder listing).
pub mod io;

pub use error::{Error, Result};
