//! Word-level n-gram language model.
//!
//! - Fixed-size word tuples with a canonical string encoding (`NGram`)
//! - Transition counts and row-normalized probabilities (`MarkovMatrix`)

/// Immutable ordered tuple of words.
///
/// Encoded as `"<size>.<word>.<word>..."` when used as a matrix key.
pub mod ngram;

/// Transition matrix between consecutive n-grams.
///
/// Supports construction from a publication body, row normalization,
/// export as nested maps and weighted sampling.
pub mod markov_matrix;

pub use markov_matrix::{construct_markov_matrix, MarkovMatrix};
pub use ngram::NGram;
