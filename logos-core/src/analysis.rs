use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::metrics;
use crate::model::{construct_markov_matrix, MarkovMatrix};
use crate::text::{PublicationBody, WordList};

/// Default n-gram size of the Markov matrix.
pub const DEFAULT_NGRAM_SIZE: usize = 1;

/// Default threshold used by `words_longer_than`.
pub const DEFAULT_LONG_WORD_THRESHOLD: usize = 6;

/// Parameters of a full publication analysis.
///
/// # Invariants
/// - `ngram_size` is always >= 1
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AnalysisInput {
	/// Size of the n-grams of the Markov matrix.
	ngram_size: usize,

	/// Words strictly longer than this are counted as long words.
	pub long_word_threshold: usize,

	/// Keywords counted by `words_in`.
	pub keywords: WordList,
}

impl Default for AnalysisInput {
	fn default() -> Self {
		Self {
			ngram_size: DEFAULT_NGRAM_SIZE,
			long_word_threshold: DEFAULT_LONG_WORD_THRESHOLD,
			keywords: WordList::default(),
		}
	}
}

impl AnalysisInput {
	/// Returns the n-gram size.
	pub fn ngram_size(&self) -> usize {
		self.ngram_size
	}

	/// Sets the n-gram size.
	///
	/// # Errors
	/// Returns `InvalidNGramSize` if `ngram_size == 0`.
	pub fn set_ngram_size(&mut self, ngram_size: usize) -> Result<()> {
		if ngram_size == 0 {
			return Err(Error::InvalidNGramSize(ngram_size));
		}
		self.ngram_size = ngram_size;
		Ok(())
	}
}

/// Serializes a NaN average as `None` (JSON `null`) and reads `None` back as NaN.
mod nan_as_none {
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
		if value.is_nan() {
			serializer.serialize_none()
		} else {
			serializer.serialize_some(value)
		}
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
		Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
	}
}

/// Every metric of a publication plus its Markov matrix.
///
/// Averages are NaN for an empty body (serialized as `null`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Analysis {
	pub line_count: usize,
	pub word_count: usize,
	#[serde(with = "nan_as_none")]
	pub average_words_per_line: f64,
	#[serde(with = "nan_as_none")]
	pub average_word_length: f64,
	pub long_words: usize,
	pub keyword_matches: usize,
	pub markov_matrix: MarkovMatrix,
}

impl Analysis {
	/// Runs every metric, one after the other, then builds the Markov matrix.
	///
	/// Metrics never interleave: each one resets and drains its cursor.
	///
	/// # Errors
	/// - `InvalidNGramSize` if the input was deserialized with `ngram_size == 0`
	/// - Cursor errors raised by the body
	pub fn run<B: PublicationBody + ?Sized>(body: &mut B, input: &AnalysisInput) -> Result<Self> {
		let mut line_count = 0;
		body.reset_line_cursor();
		while body.has_next_line() {
			body.next_line()?;
			line_count += 1;
		}

		let analysis = Self {
			line_count,
			word_count: metrics::word_count(body)?,
			average_words_per_line: metrics::average_words_per_line(body)?,
			average_word_length: metrics::average_word_length(body)?,
			long_words: metrics::words_longer_than(body, input.long_word_threshold)?,
			keyword_matches: metrics::words_in(body, &input.keywords)?,
			markov_matrix: construct_markov_matrix(body, input.ngram_size)?,
		};

		log::debug!(
			"Analysis: {} lines, {} words, {} matrix rows",
			analysis.line_count,
			analysis.word_count,
			analysis.markov_matrix.row_count()
		);
		Ok(analysis)
	}
}
