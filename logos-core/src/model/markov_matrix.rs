use std::collections::{HashMap, VecDeque};

use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::text::PublicationBody;
use super::ngram::NGram;

/// Row of a matrix: encoded "to" n-gram → weight.
pub type Row = HashMap<String, f64>;

/// Transition matrix between consecutive word n-grams.
///
/// Rows are indexed by the canonical encoding of the "from" n-gram and
/// columns by the encoding of the "to" n-gram. Depending on the build phase,
/// weights are raw transition counts or row-normalized probabilities.
///
/// Serializes as the nested map itself:
/// `{ "1.A": { "1.B": 1.0 }, "1.B": { "1.A": 1.0 } }`
///
/// # Invariants
/// - Every key decodes to an `NGram` (when built through this API)
/// - After `normalized`, each row with a positive total sums to 1.0
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct MarkovMatrix {
	matrix: HashMap<String, Row>,
}

impl MarkovMatrix {
	/// Creates an empty matrix.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the weight of the `from` → `to` transition.
	///
	/// The row of `from` is created if missing.
	pub fn set_probability(&mut self, from: &NGram, to: &NGram, value: f64) {
		self.matrix.entry(from.encode()).or_default().insert(to.encode(), value);
	}

	/// Returns the weight of the `from` → `to` transition.
	///
	/// An unobserved transition (missing row or column) has a weight of `0.0`.
	pub fn get_probability(&self, from: &NGram, to: &NGram) -> f64 {
		self.matrix
			.get(&from.encode())
			.and_then(|row| row.get(&to.encode()))
			.copied()
			.unwrap_or(0.0)
	}

	/// Records one more observation of the `from` → `to` transition.
	pub fn add_count(&mut self, from: &NGram, to: &NGram) {
		*self.matrix.entry(from.encode()).or_default().entry(to.encode()).or_insert(0.0) += 1.0;
	}

	/// Sum of the weights of the row of `from` (`0.0` if the row is absent).
	pub fn row_total(&self, from: &NGram) -> f64 {
		self.matrix.get(&from.encode()).map(|row| row.values().sum()).unwrap_or(0.0)
	}

	/// Returns the row of `from`, if any transition from it was recorded.
	pub fn row(&self, from: &NGram) -> Option<&Row> {
		self.matrix.get(&from.encode())
	}

	/// Number of distinct "from" n-grams.
	pub fn row_count(&self) -> usize {
		self.matrix.len()
	}

	pub fn is_empty(&self) -> bool {
		self.matrix.is_empty()
	}

	/// Returns a row-normalized copy of this matrix.
	///
	/// Each weight is divided by the total of its row, so every row with a
	/// positive total sums to 1.0. Rows whose total is not positive are
	/// copied unchanged.
	pub fn normalized(&self) -> Self {
		let matrix = self
			.matrix
			.iter()
			.map(|(from, row)| {
				let total: f64 = row.values().sum();
				let row = if total > 0.0 {
					row.iter().map(|(to, count)| (to.clone(), count / total)).collect()
				} else {
					row.clone()
				};
				(from.clone(), row)
			})
			.collect();

		Self { matrix }
	}

	/// Decodes every transition as `(from, to, weight)`.
	///
	/// Sorted by encoded `from` then `to`, for a stable output.
	///
	/// # Errors
	/// Returns `InvalidEncoding` if a key is not a canonical n-gram encoding
	/// (only possible for matrices deserialized from foreign data).
	pub fn transitions(&self) -> Result<Vec<(NGram, NGram, f64)>> {
		let mut keys: Vec<(&String, &String, f64)> = self
			.matrix
			.iter()
			.flat_map(|(from, row)| row.iter().map(move |(to, weight)| (from, to, *weight)))
			.collect();
		keys.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.cmp(b.1)));

		keys.into_iter()
			.map(|(from, to, weight)| -> Result<(NGram, NGram, f64)> {
				Ok((NGram::decode(from)?, NGram::decode(to)?, weight))
			})
			.collect()
	}

	/// Exposes the matrix as nested maps of encoded n-grams.
	pub fn as_map(&self) -> &HashMap<String, Row> {
		&self.matrix
	}

	/// Consumes the matrix and returns its nested maps.
	pub fn into_map(self) -> HashMap<String, Row> {
		self.matrix
	}

	/// Compact binary encoding (postcard).
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		Ok(postcard::to_stdvec(self)?)
	}

	/// Decodes a matrix produced by `to_bytes`.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		Ok(postcard::from_bytes(bytes)?)
	}

	/// Draws the n-gram following `from` using weighted random sampling.
	///
	/// The probability of selecting a column is proportional to its weight,
	/// so raw counts and normalized rows behave the same.
	///
	/// Returns `Ok(None)` if `from` has no transition with a positive weight.
	pub fn sample_next(&self, from: &NGram) -> Result<Option<NGram>> {
		let row = match self.matrix.get(&from.encode()) {
			Some(row) => row,
			None => return Ok(None),
		};

		let candidates: Vec<(&String, f64)> = row
			.iter()
			.filter(|(_, weight)| **weight > 0.0)
			.map(|(to, weight)| (to, *weight))
			.collect();
		let total: f64 = candidates.iter().map(|(_, weight)| weight).sum();
		if candidates.is_empty() || !total.is_finite() {
			return Ok(None);
		}

		let mut r = rand::rng().random_range(0.0..total);
		let mut chosen = candidates[candidates.len() - 1].0;
		for (to, weight) in &candidates {
			if r < *weight {
				chosen = *to;
				break;
			}
			r -= weight;
		}

		NGram::decode(chosen).map(Some)
	}

	/// Walks the chain from `start` and returns the produced words.
	///
	/// The output begins with the words of `start`; each step appends the
	/// last word of the sampled n-gram. Stops after `max_words` words or
	/// when the current n-gram has no outgoing transition.
	pub fn generate(&self, start: &NGram, max_words: usize) -> Result<Vec<String>> {
		let mut words: Vec<String> = start.words().iter().take(max_words).cloned().collect();
		let mut current = start.clone();

		while words.len() < max_words {
			let next = match self.sample_next(&current)? {
				Some(next) => next,
				None => break,
			};
			match next.words().last() {
				Some(word) => words.push(word.clone()),
				None => break,
			}
			current = next;
		}

		Ok(words)
	}
}

/// Builds the normalized Markov matrix of a publication body.
///
/// A window of the last `n + 1` words slides over a full word traversal:
/// each time it is full, the first `n` words ("from") and the last `n`
/// words ("to") form one observed transition. Counts are then row-normalized.
///
/// The word cursor is reset before and left exhausted after the traversal.
/// The line cursor is not touched.
///
/// # Notes
/// - A body with fewer than `n + 1` words yields an empty matrix.
///
/// # Errors
/// - `InvalidNGramSize` if `n == 0`
/// - Errors raised by the body while advancing its word cursor
pub fn construct_markov_matrix<B: PublicationBody + ?Sized>(body: &mut B, n: usize) -> Result<MarkovMatrix> {
	if n == 0 {
		return Err(Error::InvalidNGramSize(n));
	}

	body.reset_word_cursor();

	let mut window: VecDeque<String> = VecDeque::with_capacity(n + 1);
	let mut counts = MarkovMatrix::new();
	let mut observed = 0usize;

	while body.has_next_word() {
		window.push_back(body.next_word()?);

		if window.len() == n + 1 {
			let from = NGram::new(window.iter().take(n).cloned())?;
			let to = NGram::new(window.iter().skip(1).cloned())?;
			counts.add_count(&from, &to);
			observed += 1;

			window.pop_front();
		}
	}

	log::debug!(
		"Markov matrix (n = {}): {} transitions over {} rows",
		n,
		observed,
		counts.row_count()
	);
	Ok(counts.normalized())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::TextBody;

	fn gram(words: &[&str]) -> NGram {
		NGram::new(words.iter().copied()).unwrap()
	}

	fn assert_rows_sum_to_one(matrix: &MarkovMatrix) {
		for (from, row) in matrix.as_map() {
			let total: f64 = row.values().sum();
			assert!((total - 1.0).abs() < 1e-9, "row {from} sums to {total}");
		}
	}

	#[test]
	fn unigram_transitions_alternate() {
		let mut body = TextBody::from_text("A B\nA B");
		let matrix = construct_markov_matrix(&mut body, 1).unwrap();

		assert_eq!(matrix.row_count(), 2);
		assert_eq!(matrix.get_probability(&gram(&["A"]), &gram(&["B"])), 1.0);
		assert_eq!(matrix.get_probability(&gram(&["B"]), &gram(&["A"])), 1.0);
		assert_eq!(matrix.get_probability(&gram(&["A"]), &gram(&["A"])), 0.0);
	}

	#[test]
	fn counts_are_row_normalized() {
		let mut body = TextBody::from_text("the cat. the dog. the cat.");
		let matrix = construct_markov_matrix(&mut body, 1).unwrap();

		let the = gram(&["the"]);
		assert!((matrix.get_probability(&the, &gram(&["cat"])) - 2.0 / 3.0).abs() < 1e-12);
		assert!((matrix.get_probability(&the, &gram(&["dog"])) - 1.0 / 3.0).abs() < 1e-12);
		assert_rows_sum_to_one(&matrix);
	}

	#[test]
	fn bigram_window_slides_one_word() {
		let mut body = TextBody::from_text("a b c a b d");
		let matrix = construct_markov_matrix(&mut body, 2).unwrap();

		let ab = gram(&["a", "b"]);
		assert_eq!(matrix.row_count(), 3);
		assert_eq!(matrix.get_probability(&ab, &gram(&["b", "c"])), 0.5);
		assert_eq!(matrix.get_probability(&ab, &gram(&["b", "d"])), 0.5);
		assert_eq!(matrix.get_probability(&gram(&["c", "a"]), &ab), 1.0);
		assert_rows_sum_to_one(&matrix);
	}

	#[test]
	fn rows_sum_to_one_for_every_size() {
		let text = "It was the best of times, it was the worst of times,\n\
			it was the age of wisdom, it was the age of foolishness,\n\
			it was the epoch of belief, it was the epoch of incredulity.";
		let mut body = TextBody::from_text(text);
		for n in 1..=4 {
			let matrix = construct_markov_matrix(&mut body, n).unwrap();
			assert!(!matrix.is_empty());
			assert_rows_sum_to_one(&matrix);
		}
	}

	#[test]
	fn too_few_words_give_an_empty_matrix() {
		let mut body = TextBody::from_text("only three words");
		assert!(construct_markov_matrix(&mut body, 3).unwrap().is_empty());
		assert_eq!(construct_markov_matrix(&mut body, 2).unwrap().row_count(), 1);
		assert!(construct_markov_matrix(&mut TextBody::from_text(""), 1).unwrap().is_empty());
	}

	#[test]
	fn zero_size_is_rejected() {
		let mut body = TextBody::from_text("a b c");
		assert!(matches!(construct_markov_matrix(&mut body, 0), Err(Error::InvalidNGramSize(0))));
	}

	#[test]
	fn construction_leaves_line_cursor_alone() {
		let mut body = TextBody::from_text("a b\nc d");
		assert_eq!(body.next_line().unwrap(), "a b");
		construct_markov_matrix(&mut body, 1).unwrap();
		assert_eq!(body.next_line().unwrap(), "c d");
	}

	#[test]
	fn set_and_get_probability() {
		let mut matrix = MarkovMatrix::new();
		let (a, b, c) = (gram(&["a"]), gram(&["b"]), gram(&["c"]));

		assert_eq!(matrix.get_probability(&a, &b), 0.0);
		matrix.set_probability(&a, &b, 0.25);
		matrix.set_probability(&a, &c, 0.75);
		matrix.set_probability(&a, &b, 0.5);

		assert_eq!(matrix.row_count(), 1);
		assert_eq!(matrix.get_probability(&a, &b), 0.5);
		assert_eq!(matrix.row_total(&a), 1.25);
		assert_eq!(matrix.get_probability(&b, &a), 0.0);
		assert!(matrix.row(&b).is_none());
	}

	#[test]
	fn transitions_are_decoded_and_sorted() {
		let mut body = TextBody::from_text("A B A B");
		let transitions = construct_markov_matrix(&mut body, 1).unwrap().transitions().unwrap();
		assert_eq!(
			transitions,
			vec![(gram(&["A"]), gram(&["B"]), 1.0), (gram(&["B"]), gram(&["A"]), 1.0)]
		);
	}

	#[test]
	fn foreign_keys_fail_to_decode() {
		let mut map = HashMap::new();
		map.insert("not-a-key".to_owned(), Row::from([("1.a".to_owned(), 1.0)]));
		let matrix = MarkovMatrix { matrix: map };
		assert!(matches!(matrix.transitions(), Err(Error::InvalidEncoding(_))));
	}

	#[test]
	fn binary_encoding_preserves_weights() {
		let mut body = TextBody::from_text("the cat. the dog. the cat.");
		let matrix = construct_markov_matrix(&mut body, 1).unwrap();
		let bytes = matrix.to_bytes().unwrap();
		assert_eq!(MarkovMatrix::from_bytes(&bytes).unwrap(), matrix);
	}

	#[test]
	fn export_is_a_nested_map() {
		let mut matrix = MarkovMatrix::new();
		matrix.set_probability(&gram(&["a", "b"]), &gram(&["b", "c"]), 1.0);
		let map = matrix.into_map();
		assert_eq!(map["2.a.b"]["2.b.c"], 1.0);
	}

	#[test]
	fn sampling_follows_single_transitions() {
		let mut body = TextBody::from_text("one two three four");
		let matrix = construct_markov_matrix(&mut body, 1).unwrap();

		assert_eq!(matrix.sample_next(&gram(&["one"])).unwrap(), Some(gram(&["two"])));
		assert_eq!(matrix.sample_next(&gram(&["four"])).unwrap(), None);
		assert_eq!(
			matrix.generate(&gram(&["one"]), 10).unwrap(),
			vec!["one", "two", "three", "four"]
		);
		assert_eq!(matrix.generate(&gram(&["one"]), 2).unwrap(), vec!["one", "two"]);
	}

	#[test]
	fn sampling_only_returns_observed_columns() {
		let mut body = TextBody::from_text("x a x b x c x");
		let matrix = construct_markov_matrix(&mut body, 1).unwrap();
		let x = gram(&["x"]);
		for _ in 0..50 {
			let next = matrix.sample_next(&x).unwrap().unwrap();
			assert!(matrix.get_probability(&x, &next) > 0.0);
		}
	}

	#[test]
	fn sampling_skips_zero_weights() {
		let mut matrix = MarkovMatrix::new();
		let (a, b) = (gram(&["a"]), gram(&["b"]));
		matrix.set_probability(&a, &b, 0.0);
		assert_eq!(matrix.sample_next(&a).unwrap(), None);
	}
}
