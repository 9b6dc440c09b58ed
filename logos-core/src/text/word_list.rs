use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// An unordered, immutable set of words used for keyword matching.
///
/// Membership is exact: no case folding or normalization is applied,
/// so `"Rust"` and `"rust"` are different words.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
	words: HashSet<String>,
}

impl WordList {
	/// Builds a word list from a sequence of words, dropping duplicates.
	pub fn new<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { words: words.into_iter().map(Into::into).collect() }
	}

	/// Parses a comma and/or whitespace separated list (`"a, b c"`).
	///
	/// Empty entries are ignored.
	pub fn parse(input: &str) -> Self {
		Self::new(
			input
				.split(|c: char| c == ',' || c.is_whitespace())
				.filter(|word| !word.is_empty()),
		)
	}

	/// Returns `true` if `word` is in the list.
	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

impl<S: Into<String>> FromIterator<S> for WordList {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn duplicates_are_merged() {
		let list = WordList::new(["the", "body", "the"]);
		assert_eq!(list.len(), 2);
		assert!(list.contains("the"));
		assert!(list.contains("body"));
		assert!(!list.contains("paragraph"));
	}

	#[test]
	fn membership_is_case_sensitive() {
		let list: WordList = ["Rust"].into_iter().collect();
		assert!(list.contains("Rust"));
		assert!(!list.contains("rust"));
	}

	#[test]
	fn parse_accepts_commas_and_spaces() {
		let list = WordList::parse("alpha, beta  gamma,,delta");
		assert_eq!(list, WordList::new(["alpha", "beta", "gamma", "delta"]));
		assert!(WordList::parse(" , ").is_empty());
	}
}
