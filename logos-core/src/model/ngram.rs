use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Delimiter of the canonical encoding.
///
/// A punctuation character, so it never appears inside a tokenizer word.
pub const DELIMITER: char = '.';

/// An ordered, fixed-size sequence of consecutive words.
///
/// # Invariants
/// - `words` is never empty (size >= 1)
/// - No word is empty or contains `DELIMITER`, which keeps the
///   canonical encoding reversible
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NGram {
	words: Vec<String>,
}

impl NGram {
	/// Creates an n-gram whose size is the number of words.
	///
	/// # Errors
	/// - `InvalidNGramSize(0)` if `words` is empty
	/// - `InvalidNGram` if a word is empty or contains the delimiter
	pub fn new<I, S>(words: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let words: Vec<String> = words.into_iter().map(Into::into).collect();
		if words.is_empty() {
			return Err(Error::InvalidNGramSize(0));
		}
		if let Some(word) = words.iter().find(|w| w.is_empty() || w.contains(DELIMITER)) {
			return Err(Error::InvalidNGram(format!(
				"word {:?} is empty or contains '{}'",
				word, DELIMITER
			)));
		}
		Ok(Self { words })
	}

	/// Number of words.
	pub fn size(&self) -> usize {
		self.words.len()
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Canonical encoding: the size followed by the words, joined by `DELIMITER`.
	///
	/// Example: `["the", "body"]` → `"2.the.body"`
	pub fn encode(&self) -> String {
		let mut key = self.size().to_string();
		for word in &self.words {
			key.push(DELIMITER);
			key.push_str(word);
		}
		key
	}

	/// Decodes a canonical encoding back into an n-gram.
	///
	/// # Errors
	/// Returns `InvalidEncoding` if the size prefix is missing, is not a
	/// number, or does not match the number of words.
	pub fn decode(key: &str) -> Result<Self> {
		let mut parts = key.split(DELIMITER);
		let size: usize = parts
			.next()
			.and_then(|size| size.parse().ok())
			.ok_or_else(|| Error::InvalidEncoding(format!("missing size prefix in {:?}", key)))?;

		let words: Vec<&str> = parts.collect();
		if words.len() != size {
			return Err(Error::InvalidEncoding(format!(
				"{:?} declares {} words but holds {}",
				key,
				size,
				words.len()
			)));
		}

		Self::new(words).map_err(|e| Error::InvalidEncoding(format!("{:?}: {}", key, e)))
	}
}

impl fmt::Display for NGram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.encode())
	}
}

impl FromStr for NGram {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::decode(s)
	}
}
