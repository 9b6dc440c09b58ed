use thiserror::Error;

/// Result type alias using the crate `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by publication bodies, n-grams and matrices.
#[derive(Error, Debug)]
pub enum Error {
	/// A cursor was advanced past its end.
	///
	/// This is a caller contract violation: `has_next_line` / `has_next_word`
	/// must be checked before advancing.
	#[error("{cursor} cursor exhausted")]
	CursorExhausted { cursor: &'static str },

	/// N-gram size must be strictly positive.
	#[error("invalid n-gram size: {0} (must be >= 1)")]
	InvalidNGramSize(usize),

	/// N-gram words cannot be encoded reversibly.
	#[error("invalid n-gram: {0}")]
	InvalidNGram(String),

	/// A canonical n-gram encoding could not be decoded.
	#[error("invalid n-gram encoding: {0}")]
	InvalidEncoding(String),

	/// I/O error while reading lines from an external source.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// Binary (postcard) encoding error.
	#[error("encoding error: {0}")]
	Encoding(#[from] postcard::Error),
}

impl Error {
	/// Creates a `CursorExhausted` error for the line cursor.
	pub fn line_cursor_exhausted() -> Self {
		Error::CursorExhausted { cursor: "line" }
	}

	/// Creates a `CursorExhausted` error for the word cursor.
	pub fn word_cursor_exhausted() -> Self {
		Error::CursorExhausted { cursor: "word" }
	}
}
