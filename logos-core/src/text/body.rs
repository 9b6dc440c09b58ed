use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, Result};
use crate::io::{read_file, read_lines};
use super::tokenizer::split_words;

/// Capability set of a traversable publication body.
///
/// A body is read at two granularities through two independent cursors:
/// - the line cursor (`has_next_line` / `next_line` / `reset_line_cursor`)
/// - the word cursor (`has_next_word` / `next_word` / `reset_word_cursor`)
///
/// Advancing or resetting one cursor never moves the other, so a consumer
/// can re-scan words after a line scan (and vice versa) without interference.
///
/// # Errors
/// `next_line` / `next_word` return `Error::CursorExhausted` when called on
/// an exhausted cursor. This is a contract violation by the caller.
pub trait PublicationBody {
	/// Returns `true` if the line cursor has not reached the end.
	fn has_next_line(&self) -> bool;

	/// Returns the current line (original text) and advances the line cursor.
	fn next_line(&mut self) -> Result<String>;

	/// Returns `true` if at least one more word is reachable by the word cursor.
	fn has_next_word(&self) -> bool;

	/// Returns the current word and advances the word cursor,
	/// moving to the next line once the current one is exhausted.
	fn next_word(&mut self) -> Result<String>;

	/// Moves the line cursor back to the first line.
	fn reset_line_cursor(&mut self);

	/// Moves the word cursor back to the first word.
	fn reset_word_cursor(&mut self);

	/// Resets both cursors.
	fn reset(&mut self) {
		self.reset_line_cursor();
		self.reset_word_cursor();
	}
}

/// In-memory publication body built from tokenized lines.
///
/// # Invariants
/// - `lines` and `words` have the same length and are index-aligned
/// - Every retained line has at least one word
/// - `line_cursor` is in `[0, lines.len()]`
/// - `word_cursor` is either `(lines.len(), 0)` (exhausted) or addresses an existing word
#[derive(Clone, Debug, Default)]
pub struct TextBody {
	/// Original text of every retained line.
	lines: Vec<String>,
	/// Words of every retained line, aligned with `lines`.
	words: Vec<Vec<String>>,
	/// Index of the next line returned by `next_line`.
	line_cursor: usize,
	/// (line index, word index) of the next word returned by `next_word`.
	word_cursor: (usize, usize),
}

impl TextBody {
	/// Builds a body from a sequence of lines.
	///
	/// Lines without any word (blank, punctuation or whitespace only)
	/// are dropped. This is the only place where lines are filtered.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut body = Self::default();

		for line in lines {
			let line = line.into();
			let words = split_words(&line);
			if words.is_empty() {
				continue;
			}
			body.lines.push(line);
			body.words.push(words);
		}

		log::debug!(
			"Built publication body: {} lines, {} words",
			body.line_count(),
			body.word_count_hint()
		);
		body
	}

	/// Builds a body from a text, split on `\n` / `\r\n`.
	pub fn from_text(text: &str) -> Self {
		Self::from_lines(text.lines())
	}

	/// Builds a body from every line of a buffered reader.
	///
	/// # Errors
	/// Returns `Error::Io` if the reader fails or yields invalid UTF-8.
	pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
		Ok(Self::from_lines(read_lines(reader)?))
	}

	/// Builds a body from a text file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		Ok(Self::from_lines(read_file(path)?))
	}

	/// Number of retained (non-empty) lines.
	pub fn line_count(&self) -> usize {
		self.lines.len()
	}

	/// Total number of cached words, without moving any cursor.
	pub fn word_count_hint(&self) -> usize {
		self.words.iter().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	/// Retained lines, in order.
	pub fn lines(&self) -> &[String] {
		&self.lines
	}
}

impl PublicationBody for TextBody {
	fn has_next_line(&self) -> bool {
		self.line_cursor < self.lines.len()
	}

	fn next_line(&mut self) -> Result<String> {
		let line = self
			.lines
			.get(self.line_cursor)
			.ok_or_else(Error::line_cursor_exhausted)?
			.clone();
		self.line_cursor += 1;
		Ok(line)
	}

	fn has_next_word(&self) -> bool {
		let (line, word) = self.word_cursor;
		match self.words.get(line) {
			Some(words) => word < words.len() || line + 1 < self.words.len(),
			None => false,
		}
	}

	fn next_word(&mut self) -> Result<String> {
		let (line, index) = self.word_cursor;
		let words = self.words.get(line).ok_or_else(Error::word_cursor_exhausted)?;
		let word = words.get(index).ok_or_else(Error::word_cursor_exhausted)?.clone();

		self.word_cursor = if index + 1 >= words.len() {
			(line + 1, 0)
		} else {
			(line, index + 1)
		};
		Ok(word)
	}

	fn reset_line_cursor(&mut self) {
		self.line_cursor = 0;
	}

	fn reset_word_cursor(&mut self) {
		self.word_cursor = (0, 0);
	}
}
