//! Quality metrics computed over any `PublicationBody`.
//!
//! Every metric resets the cursor it scans before starting and leaves it
//! exhausted; the other cursor is not touched.
//!
//! Averages over an empty body return `f64::NAN`: there is no data to
//! average, and callers must treat NaN as "no data".

use crate::error::Result;
use crate::text::{split_words, word_length, PublicationBody, WordList};

/// Calls `visit` with every word of the body, from the first one.
fn for_each_word<B, F>(body: &mut B, mut visit: F) -> Result<()>
where
	B: PublicationBody + ?Sized,
	F: FnMut(&str),
{
	body.reset_word_cursor();
	while body.has_next_word() {
		let word = body.next_word()?;
		visit(&word);
	}
	Ok(())
}

/// Total number of words.
pub fn word_count<B: PublicationBody + ?Sized>(body: &mut B) -> Result<usize> {
	let mut count = 0;
	for_each_word(body, |_| count += 1)?;
	Ok(count)
}

/// Mean number of words per line.
///
/// Each line is re-tokenized from its original text.
/// Returns NaN when the body has no line.
pub fn average_words_per_line<B: PublicationBody + ?Sized>(body: &mut B) -> Result<f64> {
	let mut sum = 0usize;
	let mut count = 0usize;

	body.reset_line_cursor();
	while body.has_next_line() {
		let line = body.next_line()?;
		sum += split_words(&line).len();
		count += 1;
	}

	Ok(sum as f64 / count as f64)
}

/// Mean word length, in grapheme clusters.
///
/// Returns NaN when the body has no word.
pub fn average_word_length<B: PublicationBody + ?Sized>(body: &mut B) -> Result<f64> {
	let mut sum = 0usize;
	let mut count = 0usize;
	for_each_word(body, |word| {
		sum += word_length(word);
		count += 1;
	})?;

	Ok(sum as f64 / count as f64)
}

/// Number of words strictly longer than `threshold` grapheme clusters.
pub fn words_longer_than<B: PublicationBody + ?Sized>(body: &mut B, threshold: usize) -> Result<usize> {
	let mut count = 0;
	for_each_word(body, |word| {
		if word_length(word) > threshold {
			count += 1;
		}
	})?;
	Ok(count)
}

/// Number of words that belong to `list`.
pub fn words_in<B: PublicationBody + ?Sized>(body: &mut B, list: &WordList) -> Result<usize> {
	let mut count = 0;
	for_each_word(body, |word| {
		if list.contains(word) {
			count += 1;
		}
	})?;
	Ok(count)
}
