use unicode_segmentation::UnicodeSegmentation;

/// Returns `true` if the grapheme cluster `grapheme` separates two words.
///
/// Only the base character of the cluster is classified: a cluster is a
/// separator iff its base is whitespace, punctuation or a symbol (`$`, `+`).
/// Combining marks and Indic viramas belong to the cluster of the letter
/// they modify, so they never split a word.
fn is_separator(grapheme: &str) -> bool {
	match grapheme.chars().next() {
		Some(base) => !base.is_alphanumeric(),
		None => true,
	}
}

/// Splits a line into its words, discarding punctuation and whitespace.
///
/// The line is walked grapheme by grapheme; runs of separators are
/// collapsed, so empty tokens are never produced.
///
/// Example:
/// `"hell0 df .$34"` → `["hell0", "df", "34"]`
pub fn split_words(line: &str) -> Vec<String> {
	let mut words = Vec::new();
	let mut start: Option<usize> = None;

	for (index, grapheme) in line.grapheme_indices(true) {
		match (is_separator(grapheme), start) {
			(true, Some(begin)) => {
				words.push(line[begin..index].to_owned());
				start = None;
			}
			(false, None) => start = Some(index),
			_ => (),
		}
	}
	if let Some(begin) = start {
		words.push(line[begin..].to_owned());
	}

	words
}

/// Length of a word in user-perceived characters (extended grapheme clusters).
///
/// `"cafe\u{301}"` (decomposed) and `"café"` (precomposed) both have 4.
pub fn word_length(word: &str) -> usize {
	word.graphemes(true).count()
}
