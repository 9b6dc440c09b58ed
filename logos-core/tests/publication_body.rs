use logos_core::metrics::{average_word_length, word_count, words_in};
use logos_core::model::{construct_markov_matrix, NGram};
use logos_core::text::{PublicationBody, TextBody, WordList};
use logos_core::{Error, Result};

fn count_lines_words<B: PublicationBody>(body: &mut B) -> (usize, usize) {
	body.reset();
	let mut lines = 0;
	while body.has_next_line() {
		body.next_line().expect("next line");
		lines += 1;
	}

	let mut words = 0;
	while body.has_next_word() {
		body.next_word().expect("next word");
		words += 1;
	}

	(lines, words)
}

#[test]
fn fixtures_line_and_word_counts() {
	let fixtures = [
		("This is the body.\nOf the paragraph", 2, 7),
		("A\nB\nC\nD\nE\nF", 6, 6),
		("hell0 df .$34\n\n\n", 1, 3),
	];

	for (text, num_lines, num_words) in fixtures {
		let mut body = TextBody::from_text(text);
		assert_eq!(count_lines_words(&mut body), (num_lines, num_words), "fixture {text:?}");
		assert_eq!(body.word_count_hint(), num_words);
	}
}

#[test]
fn interleaved_scans_do_not_disturb_each_other() {
	let mut body = TextBody::from_text("one two\nthree\nfour five six");

	assert_eq!(body.next_line().unwrap(), "one two");
	assert_eq!(body.next_word().unwrap(), "one");

	// A full word scan in the middle of a line scan.
	assert_eq!(word_count(&mut body).unwrap(), 6);
	assert_eq!(body.next_line().unwrap(), "three");

	body.reset_word_cursor();
	assert_eq!(body.next_word().unwrap(), "one");
	assert_eq!(body.next_line().unwrap(), "four five six");
	assert!(!body.has_next_line());
	assert!(body.has_next_word());
}

#[test]
fn markov_matrix_over_alternating_words() {
	let mut body = TextBody::from_lines(["A", "B", "A", "B"]);
	let matrix = construct_markov_matrix(&mut body, 1).unwrap();

	let a = NGram::new(["A"]).unwrap();
	let b = NGram::new(["B"]).unwrap();
	assert_eq!(matrix.row_count(), 2);
	assert_eq!(matrix.get_probability(&a, &b), 1.0);
	assert_eq!(matrix.get_probability(&b, &a), 1.0);
}

/// Body generated on the fly: `lines` lines of `width` numbered words.
struct GeneratedBody {
	lines: usize,
	width: usize,
	line_cursor: usize,
	word_cursor: usize,
}

impl GeneratedBody {
	fn new(lines: usize, width: usize) -> Self {
		Self { lines, width, line_cursor: 0, word_cursor: 0 }
	}

	fn word(&self, index: usize) -> String {
		format!("w{}", index % self.width)
	}
}

impl PublicationBody for GeneratedBody {
	fn has_next_line(&self) -> bool {
		self.line_cursor < self.lines
	}

	fn next_line(&mut self) -> Result<String> {
		if !self.has_next_line() {
			return Err(Error::line_cursor_exhausted());
		}
		let start = self.line_cursor * self.width;
		self.line_cursor += 1;
		Ok((start..start + self.width).map(|i| self.word(i)).collect::<Vec<_>>().join(" "))
	}

	fn has_next_word(&self) -> bool {
		self.word_cursor < self.lines * self.width
	}

	fn next_word(&mut self) -> Result<String> {
		if !self.has_next_word() {
			return Err(Error::word_cursor_exhausted());
		}
		self.word_cursor += 1;
		Ok(self.word(self.word_cursor - 1))
	}

	fn reset_line_cursor(&mut self) {
		self.line_cursor = 0;
	}

	fn reset_word_cursor(&mut self) {
		self.word_cursor = 0;
	}
}

#[test]
fn metrics_work_on_any_body() {
	let mut body = GeneratedBody::new(4, 3);
	assert_eq!(count_lines_words(&mut body), (4, 12));
	assert_eq!(word_count(&mut body).unwrap(), 12);
	assert_eq!(average_word_length(&mut body).unwrap(), 2.0);
	assert_eq!(words_in(&mut body, &WordList::new(["w0"])).unwrap(), 4);

	// w0 → w1 → w2 → w0 ...: every row has a single certain transition
	let matrix = construct_markov_matrix(&mut body, 2).unwrap();
	assert_eq!(matrix.row_count(), 3);
	let from = NGram::new(["w0", "w1"]).unwrap();
	let to = NGram::new(["w1", "w2"]).unwrap();
	assert_eq!(matrix.get_probability(&from, &to), 1.0);
}

#[test]
fn exhausted_body_reports_the_cursor() {
	let mut body = GeneratedBody::new(1, 1);
	body.next_word().unwrap();
	let err = body.next_word().unwrap_err();
	assert_eq!(err.to_string(), "word cursor exhausted");
}
