use crate::text::PublicationBody;

/// A scored, authored text artifact wrapping a traversable body.
///
/// The score and author are carried as-is for front ends; analysis only
/// ever reads the body.
#[derive(Clone, Debug)]
pub struct Publication<B: PublicationBody> {
	score: f64,
	author: String,
	text: B,
}

impl<B: PublicationBody> Publication<B> {
	pub fn new(score: f64, author: &str, text: B) -> Self {
		Self { score, author: author.to_owned(), text }
	}

	pub fn score(&self) -> f64 {
		self.score
	}

	pub fn author(&self) -> &str {
		&self.author
	}

	pub fn text(&self) -> &B {
		&self.text
	}

	/// Mutable access to the body, required to move its cursors.
	pub fn text_mut(&mut self) -> &mut B {
		&mut self.text
	}

	/// Consumes the publication and returns its body.
	pub fn into_text(self) -> B {
		self.text
	}
}
