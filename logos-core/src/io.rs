use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::fs;

/// Reads every line of a buffered reader into a `Vec<String>`.
///
/// - Splits on `\n` / `\r\n` (line terminators are not kept)
/// - Stops at the first I/O or UTF-8 decoding error
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
	reader.lines().collect()
}

/// Reads a text file and returns all its lines as a `Vec<String>`.
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	read_lines(BufReader::new(File::open(filename)?))
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/article.txt"` → `"article"`
/// - `"article.txt"` → `"article"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}
