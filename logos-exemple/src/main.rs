use logos_core::analysis::{Analysis, AnalysisInput};
use logos_core::metrics;
use logos_core::model::{construct_markov_matrix, MarkovMatrix, NGram};
use logos_core::publication::Publication;
use logos_core::text::{PublicationBody, TextBody, WordList};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows what the library does
    env_logger::init();

    // Load a publication from "./data/article.txt" if it exists,
    // otherwise use a built-in text. Blank lines are dropped.
    let body = match TextBody::from_file("./data/article.txt") {
        Ok(body) => body,
        Err(_) => TextBody::from_text(
            "It was the best of times, it was the worst of times.\n\
             \n\
             It was the age of wisdom, it was the age of foolishness.\n\
             It was the epoch of belief, it was the epoch of incredulity.",
        ),
    };
    let mut publication = Publication::new(4.2, "dickens", body);
    println!("Publication by {} (score {})", publication.author(), publication.score());

    // The body has two independent cursors: lines ...
    let text = publication.text_mut();
    while text.has_next_line() {
        println!("> {}", text.next_line()?);
    }

    // ... and words. Metrics reset the cursor they use before scanning.
    println!("Words: {}", metrics::word_count(text)?);
    println!("Average words per line: {:.2}", metrics::average_words_per_line(text)?);
    println!("Average word length: {:.2}", metrics::average_word_length(text)?);
    println!("Words longer than 5 characters: {}", metrics::words_longer_than(text, 5)?);

    // Keyword matching is case sensitive: "It" and "it" are different words
    let keywords = WordList::new(["it", "times"]);
    println!("Keyword matches: {}", metrics::words_in(text, &keywords)?);

    // Build a bigram Markov matrix and print its transitions
    let matrix = construct_markov_matrix(text, 2)?;
    for (from, to, probability) in matrix.transitions()? {
        println!("{} -> {}: {:.2}", from, to, probability);
    }

    // The matrix can be exported compactly and restored
    let bytes = matrix.to_bytes()?;
    let restored = MarkovMatrix::from_bytes(&bytes)?;
    println!("Binary export: {} bytes, {} rows", bytes.len(), restored.row_count());

    // Walk the chain from a starting bigram
    let start = NGram::new(["it", "was"])?;
    println!("Generated: {}", restored.generate(&start, 12)?.join(" "));

    // Or run everything at once
    let mut input = AnalysisInput::default();
    input.set_ngram_size(1)?;
    input.keywords = keywords;
    let analysis = Analysis::run(publication.text_mut(), &input)?;
    println!(
        "Analysis: {} lines, {} words, {} long words, {} matrix rows",
        analysis.line_count,
        analysis.word_count,
        analysis.long_words,
        analysis.markov_matrix.row_count()
    );

    // An empty publication has no average (NaN) and an empty matrix
    let mut empty = TextBody::from_text("\n...\n");
    println!("Empty average: {}", metrics::average_word_length(&mut empty)?);

    Ok(())
}
