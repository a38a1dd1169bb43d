#![forbid(unsafe_code)]
//! # Zipf Analysis
//!
//! Zipf's-Law style statistical analysis over a text corpus: word
//! rank/frequency distribution, N-gram frequency tables, and word-adjacency
//! ("collocation") maps, with console reports and file export.
//!
//! A [`Text`] is acquired once (local file, URL, or inline content) and
//! tokenized into an immutable word sequence; [`analyze`] then runs the
//! three analyzers over it and bundles the results into an
//! [`AnalysisReport`] for printing and persistence.

pub mod collocation;
pub mod error;
pub mod frequency;
pub mod ngram;
pub mod report;
pub mod text;
pub mod tokenize;

pub use collocation::{build_collocations, distinct_successor_count};
pub use error::{AnalysisError, Result};
pub use frequency::{ZipfDistribution, compute_frequencies, rank_by_count};
pub use ngram::{MAX_NGRAM_END, calculate_ngrams, generate_ngrams, validate_ngram_range};
pub use report::{
    AnalysisReport, ExportFormat, ZipfWriter, print_collocations_result, print_ngrams_result,
};
pub use text::{Text, TextSource};
pub use tokenize::tokenize;

use log::debug;

/// Runs all three analyzers over a text's word sequence and bundles the
/// results. N-gram sizes cover the half-open range `[n_start, n_end)`.
///
/// The range is validated up front, so no analyzer runs on invalid input.
/// The analyzers are independent and read-only over the shared sequence;
/// they are fanned out with `rayon::join`.
pub fn analyze(text: &Text, n_start: usize, n_end: usize) -> Result<AnalysisReport> {
    validate_ngram_range(n_start, n_end)?;

    let words = text.words();
    debug!("analyzing \"{}\": {} words", text.name(), words.len());

    let (distribution, (ngrams, collocations)) = rayon::join(
        || compute_frequencies(words),
        || {
            rayon::join(
                || calculate_ngrams(words, n_start, n_end),
                || build_collocations(words),
            )
        },
    );

    Ok(AnalysisReport {
        text_name: text.name().to_string(),
        text_author: text.author().to_string(),
        n_start,
        n_end,
        distribution,
        ngrams: ngrams?,
        collocations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_bundles_all_three_results() {
        let text = Text::from_content("Phrase", Some("Nobody"), "a b a b").unwrap();
        let report = analyze(&text, 2, 4).unwrap();

        assert_eq!(report.distribution.ranks, vec![1, 2]);
        assert_eq!(report.distribution.frequencies, vec![2, 2]);
        assert_eq!(report.ngrams.len(), 2);
        assert_eq!(report.ngrams[0][0], ("a b".to_string(), 2));
        assert_eq!(report.collocations.len(), 2);
    }

    #[test]
    fn analyze_rejects_bad_range_before_running() {
        let text = Text::from_content("Phrase", None, "a b c").unwrap();
        assert!(matches!(
            analyze(&text, 0, 4),
            Err(AnalysisError::InvalidNgramRange { .. })
        ));
        assert!(matches!(
            analyze(&text, 2, 11),
            Err(AnalysisError::InvalidNgramRange { .. })
        ));
    }

    #[test]
    fn analyze_is_idempotent() {
        let text = Text::from_content("Phrase", None, "to be or not to be").unwrap();
        let first = analyze(&text, 2, 4).unwrap();
        let second = analyze(&text, 2, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_text_yields_empty_results() {
        let text = Text::from_content("Empty", None, "# only a comment\n").unwrap();
        let report = analyze(&text, 2, 4).unwrap();
        assert!(report.distribution.is_empty());
        assert!(report.ngrams.iter().all(|t| t.is_empty()));
        assert!(report.collocations.is_empty());
    }
}
