use crate::error::{AnalysisError, Result};
use crate::frequency::rank_by_count;

/// Largest accepted exclusive upper bound for an n-gram range. Sizes of 10
/// and above are rejected as a sanity bound.
pub const MAX_NGRAM_END: usize = 10;

/// Checks n-gram range bounds: `n_start >= 1` and `n_end <= 10`. The range
/// is half-open, so the sizes produced are `n_start..n_end`.
pub fn validate_ngram_range(n_start: usize, n_end: usize) -> Result<()> {
    if n_start < 1 || n_end > MAX_NGRAM_END {
        return Err(AnalysisError::InvalidNgramRange { n_start, n_end });
    }
    Ok(())
}

///Generates all n-grams of width `n` for a word sequence by sliding a
///window with step 1, joining each window with a single space. Fewer words
///than `n` yields an empty sequence, not an error.
/// # Example
/// ```
/// use zipf_analysis::generate_ngrams;
/// let words = vec!["a".to_string(), "b".to_string(), "a".to_string(), "b".to_string()];
/// let grams = generate_ngrams(&words, 2);
/// assert_eq!(grams, vec!["a b", "b a", "a b"]);
/// ```
pub fn generate_ngrams(words: &[String], n: usize) -> Vec<String> {
    if n == 0 || words.len() < n {
        return Vec::new();
    }
    words.windows(n).map(|window| window.join(" ")).collect()
}

/// Calculates one n-gram frequency table per size in the half-open range
/// `[n_start, n_end)` — the upper bound is exclusive, so the default range
/// 2..4 reports bigrams and trigrams. Each table is sorted by descending
/// count with ties in encounter order, same policy as the word ranking.
///
/// Fails with [`AnalysisError::InvalidNgramRange`] before building any
/// table if `n_start < 1` or `n_end > 10`.
pub fn calculate_ngrams(
    words: &[String],
    n_start: usize,
    n_end: usize,
) -> Result<Vec<Vec<(String, u64)>>> {
    validate_ngram_range(n_start, n_end)?;

    let mut tables = Vec::new();
    for n in n_start..n_end {
        let grams = generate_ngrams(words, n);
        tables.push(rank_by_count(&grams));
    }
    Ok(tables)
}
