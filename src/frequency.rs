use std::collections::HashMap;

use serde::Serialize;

/// Rank/frequency pairing over the distinct words of a text.
///
/// Ranks are a dense `1..=N` assigned in descending frequency order, so
/// `frequencies` is non-increasing and `ranks.len() == frequencies.len()`.
/// Rows pair positionally: `frequencies[i]` belongs to rank `ranks[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZipfDistribution {
    pub ranks: Vec<usize>,
    pub frequencies: Vec<u64>,
}

impl ZipfDistribution {
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

///Counts each distinct item in `items` and sorts the result into a
///Vec<(String, u64)> by descending count. Ties keep first-encounter order,
///so the result is deterministic regardless of hash map iteration order.
/// # Example
/// ```
/// use zipf_analysis::rank_by_count;
/// let items = vec!["two".to_string(), "three".to_string(), "two".to_string(), "three".to_string(), "three".to_string()];
/// let counted = rank_by_count(&items);
/// let expected = vec![("three".to_string(), 3), ("two".to_string(), 2)];
/// assert_eq!(counted, expected);
/// ```
pub fn rank_by_count(items: &[String]) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();
    for item in items {
        let first_seen = counts.len();
        counts.entry(item.as_str()).or_insert((0, first_seen)).0 += 1;
    }

    let mut sorted: Vec<(&str, u64, usize)> = counts
        .into_iter()
        .map(|(item, (count, first_seen))| (item, count, first_seen))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    sorted
        .into_iter()
        .map(|(item, count, _)| (item.to_string(), count))
        .collect()
}

/// Calculates Zipf's Law properties for a word sequence: occurrence counts
/// of all distinct words, sorted descending, paired with ranks `1..=N`.
/// Only the counts are kept in the output, not the words themselves.
/// An empty word sequence yields an empty distribution.
pub fn compute_frequencies(words: &[String]) -> ZipfDistribution {
    let frequencies: Vec<u64> = rank_by_count(words)
        .into_iter()
        .map(|(_, count)| count)
        .collect();
    let ranks = (1..=frequencies.len()).collect();

    ZipfDistribution { ranks, frequencies }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn ranks_follow_descending_frequency() {
        let w = words(&["a", "a", "b"]);
        let dist = compute_frequencies(&w);
        assert_eq!(dist.ranks, vec![1, 2]);
        assert_eq!(dist.frequencies, vec![2, 1]);
    }

    #[test]
    fn ties_keep_first_encounter_order() {
        let w = words(&["b", "a", "a", "b", "c"]);
        let counted = rank_by_count(&w);
        let expected = vec![
            ("b".to_string(), 2),
            ("a".to_string(), 2),
            ("c".to_string(), 1),
        ];
        assert_eq!(counted, expected);
    }

    #[test]
    fn empty_input_yields_empty_distribution() {
        let dist = compute_frequencies(&[]);
        assert!(dist.is_empty());
        assert!(dist.frequencies.is_empty());
    }

    #[test]
    fn ranks_are_dense_and_frequencies_non_increasing() {
        let w = words(&["e", "d", "e", "c", "d", "e", "b", "a", "a"]);
        let dist = compute_frequencies(&w);
        assert_eq!(dist.ranks, (1..=dist.len()).collect::<Vec<_>>());
        assert!(dist.frequencies.windows(2).all(|p| p[0] >= p[1]));
    }

    #[test]
    fn recomputation_is_idempotent() {
        let w = words(&["x", "y", "x", "z", "y", "x"]);
        assert_eq!(compute_frequencies(&w), compute_frequencies(&w));
    }
}
