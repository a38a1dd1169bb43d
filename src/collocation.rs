use std::collections::{HashMap, HashSet};

/// Builds the collocation map for a word sequence: every distinct word maps
/// to the list of words observed immediately after any of its occurrences.
///
/// Keys appear in first-occurrence order, so output is deterministic. Every
/// distinct word gets an entry, including words that never precede another
/// (their successor list stays empty). Successor lists keep duplicates; use
/// [`distinct_successor_count`] for the deduplicated size.
/// # Example
/// ```
/// use zipf_analysis::build_collocations;
/// let words = vec!["a".to_string(), "b".to_string(), "a".to_string(), "c".to_string()];
/// let map = build_collocations(&words);
/// assert_eq!(map[0], ("a".to_string(), vec!["b".to_string(), "c".to_string()]));
/// assert_eq!(map[1], ("b".to_string(), vec!["a".to_string()]));
/// assert_eq!(map[2].0, "c");
/// assert!(map[2].1.is_empty());
/// ```
pub fn build_collocations(words: &[String]) -> Vec<(String, Vec<String>)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, Vec<String>)> = Vec::new();

    for word in words {
        if !slots.contains_key(word.as_str()) {
            slots.insert(word.as_str(), entries.len());
            entries.push((word.clone(), Vec::new()));
        }
    }

    for pair in words.windows(2) {
        let slot = slots[pair[0].as_str()];
        entries[slot].1.push(pair[1].clone());
    }

    entries
}

/// Number of distinct words in a successor list.
pub fn distinct_successor_count(successors: &[String]) -> usize {
    successors
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .len()
}
