///Splits raw text into single words as Vec<String>.
///Folds the soft separators `-`, `=` and `.` into commas, drops every line
///whose first character is `#` (comment line), then treats commas and
///whitespace as word boundaries. Word order follows document order: line by
///line, left to right. Empty candidates are discarded, so the returned
///sequence never contains empty strings.
/// # Example
/// ```
/// use zipf_analysis::tokenize;
/// let words = tokenize("a-b.c=d\n# comment\ne f");
/// let expected = vec!["a", "b", "c", "d", "e", "f"];
/// assert_eq!(words, expected);
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    let folded = raw.replace(['-', '=', '.'], ",");

    let mut words = Vec::new();
    for line in folded.split('\n') {
        if line.starts_with('#') {
            continue;
        }
        for word in line.replace(',', " ").split_whitespace() {
            words.push(word.trim().to_string());
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_folded_and_comments_skipped() {
        let words = tokenize("a-b.c=d\n# comment\ne f");
        assert_eq!(words, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn order_is_document_order() {
        let words = tokenize("one two\nthree\nfour five");
        assert_eq!(words, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn comment_must_start_the_line() {
        // '#' later in a line is an ordinary character, not a comment marker
        let words = tokenize("keep #this\n# but not this");
        assert_eq!(words, vec!["keep", "#this"]);
    }

    #[test]
    fn no_empty_tokens() {
        let words = tokenize("a,,  ,b\n\n--==..\n");
        assert_eq!(words, vec!["a", "b"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("# nothing but comments\n# here").is_empty());
    }
}
