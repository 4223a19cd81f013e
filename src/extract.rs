//! Test-data extraction: the distinct n-grams occurring in a text.

use ahash::AHashSet;

use crate::ngram::{Ngram, NgramOrder};

/// Collects the deduplicated set of length-n windows of `text`.
///
/// Lines are processed independently so that no window crosses a line
/// break, and only windows made entirely of Unicode letters are kept —
/// whitespace, digits, and punctuation all split the window stream.
pub fn ngrams(text: &str, order: NgramOrder) -> AHashSet<Ngram> {
    let n = order.len();
    let mut out = AHashSet::new();
    let mut chars = Vec::new();
    for line in text.lines() {
        chars.clear();
        chars.extend(line.chars());
        if chars.len() < n {
            continue;
        }
        for window in chars.windows(n) {
            if window.iter().all(|c| c.is_alphabetic()) {
                out.insert(Ngram::from_chars(window));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(set: &AHashSet<Ngram>) -> Vec<&str> {
        let mut v: Vec<_> = set.iter().map(Ngram::text).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn extracts_all_letter_windows() {
        let set = ngrams("abcd", NgramOrder::Bigram);
        assert_eq!(texts(&set), vec!["ab", "bc", "cd"]);
    }

    #[test]
    fn deduplicates() {
        let set = ngrams("aaaa", NgramOrder::Bigram);
        assert_eq!(texts(&set), vec!["aa"]);
    }

    #[test]
    fn whitespace_and_punctuation_split_windows() {
        let set = ngrams("ab cd", NgramOrder::Bigram);
        assert_eq!(texts(&set), vec!["ab", "cd"]);

        let set = ngrams("ab,cd", NgramOrder::Bigram);
        assert_eq!(texts(&set), vec!["ab", "cd"]);

        let set = ngrams("a1b", NgramOrder::Bigram);
        assert!(set.is_empty());
    }

    #[test]
    fn windows_do_not_cross_line_breaks() {
        let set = ngrams("ab\ncd", NgramOrder::Bigram);
        assert_eq!(texts(&set), vec!["ab", "cd"]);

        let set = ngrams("a\nb", NgramOrder::Bigram);
        assert!(set.is_empty());
    }

    #[test]
    fn short_text_yields_nothing_at_higher_orders() {
        let set = ngrams("ab", NgramOrder::Trigram);
        assert!(set.is_empty());
    }

    #[test]
    fn handles_multibyte_letters() {
        let set = ngrams("ößä", NgramOrder::Trigram);
        assert_eq!(texts(&set), vec!["ößä"]);
    }
}
