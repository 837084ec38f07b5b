//! Word and sentence boundary detection.
//!
//! Shared by the readability scorer (counts) and the text optimizer
//! (segment-level rewriting). Boundaries are heuristic: a sentence is a
//! maximal run of non-terminator characters followed by a run of `.`, `!`,
//! or `?`. Text without terminal punctuation still counts as one sentence so
//! downstream ratios never divide by zero.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("Sentence regex pattern is valid and should compile"));

static TERMINATOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("Terminator regex pattern is valid and should compile"));

/// Count whitespace-delimited words.
///
/// Leading/trailing whitespace is ignored. Callers validate that text is
/// non-empty before deriving ratios from this count.
#[inline]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count sentences, with a floor of one.
///
/// A sentence is a maximal `[^.!?]+[.!?]+` run. Text with no terminal
/// punctuation ("no punctuation here") counts as a single sentence.
#[inline]
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_PATTERN.find_iter(text).count().max(1)
}

/// Split text into alternating body/terminator segments.
///
/// Terminator runs (`[.!?]+`) become their own elements, preserving them for
/// lossless reassembly: `segments.concat() == text`. The result always has an
/// odd length and starts and ends with a body, which may be empty when the
/// text starts or ends with a terminator:
///
/// ```
/// use lesewert::text::segment::split_with_terminators;
///
/// let segments = split_with_terminators("One. Two!");
/// assert_eq!(segments, vec!["One", ".", " Two", "!", ""]);
/// assert_eq!(segments.concat(), "One. Two!");
/// ```
pub fn split_with_terminators(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in TERMINATOR_PATTERN.find_iter(text) {
        segments.push(text[last..m.start()].to_string());
        segments.push(m.as_str().to_string());
        last = m.end();
    }
    segments.push(text[last..].to_string());

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_basic() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count("  spaced   out  words  "), 3);
        assert_eq!(word_count("single"), 1);
    }

    #[test]
    fn test_word_count_mixed_whitespace() {
        assert_eq!(word_count("tabs\tand\nnewlines here"), 4);
    }

    #[test]
    fn test_sentence_count_basic() {
        assert_eq!(sentence_count("One. Two! Three?"), 3);
        assert_eq!(sentence_count("Just one sentence."), 1);
    }

    #[test]
    fn test_sentence_count_terminator_runs() {
        // A run of terminators closes a single sentence.
        assert_eq!(sentence_count("Wait... what?! Really."), 3);
    }

    #[test]
    fn test_sentence_count_no_punctuation_floors_at_one() {
        assert_eq!(sentence_count("no punctuation at all"), 1);
        assert_eq!(sentence_count("word"), 1);
    }

    #[test]
    fn test_sentence_count_only_terminators() {
        // "..." has no [^.!?]+ prefix, so no match; floor applies.
        assert_eq!(sentence_count("..."), 1);
    }

    #[test]
    fn test_split_round_trips() {
        for text in [
            "One. Two! Three?",
            "no terminators",
            "trailing terminator.",
            ".leading",
            "a?!b",
            "",
        ] {
            let segments = split_with_terminators(text);
            assert_eq!(segments.concat(), text);
            assert_eq!(segments.len() % 2, 1, "segment list for {:?} should alternate body/terminator", text);
        }
    }

    #[test]
    fn test_split_trailing_empty_body() {
        let segments = split_with_terminators("One. Two.");
        assert_eq!(segments, vec!["One", ".", " Two", ".", ""]);
    }

    #[test]
    fn test_split_leading_empty_body() {
        let segments = split_with_terminators(".Hi");
        assert_eq!(segments, vec!["", ".", "Hi"]);
    }

    #[test]
    fn test_split_groups_terminator_runs() {
        let segments = split_with_terminators("Wow!!! Done");
        assert_eq!(segments, vec!["Wow", "!!!", " Done"]);
    }

    #[test]
    fn test_split_no_terminators() {
        assert_eq!(split_with_terminators("plain text"), vec!["plain text"]);
    }
}
