//! Tokenization and stop-word filtering for keyword extraction.
//!
//! Turns raw text into the normalized token stream that frequency counting
//! runs over: lowercase, punctuation stripped, split on whitespace, with
//! short tokens and stop words discarded. Duplicates are retained so the
//! extractor can count occurrences; order is first occurrence in the text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::stopwords::is_stop_word;

/// Tokens shorter than this are noise for keyword purposes.
const MIN_TOKEN_CHARS: usize = 4;

static PUNCTUATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("Punctuation strip regex pattern is valid and should compile"));

/// Tokenize text into keyword candidates.
///
/// Processing order matters: lowercasing happens before punctuation
/// stripping so "Don't" becomes "dont" (apostrophe removed, halves joined),
/// and the stop-word check sees lowercase tokens only. Empty input yields an
/// empty vector; this function cannot fail.
///
/// ```
/// use lesewert::text::tokenize::tokenize;
///
/// let tokens = tokenize("The quick brown fox jumps over the lazy dog!");
/// assert_eq!(tokens, vec!["quick", "brown", "jumps", "over", "lazy"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = PUNCTUATION_PATTERN.replace_all(&lowered, "");

    stripped
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("RUST Language"), vec!["rust", "language"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(tokenize("hello, world! (really)"), vec!["hello", "world", "really"]);
    }

    #[test]
    fn test_tokenize_joins_across_apostrophes() {
        // Punctuation is removed, not replaced with a space.
        assert_eq!(tokenize("don't isn't"), vec!["dont", "isnt"]);
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        // "fox", "the", "cat" are all <= 3 chars.
        assert_eq!(tokenize("fox cat lynx bear"), vec!["lynx", "bear"]);
    }

    #[test]
    fn test_tokenize_drops_stop_words() {
        // "which", "their", "there" survive the length filter but are stop words.
        assert_eq!(tokenize("which keywords serve their readers there"), vec!["keywords", "serve", "readers"]);
    }

    #[test]
    fn test_tokenize_keeps_duplicates_in_order() {
        assert_eq!(
            tokenize("search ranking search visibility search"),
            vec!["search", "ranking", "search", "visibility", "search"]
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_tokenize_only_punctuation() {
        assert!(tokenize("!!! ... ???").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscores() {
        // Word characters include digits and underscores.
        assert_eq!(tokenize("node_modules version 2024"), vec!["node_modules", "version", "2024"]);
    }
}
