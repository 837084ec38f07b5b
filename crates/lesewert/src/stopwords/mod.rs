//! Stop-word filtering for keyword extraction.
//!
//! Provides the fixed English function-word set used by the tokenizer. Stop
//! words are common words (the, is, and, etc.) that carry no keyword value and
//! are filtered out before frequency counting.
//!
//! The list is intentionally small and fixed: 68 high-frequency English
//! function words, embedded at compile time. Analysis is English-only
//! (ASCII/Latin word-boundary heuristics), so there is no per-language
//! registry here.
//!
//! # Usage
//!
//! ```rust
//! use lesewert::stopwords::{STOP_WORDS, is_stop_word};
//!
//! assert!(is_stop_word("the"));
//! assert!(is_stop_word("should"));
//! assert!(!is_stop_word("keyword"));
//! assert_eq!(STOP_WORDS.len(), 68);
//! ```

use ahash::AHashSet;
use once_cell::sync::Lazy;

/// English function words excluded from keyword candidacy.
///
/// Order groups related word classes (articles, conjunctions, prepositions,
/// auxiliaries, pronouns, qualifiers) for readability; lookup goes through
/// [`STOP_WORDS`].
const STOP_WORD_LIST: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "can", "may", "might", "must", "shall", "this", "that", "these", "those", "i", "me", "my", "we", "our",
    "you", "your", "he", "him", "she", "her", "it", "its", "they", "them", "their", "which", "as", "so", "if", "not",
    "more", "also", "very", "there", "than", "then",
];

/// Global stop-word set.
///
/// Lazily built from [`STOP_WORD_LIST`] on first use and shared across all
/// analyses. Lookup expects lowercase tokens; the tokenizer lowercases before
/// filtering.
pub static STOP_WORDS: Lazy<AHashSet<&'static str>> = Lazy::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Check whether a lowercase token is a stop word.
#[inline]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}
