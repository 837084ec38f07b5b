//! Heuristic syllable estimation for readability scoring.
//!
//! Counts syllables per alphabetic word by vowel-run inspection after
//! stripping common silent endings. This is an approximation tuned for
//! aggregate Flesch-style scoring, not a phonetic dictionary: individual
//! words can be off by one, which washes out over whole documents. Tests
//! assert plausible counts for known words rather than dictionary-exact
//! values.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]+\b").expect("Alphabetic word regex pattern is valid and should compile"));

// Silent endings: consonant+"es", "ed", consonant+"e". The consonant class
// excludes `l` so "-le"/"-les" endings ("table", "tables") keep their vowel.
static SILENT_SUFFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("Silent suffix regex pattern is valid and should compile")
});

static VOWEL_RUN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[aeiouy]{1,2}").expect("Vowel run regex pattern is valid and should compile"));

/// Estimate syllables in a single lowercase alphabetic word.
///
/// Strips one silent ending, drops a leading `y` (consonantal as in "yes"),
/// then counts maximal vowel runs of length 1-2. A word with no remaining
/// vowels still counts as one syllable.
pub fn word_syllables(word: &str) -> usize {
    let stripped = SILENT_SUFFIX_PATTERN.replace(word, "");
    let trimmed = stripped.strip_prefix('y').unwrap_or(&stripped);

    let runs = VOWEL_RUN_PATTERN.find_iter(trimmed).count();
    if runs == 0 { 1 } else { runs }
}

/// Estimate total syllables across all words in the text.
///
/// Words are lowercase alphabetic runs; digits and punctuation never
/// contribute syllables. Empty input yields zero.
pub fn count_syllables(text: &str) -> usize {
    let lowered = text.to_lowercase();
    WORD_PATTERN.find_iter(&lowered).map(|m| word_syllables(m.as_str())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monosyllables() {
        for word in ["cat", "dog", "the", "strength", "cake", "time"] {
            assert_eq!(word_syllables(word), 1, "'{}' should estimate 1 syllable", word);
        }
    }

    #[test]
    fn test_disyllables() {
        for word in ["hello", "resume", "table", "keyword"] {
            assert_eq!(word_syllables(word), 2, "'{}' should estimate 2 syllables", word);
        }
    }

    #[test]
    fn test_longer_words() {
        assert_eq!(word_syllables("education"), 4);
        assert_eq!(word_syllables("readability"), 5);
    }

    #[test]
    fn test_silent_e_stripped() {
        // "cake" -> "ca" (one run), not two.
        assert_eq!(word_syllables("cake"), 1);
        assert_eq!(word_syllables("stone"), 1);
    }

    #[test]
    fn test_le_ending_survives() {
        // The consonant class excludes `l`, so "-le" keeps its vowel.
        assert_eq!(word_syllables("table"), 2);
        assert_eq!(word_syllables("tables"), 2);
    }

    #[test]
    fn test_ed_ending_stripped() {
        assert_eq!(word_syllables("jumped"), 1);
        assert_eq!(word_syllables("walked"), 1);
    }

    #[test]
    fn test_leading_y_is_consonantal() {
        assert_eq!(word_syllables("yes"), 1);
        assert_eq!(word_syllables("yellow"), 2);
    }

    #[test]
    fn test_vowelless_residue_counts_one() {
        // "the" strips to "th"; every word is at least one syllable.
        assert_eq!(word_syllables("the"), 1);
        assert_eq!(word_syllables("ed"), 1);
    }

    #[test]
    fn test_double_vowel_is_one_run() {
        assert_eq!(word_syllables("moon"), 1);
        assert_eq!(word_syllables("rain"), 1);
    }

    #[test]
    fn test_count_syllables_sums_words() {
        // "hello" (2) + "world" (1)
        assert_eq!(count_syllables("Hello world."), 3);
    }

    #[test]
    fn test_count_syllables_ignores_digits() {
        assert_eq!(count_syllables("42 cats"), 1);
    }

    #[test]
    fn test_count_syllables_empty() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("123 456"), 0);
    }
}
