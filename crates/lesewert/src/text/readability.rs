//! Flesch-style readability scoring.
//!
//! Scores text on the classic 0-100 reading-ease scale: higher is easier.
//! The formula weighs average sentence length and syllables per word, then
//! clamps into range and rounds to one decimal for reporting.

const FLESCH_BASE: f64 = 206.835;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const SYLLABLE_DENSITY_WEIGHT: f64 = 84.6;

const SCORE_MIN: f64 = 0.0;
const SCORE_MAX: f64 = 100.0;

/// Compute the reading-ease score from document counts.
///
/// `score = 206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`,
/// clamped to [0, 100] and rounded to one decimal place.
///
/// Callers guarantee `word_count >= 1` (empty text is rejected before
/// scoring) and `sentence_count >= 1` (the sentence counter floors at one).
///
/// ```
/// use lesewert::text::readability::reading_ease;
///
/// // 10 words, 2 sentences, 15 syllables: 206.835 - 5.075 - 126.9
/// assert_eq!(reading_ease(10, 2, 15), 74.9);
/// ```
pub fn reading_ease(word_count: usize, sentence_count: usize, syllable_count: usize) -> f64 {
    let words = word_count as f64;
    let sentences = sentence_count as f64;
    let syllables = syllable_count as f64;

    let raw = FLESCH_BASE - SENTENCE_LENGTH_WEIGHT * (words / sentences) - SYLLABLE_DENSITY_WEIGHT * (syllables / words);

    round_to_tenth(raw.clamp(SCORE_MIN, SCORE_MAX))
}

/// Map a reading-ease score to its difficulty label.
///
/// Thresholds follow the standard Flesch interpretation bands, checked
/// descending with `>=`.
pub fn difficulty_label(score: f64) -> &'static str {
    if score >= 90.0 {
        "Very Easy"
    } else if score >= 80.0 {
        "Easy"
    } else if score >= 70.0 {
        "Fairly Easy"
    } else if score >= 60.0 {
        "Standard"
    } else if score >= 50.0 {
        "Fairly Difficult"
    } else if score >= 30.0 {
        "Difficult"
    } else {
        "Very Difficult"
    }
}

#[inline]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
