//! Content improvement suggestions.
//!
//! Rule-based advice derived from the computed metrics. Rules are evaluated
//! independently in a fixed order, so the output sequence is deterministic
//! for a given analysis.

/// Word count below which content is flagged as thin.
pub const MIN_CONTENT_WORDS: usize = 50;

/// Word count above which paragraph breaking is suggested.
pub const MAX_CONTENT_WORDS: usize = 500;

/// Readability score below which simplification is suggested.
pub const LOW_READABILITY_THRESHOLD: f64 = 30.0;

/// How many keywords the keyword-usage suggestion names.
pub const SUGGESTED_KEYWORD_COUNT: usize = 3;

/// Build the suggestion list for an analysis.
///
/// `readability` is the already-rounded reading ease score. Each rule
/// contributes at most one entry, in this order: thin content, low
/// readability, keyword usage, overlong content.
pub fn build_suggestions(word_count: usize, readability: f64, keywords: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();

    if word_count < MIN_CONTENT_WORDS {
        suggestions.push(
            "Consider expanding your content. Aim for at least 50-100 words for better SEO."
                .to_string(),
        );
    }

    if readability < LOW_READABILITY_THRESHOLD {
        suggestions.push(
            "Try using shorter sentences and simpler words to improve readability.".to_string(),
        );
    }

    if !keywords.is_empty() {
        let highlighted: Vec<&str> = keywords
            .iter()
            .take(SUGGESTED_KEYWORD_COUNT)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Consider using these keywords: {}",
            highlighted.join(", ")
        ));
    }

    if word_count > MAX_CONTENT_WORDS {
        suggestions.push(
            "Consider breaking up long content into smaller paragraphs for better readability."
                .to_string(),
        );
    }

    suggestions
}
