//! Keyword weaving for SEO-oriented rewriting.
//!
//! Rewrites input text so selected keywords appear early in sentences.
//! Keywords are assigned to sentence bodies in order; a body that already
//! mentions its keyword (case-insensitive) is left untouched. When no body
//! needed changing, the keywords are appended as a closing paragraph instead,
//! so every keyword is guaranteed to appear in the output.
//!
//! Reassembly joins segments with no separator, preserving the original
//! inter-sentence spacing for untouched bodies. A rewritten body is trimmed
//! before the keyword clause is prefixed, so its original leading whitespace
//! is dropped.

use crate::text::segment::split_with_terminators;

/// Rewrite text to include the given keywords.
///
/// For each keyword, up to `floor(segments/2)` sentence bodies are candidates
/// (keyword *i* maps to body *i*). An empty keyword list returns the text
/// unchanged.
///
/// ```
/// use lesewert::text::optimize::weave_keywords;
///
/// let keywords = vec!["growth".to_string()];
/// let out = weave_keywords("Plants need light. Water helps too.", &keywords);
/// assert_eq!(out, "Growth is essential. Plants need light. Water helps too.");
/// ```
pub fn weave_keywords(text: &str, keywords: &[String]) -> String {
    if keywords.is_empty() {
        return text.to_string();
    }

    let mut segments = split_with_terminators(text);
    let candidate_count = segments.len() / 2;
    let mut modified = false;

    for (i, keyword) in keywords.iter().take(candidate_count).enumerate() {
        let body_index = i * 2;
        let body = segments[body_index].trim().to_string();
        if body.is_empty() {
            continue;
        }

        if !body.to_lowercase().contains(&keyword.to_lowercase()) {
            segments[body_index] = format!("{} is essential. {}", capitalize(keyword), body);
            modified = true;
        }
    }

    if modified {
        segments.concat()
    } else {
        let closing: Vec<String> = keywords
            .iter()
            .map(|keyword| format!("{} plays a crucial role.", capitalize(keyword)))
            .collect();
        format!("{}\n\n{}", text, closing.join(" "))
    }
}

/// Uppercase the first character, leaving the rest unchanged.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
