//! Core data types shared across the analysis pipeline.

use serde::{Deserialize, Serialize};

use crate::text::readability::difficulty_label;
use crate::text::segment::{sentence_count, word_count};

/// A text under analysis together with its size metrics.
///
/// Counts are computed once at construction so every downstream component
/// works from the same numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    word_count: usize,
    sentence_count: usize,
}

impl Document {
    /// Build a document from (already trimmed) text, computing its counts.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let word_count = word_count(&text);
        let sentence_count = sentence_count(&text);
        Self {
            text,
            word_count,
            sentence_count,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Sentence count, never zero.
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }
}

/// Provenance of the keyword list in an [`AnalysisResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMethod {
    /// Keywords delivered by the TextRazor topic extraction service.
    #[serde(rename = "TextRazor API")]
    TextRazor,
    /// Keywords computed by local frequency analysis.
    #[serde(rename = "Basic Analysis")]
    Basic,
}

impl AnalysisMethod {
    /// The wire label for this method.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TextRazor => "TextRazor API",
            Self::Basic => "Basic Analysis",
        }
    }
}

impl std::fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete output of one analysis run.
///
/// Constructed once per request and returned to the caller; nothing is
/// persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Reading ease score in [0, 100], rounded to one decimal place.
    pub readability: f64,
    /// SEO title score in [0, 100].
    pub title_score: u32,
    /// Selected keywords, ranked. At most 10 external or 8 local.
    pub keywords: Vec<String>,
    /// Entity identifiers from the external source; empty when unavailable.
    pub entities: Vec<String>,
    pub word_count: usize,
    pub sentence_count: usize,
    /// Advisory strings in fixed rule order.
    pub suggestions: Vec<String>,
    /// The input rewritten with keywords woven in.
    pub optimized_text: String,
    /// Which keyword source actually produced `keywords`.
    pub analysis_method: AnalysisMethod,
}

impl AnalysisResult {
    /// Human-readable difficulty label for the readability score.
    pub fn difficulty(&self) -> &'static str {
        difficulty_label(self.readability)
    }
}
