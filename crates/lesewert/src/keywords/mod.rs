//! Keyword extraction.
//!
//! Two sources can feed the analysis pipeline: the TextRazor API when it is
//! configured and returns usable topics, and local frequency analysis as the
//! fallback. [`KeywordSource`] records which source produced the final list
//! so results can report their provenance.
//!
//! # Examples
//!
//! ```
//! use lesewert::keywords::KeywordSource;
//! use lesewert::types::AnalysisMethod;
//!
//! let source = KeywordSource::select(None, "keyword extraction with frequency counts");
//! assert_eq!(source.method(), AnalysisMethod::Basic);
//! assert!(source.keywords().contains(&"keyword".to_string()));
//! ```

pub mod frequency;

pub use frequency::{MAX_LOCAL_KEYWORDS, extract_keywords};

use crate::types::AnalysisMethod;

/// A keyword list together with the provenance of its extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordSource {
    /// Keywords delivered by the external TextRazor service.
    External(Vec<String>),
    /// Keywords computed by local frequency analysis.
    Local(Vec<String>),
}

impl KeywordSource {
    /// Choose between externally supplied keywords and local extraction.
    ///
    /// External keywords win only when present and non-empty; any other
    /// outcome falls back to frequency analysis over `text`.
    pub fn select(external: Option<Vec<String>>, text: &str) -> Self {
        match external {
            Some(keywords) if !keywords.is_empty() => Self::External(keywords),
            _ => Self::Local(frequency::extract_keywords(text)),
        }
    }

    /// The analysis method this source reports.
    pub fn method(&self) -> AnalysisMethod {
        match self {
            Self::External(_) => AnalysisMethod::TextRazor,
            Self::Local(_) => AnalysisMethod::Basic,
        }
    }

    /// Borrow the keyword list.
    pub fn keywords(&self) -> &[String] {
        match self {
            Self::External(keywords) | Self::Local(keywords) => keywords,
        }
    }

    /// Consume the source, yielding the keyword list.
    pub fn into_keywords(self) -> Vec<String> {
        match self {
            Self::External(keywords) | Self::Local(keywords) => keywords,
        }
    }
}
