//! Analysis orchestration.
//!
//! Wires the pipeline together: validation, keyword source selection
//! (external with local fallback), metrics, suggestions, and text
//! optimization. All per-request state lives on the caller's stack, so one
//! [`Analyzer`] serves any number of concurrent analyses.

use tracing::{debug, warn};

use crate::core::config::AnalyzerConfig;
use crate::error::{LesewertError, Result};
use crate::keywords::KeywordSource;
use crate::text::{build_suggestions, count_syllables, reading_ease, weave_keywords};
use crate::textrazor::{TextRazorClient, TopicExtraction};
use crate::types::{AnalysisResult, Document};

/// Base title score for content inside the preferred length band.
const TITLE_BASE_IN_RANGE: u32 = 50;

/// Base title score outside the preferred length band.
const TITLE_BASE_OUT_OF_RANGE: u32 = 30;

/// Preferred word-count band for the title score base.
const TITLE_RANGE_WORDS: std::ops::RangeInclusive<usize> = 50..=300;

/// Title score added per selected keyword.
const TITLE_KEYWORD_BONUS: u32 = 5;

/// Upper bound of the title score.
const TITLE_SCORE_MAX: u32 = 100;

/// The analysis pipeline.
///
/// Construction validates the configuration and, when an API key is
/// present, builds the TextRazor client once; requests then share its
/// connection pool.
pub struct Analyzer {
    topic_client: Option<TextRazorClient>,
}

impl Analyzer {
    /// Build an analyzer from configuration.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the configuration fails validation and
    /// `External` if the HTTP client cannot be constructed.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;

        let topic_client = config
            .textrazor
            .as_ref()
            .map(|textrazor| TextRazorClient::new(textrazor.clone()))
            .transpose()?;

        Ok(Self { topic_client })
    }

    /// Whether the external keyword source will be attempted.
    pub fn external_enabled(&self) -> bool {
        self.topic_client.is_some()
    }

    /// Run a full analysis of `text`.
    ///
    /// # Arguments
    ///
    /// * `text` - Raw input text; leading and trailing whitespace is ignored
    ///
    /// # Errors
    ///
    /// Returns `LesewertError::Validation` when `text` is empty after
    /// trimming. External-source failures never surface here; they degrade
    /// to local extraction.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lesewert::core::{Analyzer, AnalyzerConfig};
    ///
    /// # async fn example() -> lesewert::Result<()> {
    /// let analyzer = Analyzer::new(AnalyzerConfig::default())?;
    /// let result = analyzer.analyze("Readable text ranks better. Write simply.").await?;
    /// println!("readability: {}", result.readability);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(LesewertError::validation("Text is required"));
        }

        let (external, entities) = self.external_extraction(trimmed).await;
        let source = KeywordSource::select(external, trimmed);
        let method = source.method();
        debug!(method = %method, keywords = source.keywords().len(), "keyword source selected");

        let document = Document::new(trimmed);
        let syllables = count_syllables(document.text());
        let readability = reading_ease(document.word_count(), document.sentence_count(), syllables);
        let title_score = title_score(document.word_count(), source.keywords().len());
        let suggestions = build_suggestions(document.word_count(), readability, source.keywords());
        let optimized_text = weave_keywords(document.text(), source.keywords());

        Ok(AnalysisResult {
            readability,
            title_score,
            keywords: source.into_keywords(),
            entities,
            word_count: document.word_count(),
            sentence_count: document.sentence_count(),
            suggestions,
            optimized_text,
            analysis_method: method,
        })
    }

    /// Attempt external extraction, swallowing every failure.
    ///
    /// Returns the keyword candidates (`None` when not attempted or failed)
    /// and the entities to retain. Entities from a successful call are kept
    /// even when the topic list comes back empty; on failure both are empty.
    async fn external_extraction(&self, text: &str) -> (Option<Vec<String>>, Vec<String>) {
        let Some(client) = &self.topic_client else {
            return (None, Vec::new());
        };

        match client.extract(text).await {
            Ok(TopicExtraction { keywords, entities }) => {
                if keywords.is_empty() {
                    debug!("external source returned no usable topics, using local extraction");
                }
                (Some(keywords), entities)
            }
            Err(error) => {
                warn!(%error, "external extraction failed, falling back to local extraction");
                (None, Vec::new())
            }
        }
    }
}

/// SEO title score from content length and keyword count.
fn title_score(word_count: usize, keyword_count: usize) -> u32 {
    let base = if TITLE_RANGE_WORDS.contains(&word_count) {
        TITLE_BASE_IN_RANGE
    } else {
        TITLE_BASE_OUT_OF_RANGE
    };

    (base + TITLE_KEYWORD_BONUS * keyword_count as u32).min(TITLE_SCORE_MAX)
}

/// Analyze text with the given configuration.
///
/// One-shot convenience wrapper around [`Analyzer`]; prefer constructing an
/// `Analyzer` when handling more than one request.
///
/// # Errors
///
/// Same as [`Analyzer::analyze`], plus configuration and client
/// construction failures from [`Analyzer::new`].
pub async fn analyze_text(text: &str, config: &AnalyzerConfig) -> Result<AnalysisResult> {
    Analyzer::new(config.clone())?.analyze(text).await
}
