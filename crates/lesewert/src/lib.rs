//! Lesewert - SEO and Readability Text Analysis Library
//!
//! Lesewert analyzes English text for search-engine and readability quality:
//! keyword extraction (external TextRazor topics with a local frequency
//! fallback), Flesch-style readability scoring, an SEO title score,
//! improvement suggestions, and a rewritten version of the text with the
//! selected keywords woven in.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lesewert::core::{Analyzer, AnalyzerConfig};
//!
//! # async fn example() -> lesewert::Result<()> {
//! let analyzer = Analyzer::new(AnalyzerConfig::load()?)?;
//! let result = analyzer.analyze("Short sentences read well. Keywords matter.").await?;
//! println!("readability: {} ({})", result.readability, result.difficulty());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Core Module** (`core`): Analysis orchestration and config loading
//! - **Text Module** (`text`): Tokenization, segmentation, syllables,
//!   readability, suggestions, and keyword weaving
//! - **Keywords** (`keywords`): Frequency extraction and source selection
//! - **TextRazor** (`textrazor`): Optional external topic/entity client
//! - **API** (`api`, feature-gated): Axum HTTP surface
//!
//! # Features
//!
//! - Deterministic local pipeline with no network dependency
//! - Graceful fallback when the external source fails or returns nothing
//! - Feature-gated HTTP server (`api`)

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod keywords;
pub mod stopwords;
pub mod text;
pub mod textrazor;
pub mod types;

#[cfg(feature = "api")]
pub mod api;

pub use error::{LesewertError, Result};
pub use types::{AnalysisMethod, AnalysisResult, Document};

pub use core::analyzer::{Analyzer, analyze_text};
pub use core::config::AnalyzerConfig;

pub use keywords::KeywordSource;
pub use textrazor::{TextRazorClient, TextRazorConfig, TopicExtraction};
