//! Analysis orchestration and configuration.
//!
//! This module holds the primary entry points of the library:
//!
//! - **Configuration**: [`AnalyzerConfig`] loading from `lesewert.toml` and
//!   the environment
//! - **Orchestration**: [`Analyzer`] running validation, keyword selection,
//!   metrics, suggestions, and text optimization for one input
//!
//! # Example
//!
//! ```rust,no_run
//! use lesewert::core::{Analyzer, AnalyzerConfig};
//!
//! # async fn example() -> lesewert::Result<()> {
//! let config = AnalyzerConfig::load()?;
//! let analyzer = Analyzer::new(config)?;
//! let result = analyzer.analyze("Short sentences read well.").await?;
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod config;

pub use analyzer::{Analyzer, analyze_text};
pub use config::{AnalyzerConfig, CONFIG_FILE_NAME, ENV_API_KEY, ENV_API_KEY_FALLBACK};
