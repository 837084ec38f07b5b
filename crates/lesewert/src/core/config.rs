//! Analyzer configuration loading.
//!
//! Configuration comes from an optional `lesewert.toml` (explicit path or
//! discovered by walking up from the current directory) overlaid with
//! environment variables. Missing configuration is valid: the analyzer then
//! runs with local extraction only.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LesewertError, Result};
use crate::textrazor::TextRazorConfig;

/// File name searched for by [`AnalyzerConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "lesewert.toml";

/// Primary environment variable supplying the TextRazor API key.
pub const ENV_API_KEY: &str = "LESEWERT_TEXTRAZOR_API_KEY";

/// Fallback environment variable for the TextRazor API key.
pub const ENV_API_KEY_FALLBACK: &str = "TEXTRAZOR_API_KEY";

/// Analyzer configuration.
///
/// # Example
///
/// ```toml
/// # lesewert.toml
/// [textrazor]
/// api_key = "your-key"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// TextRazor connection settings. `None` disables the external source.
    #[serde(default)]
    pub textrazor: Option<TextRazorConfig>,
}

impl AnalyzerConfig {
    /// Load configuration from an explicit TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file cannot be read or does not parse.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            LesewertError::config_with_source(
                format!("failed to read config file {}", path.as_ref().display()),
                e,
            )
        })?;

        toml::from_str(&content).map_err(|e| {
            LesewertError::config_with_source(format!("invalid TOML in {}", path.as_ref().display()), e)
        })
    }

    /// Search for `lesewert.toml` from the current directory upward.
    ///
    /// Returns `Ok(None)` when no file exists anywhere on the path to the
    /// filesystem root.
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(LesewertError::Io)?;

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                debug!(path = %candidate.display(), "using discovered configuration");
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Overlay environment variables onto `self`.
    ///
    /// `LESEWERT_TEXTRAZOR_API_KEY` (fallback `TEXTRAZOR_API_KEY`) supplies
    /// or overrides the API key; empty values are treated as absent.
    pub fn apply_env(mut self) -> Self {
        if let Some(key) = env_api_key() {
            match self.textrazor.as_mut() {
                Some(textrazor) => textrazor.api_key = key,
                None => self.textrazor = Some(TextRazorConfig::new(key)),
            }
        }
        self
    }

    /// Discovered file configuration overlaid with the environment.
    pub fn load() -> Result<Self> {
        let base = Self::discover()?.unwrap_or_default();
        Ok(base.apply_env())
    }

    /// Whether the external keyword source is configured.
    pub fn external_enabled(&self) -> bool {
        self.textrazor.as_ref().is_some_and(|t| !t.api_key.is_empty())
    }

    /// Check invariants not expressible in the types.
    ///
    /// # Errors
    ///
    /// Returns `Config` for an empty API key or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if let Some(textrazor) = &self.textrazor {
            if textrazor.api_key.is_empty() {
                return Err(LesewertError::config("textrazor.api_key must not be empty"));
            }
            if textrazor.timeout_secs == 0 {
                return Err(LesewertError::config("textrazor.timeout_secs must be at least 1"));
            }
        }
        Ok(())
    }
}

/// Read the API key from the environment, skipping empty values.
fn env_api_key() -> Option<String> {
    [ENV_API_KEY, ENV_API_KEY_FALLBACK]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
}
