//! HTTP client for the TextRazor extraction endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{TextRazorEnvelope, TopicExtraction};
use crate::error::{LesewertError, Result};

/// Default service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.textrazor.com/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Extractors requested from the service.
const EXTRACTORS: &str = "topics,entities,words";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Connection settings for the TextRazor service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextRazorConfig {
    /// API key sent in the `x-textrazor-key` header.
    pub api_key: String,

    /// Service endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl TextRazorConfig {
    /// Settings for `api_key` with the default endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: default_endpoint(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Client for the TextRazor extraction API.
///
/// Holds a connection-pooled HTTP client with a bounded per-request
/// timeout; cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct TextRazorClient {
    config: TextRazorConfig,
    http: reqwest::Client,
}

impl TextRazorClient {
    /// Build a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns `External` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: TextRazorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LesewertError::external_with_source("failed to build HTTP client", e))?;

        Ok(Self { config, http })
    }

    /// Request topic and entity extraction for `text`.
    ///
    /// Returns the filtered extraction. Transport failures (including
    /// timeout), non-success statuses, and undecodable bodies all surface
    /// as `External` errors; the caller decides whether to fall back.
    pub async fn extract(&self, text: &str) -> Result<TopicExtraction> {
        debug!(endpoint = %self.config.endpoint, "requesting TextRazor extraction");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("x-textrazor-key", &self.config.api_key)
            .form(&[("text", text), ("extract", EXTRACTORS)])
            .send()
            .await
            .map_err(|e| LesewertError::external_with_source("TextRazor request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LesewertError::external(format!(
                "TextRazor returned status {status}"
            )));
        }

        let envelope: TextRazorEnvelope = response
            .json()
            .await
            .map_err(|e| LesewertError::external_with_source("failed to decode TextRazor response", e))?;

        Ok(envelope.into_extraction())
    }
}
