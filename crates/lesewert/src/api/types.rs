//! Request and response bodies for the HTTP surface.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::Analyzer;

/// Analyze request body.
///
/// `text` defaults to empty so a missing field yields the same validation
/// message as an explicitly empty one instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status, always `"OK"`.
    pub status: String,
    /// RFC 3339 timestamp of the check.
    pub timestamp: String,
}

/// Server identity response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// API server state.
///
/// Holds the analyzer built from the configuration the server was started
/// with. The analyzer is shared; per-request state stays in the handlers.
#[derive(Clone)]
pub struct ApiState {
    pub analyzer: Arc<Analyzer>,
}
