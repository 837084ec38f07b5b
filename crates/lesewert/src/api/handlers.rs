//! API request handlers.

use axum::{Json, extract::State};

use crate::types::AnalysisResult;

use super::{
    error::ApiError,
    types::{AnalyzeRequest, ApiState, HealthResponse, InfoResponse},
};

/// Analyze endpoint handler.
///
/// POST /analyze
///
/// Accepts `{"text": "..."}` and returns the full analysis result. Missing
/// or blank text is rejected with HTTP 400 and `{"error": "Text is
/// required"}`. External-source failures never surface here; the analyzer
/// falls back to local extraction.
pub async fn analyze_handler(
    State(state): State<ApiState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let result = state.analyzer.analyze(&request.text).await?;
    Ok(Json(result))
}

/// Health check endpoint handler.
///
/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Server info endpoint handler.
///
/// GET /info
pub async fn info_handler() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
