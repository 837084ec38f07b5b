//! REST API server for Lesewert text analysis.
//!
//! This module provides an Axum-based HTTP server exposing the analysis
//! pipeline over JSON.
//!
//! # Endpoints
//!
//! - `POST /analyze` - Analyze text (`{"text": "..."}`)
//! - `GET /health` - Liveness check
//! - `GET /info` - Service name and version
//!
//! # Examples
//!
//! ## Starting the server
//!
//! ```no_run
//! use lesewert::api::serve;
//!
//! #[tokio::main]
//! async fn main() -> lesewert::Result<()> {
//!     // Local development
//!     serve("127.0.0.1", 3000).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Mounting the router in a larger app
//!
//! ```no_run
//! use lesewert::{core::AnalyzerConfig, api::create_router};
//! use axum::Router;
//!
//! #[tokio::main]
//! async fn main() -> lesewert::Result<()> {
//!     let lesewert_router = create_router(AnalyzerConfig::default())?;
//!
//!     let app = Router::new().nest("/api", lesewert_router);
//!     # let _ = app;
//!
//!     Ok(())
//! }
//! ```
//!
//! # cURL Examples
//!
//! ```bash
//! # Analyze text
//! curl -H 'Content-Type: application/json' \
//!      -d '{"text": "Readable content ranks better."}' \
//!      http://localhost:3000/analyze
//!
//! # Health check
//! curl http://localhost:3000/health
//!
//! # Server info
//! curl http://localhost:3000/info
//! ```

mod error;
mod handlers;
mod server;
mod types;

pub use error::ApiError;
pub use server::{
    DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT, ENV_CORS_ORIGINS, ENV_MAX_BODY_BYTES, create_router,
    create_router_with_body_limit, serve, serve_default, serve_with_config, serve_with_config_and_limit,
};
pub use types::{AnalyzeRequest, ApiState, ErrorResponse, HealthResponse, InfoResponse};
