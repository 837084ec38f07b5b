//! API server setup and configuration.

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::{
    Result,
    core::{Analyzer, AnalyzerConfig},
};

use super::{
    handlers::{analyze_handler, health_handler, info_handler},
    types::ApiState,
};

/// Default cap on the request body size (1 MiB).
///
/// Analysis inputs are plain text; the original front-end truncates at
/// 10,000 characters, so 1 MiB leaves generous headroom.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable overriding the request body cap, in bytes.
pub const ENV_MAX_BODY_BYTES: &str = "LESEWERT_MAX_REQUEST_BODY_BYTES";

/// Environment variable holding a comma-separated CORS origin allow-list.
pub const ENV_CORS_ORIGINS: &str = "LESEWERT_CORS_ORIGINS";

/// Parse the request body cap from the environment.
///
/// Falls back to [`DEFAULT_MAX_BODY_BYTES`] when the variable is unset,
/// unparseable, or zero.
fn parse_body_limit_from_env() -> usize {
    if let Ok(value) = std::env::var(ENV_MAX_BODY_BYTES) {
        match value.parse::<usize>() {
            Ok(bytes) if bytes > 0 => {
                tracing::info!("Request body limit configured from environment: {} bytes", bytes);
                return bytes;
            }
            Ok(_) => {
                tracing::warn!("{} must be greater than zero, using default", ENV_MAX_BODY_BYTES);
            }
            Err(_) => {
                tracing::warn!("{}='{}' is not a byte count, using default", ENV_MAX_BODY_BYTES, value);
            }
        }
    }

    tracing::info!(
        "Request body limit: {} bytes (default) - configure with {}",
        DEFAULT_MAX_BODY_BYTES,
        ENV_MAX_BODY_BYTES
    );
    DEFAULT_MAX_BODY_BYTES
}

/// Build the CORS layer from the environment.
///
/// Without `LESEWERT_CORS_ORIGINS` every origin is allowed, matching the
/// permissive behavior the analysis front-end expects in development.
fn cors_layer_from_env() -> CorsLayer {
    if let Ok(origins_str) = std::env::var(ENV_CORS_ORIGINS) {
        let origins: Vec<_> = origins_str
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .filter_map(|s| s.trim().parse::<axum::http::HeaderValue>().ok())
            .collect();

        if !origins.is_empty() {
            tracing::info!("CORS allow-list active with {} origin(s)", origins.len());
            return CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any);
        }

        tracing::warn!(
            "{} is set but contains no valid origins, using permissive CORS",
            ENV_CORS_ORIGINS
        );
    } else {
        tracing::warn!(
            "Allowing all CORS origins (default). Set {} to a comma-separated \
             allow-list for production",
            ENV_CORS_ORIGINS
        );
    }

    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}

/// Build the analysis router.
///
/// Exposed so the router can be nested inside a larger application.
///
/// # Errors
///
/// Returns an error when the configuration fails validation or the
/// TextRazor client cannot be constructed.
///
/// # Examples
///
/// ```no_run
/// use lesewert::{core::AnalyzerConfig, api::create_router};
///
/// # fn main() -> lesewert::Result<()> {
/// let router = create_router(AnalyzerConfig::default())?;
/// # Ok(())
/// # }
/// ```
pub fn create_router(config: AnalyzerConfig) -> Result<Router> {
    create_router_with_body_limit(config, DEFAULT_MAX_BODY_BYTES)
}

/// Build the analysis router with a custom request body cap.
///
/// # Arguments
///
/// * `config` - Analyzer configuration used for every request
/// * `max_body_bytes` - Maximum accepted request body size in bytes
///
/// # Errors
///
/// Same as [`create_router`].
pub fn create_router_with_body_limit(config: AnalyzerConfig, max_body_bytes: usize) -> Result<Router> {
    let state = ApiState {
        analyzer: Arc::new(Analyzer::new(config)?),
    };

    let router = Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(cors_layer_from_env())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

/// Start the API server, discovering configuration on disk.
///
/// Searches for `lesewert.toml` in current and parent directories and
/// overlays the environment; without either, local-only analysis is used.
///
/// # Arguments
///
/// * `host` - IP address to listen on, e.g. "127.0.0.1"
/// * `port` - Port number to listen on, e.g. 3000
///
/// # Examples
///
/// ```no_run
/// use lesewert::api::serve;
///
/// #[tokio::main]
/// async fn main() -> lesewert::Result<()> {
///     serve("127.0.0.1", 3000).await?;
///     Ok(())
/// }
/// ```
pub async fn serve(host: impl AsRef<str>, port: u16) -> Result<()> {
    let config = AnalyzerConfig::load()?;
    let max_body_bytes = parse_body_limit_from_env();

    serve_with_config_and_limit(host, port, config, max_body_bytes).await
}

/// Start the API server with explicit config and the default body cap.
pub async fn serve_with_config(host: impl AsRef<str>, port: u16, config: AnalyzerConfig) -> Result<()> {
    serve_with_config_and_limit(host, port, config, DEFAULT_MAX_BODY_BYTES).await
}

/// Start the API server with explicit config and request body cap.
///
/// # Arguments
///
/// * `host` - IP address to listen on
/// * `port` - Port number to listen on
/// * `config` - Analyzer configuration used for every request
/// * `max_body_bytes` - Maximum accepted request body size in bytes
///
/// # Errors
///
/// Returns `Validation` for an unparseable host address, `Io` when binding
/// fails, and `Other` if the server loop exits with an error.
pub async fn serve_with_config_and_limit(
    host: impl AsRef<str>,
    port: u16,
    config: AnalyzerConfig,
    max_body_bytes: usize,
) -> Result<()> {
    let ip: IpAddr = host
        .as_ref()
        .parse()
        .map_err(|e| crate::error::LesewertError::validation(format!("Invalid host address: {}", e)))?;

    let addr = SocketAddr::new(ip, port);
    let external = config.external_enabled();
    let app = create_router_with_body_limit(config, max_body_bytes)?;

    tracing::info!(
        "Starting Lesewert API server on http://{}:{} (external keyword source: {})",
        ip,
        port,
        if external { "configured" } else { "disabled" }
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(crate::error::LesewertError::Io)?;

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::LesewertError::Other(e.to_string()))?;

    Ok(())
}

/// Start the API server on 127.0.0.1:3000 with discovered configuration.
pub async fn serve_default() -> Result<()> {
    serve("127.0.0.1", DEFAULT_PORT).await
}
