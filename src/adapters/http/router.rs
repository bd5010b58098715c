//! Top-level HTTP application assembly.
//!
//! Mounts the analysis routes under `/api` and wraps them in the shared
//! middleware stack (tracing, timeout, CORS, body size limit).

use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use ::http::{header, Method};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{Environment, ServerConfig};

use super::analysis::{analysis_routes, AnalysisAppState};

/// Build the full application router.
///
/// # Routes
///
/// - `POST /api/analyze`
pub fn app_router(state: AnalysisAppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", analysis_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy from configuration.
///
/// With no configured origins, development allows any origin and other
/// environments allow none.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        if server.environment != Environment::Development {
            return CorsLayer::new();
        }
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
