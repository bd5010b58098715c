//! HTTP routes for the analysis endpoint.

use axum::{routing::post, Router};

use super::handlers::{analyze_room, method_not_allowed, AnalysisAppState};

/// Create the analysis API router.
///
/// # Routes
///
/// - `POST /analyze` - Analyze a room; other methods get a JSON 405
///
/// Suitable for nesting under `/api`.
pub fn analysis_routes() -> Router<AnalysisAppState> {
    Router::new().route("/analyze", post(analyze_room).fallback(method_not_allowed))
}
