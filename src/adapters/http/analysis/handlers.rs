//! HTTP handlers for the analysis endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::application::AnalyzeRoomHandler;
use crate::domain::foundation::DomainError;

use super::dto::{AnalyzeRoomRequest, AnalyzeRoomResponse, ErrorResponse, RequestError};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for the analysis routes.
#[derive(Clone)]
pub struct AnalysisAppState {
    analyze_handler: Arc<AnalyzeRoomHandler>,
}

impl AnalysisAppState {
    pub fn new(analyze_handler: Arc<AnalyzeRoomHandler>) -> Self {
        Self { analyze_handler }
    }
}

impl Default for AnalysisAppState {
    fn default() -> Self {
        Self::new(Arc::new(AnalyzeRoomHandler::new()))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/analyze - Score a room from its colors and orientation
pub async fn analyze_room(
    State(state): State<AnalysisAppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return handle_body_rejection(rejection),
    };

    let parsed = AnalyzeRoomRequest::try_from(body).and_then(AnalyzeRoomRequest::into_command);
    let cmd = match parsed {
        Ok(cmd) => cmd,
        Err(e) => return bad_request(e).into_http(),
    };

    match state.analyze_handler.handle(cmd) {
        Ok(result) => {
            let response: AnalyzeRoomResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_analysis_error(e),
    }
}

/// Any non-POST method on the analysis path.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::method_not_allowed()),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Oversized bodies keep their own status; every other unreadable body is a
/// missing-field error.
fn handle_body_rejection(rejection: JsonRejection) -> Response {
    tracing::debug!("Rejected analysis body: {}", rejection.body_text());
    if let JsonRejection::BytesRejection(ref failed) = rejection {
        if failed.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorResponse::payload_too_large()),
            )
                .into_response();
        }
    }
    bad_request(RequestError::MissingFields)
        .with_details(json!({ "reason": rejection.body_text() }))
        .into_http()
}

fn bad_request(error: RequestError) -> ErrorResponse {
    ErrorResponse::bad_request(error.to_string())
}

impl ErrorResponse {
    fn into_http(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

fn handle_analysis_error(error: DomainError) -> Response {
    if error.code().is_client_error() {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response()
    } else {
        tracing::error!("Internal error: {}", error);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal("An unexpected error occurred")),
        )
            .into_response()
    }
}
