//! HTTP adapter for the room analysis endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalyzeRoomRequest, AnalyzeRoomResponse, ElementPercentagesResponse, ErrorResponse,
    RequestError,
};
pub use handlers::AnalysisAppState;
pub use routes::analysis_routes;
