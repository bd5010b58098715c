//! HTTP adapters - REST API implementations.

pub mod analysis;
mod router;

pub use analysis::{analysis_routes, AnalysisAppState};
pub use router::app_router;
