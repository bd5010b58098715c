//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations for the adapters.

pub mod handlers;

pub use handlers::{AnalyzeRoomCommand, AnalyzeRoomHandler};
