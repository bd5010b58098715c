//! Analysis command handlers.

mod analyze_room;

pub use analyze_room::{AnalyzeRoomCommand, AnalyzeRoomHandler};
