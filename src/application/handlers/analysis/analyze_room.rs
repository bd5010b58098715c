//! AnalyzeRoomHandler - Command handler for scoring a room's colors and orientation.

use tracing::debug;

use crate::domain::chi::{Direction, RoomAnalysis};
use crate::domain::foundation::DomainError;

/// Command to analyze one room.
///
/// `colors` are hex strings as sampled from a photo, most frequent first.
/// Malformed entries are kept and count as black.
#[derive(Debug, Clone)]
pub struct AnalyzeRoomCommand {
    pub colors: Vec<String>,
    pub direction: Direction,
}

/// Runs the Five-Element analysis for a room.
///
/// Holds no state; a single instance is shared across requests.
#[derive(Debug, Default)]
pub struct AnalyzeRoomHandler;

impl AnalyzeRoomHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: AnalyzeRoomCommand) -> Result<RoomAnalysis, DomainError> {
        let result = match RoomAnalysis::compute(cmd.colors.as_slice(), cmd.direction) {
            Ok(result) => result,
            Err(e) => {
                debug!(direction = %cmd.direction, error = %e, "Room analysis rejected");
                return Err(e);
            }
        };

        debug!(
            direction = %cmd.direction,
            colors = cmd.colors.len(),
            dominant = %result.dominant(),
            score = result.score(),
            "Room analyzed"
        );

        Ok(result)
    }
}
