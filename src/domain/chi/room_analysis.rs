//! End-to-end analysis of one room.

use super::recommendations::{analysis_text, recommendations};
use super::{ChiScorer, Direction, Element, ElementClassifier, ElementHistogram, ScoreBreakdown};
use crate::domain::foundation::{DomainError, Percentage};

/// Everything derived from a room's colors and orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomAnalysis {
    pub direction: Direction,
    pub histogram: ElementHistogram,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
    pub analysis: String,
}

impl RoomAnalysis {
    /// Classifies each color and scores the result.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `colors` is empty.
    pub fn compute<S: AsRef<str>>(colors: &[S], direction: Direction) -> Result<Self, DomainError> {
        let elements = colors
            .iter()
            .map(|hex| ElementClassifier::classify_hex(hex.as_ref()));
        let histogram = ElementHistogram::from_elements(elements)?;

        let breakdown = ChiScorer::score(&histogram, direction.element());
        let recommendations = recommendations(&histogram, direction, &breakdown);
        let analysis = analysis_text(&histogram, direction);

        Ok(Self {
            direction,
            histogram,
            breakdown,
            recommendations,
            analysis,
        })
    }

    pub fn score(&self) -> u8 {
        self.breakdown.score
    }

    pub fn dominant(&self) -> Element {
        self.histogram.dominant()
    }

    pub fn direction_element(&self) -> Element {
        self.direction.element()
    }

    pub fn is_aligned(&self) -> bool {
        self.dominant() == self.direction_element()
    }

    pub fn percentage(&self, element: Element) -> Percentage {
        self.histogram.percentage(element)
    }
}
