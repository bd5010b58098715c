//! Chi module - Five-Element classification and scoring of a room.
//!
//! # Components
//!
//! - `Rgb` - Hex color parsing (malformed input coerces to black)
//! - `Element` / `Direction` - The five elements, their cycles, and the compass table
//! - `ElementClassifier` - Ordered rule cascade mapping a color to an element
//! - `ElementHistogram` - Per-element counts, shares, and dominant element
//! - `ChiScorer` - Alignment, diversity, and cycle-based scoring
//! - `RoomAnalysis` - Full pipeline from colors to score and advice
//!
//! Everything here is pure and stateless; lookup tables are `match`
//! expressions or statics.

mod classifier;
mod color;
mod direction;
mod element;
mod histogram;
mod recommendations;
mod room_analysis;
mod scorer;

pub use classifier::{Classification, ClassificationRule, ElementClassifier, RULES};
pub use color::Rgb;
pub use direction::Direction;
pub use element::Element;
pub use histogram::ElementHistogram;
pub use recommendations::{
    analysis_text, recommendations, BALANCED_ROOM_MESSAGE, DIVERSITY_MESSAGE,
    DIVERSITY_THRESHOLD,
};
pub use room_analysis::RoomAnalysis;
pub use scorer::{
    ChiScorer, ElementPair, ScoreBreakdown, ALIGNMENT_BONUS, BASE_SCORE, DESTRUCTIVE_PENALTY,
    DIVERSITY_BONUS_PER_ELEMENT, PRODUCTIVE_BONUS,
};
