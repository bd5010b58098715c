//! Human-readable advice derived from a scored room.

use super::{Direction, ElementHistogram, ScoreBreakdown};

/// Minimum number of present elements that counts as a diverse room.
pub const DIVERSITY_THRESHOLD: usize = 4;

pub const BALANCED_ROOM_MESSAGE: &str =
    "This room has excellent Feng Shui balance. No major changes needed.";

pub const DIVERSITY_MESSAGE: &str =
    "Good elemental diversity. Maintain the current balance of materials and colors.";

/// Builds the ordered recommendation list. Never returns an empty list.
pub fn recommendations(
    histogram: &ElementHistogram,
    direction: Direction,
    breakdown: &ScoreBreakdown,
) -> Vec<String> {
    let dominant = histogram.dominant();
    let direction_element = direction.element();
    let mut out = Vec::new();

    if dominant != direction_element {
        out.push(format!(
            "Your room faces {} ({} energy). The dominant element is {}. {} to align with directional energy.",
            direction,
            direction_element,
            dominant,
            direction_element.addition()
        ));
    }

    for element in histogram.absent() {
        out.push(format!(
            "{} element is absent. {}.",
            element,
            element.addition()
        ));
    }

    if let Some((from, to)) = breakdown.destructive_pair {
        out.push(format!(
            "{} and {} create a destructive cycle. Consider reducing the stronger element or adding a bridging element.",
            from, to
        ));
    }

    if histogram.present().len() >= DIVERSITY_THRESHOLD {
        out.push(DIVERSITY_MESSAGE.to_string());
    }

    if out.is_empty() {
        out.push(BALANCED_ROOM_MESSAGE.to_string());
    }

    out
}

/// One-paragraph summary of the room's dominant energy and orientation.
pub fn analysis_text(histogram: &ElementHistogram, direction: Direction) -> String {
    let dominant = histogram.dominant();
    let direction_element = direction.element();

    let mut text = format!(
        "The room is dominated by {} energy ({}). Facing {}, this space channels {} energy. ",
        dominant,
        histogram.percentage(dominant),
        direction,
        direction_element
    );

    if dominant == direction_element {
        text.push_str(
            "The dominant element aligns with the directional energy, creating natural harmony.",
        );
    } else {
        text.push_str(&format!(
            "Consider introducing more {} elements to harmonize with the room's orientation.",
            direction_element
        ));
    }

    text
}
