//! Chi score computation.

use super::{Element, ElementHistogram};

pub const BASE_SCORE: i32 = 50;
pub const ALIGNMENT_BONUS: i32 = 10;
pub const DIVERSITY_BONUS_PER_ELEMENT: i32 = 5;
pub const PRODUCTIVE_BONUS: i32 = 10;
pub const DESTRUCTIVE_PENALTY: i32 = 10;

/// Two present elements related by one of the cycles, `(from, to)`.
pub type ElementPair = (Element, Element);

/// Each contribution to the final score, kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub alignment_bonus: i32,
    pub diversity_bonus: i32,
    pub productive_bonus: i32,
    pub destructive_penalty: i32,
    /// First present element whose productive successor is also present.
    pub productive_pair: Option<ElementPair>,
    /// First present element whose destructive target is also present.
    pub destructive_pair: Option<ElementPair>,
    /// Clamped to 0..=100.
    pub score: u8,
}

/// Stateless scorer.
pub struct ChiScorer;

impl ChiScorer {
    pub fn score(histogram: &ElementHistogram, direction_element: Element) -> ScoreBreakdown {
        let present = histogram.present();

        let alignment_bonus = if histogram.dominant() == direction_element {
            ALIGNMENT_BONUS
        } else {
            0
        };

        // At most five elements exist, so this never exceeds 25.
        let diversity_bonus = present.len() as i32 * DIVERSITY_BONUS_PER_ELEMENT;

        let productive_pair = first_pair(&present, histogram, Element::produces);
        let destructive_pair = first_pair(&present, histogram, Element::destroys);

        let productive_bonus = if productive_pair.is_some() {
            PRODUCTIVE_BONUS
        } else {
            0
        };
        let destructive_penalty = if destructive_pair.is_some() {
            DESTRUCTIVE_PENALTY
        } else {
            0
        };

        let total = BASE_SCORE + alignment_bonus + diversity_bonus + productive_bonus
            - destructive_penalty;

        ScoreBreakdown {
            alignment_bonus,
            diversity_bonus,
            productive_bonus,
            destructive_penalty,
            productive_pair,
            destructive_pair,
            score: total.clamp(0, 100) as u8,
        }
    }
}

fn first_pair(
    present: &[Element],
    histogram: &ElementHistogram,
    relation: fn(&Element) -> Element,
) -> Option<ElementPair> {
    present
        .iter()
        .map(|e| (*e, relation(e)))
        .find(|(_, target)| histogram.contains(*target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn histogram(elements: &[Element]) -> ElementHistogram {
        ElementHistogram::from_elements(elements.iter().copied()).unwrap()
    }

    #[test]
    fn single_aligned_element() {
        let b = ChiScorer::score(&histogram(&[Element::Fire]), Element::Fire);
        assert_eq!(b.alignment_bonus, 10);
        assert_eq!(b.diversity_bonus, 5);
        assert_eq!(b.productive_pair, None);
        assert_eq!(b.destructive_pair, None);
        assert_eq!(b.score, 65);
    }

    #[test]
    fn metal_feeding_water_earns_productive_bonus() {
        let h = histogram(&[Element::Water, Element::Metal]);
        let b = ChiScorer::score(&h, Element::Water);
        // Metal wins the tie, so the room is not aligned with a north face
        assert_eq!(b.alignment_bonus, 0);
        assert_eq!(b.productive_pair, Some((Element::Metal, Element::Water)));
        assert_eq!(b.destructive_pair, None);
        assert_eq!(b.score, 70);
    }

    #[test]
    fn destructive_pair_is_first_in_canonical_order() {
        // Wood destroys Earth, Fire destroys Metal; Wood is scanned first
        let h = histogram(&[Element::Metal, Element::Fire, Element::Earth, Element::Wood]);
        let b = ChiScorer::score(&h, Element::Earth);
        assert_eq!(b.destructive_pair, Some((Element::Wood, Element::Earth)));
        assert_eq!(b.productive_pair, Some((Element::Wood, Element::Fire)));
        assert_eq!(b.destructive_penalty, 10);
    }

    #[test]
    fn all_elements_present() {
        let h = histogram(&Element::ALL);
        let b = ChiScorer::score(&h, Element::Wood);
        // 50 + 10 + 25 + 10 - 10
        assert_eq!(b.diversity_bonus, 25);
        assert_eq!(b.score, 85);
    }

    #[test]
    fn water_and_fire_clash() {
        let h = histogram(&[Element::Water, Element::Fire]);
        let b = ChiScorer::score(&h, Element::Earth);
        assert_eq!(b.productive_pair, None);
        assert_eq!(b.destructive_pair, Some((Element::Water, Element::Fire)));
        assert_eq!(b.score, 50);
    }

    proptest! {
        #[test]
        fn score_is_always_in_range(
            elements in prop::collection::vec(prop::sample::select(Element::ALL.to_vec()), 1..32),
            direction in prop::sample::select(Element::ALL.to_vec()),
        ) {
            let b = ChiScorer::score(&histogram(&elements), direction);
            prop_assert!(b.score <= 100);
            prop_assert!(b.diversity_bonus <= 25);
        }
    }
}
