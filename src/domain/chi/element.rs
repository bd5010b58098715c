//! The five elements and the two cycles that relate them.

use std::fmt;

/// One of the five categorical energies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// Canonical iteration order. Tie-breaking and every "first match" scan
    /// walk the elements in this order.
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position in [`Element::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Element::Wood => 0,
            Element::Fire => 1,
            Element::Earth => 2,
            Element::Metal => 3,
            Element::Water => 4,
        }
    }

    /// The element this one feeds (Wood→Fire→Earth→Metal→Water→Wood).
    pub fn produces(&self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element this one overcomes (Water→Fire→Metal→Wood→Earth→Water).
    pub fn destroys(&self) -> Element {
        match self {
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
        }
    }

    /// Decor suggestion for bringing more of this element into a room.
    pub fn addition(&self) -> &'static str {
        match self {
            Element::Wood => "Add green plants, wooden furniture, or vertical shapes",
            Element::Fire => {
                "Add candles, warm lighting, red or orange accents, or triangular shapes"
            }
            Element::Earth => "Add ceramics, stone, earthy tones, or low flat surfaces",
            Element::Metal => "Add metallic frames, white or gray decor, or round shapes",
            Element::Water => {
                "Add a small fountain, mirrors, dark blue or black accents, or wavy shapes"
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_canonical_order() {
        for (i, element) in Element::ALL.iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn productive_cycle_returns_to_start_after_five_steps() {
        let mut current = Element::Wood;
        let mut visited = Vec::new();
        for _ in 0..5 {
            visited.push(current);
            current = current.produces();
        }
        assert_eq!(current, Element::Wood);
        assert_eq!(
            visited,
            vec![
                Element::Wood,
                Element::Fire,
                Element::Earth,
                Element::Metal,
                Element::Water
            ]
        );
    }

    #[test]
    fn destructive_cycle_visits_every_element_once() {
        let mut current = Element::Water;
        let mut visited = Vec::new();
        for _ in 0..5 {
            visited.push(current);
            current = current.destroys();
        }
        assert_eq!(current, Element::Water);
        assert_eq!(
            visited,
            vec![
                Element::Water,
                Element::Fire,
                Element::Metal,
                Element::Wood,
                Element::Earth
            ]
        );
    }

    #[test]
    fn no_element_produces_or_destroys_itself() {
        for element in Element::ALL {
            assert_ne!(element.produces(), element);
            assert_ne!(element.destroys(), element);
            assert_ne!(element.produces(), element.destroys());
        }
    }

    #[test]
    fn displays_as_capitalized_name() {
        assert_eq!(Element::Metal.to_string(), "Metal");
    }

    #[test]
    fn every_element_has_an_addition() {
        for element in Element::ALL {
            assert!(element.addition().starts_with("Add "));
        }
    }
}
