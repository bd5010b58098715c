//! Color → Element classification.
//!
//! A color is tested against an ordered list of rules and takes the element
//! of the first rule it satisfies. Several rules overlap (a bright orange is
//! both "orange" and "tan"), so the order of [`RULES`] decides the outcome.
//! Colors that reach the end of the list fall back to their strongest channel.

use super::{Element, Rgb};

/// Channel values widened to floating point for the ratio tests.
#[derive(Debug, Clone, Copy)]
struct Channels {
    r: f64,
    g: f64,
    b: f64,
    brightness: f64,
}

impl From<Rgb> for Channels {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: f64::from(rgb.r),
            g: f64::from(rgb.g),
            b: f64::from(rgb.b),
            brightness: rgb.brightness(),
        }
    }
}

/// A single predicate in the classification cascade.
pub struct ClassificationRule {
    pub label: &'static str,
    pub element: Element,
    matches: fn(&Channels) -> bool,
}

/// The cascade, in evaluation order.
pub static RULES: &[ClassificationRule] = &[
    ClassificationRule {
        label: "very dark",
        element: Element::Water,
        matches: |c| c.brightness < 40.0,
    },
    ClassificationRule {
        label: "near white",
        element: Element::Metal,
        matches: |c| c.brightness > 200.0 && (c.r - c.g).abs() < 20.0 && (c.g - c.b).abs() < 20.0,
    },
    ClassificationRule {
        label: "mid gray",
        element: Element::Metal,
        matches: |c| {
            (c.r - c.g).abs() < 25.0
                && (c.g - c.b).abs() < 25.0
                && (100.0..=200.0).contains(&c.brightness)
        },
    },
    ClassificationRule {
        label: "strong red",
        element: Element::Fire,
        matches: |c| c.r > 150.0 && c.r > c.g * 1.4 && c.r > c.b * 1.3,
    },
    ClassificationRule {
        label: "orange",
        element: Element::Fire,
        matches: |c| c.r > 180.0 && c.g > 80.0 && c.g < 160.0 && c.b < 80.0,
    },
    ClassificationRule {
        label: "pink",
        element: Element::Fire,
        matches: |c| c.r > 180.0 && c.b > 100.0 && c.g < 100.0,
    },
    ClassificationRule {
        label: "purple",
        element: Element::Water,
        matches: |c| c.b > 120.0 && c.r > 60.0 && c.r < 140.0 && c.g < 80.0,
    },
    ClassificationRule {
        label: "blue dominant",
        element: Element::Water,
        matches: |c| c.b > c.r && c.b > c.g && c.b > 80.0,
    },
    ClassificationRule {
        label: "green dominant",
        element: Element::Wood,
        matches: |c| c.g > c.r && c.g > c.b && c.g > 80.0,
    },
    ClassificationRule {
        label: "yellow or tan",
        element: Element::Earth,
        matches: |c| c.r > 130.0 && c.g > 100.0 && c.b < c.g * 0.8,
    },
    ClassificationRule {
        label: "brown",
        element: Element::Earth,
        matches: |c| c.r > 80.0 && c.g > 50.0 && c.g < c.r && c.b < c.g,
    },
];

/// Outcome of classifying one color, with the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub element: Element,
    /// `None` when no rule matched and the strongest channel decided.
    pub rule: Option<&'static str>,
}

/// Stateless classifier over [`RULES`].
pub struct ElementClassifier;

impl ElementClassifier {
    /// Classifies a hex string. Malformed input is classified as black.
    pub fn classify_hex(hex: &str) -> Element {
        Self::classify(Rgb::from_hex_lossy(hex))
    }

    pub fn classify(rgb: Rgb) -> Element {
        Self::explain(rgb).element
    }

    /// Classifies and reports which rule fired.
    pub fn explain(rgb: Rgb) -> Classification {
        let channels = Channels::from(rgb);
        RULES
            .iter()
            .find(|rule| (rule.matches)(&channels))
            .map(|rule| Classification {
                element: rule.element,
                rule: Some(rule.label),
            })
            .unwrap_or(Classification {
                element: Self::strongest_channel(rgb),
                rule: None,
            })
    }

    /// Ties go to red, then green.
    fn strongest_channel(rgb: Rgb) -> Element {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        if rgb.r == max {
            Element::Fire
        } else if rgb.g == max {
            Element::Wood
        } else if rgb.b == max {
            Element::Water
        } else {
            Element::Earth
        }
    }
}
