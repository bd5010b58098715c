//! Percentage value object (0-100 scale).

use serde::Serialize;
use std::fmt;

/// A whole-number share between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Share of `part` in `total`, rounded half up to a whole percent.
    ///
    /// Each share is rounded on its own, so a set of shares may not add up
    /// to exactly 100. A zero `total` yields zero.
    pub fn of(part: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let raw = (part as f64 / total as f64) * 100.0;
        Self::new(raw.round().clamp(0.0, 100.0) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_100() {
        assert_eq!(Percentage::new(100).value(), 100);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn of_rounds_each_share_independently() {
        assert_eq!(Percentage::of(1, 3).value(), 33);
        assert_eq!(Percentage::of(2, 3).value(), 67);
        assert_eq!(Percentage::of(1, 1).value(), 100);
        assert_eq!(Percentage::of(0, 5).value(), 0);
    }

    #[test]
    fn of_rounds_halves_up() {
        assert_eq!(Percentage::of(1, 8).value(), 13);
        assert_eq!(Percentage::of(3, 8).value(), 38);
    }

    #[test]
    fn of_zero_total_is_zero() {
        assert_eq!(Percentage::of(0, 0), Percentage::ZERO);
    }

    #[test]
    fn rounding_drift_is_preserved() {
        let total: u32 = [1, 1, 1]
            .iter()
            .map(|c| Percentage::of(*c, 3).value() as u32)
            .sum();
        assert_eq!(total, 99);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&Percentage::new(40)).unwrap();
        assert_eq!(json, "40");
    }
}
