//! Compass orientation of a room.

use std::fmt;
use std::str::FromStr;

use super::Element;
use crate::domain::foundation::ValidationError;

/// One of the eight compass points a room can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// The element whose energy this direction channels.
    pub fn element(&self) -> Element {
        match self {
            Direction::N => Element::Water,
            Direction::S => Element::Fire,
            Direction::E | Direction::SE => Element::Wood,
            Direction::W | Direction::NW => Element::Metal,
            Direction::NE | Direction::SW => Element::Earth,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    /// Exact, case-sensitive match on the abbreviation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "direction",
                    format!("'{}' is not one of N, NE, E, SE, S, SW, W, NW", s),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_direction_to_its_element() {
        assert_eq!(Direction::N.element(), Element::Water);
        assert_eq!(Direction::S.element(), Element::Fire);
        assert_eq!(Direction::E.element(), Element::Wood);
        assert_eq!(Direction::W.element(), Element::Metal);
        assert_eq!(Direction::NE.element(), Element::Earth);
        assert_eq!(Direction::NW.element(), Element::Metal);
        assert_eq!(Direction::SE.element(), Element::Wood);
        assert_eq!(Direction::SW.element(), Element::Earth);
    }

    #[test]
    fn parses_every_abbreviation() {
        for direction in Direction::ALL {
            assert_eq!(direction.as_str().parse::<Direction>().unwrap(), direction);
        }
    }

    #[test]
    fn rejects_lowercase_and_unknown_values() {
        assert!("n".parse::<Direction>().is_err());
        assert!("North".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
        assert!(" N".parse::<Direction>().is_err());
    }

    #[test]
    fn parse_error_names_the_field() {
        let err = "X".parse::<Direction>().unwrap_err();
        assert_eq!(err.field(), "direction");
    }
}
