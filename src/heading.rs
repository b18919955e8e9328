use strum::VariantArray;

use crate::location::Location;

/// The direction a guard faces, as drawn on the map with `^`, `>`, `v` and `<`.
///
/// Variants are declared in clockwise order starting from [`Up`](Heading::Up).
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// Attempt one step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// Stepping off the top or left edge wraps around to a location no lab can contain.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Right => location.offset_by((1, 0)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
        }
    }

    /// Rotate 90 degrees clockwise.
    pub fn turn_right(&self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// The map symbol for a guard facing this way.
    pub fn symbol(&self) -> char {
        match self {
            Self::Up => '^',
            Self::Right => '>',
            Self::Down => 'v',
            Self::Left => '<',
        }
    }

    /// Inverse of [`Self::symbol`].
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|heading| heading.symbol() == symbol)
    }
}
