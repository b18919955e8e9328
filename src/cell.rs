use std::fmt::{Display, Formatter};

use crate::heading::Heading;

/// One square of a lab map.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Cell {
    /// Open floor, `.`
    #[default]
    Empty,
    /// Something the guard cannot walk through, `#`
    Obstacle,
    /// Floor the guard has already walked over, `X`
    Visited,
    /// The guard itself, drawn with its [`Heading`] symbol
    Guard {
        /// Which way the guard faces
        heading: Heading,
    },
}

impl Cell {
    pub(crate) const OBSTACLE: char = '#';
    pub(crate) const EMPTY: char = '.';
    pub(crate) const VISITED: char = 'X';

    /// Whether the guard has stood on this cell, including the cell it stands on now.
    pub fn is_trodden(&self) -> bool {
        matches!(self, Cell::Visited | Cell::Guard { .. })
    }

    /// Decode a map symbol. Only the symbols of an untouched map are accepted, never `X`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            Self::EMPTY => Some(Cell::Empty),
            Self::OBSTACLE => Some(Cell::Obstacle),
            other => Heading::from_symbol(other).map(|heading| Cell::Guard { heading }),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Cell::Empty => Self::EMPTY,
            Cell::Obstacle => Self::OBSTACLE,
            Cell::Visited => Self::VISITED,
            Cell::Guard { heading } => heading.symbol(),
        })
    }
}
