use thiserror::Error;

use crate::builder::BuilderInvalidReason;
use crate::location::Location;

/// Why a line of map text could not be decoded.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum MalformedReason {
    /// There were no lines at all.
    #[error("the map is empty")]
    Empty,
    /// A character outside `. # ^ > v <`.
    #[error("unrecognized symbol {0:?}")]
    UnknownSymbol(char),
    /// The line length differs from the first line.
    #[error("expected a line of {expected} cells, found {found}")]
    RaggedLine { expected: usize, found: usize },
}

/// Everything that can go wrong loading or patrolling a lab.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The input text is not a rectangular map. `line` and `column` are 1-based.
    #[error("malformed map at line {line}, column {column}: {reason}")]
    MalformedGrid { line: usize, column: usize, reason: MalformedReason },
    #[error("no guard on the map")]
    MissingGuard,
    #[error("more than one guard on the map, at {first} and {second}")]
    MultipleGuards { first: Location, second: Location },
    #[error("an obstacle was placed under the guard")]
    ObstacleOnGuard,
    #[error("{location} lies outside the map")]
    FeatureOutOfBounds { location: Location },
    /// The stride cap was reached without the guard leaving or repeating itself.
    /// Loop detection makes this unreachable; seeing it means a bug.
    #[error("patrol ran past {limit} strides without leaving the map or repeating a state")]
    LoopBoundExceeded { limit: usize },
}

impl From<BuilderInvalidReason> for Error {
    fn from(reason: BuilderInvalidReason) -> Self {
        match reason {
            BuilderInvalidReason::FeatureOutOfBounds { location } => Error::FeatureOutOfBounds { location },
            BuilderInvalidReason::MissingGuard => Error::MissingGuard,
            BuilderInvalidReason::MultipleGuards { first, second } => Error::MultipleGuards { first, second },
            BuilderInvalidReason::ObstacleOnGuard => Error::ObstacleOnGuard,
        }
    }
}
