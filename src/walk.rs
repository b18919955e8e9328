use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use log::trace;
use ndarray::Array2;

use crate::cell::Cell;
use crate::error::Error;
use crate::heading::Heading;
use crate::lab::{print, Guard};
use crate::location::Location;

/// The result of a single [`Walk::step`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stride {
    /// Where the guard stopped: in front of an obstacle, or on the edge of the map if it [`exited`](Stride::exited).
    pub location: Location,
    /// The heading after the stride, already turned if an obstacle stopped the guard.
    pub heading: Heading,
    /// Whether the guard walked off the map.
    pub exited: bool,
}

/// How a patrol ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patrol {
    /// Every location the guard stood on, regardless of heading. Always includes the start.
    pub visited: HashSet<Location>,
    /// `true` if the guard came back to a location and heading it had already left from, `false` if it left the map.
    pub looped: bool,
}

/// A guard patrolling its own copy of a lab's cells.
///
/// Obtain one with [`Lab::walk`](crate::Lab::walk).
#[derive(Clone, Debug)]
pub struct Walk {
    cells: Array2<Cell>,
    guard: Guard,
    exited: bool,
}

impl Walk {
    pub(crate) fn new(cells: Array2<Cell>, guard: Guard) -> Self {
        Self { cells, guard, exited: false }
    }

    /// Where the guard stands now, or stood last if it has exited.
    pub fn guard(&self) -> Guard {
        self.guard
    }

    /// Whether the guard has walked off the map.
    pub fn exited(&self) -> bool {
        self.exited
    }

    /// The most strides a patrol of this map can take before some [`Guard`] state must repeat.
    pub fn stride_limit(&self) -> usize {
        4 * self.cells.len() + 1
    }

    /// Walk straight ahead until something is in the way or the map ends.
    ///
    /// Every cell walked over, the starting one included, is marked [`Cell::Visited`].
    /// If an obstacle stops the guard it turns right where it stands; otherwise the stride ends on the edge of the map and the guard has exited.
    /// Only cells ahead of the guard are ever looked at. Calling this after the guard exited does nothing.
    pub fn step(&mut self) -> Stride {
        let Guard { mut location, heading } = self.guard;
        if self.exited {
            return Stride { location, heading, exited: true };
        }

        loop {
            self.cells[location.as_index()] = Cell::Visited;
            let ahead = heading.attempt_from(location);

            match self.cells.get(ahead.as_index()) {
                None => {
                    self.guard = Guard { location, heading };
                    self.exited = true;
                    return Stride { location, heading, exited: true };
                }
                Some(Cell::Obstacle) => {
                    let heading = heading.turn_right();
                    self.cells[location.as_index()] = Cell::Guard { heading };
                    self.guard = Guard { location, heading };
                    return Stride { location, heading, exited: false };
                }
                Some(_) => location = ahead,
            }
        }
    }

    /// Keep striding until the guard leaves the map or is about to stride from a [`Guard`] state it has stridden from before.
    ///
    /// A repeated state means the guard would retrace the same path forever, which is reported as [`Patrol::looped`].
    pub fn run(&mut self) -> Result<Patrol, Error> {
        self.run_with_limit(self.stride_limit())
    }

    pub(crate) fn run_with_limit(&mut self, limit: usize) -> Result<Patrol, Error> {
        let mut log: HashSet<Guard> = HashSet::new();

        for _ in 0..limit {
            if self.exited {
                return Ok(self.finish(false));
            }

            if !log.insert(self.guard) {
                return Ok(self.finish(true));
            }

            let stride = self.step();
            trace!("guard strode to {} facing {:?}{}", stride.location, stride.heading, if stride.exited { " and left" } else { "" });
        }

        Err(Error::LoopBoundExceeded { limit })
    }

    fn finish(&self, looped: bool) -> Patrol {
        let visited: HashSet<Location> = self.cells.indexed_iter()
            .filter(|(_, cell)| cell.is_trodden())
            .map(|(index, _)| Location::from(index))
            .collect();
        trace!("patrol {} at {} after visiting {} cells", if looped { "looped" } else { "left the map" }, self.guard.location, visited.len());

        Patrol { visited, looped }
    }
}

impl Display for Walk {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", print(&self.cells))
    }
}
