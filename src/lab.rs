use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::str::FromStr;

use itertools::Itertools;
use log::debug;
use ndarray::Array2;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::builder::LabBuilder;
use crate::cell::Cell;
use crate::error::{Error, MalformedReason};
use crate::heading::Heading;
use crate::location::{Dimension, Location};
use crate::walk::{Patrol, Walk};

/// Where the guard stands and which way it faces. Two equal [`Guard`]s mean the patrol will play out identically from there on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Guard {
    /// Where the guard stands
    pub location: Location,
    /// Which way it faces
    pub heading: Heading,
}

/// A lab map: a fixed rectangle of [`Cell`]s with exactly one guard on it.
///
/// [`Lab`]s are built with a [`LabBuilder`] or parsed from text with [`str::parse`].
/// A lab is never changed by patrolling it; every patrol walks its own copy of the cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lab {
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) cells: Array2<Cell>,
    pub(crate) start: Guard,
}

impl Lab {
    /// Width and height, in that order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The guard as it stands before any patrol.
    pub fn start(&self) -> Guard {
        self.start
    }

    /// The cell at `location`, if it lies on the map.
    pub fn get(&self, location: Location) -> Option<&Cell> {
        self.cells.get(location.as_index())
    }

    /// Begin a patrol on a copy of this lab's cells.
    pub fn walk(&self) -> Walk {
        Walk::new(self.cells.clone(), self.start)
    }

    /// Patrol until the guard leaves the map or repeats itself. See [`Walk::run`].
    pub fn patrol(&self) -> Result<Patrol, Error> {
        self.walk().run()
    }

    /// A copy of this lab with an extra obstacle at `location`.
    ///
    /// Returns `None` if `location` is off the map or is not empty floor.
    pub fn with_obstruction(&self, location: Location) -> Option<Lab> {
        if self.get(location) != Some(&Cell::Empty) {
            return None;
        }

        let mut obstructed = self.clone();
        obstructed.cells[location.as_index()] = Cell::Obstacle;
        Some(obstructed)
    }

    fn traps_guard(&self, location: Location) -> Result<bool, Error> {
        match self.with_obstruction(location) {
            None => Ok(false),
            Some(obstructed) => obstructed.patrol().map(|patrol| patrol.looped),
        }
    }

    /// Count the empty locations which, if given an obstacle, leave the guard walking in a loop forever.
    ///
    /// Every empty cell is tried on its own copy of the lab; existing obstacles and the guard's starting cell are never candidates.
    /// With the `parallel` feature the candidates are spread over the rayon thread pool.
    pub fn count_loop_inducing_obstructions(&self) -> Result<usize, Error> {
        let candidates = self.cells.indexed_iter()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| Location::from(index))
            .collect_vec();
        debug!("trying {} obstruction candidates", candidates.len());

        #[cfg(feature = "parallel")]
        let candidates = candidates.par_iter();
        #[cfg(not(feature = "parallel"))]
        let candidates = candidates.iter();

        let count = candidates
            .map(|location| self.traps_guard(*location).map(usize::from))
            .sum::<Result<usize, Error>>()?;
        debug!("{count} obstructions trap the guard");

        Ok(count)
    }
}

impl FromStr for Lab {
    type Err = Error;

    /// Decode a map drawn with `.` for floor, `#` for obstacles and one of `^ > v <` for the guard.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s.lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect_vec();

        let empty = Error::MalformedGrid { line: 1, column: 1, reason: MalformedReason::Empty };
        let width = lines.first().and_then(|line| NonZero::new(line.chars().count())).ok_or(empty.clone())?;
        let height = NonZero::new(lines.len()).ok_or(empty)?;

        let mut builder = LabBuilder::with_dims((width, height));
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width.get() {
                return Err(Error::MalformedGrid {
                    line: y + 1,
                    column: found.min(width.get()) + 1,
                    reason: MalformedReason::RaggedLine { expected: width.get(), found },
                });
            }

            for (x, symbol) in line.chars().enumerate() {
                match Cell::from_symbol(symbol) {
                    None => return Err(Error::MalformedGrid {
                        line: y + 1,
                        column: x + 1,
                        reason: MalformedReason::UnknownSymbol(symbol),
                    }),
                    Some(Cell::Obstacle) => { builder.add_obstacle(Location(x, y)); }
                    Some(Cell::Guard { heading }) => { builder.place_guard(Location(x, y), heading); }
                    Some(_) => {}
                }
            }
        }

        builder.build().map_err(|reasons| reasons.into_iter().next().map_or(Error::MissingGuard, Error::from))
    }
}

impl Display for Lab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", print(&self.cells))
    }
}

pub(crate) fn print(cells: &Array2<Cell>) -> String {
    let mut out = String::with_capacity(cells.nrows() * (cells.ncols() + 1));

    for row in cells.rows() {
        for cell in row {
            out.push_str(&cell.to_string());
        }
        out.push('\n');
    }

    out
}
