use std::num::NonZero;
use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};

use crate::cell::Cell;
use crate::heading::Heading;
use crate::lab::{Guard, Lab};
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// An obstacle or the guard was placed outside the bounds specified by `dims` on the builder.
    FeatureOutOfBounds { location: Location },
    /// [`LabBuilder::build`] was called before any guard was placed.
    MissingGuard,
    /// A second guard was placed; `first` is where the existing one stands.
    MultipleGuards { first: Location, second: Location },
    /// An obstacle and the guard were put on the same location.
    ObstacleOnGuard,
}

/// A builder for [`Lab`]s.
///
/// Like the map it describes, it starts out as empty floor. Obstacles are added one at a time and exactly one guard must be placed.
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug)]
pub struct LabBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
    guard: Option<Guard>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for LabBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::<usize>::MIN, NonZero::<usize>::MIN))
    }
}

impl LabBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(x, y)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Cell::default),
            guard: None,
            invalid_reasons: Default::default(),
        }
    }

    fn check_bounds(&mut self, location: Location) -> bool {
        if !location.within(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds { location });
            return false;
        }

        true
    }

    /// Put an obstacle at `location`. Adding the same obstacle twice is harmless.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds,
    /// or an [`ObstacleOnGuard`](BuilderInvalidReason::ObstacleOnGuard) state if the guard stands there.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_obstacle(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() || !self.check_bounds(location) {
            return self;
        }

        if self.guard.is_some_and(|guard| guard.location == location) {
            self.invalid_reasons.push(BuilderInvalidReason::ObstacleOnGuard);
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(Cell::Obstacle);
        self
    }

    /// Place the guard at `location`, facing `heading`.
    ///
    /// May cause the builder to enter a [`MultipleGuards`](BuilderInvalidReason::MultipleGuards) invalid state if a guard was already placed,
    /// in addition to the out of bounds and obstacle conditions of [`Self::add_obstacle`].
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn place_guard(&mut self, location: Location, heading: Heading) -> &mut Self {
        if !self.invalid_reasons.is_empty() || !self.check_bounds(location) {
            return self;
        }

        if let Some(existing) = self.guard {
            self.invalid_reasons.push(BuilderInvalidReason::MultipleGuards { first: existing.location, second: location });
            return self;
        }

        if self.cells[location.as_index()] == Cell::Obstacle {
            self.invalid_reasons.push(BuilderInvalidReason::ObstacleOnGuard);
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(Cell::Guard { heading });
        self.guard = Some(Guard { location, heading });
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// A builder without a guard yet is still valid here; only [`Self::build`] insists on one.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Lab`].
    /// If the builder is invalid for any reason, a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Lab, Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(self.invalid_reasons.clone());
        }

        match self.guard {
            None => Err(vec![BuilderInvalidReason::MissingGuard]),
            Some(guard) => Ok(Lab {
                dims: self.dims,
                cells: self.cells.clone(),
                start: guard,
            }),
        }
    }
}
