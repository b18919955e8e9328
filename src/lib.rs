#![warn(missing_docs)]

//! # `guardwalk`
//!
//! A simulator for the lab guard patrol puzzle: a guard walks a grid of floor and obstacles, walking straight ahead and turning right whenever something is in its way, until it leaves the map.
//! Begin by building a [`Lab`] with a [`LabBuilder`] or by parsing one from text, then call [`patrol()`](Lab::patrol) or [`count_loop_inducing_obstructions()`](Lab::count_loop_inducing_obstructions).
//!
//! ```
//! use guardwalk::Lab;
//!
//! let lab: Lab = "#..\n...\n.^.\n".parse().unwrap();
//! let patrol = lab.patrol().unwrap();
//! assert!(!patrol.looped);
//! assert_eq!(patrol.visited.len(), 3);
//! ```
//!
//! # Internals
//! A patrol is a walk through a finite state space: the guard is fully described by a [`Guard`], a location plus a [`Heading`], and there are only four headings per cell.
//! Rather than moving one cell at a time, each [`Stride`] covers a whole straight run up to the next obstacle or the edge of the map.
//! The state the guard strides from is recorded before every stride, and seeing one twice proves the guard will loop forever.
//! Every patrol walks a private copy of the cells, so the obstruction search can try each candidate independently and, with the `parallel` feature, concurrently.

pub use builder::{BuilderInvalidReason, LabBuilder};
pub use cell::Cell;
pub use error::{Error, MalformedReason};
pub use heading::Heading;
pub use lab::{Guard, Lab};
pub use location::{Dimension, Location};
pub use walk::{Patrol, Stride, Walk};

pub mod builder;
pub(crate) mod cell;
pub(crate) mod error;
pub(crate) mod heading;
pub(crate) mod lab;
pub(crate) mod location;
mod tests;
pub(crate) mod walk;
#[cfg(feature = "wasm")]
pub mod wasm;
