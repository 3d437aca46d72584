//! **skyroute-core** — occupancy grid model for single-drone route planning.
//!
//! This crate provides the foundational types used across the *skyroute*
//! crates: grid coordinates, cell classification with its edge-cost
//! function, the [`Grid`] world state with its endpoint invariants, and the
//! shared [`Error`] taxonomy.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{CLEAR_COST, CellState, ZONE_COST};
pub use error::{Error, ParseError};
pub use geom::{Bounds, BoundsIter, Coord};
pub use grid::Grid;
