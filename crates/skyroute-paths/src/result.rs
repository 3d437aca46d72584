use std::time::Duration;

use skyroute_core::{Bounds, Coord, Error};

use crate::node::{NO_PARENT, UNREACHABLE};
use crate::route::{Route, reconstruct};

/// How a search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The destination was popped from the queue; its cost is final.
    Reached,
    /// The queue ran dry without ever popping the destination.
    Unreachable,
    /// A [`CancelToken`](crate::CancelToken) fired between expansions.
    Cancelled,
}

/// Everything one solver run produced.
///
/// The result is an owned value: the solver keeps no reference to it and it
/// does not change when the grid is edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ResultRepr")
)]
pub struct SearchResult {
    pub(crate) bounds: Bounds,
    pub(crate) origin: Coord,
    pub(crate) destination: Coord,
    pub(crate) outcome: Outcome,
    pub(crate) visited: Vec<Coord>,
    pub(crate) best: Vec<u32>,
    pub(crate) parents: Vec<usize>,
    pub(crate) elapsed: Duration,
}

impl SearchResult {
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_reached(&self) -> bool {
        self.outcome == Outcome::Reached
    }

    #[inline]
    pub fn origin(&self) -> Coord {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> Coord {
        self.destination
    }

    /// The rectangle the search ran over.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Expanded coordinates in the order they were popped. On success the
    /// destination is the last entry.
    #[inline]
    pub fn visited(&self) -> &[Coord] {
        &self.visited
    }

    /// Number of expansions performed.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.visited.len()
    }

    /// Wall-clock time spent searching.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total route cost, present only when the destination was reached.
    pub fn cost(&self) -> Option<u32> {
        if !self.is_reached() {
            return None;
        }
        self.cost_at(self.destination)
    }

    /// Best cost known for `c` when the search stopped. Final for expanded
    /// cells, tentative for cells still on the frontier.
    pub fn cost_at(&self, c: Coord) -> Option<u32> {
        let i = self.bounds.index(c)?;
        match *self.best.get(i)? {
            UNREACHABLE => None,
            cost => Some(cost),
        }
    }

    /// The cell `c` was best reached from. `None` for the origin and for
    /// cells never reached.
    pub fn predecessor(&self, c: Coord) -> Option<Coord> {
        let i = self.bounds.index(c)?;
        match *self.parents.get(i)? {
            NO_PARENT => None,
            p if p < self.bounds.len() => Some(self.bounds.coord(p)),
            _ => None,
        }
    }

    /// Shorthand for [`reconstruct`].
    pub fn route(&self) -> Result<Route, Error> {
        reconstruct(self)
    }
}


// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

/// Inconsistent tables in a deserialized [`SearchResult`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResultTableError {
    #[error("{table} table has {found} entries, expected {expected} for a {bounds} grid")]
    TableSize {
        table: &'static str,
        expected: usize,
        found: usize,
        bounds: Bounds,
    },
    #[error("parent index {parent} of cell {cell} is outside the grid")]
    ParentOutOfRange { cell: usize, parent: usize },
    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(Coord),
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ResultRepr {
    bounds: Bounds,
    origin: Coord,
    destination: Coord,
    outcome: Outcome,
    visited: Vec<Coord>,
    best: Vec<u32>,
    parents: Vec<usize>,
    elapsed: Duration,
}

#[cfg(feature = "serde")]
impl TryFrom<ResultRepr> for SearchResult {
    type Error = ResultTableError;

    fn try_from(r: ResultRepr) -> Result<Self, ResultTableError> {
        let len = r.bounds.len();
        for (table, found) in [("best", r.best.len()), ("parents", r.parents.len())] {
            if found != len {
                return Err(ResultTableError::TableSize {
                    table,
                    expected: len,
                    found,
                    bounds: r.bounds,
                });
            }
        }
        if let Some((cell, &parent)) = r
            .parents
            .iter()
            .enumerate()
            .find(|&(_, &p)| p != NO_PARENT && p >= len)
        {
            return Err(ResultTableError::ParentOutOfRange { cell, parent });
        }
        let mut coords = [r.origin, r.destination]
            .into_iter()
            .chain(r.visited.iter().copied());
        if let Some(c) = coords.find(|&c| !r.bounds.contains(c)) {
            return Err(ResultTableError::OutOfBounds(c));
        }
        Ok(Self {
            bounds: r.bounds,
            origin: r.origin,
            destination: r.destination,
            outcome: r.outcome,
            visited: r.visited,
            best: r.best,
            parents: r.parents,
            elapsed: r.elapsed,
        })
    }
}
