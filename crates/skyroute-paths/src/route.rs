//! Route reconstruction and run metrics.

use std::time::Duration;

use skyroute_core::{Coord, Error};

use crate::result::{Outcome, SearchResult};

/// Origin-to-destination sequence of cells, both ends included.
///
/// Empty when the search did not reach the destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    coords: Vec<Coord>,
}

impl Route {
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of moves (cells minus one).
    #[inline]
    pub fn steps(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    #[inline]
    pub fn first(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.coords.contains(&c)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.coords.iter()
    }

    pub fn into_vec(self) -> Vec<Coord> {
        self.coords
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;
    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

/// Walk predecessors back from the destination and return the route in
/// origin-to-destination order.
///
/// A search that did not reach its destination yields an empty route. The
/// walk gives up with [`Error::BrokenPredecessorChain`] rather than loop when
/// the chain is longer than the grid has cells or stops short of the origin.
pub fn reconstruct(result: &SearchResult) -> Result<Route, Error> {
    if !result.is_reached() {
        return Ok(Route::default());
    }
    let origin = result.origin();
    let limit = result.bounds().len();

    let mut cur = result.destination();
    let mut coords = vec![cur];
    let mut steps = 0;
    while cur != origin {
        if steps >= limit {
            return Err(Error::BrokenPredecessorChain { steps });
        }
        cur = result
            .predecessor(cur)
            .ok_or(Error::BrokenPredecessorChain { steps })?;
        coords.push(cur);
        steps += 1;
    }
    coords.reverse();
    Ok(Route { coords })
}

/// Summary numbers for one run, ready for a status panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub outcome: Outcome,
    pub cost: Option<u32>,
    pub expansions: usize,
    pub elapsed: Duration,
    /// Cells on the route, endpoints included. Zero without a route.
    pub route_len: usize,
}

impl Metrics {
    pub fn new(result: &SearchResult, route: &Route) -> Self {
        Self {
            outcome: result.outcome(),
            cost: result.cost(),
            expansions: result.expansions(),
            elapsed: result.elapsed(),
            route_len: route.len(),
        }
    }
}
