use std::collections::BinaryHeap;
use std::time::Instant;

use log::{debug, trace, warn};
use skyroute_core::{Coord, Error, Grid};

use crate::cancel::CancelToken;
use crate::node::{HeapEntry, NO_PARENT, UNREACHABLE};
use crate::result::{Outcome, SearchResult};
use crate::traits::WeightedPather;

/// Single-source, single-target Dijkstra search over 4-connected grids.
///
/// `Solver` owns its scratch buffers (open list, neighbor buffer) and reuses
/// them across runs. Each run returns a fully materialized [`SearchResult`].
#[derive(Debug, Default)]
pub struct Solver {
    cancel: Option<CancelToken>,
    open: BinaryHeap<HeapEntry>,
    nbuf: Vec<Coord>,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `token` between expansions and stop early when it fires.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn set_cancel(&mut self, token: Option<CancelToken>) {
        self.cancel = token;
    }

    pub fn cancel_token(&self) -> Option<&CancelToken> {
        self.cancel.as_ref()
    }

    /// Search from the grid's origin to its destination.
    pub fn solve(&mut self, grid: &Grid) -> Result<SearchResult, Error> {
        self.search(grid, grid.origin(), grid.destination())
    }

    /// Search from `origin` to `destination` over any weighted pather.
    ///
    /// Fails with [`Error::OutOfBounds`] or [`Error::InvalidEndpoint`] before
    /// any expansion if an endpoint is outside the rectangle or impassable.
    /// Equal endpoints short-circuit to a zero-cost result with a single
    /// expansion.
    pub fn search<P: WeightedPather>(
        &mut self,
        pather: &P,
        origin: Coord,
        destination: Coord,
    ) -> Result<SearchResult, Error> {
        let bounds = pather.bounds();
        let mut endpoints = [0usize; 2];
        for (slot, c) in endpoints.iter_mut().zip([origin, destination]) {
            *slot = bounds
                .index(c)
                .ok_or(Error::OutOfBounds { coord: c, bounds })?;
            if !pather.passable(c) {
                return Err(Error::InvalidEndpoint(c));
            }
        }
        let [oi, di] = endpoints;

        let started = Instant::now();
        debug!("search {origin} -> {destination} on {bounds} grid");

        let len = bounds.len();
        let mut best = vec![UNREACHABLE; len];
        let mut parents = vec![NO_PARENT; len];
        let mut closed = vec![false; len];
        let mut visited = Vec::new();

        let mut open = std::mem::take(&mut self.open);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        open.clear();

        best[oi] = 0;
        let mut seq = 0u64;
        open.push(HeapEntry {
            idx: oi,
            cost: 0,
            seq,
        });

        let outcome = loop {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                warn!("search cancelled after {} expansions", visited.len());
                break Outcome::Cancelled;
            }
            let Some(current) = open.pop() else {
                break Outcome::Unreachable;
            };
            let ci = current.idx;
            // Lazy deletion: a finalized cell or an outdated duplicate.
            if closed[ci] || current.cost > best[ci] {
                trace!("skip stale entry {} at cost {}", bounds.coord(ci), current.cost);
                continue;
            }
            closed[ci] = true;
            let cp = bounds.coord(ci);
            visited.push(cp);
            if ci == di {
                break Outcome::Reached;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = bounds.index(np) else {
                    continue;
                };
                if closed[ni] {
                    continue;
                }
                let tentative = current.cost.saturating_add(pather.cost(cp, np));
                if tentative >= best[ni] {
                    continue;
                }
                best[ni] = tentative;
                parents[ni] = ci;
                seq += 1;
                open.push(HeapEntry {
                    idx: ni,
                    cost: tentative,
                    seq,
                });
            }
        };

        open.clear();
        self.open = open;
        self.nbuf = nbuf;

        let elapsed = started.elapsed();
        debug!(
            "search {:?}: cost {:?}, {} expansions in {:?}",
            outcome,
            (outcome == Outcome::Reached).then(|| best[di]),
            visited.len(),
            elapsed
        );

        Ok(SearchResult {
            bounds,
            origin,
            destination,
            outcome,
            visited,
            best,
            parents,
            elapsed,
        })
    }
}
