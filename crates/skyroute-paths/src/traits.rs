use skyroute_core::{Bounds, CellState, Coord, Grid};

/// Minimal search interface: the searchable rectangle and its edges.
pub trait Pather {
    /// The rectangle searched. Coordinates outside it never appear.
    fn bounds(&self) -> Bounds;

    /// Whether `c` is part of the search graph at all.
    fn passable(&self, c: Coord) -> bool;

    /// Append neighbors of `c` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Only called for `to`
    /// produced by [`Pather::neighbors`].
    fn cost(&self, from: Coord, to: Coord) -> u32;
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    #[inline]
    fn passable(&self, c: Coord) -> bool {
        self.get(c).is_some_and(CellState::is_passable)
    }

    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.extend(c.neighbors_4().into_iter().filter(|&n| self.passable(n)));
    }
}

impl WeightedPather for Grid {
    #[inline]
    fn cost(&self, _from: Coord, to: Coord) -> u32 {
        self.get(to).and_then(CellState::cost).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_neighbors_skip_obstacles_and_edges() {
        let g = Grid::from_ascii("S#.\n~.D").unwrap();
        let mut buf = Vec::new();
        g.neighbors(Coord::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Coord::new(1, 0)]);
        assert_eq!(g.cost(Coord::new(0, 0), Coord::new(1, 0)), 5);
        assert_eq!(g.cost(Coord::new(1, 0), Coord::new(1, 1)), 1);
        assert!(!g.passable(Coord::new(0, 1)));
        assert!(!g.passable(Coord::new(2, 0)));
    }
}
