//! The [`Grid`] world state: cell classification plus the two endpoints.
//!
//! Invariants held after every successful or failed call:
//!
//! - origin and destination are in bounds and distinct;
//! - the cells under origin and destination are [`CellState::Clear`].

use std::fmt;

use crate::cell::CellState;
use crate::error::{Error, ParseError};
use crate::geom::{Bounds, Coord};

/// A fixed-size occupancy grid with an origin and a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct Grid {
    cells: Vec<CellState>,
    bounds: Bounds,
    origin: Coord,
    destination: Coord,
}

impl Grid {
    /// Create an all-Clear grid with the origin in the top-left corner and
    /// the destination in the bottom-right corner.
    pub fn new(rows: i32, cols: i32) -> Result<Self, Error> {
        let bounds = Self::checked_bounds(rows, cols)?;
        Self::with_endpoints(rows, cols, Coord::ZERO, bounds.last())
    }

    /// Create an all-Clear grid with explicit endpoints.
    pub fn with_endpoints(
        rows: i32,
        cols: i32,
        origin: Coord,
        destination: Coord,
    ) -> Result<Self, Error> {
        let bounds = Self::checked_bounds(rows, cols)?;
        for c in [origin, destination] {
            if !bounds.contains(c) {
                return Err(Error::OutOfBounds { coord: c, bounds });
            }
        }
        if origin == destination {
            return Err(Error::CoincidentEndpoints(origin));
        }
        Ok(Self {
            cells: vec![CellState::Clear; bounds.len()],
            bounds,
            origin,
            destination,
        })
    }

    fn checked_bounds(rows: i32, cols: i32) -> Result<Bounds, Error> {
        let bounds = Bounds::new(rows, cols);
        // Two distinct endpoints need at least two cells.
        if bounds.len() < 2 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(bounds)
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    #[inline]
    pub fn origin(&self) -> Coord {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> Coord {
        self.destination
    }

    /// Whether `c` is the origin or the destination.
    #[inline]
    pub fn is_endpoint(&self, c: Coord) -> bool {
        c == self.origin || c == self.destination
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// The state of `c`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<CellState> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// The state of `c`.
    pub fn classify(&self, c: Coord) -> Result<CellState, Error> {
        self.get(c).ok_or(Error::OutOfBounds {
            coord: c,
            bounds: self.bounds,
        })
    }

    fn checked_index(&self, c: Coord) -> Result<usize, Error> {
        self.bounds.index(c).ok_or(Error::OutOfBounds {
            coord: c,
            bounds: self.bounds,
        })
    }

    /// Write `state` unless `c` holds an endpoint. Returns whether the cell
    /// changed.
    fn paint(&mut self, c: Coord, state: CellState) -> Result<bool, Error> {
        let i = self.checked_index(c)?;
        if self.is_endpoint(c) || self.cells[i] == state {
            return Ok(false);
        }
        self.cells[i] = state;
        Ok(true)
    }

    /// Mark `c` as an obstacle. No-op on endpoint cells.
    pub fn set_obstacle(&mut self, c: Coord) -> Result<bool, Error> {
        self.paint(c, CellState::Obstacle)
    }

    /// Reset `c` to Clear, erasing an obstacle or zone. No-op on endpoint
    /// cells.
    pub fn clear_obstacle(&mut self, c: Coord) -> Result<bool, Error> {
        self.paint(c, CellState::Clear)
    }

    /// Mark `c` as a weighted zone. No-op on endpoint cells.
    pub fn set_zone(&mut self, c: Coord) -> Result<bool, Error> {
        self.paint(c, CellState::WeightedZone)
    }

    /// Relocate the origin to `c`, clearing whatever was painted there.
    ///
    /// The vacated cell keeps its state. Returns whether the origin moved.
    pub fn move_origin(&mut self, c: Coord) -> Result<bool, Error> {
        let i = self.checked_index(c)?;
        if c == self.destination {
            return Err(Error::CoincidentEndpoints(c));
        }
        self.cells[i] = CellState::Clear;
        let moved = self.origin != c;
        self.origin = c;
        Ok(moved)
    }

    /// Relocate the destination to `c`, clearing whatever was painted there.
    ///
    /// The vacated cell keeps its state. Returns whether the destination
    /// moved.
    pub fn move_destination(&mut self, c: Coord) -> Result<bool, Error> {
        let i = self.checked_index(c)?;
        if c == self.origin {
            return Err(Error::CoincidentEndpoints(c));
        }
        self.cells[i] = CellState::Clear;
        let moved = self.destination != c;
        self.destination = c;
        Ok(moved)
    }

    /// Set every cell back to Clear. Endpoints stay where they are.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Clear);
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Row-major iterator over `(Coord, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Parse the text form: one line per row, `.` Clear, `#` Obstacle,
    /// `~` WeightedZone, `S` origin, `D` destination.
    ///
    /// Leading and trailing blank lines are ignored.
    pub fn from_ascii(text: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = text
            .trim_matches('\n')
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        if lines.is_empty() || lines[0].is_empty() {
            return Err(ParseError::Empty);
        }
        let width = lines[0].chars().count();
        let mut origin = None;
        let mut destination = None;
        let mut states = Vec::with_capacity(width * lines.len());

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::InconsistentWidth {
                    line: row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let coord = Coord::new(row as i32, col as i32);
                let slot = match ch {
                    'S' => Some(&mut origin),
                    'D' => Some(&mut destination),
                    _ => None,
                };
                let state = match slot {
                    Some(slot) => {
                        if slot.is_some() {
                            return Err(ParseError::DuplicateEndpoint { glyph: ch, coord });
                        }
                        *slot = Some(coord);
                        CellState::Clear
                    }
                    None => {
                        CellState::from_glyph(ch).ok_or(ParseError::InvalidGlyph { ch, coord })?
                    }
                };
                states.push(state);
            }
        }

        let origin = origin.ok_or(ParseError::MissingEndpoint("origin"))?;
        let destination = destination.ok_or(ParseError::MissingEndpoint("destination"))?;
        let mut grid = Self::with_endpoints(lines.len() as i32, width as i32, origin, destination)?;
        grid.cells = states;
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, state) in self.iter() {
            let ch = if c == self.origin {
                'S'
            } else if c == self.destination {
                'D'
            } else {
                state.glyph()
            };
            write!(f, "{ch}")?;
            if c.col == self.cols() - 1 && c.row < self.rows() - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    rows: i32,
    cols: i32,
    origin: Coord,
    destination: Coord,
    cells: Vec<CellState>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        Self {
            rows: g.rows(),
            cols: g.cols(),
            origin: g.origin,
            destination: g.destination,
            cells: g.cells,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = Error;

    fn try_from(r: GridRepr) -> Result<Self, Error> {
        let mut grid = Grid::with_endpoints(r.rows, r.cols, r.origin, r.destination)?;
        if r.cells.len() != grid.cells.len() {
            return Err(Error::InvalidDimensions {
                rows: r.rows,
                cols: r.cols,
            });
        }
        grid.cells = r.cells;
        for c in [grid.origin, grid.destination] {
            if let Some(i) = grid.bounds.index(c) {
                grid.cells[i] = CellState::Clear;
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_endpoints_clear(g: &Grid) {
        assert_eq!(g.classify(g.origin()), Ok(CellState::Clear));
        assert_eq!(g.classify(g.destination()), Ok(CellState::Clear));
    }

    #[test]
    fn new_places_default_endpoints() {
        let g = Grid::new(4, 6).unwrap();
        assert_eq!(g.origin(), Coord::new(0, 0));
        assert_eq!(g.destination(), Coord::new(3, 5));
        assert_eq!(g.count(CellState::Clear), 24);
    }

    #[test]
    fn invalid_dimensions() {
        for (r, c) in [(0, 5), (5, 0), (-1, 3), (1, 1)] {
            assert_eq!(
                Grid::new(r, c),
                Err(Error::InvalidDimensions { rows: r, cols: c })
            );
        }
        assert!(Grid::new(1, 2).is_ok());
    }

    #[test]
    fn with_endpoints_validates() {
        assert_eq!(
            Grid::with_endpoints(3, 3, Coord::new(1, 1), Coord::new(1, 1)),
            Err(Error::CoincidentEndpoints(Coord::new(1, 1)))
        );
        assert!(matches!(
            Grid::with_endpoints(3, 3, Coord::new(0, 0), Coord::new(3, 0)),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn classify_out_of_bounds() {
        let g = Grid::new(2, 2).unwrap();
        assert_eq!(
            g.classify(Coord::new(0, 2)),
            Err(Error::OutOfBounds {
                coord: Coord::new(0, 2),
                bounds: Bounds::new(2, 2),
            })
        );
    }

    #[test]
    fn paint_and_erase() {
        let mut g = Grid::new(3, 3).unwrap();
        let c = Coord::new(1, 1);
        assert_eq!(g.set_obstacle(c), Ok(true));
        assert_eq!(g.set_obstacle(c), Ok(false));
        assert_eq!(g.classify(c), Ok(CellState::Obstacle));
        assert_eq!(g.set_zone(c), Ok(true));
        assert_eq!(g.classify(c), Ok(CellState::WeightedZone));
        assert_eq!(g.clear_obstacle(c), Ok(true));
        assert_eq!(g.classify(c), Ok(CellState::Clear));
        assert!(g.set_zone(Coord::new(-1, 0)).is_err());
    }

    #[test]
    fn paint_skips_endpoints() {
        let mut g = Grid::new(3, 3).unwrap();
        assert_eq!(g.set_obstacle(g.origin()), Ok(false));
        assert_eq!(g.set_zone(g.destination()), Ok(false));
        assert_endpoints_clear(&g);
    }

    #[test]
    fn move_origin_clears_target() {
        let mut g = Grid::new(3, 3).unwrap();
        let target = Coord::new(1, 2);
        g.set_zone(target).unwrap();
        assert_eq!(g.move_origin(target), Ok(true));
        assert_eq!(g.origin(), target);
        assert_endpoints_clear(&g);
        // Vacated cell keeps its (clear) state.
        assert_eq!(g.classify(Coord::new(0, 0)), Ok(CellState::Clear));
        assert_eq!(g.move_origin(target), Ok(false));
    }

    #[test]
    fn move_onto_other_endpoint_fails() {
        let mut g = Grid::new(3, 3).unwrap();
        let (o, d) = (g.origin(), g.destination());
        assert_eq!(g.move_origin(d), Err(Error::CoincidentEndpoints(d)));
        assert_eq!(g.move_destination(o), Err(Error::CoincidentEndpoints(o)));
        assert_eq!((g.origin(), g.destination()), (o, d));
    }

    #[test]
    fn move_destination_out_of_bounds_leaves_state() {
        let mut g = Grid::new(3, 3).unwrap();
        let before = g.clone();
        assert!(g.move_destination(Coord::new(9, 9)).is_err());
        assert_eq!(g, before);
    }

    #[test]
    fn reset_keeps_endpoints() {
        let mut g = Grid::with_endpoints(3, 3, Coord::new(0, 1), Coord::new(2, 1)).unwrap();
        g.set_obstacle(Coord::new(1, 1)).unwrap();
        g.set_zone(Coord::new(1, 0)).unwrap();
        g.reset();
        assert_eq!(g.count(CellState::Clear), 9);
        assert_eq!(g.origin(), Coord::new(0, 1));
    }

    const MAP: &str = "
S.#.
.~#.
...D
";

    #[test]
    fn ascii_round_trip() {
        let g = Grid::from_ascii(MAP).unwrap();
        assert_eq!(g.bounds(), Bounds::new(3, 4));
        assert_eq!(g.origin(), Coord::new(0, 0));
        assert_eq!(g.destination(), Coord::new(2, 3));
        assert_eq!(g.classify(Coord::new(1, 1)), Ok(CellState::WeightedZone));
        assert_eq!(g.count(CellState::Obstacle), 2);
        assert_eq!(g.to_string(), MAP.trim());
    }

    #[test]
    fn ascii_errors() {
        assert_eq!(Grid::from_ascii(""), Err(ParseError::Empty));
        assert_eq!(
            Grid::from_ascii("S..\n.D"),
            Err(ParseError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2,
            })
        );
        assert_eq!(
            Grid::from_ascii("S.x\n..D"),
            Err(ParseError::InvalidGlyph {
                ch: 'x',
                coord: Coord::new(0, 2),
            })
        );
        assert_eq!(
            Grid::from_ascii("S..\n..."),
            Err(ParseError::MissingEndpoint("destination"))
        );
        assert_eq!(
            Grid::from_ascii("S.S\n..D"),
            Err(ParseError::DuplicateEndpoint {
                glyph: 'S',
                coord: Coord::new(0, 2),
            })
        );
        assert_eq!(
            Grid::from_ascii("SD"),
            Ok(Grid::with_endpoints(1, 2, Coord::new(0, 0), Coord::new(0, 1)).unwrap())
        );
    }
}
