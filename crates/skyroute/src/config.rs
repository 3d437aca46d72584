//! Session configuration.

use skyroute_core::{Coord, Error, Grid};

/// Dimensions and starting endpoints of a session.
///
/// [`Session::reset`](crate::Session::reset) returns to exactly this state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SessionConfig {
    pub rows: i32,
    pub cols: i32,
    pub origin: Coord,
    pub destination: Coord,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 40,
            origin: Coord::new(5, 8),
            destination: Coord::new(20, 25),
        }
    }
}

impl SessionConfig {
    pub fn new(rows: i32, cols: i32, origin: Coord, destination: Coord) -> Self {
        Self {
            rows,
            cols,
            origin,
            destination,
        }
    }

    /// Check the grid invariants without keeping the grid.
    pub fn validate(&self) -> Result<(), Error> {
        self.build_grid().map(|_| ())
    }

    /// A blank grid with this configuration's size and endpoints.
    pub fn build_grid(&self) -> Result<Grid, Error> {
        Grid::with_endpoints(self.rows, self.cols, self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        let g = cfg.build_grid().unwrap();
        assert_eq!((g.rows(), g.cols()), (30, 40));
        assert_eq!(g.origin(), Coord::new(5, 8));
    }

    #[test]
    fn invalid_configs() {
        let cfg = SessionConfig::new(0, 4, Coord::ZERO, Coord::new(0, 1));
        assert_eq!(
            cfg.validate(),
            Err(Error::InvalidDimensions { rows: 0, cols: 4 })
        );
        let cfg = SessionConfig::new(4, 4, Coord::new(1, 1), Coord::new(1, 1));
        assert_eq!(
            cfg.validate(),
            Err(Error::CoincidentEndpoints(Coord::new(1, 1)))
        );
    }
}
