//! Cell classification and the edge-cost function derived from it.

/// Cost of stepping onto a [`CellState::Clear`] cell.
pub const CLEAR_COST: u32 = 1;

/// Cost of stepping onto a [`CellState::WeightedZone`] cell.
pub const ZONE_COST: u32 = 5;

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Clear,
    /// Impassable. Not part of the search graph.
    Obstacle,
    /// Passable at an elevated cost (wind-affected airspace).
    WeightedZone,
}

impl CellState {
    /// Cost of a move whose *destination* cell has this state, or `None` for
    /// obstacles, which have no incoming edges.
    #[inline]
    pub const fn cost(self) -> Option<u32> {
        match self {
            Self::Clear => Some(CLEAR_COST),
            Self::WeightedZone => Some(ZONE_COST),
            Self::Obstacle => None,
        }
    }

    /// Whether a drone may enter the cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }

    /// ASCII glyph used by [`Grid`](crate::Grid)'s text form.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Clear => '.',
            Self::Obstacle => '#',
            Self::WeightedZone => '~',
        }
    }

    /// Parse a cell glyph. Endpoint glyphs are handled by the grid parser.
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Clear),
            '#' => Some(Self::Obstacle),
            '~' => Some(Self::WeightedZone),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs() {
        assert_eq!(CellState::Clear.cost(), Some(1));
        assert_eq!(CellState::WeightedZone.cost(), Some(5));
        assert_eq!(CellState::Obstacle.cost(), None);
        assert!(!CellState::Obstacle.is_passable());
    }

    #[test]
    fn glyphs() {
        for s in [CellState::Clear, CellState::Obstacle, CellState::WeightedZone] {
            assert_eq!(CellState::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(CellState::from_glyph('S'), None);
    }
}
