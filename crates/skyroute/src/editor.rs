//! Tool-driven grid editing.

use log::{trace, warn};
use skyroute_core::{Coord, Error, Grid};

use crate::busy::BusyFlag;

/// The active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tool {
    #[default]
    PlaceObstacle,
    PlaceZone,
    MoveOrigin,
    MoveDestination,
}

/// What an edit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The grid changed.
    Applied,
    /// Valid edit with nothing to do: same state already, or an endpoint cell
    /// protected from painting.
    Unchanged,
    /// A search was running; the grid was not touched.
    Busy,
}

impl From<bool> for EditOutcome {
    fn from(changed: bool) -> Self {
        if changed { Self::Applied } else { Self::Unchanged }
    }
}

/// Dispatches edits to the grid according to the selected [`Tool`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Editor {
    tool: Tool,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Apply the active tool at `c`, or reset `c` to Clear when `erase` is
    /// set (whatever the tool).
    ///
    /// Rejected without error while `busy` reports a running search.
    pub fn apply(
        &self,
        grid: &mut Grid,
        busy: &BusyFlag,
        c: Coord,
        erase: bool,
    ) -> Result<EditOutcome, Error> {
        if busy.is_busy() {
            warn!("edit at {c} rejected: search in progress");
            return Ok(EditOutcome::Busy);
        }
        let changed = if erase {
            grid.clear_obstacle(c)?
        } else {
            match self.tool {
                Tool::PlaceObstacle => grid.set_obstacle(c)?,
                Tool::PlaceZone => grid.set_zone(c)?,
                Tool::MoveOrigin => grid.move_origin(c)?,
                Tool::MoveDestination => grid.move_destination(c)?,
            }
        };
        trace!("{:?} at {c} (erase: {erase}) changed: {changed}", self.tool);
        Ok(changed.into())
    }
}
