//! **skyroute** — least-cost drone routing over an editable occupancy grid.
//!
//! A [`Session`] owns the grid and its two endpoints, applies tool-driven
//! edits through an [`Editor`], runs the weighted search, and turns its
//! [`SearchResult`] into a [`Route`] plus [`Metrics`]:
//!
//! ```
//! use skyroute::{Coord, Tool, new_session};
//!
//! let mut session = new_session(5, 5, Coord::new(0, 0), Coord::new(4, 4))?;
//! session.set_tool(Tool::PlaceZone);
//! session.apply_edit(Coord::new(2, 2), false)?;
//!
//! let result = session.solve()?;
//! let route = session.reconstruct_route(&result)?;
//! assert_eq!(result.cost(), Some(8));
//! assert_eq!(route.first(), Some(session.origin()));
//! # Ok::<(), skyroute::Error>(())
//! ```
//!
//! The crate never installs a logger; it reports through the `log` facade.

mod busy;
pub mod config;
pub mod editor;
pub mod session;

pub use busy::{BusyFlag, BusyGuard};
pub use config::SessionConfig;
pub use editor::{EditOutcome, Editor, Tool};
pub use session::{Command, Session, SessionStatus, new_session};

pub use skyroute_core::{Bounds, CLEAR_COST, CellState, Coord, Error, Grid, ParseError, ZONE_COST};
pub use skyroute_paths::{
    CancelToken, DEFAULT_REPLAY_SPEED, Metrics, Outcome, Replay, Route, SearchResult, Solver,
    reconstruct,
};
