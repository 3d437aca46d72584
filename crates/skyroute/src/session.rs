//! The [`Session`] facade: one grid, one editor, one solver.

use log::{debug, info};
use skyroute_core::{Coord, Error, Grid};
use skyroute_paths::{CancelToken, Outcome, Route, SearchResult, Solver, reconstruct};

use crate::busy::{BusyFlag, BusyGuard};
use crate::config::SessionConfig;
use crate::editor::{EditOutcome, Editor, Tool};

/// Coarse state of a session, for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Ready,
    RouteFound,
    Unreachable,
    Cancelled,
}

impl From<Outcome> for SessionStatus {
    fn from(o: Outcome) -> Self {
        match o {
            Outcome::Reached => Self::RouteFound,
            Outcome::Unreachable => Self::Unreachable,
            Outcome::Cancelled => Self::Cancelled,
        }
    }
}

/// Top-level actions, one per control in a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectTool(Tool),
    Solve,
    Reset,
}

/// Exclusive owner of the world state (grid, origin, destination).
///
/// Results returned by [`solve`](Session::solve) belong to the caller; later
/// edits do not touch them.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    blank: Grid,
    grid: Grid,
    editor: Editor,
    solver: Solver,
    busy: BusyFlag,
    status: SessionStatus,
}

/// Start a session on an all-Clear `rows`×`cols` grid.
pub fn new_session(
    rows: i32,
    cols: i32,
    origin: Coord,
    destination: Coord,
) -> Result<Session, Error> {
    Session::new(SessionConfig::new(rows, cols, origin, destination))
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, Error> {
        let blank = config.build_grid()?;
        Ok(Self {
            config,
            grid: blank.clone(),
            blank,
            editor: Editor::new(),
            solver: Solver::new(),
            busy: BusyFlag::new(),
            status: SessionStatus::Ready,
        })
    }

    /// Let `token` interrupt future solves between expansions.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.solver.set_cancel(Some(token));
        self
    }

    pub fn set_cancel(&mut self, token: Option<CancelToken>) {
        self.solver.set_cancel(token);
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn origin(&self) -> Coord {
        self.grid.origin()
    }

    #[inline]
    pub fn destination(&self) -> Coord {
        self.grid.destination()
    }

    #[inline]
    pub fn tool(&self) -> Tool {
        self.editor.tool()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.editor.set_tool(tool);
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Keep the session busy until the guard drops, typically while a front
    /// end replays a finished search. Edits return [`EditOutcome::Busy`] in
    /// the meantime; solving is still allowed.
    pub fn hold_busy(&self) -> BusyGuard {
        self.busy.enter()
    }

    /// A handle that observes the busy state from elsewhere (another thread
    /// rendering the session, for instance).
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    #[inline]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Apply the active tool (or erase) at `c`.
    ///
    /// A change to the grid makes any earlier result stale, so the status
    /// drops back to [`SessionStatus::Ready`].
    pub fn apply_edit(&mut self, c: Coord, erase: bool) -> Result<EditOutcome, Error> {
        let outcome = self.editor.apply(&mut self.grid, &self.busy, c, erase)?;
        if outcome == EditOutcome::Applied {
            self.status = SessionStatus::Ready;
        }
        Ok(outcome)
    }

    /// Run the solver to completion against the current grid.
    ///
    /// `&mut self` already keeps edits out for the duration of the run; the
    /// busy flag is raised as well so that observers holding a
    /// [`busy_flag`](Session::busy_flag) see the run, and it is lowered on
    /// every exit path. A failed solve leaves the status as it was.
    pub fn solve(&mut self) -> Result<SearchResult, Error> {
        let res = {
            let _guard = self.busy.enter();
            self.solver.solve(&self.grid)
        };
        if let Ok(r) = &res {
            self.status = r.outcome().into();
        }
        res
    }

    /// Route for a result produced by this (or any) session.
    pub fn reconstruct_route(&self, result: &SearchResult) -> Result<Route, Error> {
        reconstruct(result)
    }

    /// Restore the configured blank grid and default tool.
    pub fn reset(&mut self) {
        self.grid = self.blank.clone();
        self.editor = Editor::new();
        self.status = SessionStatus::Ready;
        if let Some(token) = self.solver.cancel_token() {
            token.reset();
        }
        info!(
            "session reset to {}x{} grid, origin {}, destination {}",
            self.config.rows, self.config.cols, self.config.origin, self.config.destination
        );
    }

    /// Run a front-end command. Only [`Command::Solve`] yields a result.
    pub fn execute(&mut self, cmd: Command) -> Result<Option<SearchResult>, Error> {
        debug!("command {cmd:?}");
        match cmd {
            Command::SelectTool(tool) => {
                self.set_tool(tool);
                Ok(None)
            }
            Command::Solve => self.solve().map(Some),
            Command::Reset => {
                self.reset();
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyroute_core::CellState;

    fn small() -> Session {
        new_session(3, 3, Coord::new(0, 0), Coord::new(2, 2)).unwrap()
    }

    #[test]
    fn new_session_validates() {
        assert_eq!(
            new_session(0, 3, Coord::ZERO, Coord::new(0, 1)).err(),
            Some(Error::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            new_session(3, 3, Coord::new(1, 1), Coord::new(1, 1)).err(),
            Some(Error::CoincidentEndpoints(Coord::new(1, 1)))
        );
    }

    #[test]
    fn solve_updates_status_and_clears_busy() {
        let mut s = small();
        assert_eq!(s.status(), SessionStatus::Ready);
        let r = s.solve().unwrap();
        assert_eq!(r.cost(), Some(4));
        assert_eq!(s.status(), SessionStatus::RouteFound);
        assert!(!s.is_busy());

        s.apply_edit(Coord::new(1, 2), false).unwrap();
        assert_eq!(s.status(), SessionStatus::Ready);
        s.apply_edit(Coord::new(2, 1), false).unwrap();
        let r = s.solve().unwrap();
        assert_eq!(r.outcome(), Outcome::Unreachable);
        assert_eq!(s.status(), SessionStatus::Unreachable);
        assert!(!s.is_busy());
        assert!(s.reconstruct_route(&r).unwrap().is_empty());
    }

    #[test]
    fn result_survives_later_edits() {
        let mut s = small();
        let r = s.solve().unwrap();
        let route = s.reconstruct_route(&r).unwrap();
        s.set_tool(Tool::PlaceObstacle);
        for c in route.iter().skip(1).take(route.len() - 2) {
            s.apply_edit(*c, false).unwrap();
        }
        assert_eq!(s.reconstruct_route(&r).unwrap(), route);
    }

    #[test]
    fn cancelled_solve_sets_status() {
        let token = CancelToken::new();
        let mut s = small().with_cancel(token.clone());
        token.cancel();
        let r = s.solve().unwrap();
        assert_eq!(r.outcome(), Outcome::Cancelled);
        assert_eq!(s.status(), SessionStatus::Cancelled);
        s.reset();
        assert!(!token.is_cancelled());
        assert_eq!(s.solve().unwrap().outcome(), Outcome::Reached);
    }

    #[test]
    fn reset_restores_config() {
        let mut s = small();
        s.execute(Command::SelectTool(Tool::PlaceZone)).unwrap();
        s.apply_edit(Coord::new(1, 1), false).unwrap();
        s.execute(Command::SelectTool(Tool::MoveOrigin)).unwrap();
        s.apply_edit(Coord::new(0, 2), false).unwrap();
        assert_eq!(s.origin(), Coord::new(0, 2));

        assert_eq!(s.execute(Command::Reset), Ok(None));
        assert_eq!(s.origin(), Coord::new(0, 0));
        assert_eq!(s.tool(), Tool::PlaceObstacle);
        assert_eq!(s.grid().count(CellState::Clear), 9);
        assert_eq!(s.status(), SessionStatus::Ready);
    }

    #[test]
    fn held_session_rejects_edits() {
        let mut s = small();
        let before = s.grid().clone();
        let hold = s.hold_busy();
        assert!(s.busy_flag().is_busy());
        assert_eq!(s.apply_edit(Coord::new(1, 1), false), Ok(EditOutcome::Busy));
        assert_eq!(s.grid(), &before);

        // A solve under the hold does not lower the flag on its way out.
        assert_eq!(s.solve().unwrap().outcome(), Outcome::Reached);
        assert!(s.is_busy());
        drop(hold);
        assert!(!s.is_busy());
        assert_eq!(s.apply_edit(Coord::new(1, 1), false), Ok(EditOutcome::Applied));
        assert_eq!(s.status(), SessionStatus::Ready);
    }

    #[test]
    fn execute_solve_returns_result() {
        let mut s = small();
        let r = s.execute(Command::Solve).unwrap();
        assert_eq!(r.and_then(|r| r.cost()), Some(4));
    }

    #[test]
    fn default_config_session() {
        let s = Session::new(SessionConfig::default()).unwrap();
        assert_eq!(s.origin(), Coord::new(5, 8));
        assert_eq!(s.destination(), Coord::new(20, 25));
        assert_eq!(s.tool(), Tool::PlaceObstacle);
    }
}
