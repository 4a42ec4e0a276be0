//! Board editing with the path kept up to date.

use std::fmt;

use gridstar_core::{Board, BoardError, Coord};
use gridstar_paths::{Path, PathEngine, PathError, SearchConfig, SearchStats};
use log::{debug, info, warn};

/// A single edit, as produced by a click or a script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Toggle the start/goal selection of a cell.
    Select(Coord),
    /// Toggle the blocked flag of a cell.
    ToggleBlock(Coord),
    /// Open every cell and drop the selection.
    Clear,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(c) => write!(f, "select {} {}", c.row, c.col),
            Self::ToggleBlock(c) => write!(f, "block {} {}", c.row, c.col),
            Self::Clear => write!(f, "clear"),
        }
    }
}

/// A board, an engine and the result of the latest search.
///
/// After every accepted action the search is re-run when both endpoints are
/// selected; otherwise the previous result is dropped.
pub struct Session {
    board: Board,
    engine: PathEngine,
    result: Option<Result<Path, PathError>>,
}

impl Session {
    /// Start a session on `board`, searching right away if it is ready.
    pub fn new(board: Board, config: SearchConfig) -> Self {
        let engine = PathEngine::with_config(board.dims(), config);
        let mut session = Self {
            board,
            engine,
            result: None,
        };
        session.refresh();
        session
    }

    /// The board being edited.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Latest search result, `None` while an endpoint is unselected.
    pub fn result(&self) -> Option<&Result<Path, PathError>> {
        self.result.as_ref()
    }

    /// Latest path, if the latest search found one.
    pub fn path(&self) -> Option<&Path> {
        self.result.as_ref().and_then(|r| r.as_ref().ok())
    }

    /// Counters of the latest search.
    pub fn stats(&self) -> SearchStats {
        self.engine.last_stats()
    }

    /// Process exit status for the latest result: 0 with a path,
    /// [`EXIT_NO_PATH`](crate::EXIT_NO_PATH) otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.path().is_some() { 0 } else { crate::EXIT_NO_PATH }
    }

    /// Apply one edit. A refused edit leaves the board and result untouched.
    pub fn apply(&mut self, action: Action) -> Result<(), BoardError> {
        debug!("apply {action}");
        match action {
            Action::Select(c) => {
                self.board.toggle_selection(c)?;
            }
            Action::ToggleBlock(c) => {
                self.board.toggle_blocked(c)?;
            }
            Action::Clear => {
                self.board.clear_blocked();
                self.board.clear_selection();
            }
        }
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        if !self.board.is_ready() {
            self.result = None;
            return;
        }
        let result = self.engine.find_board_path(&self.board);
        match &result {
            Ok(path) => info!("path of {} steps", path.steps()),
            Err(PathError::NoPathFound) => warn!("path doesn't exist"),
            Err(e) => warn!("search failed: {e}"),
        }
        self.result = Some(result);
    }
}
