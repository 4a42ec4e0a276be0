//! The board: blocked cells plus the start/goal selection.
//!
//! [`Board`] is what an input layer mutates in response to clicks and what
//! the path engine reads. It enforces the selection rules itself, so a
//! board handed to a search never has a blocked endpoint.

use std::fmt;

use crate::geom::{Coord, Dims};

/// A fixed-size grid of blocked/open cells with at most one start and one
/// goal designation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dims,
    pub(crate) blocked: Vec<bool>,
    pub(crate) start: Option<Coord>,
    pub(crate) goal: Option<Coord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Dims::DEFAULT)
    }
}

impl Board {
    /// Create an open board with nothing selected.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            blocked: vec![false; dims.len()],
            start: None,
            goal: None,
        }
    }

    /// Board dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Whether the board contains the given coordinate.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    fn index(&self, c: Coord) -> Result<usize, BoardError> {
        self.dims.index(c).ok_or(BoardError::OutOfBounds(c))
    }

    // -----------------------------------------------------------------------
    // Blocked cells
    // -----------------------------------------------------------------------

    /// Whether `c` is impassable. Coordinates outside the board count as
    /// blocked.
    pub fn is_blocked(&self, c: Coord) -> bool {
        match self.dims.index(c) {
            Some(i) => self.blocked[i],
            None => true,
        }
    }

    /// Set or clear the blocked flag of `c`.
    ///
    /// Blocking a cell that is currently the start or the goal is refused.
    pub fn set_blocked(&mut self, c: Coord, blocked: bool) -> Result<(), BoardError> {
        let i = self.index(c)?;
        if blocked && self.is_endpoint(c) {
            return Err(BoardError::EndpointCell(c));
        }
        self.blocked[i] = blocked;
        Ok(())
    }

    /// Flip the blocked flag of `c` and return the new value.
    pub fn toggle_blocked(&mut self, c: Coord) -> Result<bool, BoardError> {
        let now = !self.is_blocked_in_bounds(c)?;
        self.set_blocked(c, now)?;
        Ok(now)
    }

    fn is_blocked_in_bounds(&self, c: Coord) -> Result<bool, BoardError> {
        let i = self.index(c)?;
        Ok(self.blocked[i])
    }

    /// Open every cell.
    pub fn clear_blocked(&mut self) {
        self.blocked.iter_mut().for_each(|b| *b = false);
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Iterate over the blocked coordinates in row-major order.
    pub fn blocked_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.dims.iter().filter(move |&c| self.is_blocked(c))
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// The selected start cell, if any.
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// The selected goal cell, if any.
    #[inline]
    pub fn goal(&self) -> Option<Coord> {
        self.goal
    }

    /// Whether both endpoints are selected.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.start.is_some() && self.goal.is_some()
    }

    /// Number of selected endpoints (0, 1 or 2).
    pub fn selected_count(&self) -> usize {
        self.start.is_some() as usize + self.goal.is_some() as usize
    }

    /// Whether `c` is currently the start or the goal.
    pub fn is_endpoint(&self, c: Coord) -> bool {
        self.start == Some(c) || self.goal == Some(c)
    }

    fn check_selectable(&self, c: Coord) -> Result<(), BoardError> {
        if self.is_blocked_in_bounds(c)? {
            return Err(BoardError::BlockedCell(c));
        }
        Ok(())
    }

    /// Designate `c` as the start, replacing any previous start.
    pub fn set_start(&mut self, c: Coord) -> Result<(), BoardError> {
        self.check_selectable(c)?;
        self.start = Some(c);
        Ok(())
    }

    /// Designate `c` as the goal, replacing any previous goal.
    pub fn set_goal(&mut self, c: Coord) -> Result<(), BoardError> {
        self.check_selectable(c)?;
        self.goal = Some(c);
        Ok(())
    }

    /// Remove the start designation.
    pub fn clear_start(&mut self) -> Option<Coord> {
        self.start.take()
    }

    /// Remove the goal designation.
    pub fn clear_goal(&mut self) -> Option<Coord> {
        self.goal.take()
    }

    /// Remove both designations.
    pub fn clear_selection(&mut self) {
        self.start = None;
        self.goal = None;
    }

    /// Click-style selection toggle.
    ///
    /// A selected cell is deselected (start first, then goal). An unselected
    /// cell fills the first free slot: start, then goal. With both slots
    /// taken the click is refused.
    pub fn toggle_selection(&mut self, c: Coord) -> Result<Selection, BoardError> {
        self.check_selectable(c)?;

        if self.start == Some(c) {
            self.start = None;
            return Ok(Selection::Deselected);
        }
        if self.goal == Some(c) {
            self.goal = None;
            return Ok(Selection::Deselected);
        }
        if self.start.is_none() {
            self.start = Some(c);
            Ok(Selection::Start)
        } else if self.goal.is_none() {
            self.goal = Some(c);
            Ok(Selection::Goal)
        } else {
            Err(BoardError::SelectionFull)
        }
    }
}

/// Outcome of [`Board::toggle_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The cell became the start.
    Start,
    /// The cell became the goal.
    Goal,
    /// The cell was an endpoint and is no longer selected.
    Deselected,
}

/// Errors from board mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The coordinate lies outside the board.
    OutOfBounds(Coord),
    /// A blocked cell cannot be selected.
    BlockedCell(Coord),
    /// The start or goal cell cannot be blocked.
    EndpointCell(Coord),
    /// Both start and goal are already selected.
    SelectionFull,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "cell {c} is outside the board"),
            Self::BlockedCell(c) => write!(f, "cell {c} is blocked"),
            Self::EndpointCell(c) => write!(f, "cell {c} is a start/goal cell and can't be blocked"),
            Self::SelectionFull => write!(f, "start and goal are already selected"),
        }
    }
}

impl std::error::Error for BoardError {}
