use gridstar_core::{Board, Coord};
use log::{debug, trace};

use crate::config::Rediscovery;
use crate::distance::manhattan;
use crate::engine::{NO_PARENT, PathEngine, SearchStats};
use crate::error::PathError;
use crate::path::Path;
use crate::traits::Pather;

enum Outcome {
    Found,
    Exhausted,
    OverBudget,
}

impl PathEngine {
    /// Compute a path from `start` to `goal` using A*.
    ///
    /// Moves go to the up, left, down and right neighbours, each costing 1,
    /// with Manhattan distance as the heuristic. Among open cells of equal
    /// `f` the one discovered first is expanded first.
    ///
    /// Returns the full path (both endpoints included). A missing, out of
    /// bounds or blocked endpoint is rejected without searching.
    pub fn find_path<P: Pather + ?Sized>(
        &mut self,
        grid: &P,
        start: Option<Coord>,
        goal: Option<Coord>,
    ) -> Result<Path, PathError> {
        self.stats = SearchStats::default();

        let (Some(start), Some(goal)) = (start, goal) else {
            debug!("[AStar] not attempted: start or goal unset");
            return Err(PathError::EndpointUnset);
        };
        trace!("[AStar] find_path: start={start} goal={goal}");

        let dims = grid.dims();
        if dims != self.dims {
            self.set_dims(dims);
        }
        let mut endpoints = [0; 2];
        for (slot, c) in endpoints.iter_mut().zip([start, goal]) {
            let Some(i) = self.idx(c) else {
                debug!("[AStar] not attempted: {c} outside {dims} grid");
                return Err(PathError::OutOfBounds(c));
            };
            if grid.is_blocked(c) {
                debug!("[AStar] not attempted: endpoint {c} is blocked");
                return Err(PathError::EndpointBlocked(c));
            }
            *slot = i;
        }
        let [start_idx, goal_idx] = endpoints;

        if start == goal {
            return Ok(Path::from_cells(vec![start]));
        }

        let cur_gen = self.next_generation();
        self.open.clear();
        self.seq = 0;

        // Initialise the start node.
        let h = manhattan(start, goal);
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.h = h;
            node.f = h;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.closed = false;
        }
        self.push(start_idx, h);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = loop {
            let Some(current) = self.open.pop() else {
                break Outcome::Exhausted;
            };
            let ci = current.idx;

            // A cell pushed more than once leaves stale copies behind.
            if self.nodes[ci].closed {
                self.stats.stale += 1;
                continue;
            }
            if self
                .config
                .max_expansions
                .is_some_and(|max| self.stats.expanded >= max)
            {
                break Outcome::OverBudget;
            }

            self.nodes[ci].closed = true;
            self.stats.expanded += 1;
            if ci == goal_idx {
                break Outcome::Found;
            }

            let current_g = self.nodes[ci].g;
            let current_coord = self.coord(ci);

            for &nc in nbuf.cardinal(current_coord, |n| grid.is_passable(n)) {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.closed {
                        continue;
                    }
                    // Discovered and still open.
                    match self.config.rediscovery {
                        Rediscovery::Keep => continue,
                        Rediscovery::Relax if tentative_g >= n.g => continue,
                        Rediscovery::Relax => {}
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                    n.h = manhattan(nc, goal);
                }

                n.g = tentative_g;
                n.f = tentative_g + n.h;
                n.parent = ci;
                let f = n.f;
                self.push(ni, f);
            }
        };

        self.nbuf = nbuf;
        self.open.clear();

        match outcome {
            Outcome::Found => {}
            Outcome::Exhausted => {
                debug!(
                    "[AStar] no path from {start} to {goal} after expanding {} cells",
                    self.stats.expanded
                );
                return Err(PathError::NoPathFound);
            }
            Outcome::OverBudget => {
                debug!(
                    "[AStar] budget exhausted after expanding {} cells",
                    self.stats.expanded
                );
                return Err(PathError::BudgetExhausted {
                    expanded: self.stats.expanded,
                });
            }
        }

        // Reconstruct path.
        let mut cells = Vec::with_capacity(self.nodes[goal_idx].g as usize + 1);
        let mut ci = goal_idx;
        loop {
            cells.push(self.coord(ci));
            if ci == start_idx {
                break;
            }
            ci = self.nodes[ci].parent;
        }
        cells.reverse();

        debug!(
            "[AStar] found {} step path from {start} to {goal} ({} expanded, {} pushed)",
            cells.len() - 1,
            self.stats.expanded,
            self.stats.pushed
        );
        Ok(Path::from_cells(cells))
    }

    /// Search between the start and goal currently selected on `board`.
    pub fn find_board_path(&mut self, board: &Board) -> Result<Path, PathError> {
        self.find_path(board, board.start(), board.goal())
    }
}

/// One-shot search with a freshly allocated engine and default settings.
///
/// Prefer keeping a [`PathEngine`] around when searching repeatedly.
pub fn find_path<P: Pather + ?Sized>(grid: &P, start: Coord, goal: Coord) -> Result<Path, PathError> {
    PathEngine::new(grid.dims()).find_path(grid, Some(start), Some(goal))
}
