//! Text rendering of a board with its path.

use std::collections::HashSet;

use gridstar_core::map::OPEN;
use gridstar_core::{Board, Coord};
use gridstar_paths::{Path, PathError};

/// Path cells that are not endpoints.
pub const PATH: char = '*';

/// Draw `board` one row per line, marking `path` cells with [`PATH`].
///
/// Endpoints keep their `S`/`G` marks. With `ruler` set, column digits are
/// printed above the grid and row numbers to its left.
pub fn board(board: &Board, path: Option<&Path>, ruler: bool) -> String {
    let dims = board.dims();
    let on_path: HashSet<Coord> = path.map(|p| p.iter().copied().collect()).unwrap_or_default();
    // Wide enough for the last row label plus a space.
    let margin = if ruler { (dims.rows - 1).max(0).to_string().len() + 1 } else { 0 };

    let mut out = String::new();
    if ruler {
        out.push_str(&" ".repeat(margin));
        for col in 0..dims.cols {
            out.push(char::from_digit((col % 10) as u32, 10).unwrap_or('?'));
        }
        out.push('\n');
    }
    for row in 0..dims.rows {
        if ruler {
            out.push_str(&format!("{row:>width$} ", width = margin - 1));
        }
        for col in 0..dims.cols {
            let c = Coord::new(row, col);
            let ch = board.cell_char(c);
            out.push(if ch == OPEN && on_path.contains(&c) { PATH } else { ch });
        }
        out.push('\n');
    }
    out
}

/// One-line description of a search result.
pub fn summary(result: Option<&Result<Path, PathError>>) -> String {
    match result {
        None => "select a start and a goal".to_string(),
        Some(Ok(p)) => format!("{} steps: {p}", p.steps()),
        Some(Err(e)) => e.to_string(),
    }
}
