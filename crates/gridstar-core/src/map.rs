//! Plain-text board maps.
//!
//! One line per row, one character per cell:
//!
//! | char | meaning |
//! |---|---|
//! | `.` | open cell |
//! | `#` | blocked cell |
//! | `S` | start (open) |
//! | `G` | goal (open) |
//!
//! Leading and trailing blank space around the whole map is ignored, but
//! every row must have the same width.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::geom::{Coord, Dims};

pub const OPEN: char = '.';
pub const BLOCKED: char = '#';
pub const START: char = 'S';
pub const GOAL: char = 'G';

impl Board {
    /// Parse a board from its text map.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }

        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let cols = lines[0].chars().count();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(MapError::InconsistentWidth {
                    row,
                    expected: cols,
                    found,
                });
            }
        }

        let mut board = Board::new(Dims::new(lines.len() as i32, cols as i32));
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let at = Coord::new(row as i32, col as i32);
                match ch {
                    OPEN => {}
                    BLOCKED => board.blocked[row * cols + col] = true,
                    START => {
                        if board.start.replace(at).is_some() {
                            return Err(MapError::DuplicateEndpoint { ch, at });
                        }
                    }
                    GOAL => {
                        if board.goal.replace(at).is_some() {
                            return Err(MapError::DuplicateEndpoint { ch, at });
                        }
                    }
                    _ => return Err(MapError::InvalidChar { ch, at }),
                }
            }
        }
        Ok(board)
    }

    /// Write the board back out in the map format accepted by [`Board::parse`].
    pub fn to_ascii(&self) -> String {
        let dims = self.dims();
        let mut out = String::with_capacity(dims.len() + dims.rows as usize);
        for row in 0..dims.rows {
            for col in 0..dims.cols {
                out.push(self.cell_char(Coord::new(row, col)));
            }
            out.push('\n');
        }
        out
    }

    /// The map character for a single cell.
    pub fn cell_char(&self, c: Coord) -> char {
        if self.start() == Some(c) {
            START
        } else if self.goal() == Some(c) {
            GOAL
        } else if self.is_blocked(c) {
            BLOCKED
        } else {
            OPEN
        }
    }
}

impl FromStr for Board {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, MapError> {
        Board::parse(s)
    }
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The input holds no rows.
    Empty,
    /// A row's width differs from the first row.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the map alphabet.
    InvalidChar { ch: char, at: Coord },
    /// A second `S` or `G`.
    DuplicateEndpoint { ch: char, at: Coord },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no rows"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "map: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, at } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {at}")
            }
            Self::DuplicateEndpoint { ch, at } => {
                write!(f, "map: second \u{201c}{ch}\u{201d} at {at}")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const WALL: &str = "\
S#...
.#...
.#G..
.....";

    #[test]
    fn parse_dims_and_cells() {
        let b = Board::parse(WALL).unwrap();
        assert_eq!(b.dims(), Dims::new(4, 5));
        assert_eq!(b.start(), Some(Coord::new(0, 0)));
        assert_eq!(b.goal(), Some(Coord::new(2, 2)));
        assert_eq!(b.blocked_count(), 3);
        assert!(b.is_blocked(Coord::new(1, 1)));
        assert!(!b.is_blocked(Coord::new(3, 1)));
    }

    #[test]
    fn to_ascii_reproduces_input() {
        let b: Board = WALL.parse().unwrap();
        assert_eq!(b.to_ascii(), format!("{WALL}\n"));
    }

    #[test]
    fn surrounding_whitespace_and_crlf() {
        let b = Board::parse("\n.S\r\nG#\r\n\n").unwrap();
        assert_eq!(b.dims(), Dims::new(2, 2));
        assert_eq!(b.start(), Some(Coord::new(0, 1)));
        assert_eq!(b.goal(), Some(Coord::new(1, 0)));
        assert!(b.is_blocked(Coord::new(1, 1)));
    }

    #[test]
    fn empty_map() {
        assert_eq!(Board::parse("   \n "), Err(MapError::Empty));
    }

    #[test]
    fn ragged_rows() {
        assert_eq!(
            Board::parse("...\n..\n..."),
            Err(MapError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn invalid_char() {
        assert_eq!(
            Board::parse("..\n.x"),
            Err(MapError::InvalidChar {
                ch: 'x',
                at: Coord::new(1, 1)
            })
        );
    }

    #[test]
    fn duplicate_start() {
        assert_eq!(
            Board::parse("S.\n.S"),
            Err(MapError::DuplicateEndpoint {
                ch: 'S',
                at: Coord::new(1, 1)
            })
        );
    }

    #[test]
    fn map_without_endpoints() {
        let b = Board::parse("..#\n...").unwrap();
        assert!(!b.is_ready());
        assert_eq!(b.blocked_count(), 1);
    }
}
