use std::fmt;
use std::ops::Deref;

use gridstar_core::Coord;

use crate::traits::Pather;

/// A start-to-goal sequence of cells, both endpoints included.
///
/// A `Path` is never empty: a search whose start equals its goal yields a
/// single-cell path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<Coord>", try_from = "Vec<Coord>")
)]
pub struct Path(Vec<Coord>);

impl Path {
    pub(crate) fn from_cells(cells: Vec<Coord>) -> Self {
        debug_assert!(!cells.is_empty());
        Self(cells)
    }

    /// First cell.
    pub fn start(&self) -> Coord {
        self.0[0]
    }

    /// Last cell.
    pub fn goal(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    /// Number of moves, one less than the number of cells.
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    /// The cells as a slice.
    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<Coord> {
        self.0
    }

    /// Whether every cell is passable on `grid` and each move goes to a
    /// 4-adjacent cell.
    pub fn is_walkable<P: Pather + ?Sized>(&self, grid: &P) -> bool {
        self.0.iter().all(|&c| grid.is_passable(c))
            && self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

impl Deref for Path {
    type Target = [Coord];

    fn deref(&self) -> &[Coord] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Path {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl TryFrom<Vec<Coord>> for Path {
    type Error = &'static str;

    fn try_from(cells: Vec<Coord>) -> Result<Self, Self::Error> {
        if cells.is_empty() {
            return Err("a path holds at least one cell");
        }
        Ok(Self(cells))
    }
}

impl From<Path> for Vec<Coord> {
    fn from(p: Path) -> Self {
        p.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::{Board, Dims};

    fn path(cells: &[(i32, i32)]) -> Path {
        Path::from_cells(cells.iter().map(|&c| Coord::from(c)).collect())
    }

    #[test]
    fn endpoints_and_steps() {
        let p = path(&[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(p.start(), Coord::new(0, 0));
        assert_eq!(p.goal(), Coord::new(1, 1));
        assert_eq!(p.steps(), 2);
        assert_eq!(p.len(), 3);
        assert!(p.contains(&Coord::new(0, 1)));
    }

    #[test]
    fn single_cell() {
        let p = path(&[(4, 4)]);
        assert_eq!(p.start(), p.goal());
        assert_eq!(p.steps(), 0);
    }

    #[test]
    fn walkable() {
        let mut b = Board::new(Dims::new(2, 2));
        let p = path(&[(0, 0), (0, 1), (1, 1)]);
        assert!(p.is_walkable(&b));
        b.set_blocked(Coord::new(0, 1), true).unwrap();
        assert!(!p.is_walkable(&b));
        assert!(!path(&[(0, 0), (1, 1)]).is_walkable(&Board::new(Dims::new(2, 2))));
    }

    #[test]
    fn display() {
        assert_eq!(path(&[(0, 0), (1, 0)]).to_string(), "(0, 0) -> (1, 0)");
    }
}
