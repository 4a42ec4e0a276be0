use gridstar_core::{Board, Coord, Dims};

/// Grid interface consumed by the path engine.
///
/// Implementors describe a rectangle of cells and which of them are
/// impassable. Cells outside [`dims`](Pather::dims) are never visited.
pub trait Pather {
    /// Size of the searchable grid.
    fn dims(&self) -> Dims;

    /// Whether the in-bounds cell `c` is impassable.
    fn is_blocked(&self, c: Coord) -> bool;

    /// Whether `c` is inside the grid and not blocked.
    fn is_passable(&self, c: Coord) -> bool {
        self.dims().contains(c) && !self.is_blocked(c)
    }
}

impl Pather for Board {
    #[inline]
    fn dims(&self) -> Dims {
        Board::dims(self)
    }

    #[inline]
    fn is_blocked(&self, c: Coord) -> bool {
        Board::is_blocked(self, c)
    }
}

impl<P: Pather + ?Sized> Pather for &P {
    #[inline]
    fn dims(&self) -> Dims {
        (**self).dims()
    }

    #[inline]
    fn is_blocked(&self, c: Coord) -> bool {
        (**self).is_blocked(c)
    }
}
