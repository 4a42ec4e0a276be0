use gridstar_core::Coord;

/// Reusable neighbour buffer.
///
/// Enumerates the 4-connected neighbours of a cell in search order (up,
/// left, down, right), filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbours of `c` for which `keep` returns `true`.
    ///
    /// Every direction goes through `keep`, so a bounds check there covers
    /// all four edges of the grid.
    pub fn cardinal(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Dims;

    #[test]
    fn order_is_up_left_down_right() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Coord::new(1, 1), |_| true).to_vec();
        assert_eq!(
            got,
            vec![
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(2, 1),
                Coord::new(1, 2),
            ]
        );
    }

    #[test]
    fn corners_are_bounds_checked() {
        let dims = Dims::new(3, 3);
        let mut nb = Neighbors::new();
        assert_eq!(
            nb.cardinal(Coord::new(0, 0), |n| dims.contains(n)),
            &[Coord::new(1, 0), Coord::new(0, 1)]
        );
        assert_eq!(
            nb.cardinal(Coord::new(2, 2), |n| dims.contains(n)),
            &[Coord::new(1, 2), Coord::new(2, 1)]
        );
    }
}
