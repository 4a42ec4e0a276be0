//! Random boards.

use gridstar_core::{Board, BoardError, Coord, Dims};
use rand::Rng;

/// Build a `dims` board where each cell is blocked with probability
/// `density`, with the start in the top-left corner and the goal in the
/// bottom-right corner. Endpoints are never blocked.
///
/// `density` is clamped to `[0, 1]`. An empty `dims` gives an empty board
/// with nothing selected.
pub fn board(dims: Dims, density: f64, rng: &mut impl Rng) -> Result<Board, BoardError> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut b = Board::new(dims);
    if dims.is_empty() {
        return Ok(b);
    }

    let start = Coord::ZERO;
    let goal = Coord::new(dims.rows - 1, dims.cols - 1);
    // Walls go in before the selection, so the endpoints are the only
    // cells the board could refuse.
    for c in dims.iter() {
        if c != start && c != goal && rng.random_bool(density) {
            b.set_blocked(c, true)?;
        }
    }
    b.set_start(start)?;
    b.set_goal(goal)?;
    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn endpoints_stay_open() {
        let mut rng = StdRng::seed_from_u64(42);
        let b = board(Dims::new(6, 9), 1.0, &mut rng).unwrap();
        assert_eq!(b.start(), Some(Coord::new(0, 0)));
        assert_eq!(b.goal(), Some(Coord::new(5, 8)));
        assert_eq!(b.blocked_count(), 6 * 9 - 2);
    }

    #[test]
    fn zero_density_is_open() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = board(Dims::default(), 0.0, &mut rng).unwrap();
        assert_eq!(b.blocked_count(), 0);
        assert!(b.is_ready());
    }

    #[test]
    fn same_seed_same_board() {
        let a = board(Dims::default(), 0.3, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = board(Dims::default(), 0.3, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_cell_board() {
        let b = board(Dims::new(1, 1), 0.5, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(b.start(), b.goal());
        assert_eq!(b.blocked_count(), 0);
    }

    #[test]
    fn empty_dims_select_nothing() {
        let b = board(Dims::new(0, 4), 0.5, &mut StdRng::seed_from_u64(9)).unwrap();
        assert!(b.dims().is_empty());
        assert_eq!(b.selected_count(), 0);
    }

    #[test]
    fn dense_boards_are_always_selected() {
        for seed in 0..20 {
            let b = board(Dims::new(4, 5), 0.9, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert!(b.is_ready());
            assert!(!b.is_blocked(Coord::new(0, 0)));
            assert!(!b.is_blocked(Coord::new(3, 4)));
        }
    }
}
