//! **gridstar-core** — grid geometry and the board searched by `gridstar-paths`.
//!
//! This crate provides the value types shared across the *gridstar*
//! workspace: cell coordinates, grid dimensions, and a [`Board`] holding
//! per-cell blocked flags together with the start/goal selection.

pub mod board;
pub mod geom;
pub mod map;

pub use board::{Board, BoardError, Selection};
pub use geom::{Coord, Dims};
pub use map::MapError;
