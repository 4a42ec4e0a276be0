//! A* pathfinding on 4-connected grids with blocked cells.
//!
//! The entry point is [`PathEngine::find_path`]: given a [`Pather`] (for
//! example a [`Board`](gridstar_core::Board)) and a start/goal pair, it
//! returns the start-to-goal [`Path`] or a [`PathError`]. Moves are
//! up/left/down/right with unit cost, guided by the [`manhattan`] heuristic.
//!
//! `PathEngine` keeps its per-cell scratch nodes between calls so that
//! repeated searches do not allocate, but every search starts from a fresh
//! generation: nothing from one search is visible to the next.

mod astar;
mod config;
mod distance;
mod engine;
mod error;
mod neighbors;
mod path;
mod traits;

pub use astar::find_path;
pub use config::{Rediscovery, SearchConfig};
pub use distance::manhattan;
pub use engine::{PathEngine, SearchStats};
pub use error::PathError;
pub use neighbors::Neighbors;
pub use path::Path;
pub use traits::Pather;
