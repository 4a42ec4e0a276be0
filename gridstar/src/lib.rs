//! gridstar — pick two cells on a blocked-cell grid and get the A* path
//! between them.
//!
//! This crate holds the front end around `gridstar-paths`: a [`Session`]
//! that re-runs the search after every board edit, an action script
//! parser, random boards, settings files and text rendering.

pub mod error;
pub mod random;
pub mod render;
pub mod script;
pub mod session;
pub mod settings;

use std::path::Path;

use env_logger::{Builder, Env};
use gridstar_core::Board;

pub use error::{CliError, CliResult};
pub use session::{Action, Session};
pub use settings::{Overrides, Settings};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit status when a run ends without a path.
pub const EXIT_NO_PATH: u8 = 2;

/// Log filter used when neither `level` nor the environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Logger configured from `env`, with an explicit `level` taking
/// precedence over it.
pub fn log_builder(env: Env<'_>, level: Option<&str>) -> Builder {
    let mut builder = Builder::from_env(env.default_filter_or(DEFAULT_LOG_LEVEL));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    builder
}

/// Read and parse a map file.
pub fn load_board(path: &Path) -> CliResult<Board> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Board::parse(&text).map_err(|source| CliError::Map {
        path: path.to_path_buf(),
        source,
    })
}
