//! Front-end error type.

use std::path::PathBuf;

use gridstar_core::{BoardError, MapError};
use thiserror::Error;

use crate::script::ScriptError;

/// Everything that can stop the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A map file is malformed.
    #[error("{}: {source}", .path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: MapError,
    },

    /// A settings file is malformed.
    #[error("settings {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An action script could not be parsed.
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// An action was refused by the board.
    #[error("action {index} ({action}): {source}")]
    Action {
        index: usize,
        action: String,
        #[source]
        source: BoardError,
    },

    /// A generated board could not be set up.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Invalid command-line values.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type used throughout the front end.
pub type CliResult<T> = Result<T, CliError>;
