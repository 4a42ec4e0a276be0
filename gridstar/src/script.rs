//! Action scripts.
//!
//! A script is a list of actions separated by `;` or newlines:
//!
//! ```text
//! s 0 0; s 2 2     # select start, then goal
//! b 1 1            # toggle a blocked cell
//! clear
//! ```
//!
//! `select`/`block` may be spelled out. `#` starts a comment.

use gridstar_core::Coord;
use thiserror::Error;

use crate::session::Action;

/// A malformed script entry.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("script entry {index} \u{201c}{text}\u{201d}: {reason}")]
pub struct ScriptError {
    /// 1-based position of the entry in the script.
    pub index: usize,
    /// The entry as written.
    pub text: String,
    /// What is wrong with it.
    pub reason: String,
}

/// Parse a whole script.
pub fn parse(script: &str) -> Result<Vec<Action>, ScriptError> {
    script
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.split(';'))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .enumerate()
        .map(|(i, entry)| parse_action(entry).map_err(|reason| ScriptError {
            index: i + 1,
            text: entry.to_string(),
            reason,
        }))
        .collect()
}

fn parse_action(entry: &str) -> Result<Action, String> {
    let mut words = entry.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    match verb {
        "s" | "select" => Ok(Action::Select(coord(&args)?)),
        "b" | "block" => Ok(Action::ToggleBlock(coord(&args)?)),
        "clear" if args.is_empty() => Ok(Action::Clear),
        "clear" => Err("clear takes no arguments".to_string()),
        other => Err(format!("unknown action \u{201c}{other}\u{201d}")),
    }
}

fn coord(args: &[&str]) -> Result<Coord, String> {
    let [row, col] = args else {
        return Err(format!("expected <row> <col>, got {} values", args.len()));
    };
    let num = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| format!("\u{201c}{s}\u{201d} is not a number"))
    };
    Ok(Coord::new(num(*row)?, num(*col)?))
}
