use std::fmt;

use gridstar_core::Coord;

/// Why a search produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The goal is unreachable from the start.
    NoPathFound,
    /// The start or the goal was not given. The search was not attempted.
    EndpointUnset,
    /// An endpoint lies outside the grid. The search was not attempted.
    OutOfBounds(Coord),
    /// An endpoint is a blocked cell. The search was not attempted.
    EndpointBlocked(Coord),
    /// The configured expansion budget ran out before the goal was reached.
    BudgetExhausted { expanded: usize },
}

impl PathError {
    /// Whether the input was rejected before any cell was expanded.
    pub fn is_not_attempted(&self) -> bool {
        matches!(
            self,
            Self::EndpointUnset | Self::OutOfBounds(_) | Self::EndpointBlocked(_)
        )
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPathFound => write!(f, "path doesn't exist"),
            Self::EndpointUnset => write!(f, "start or goal is not selected"),
            Self::OutOfBounds(c) => write!(f, "endpoint {c} is outside the grid"),
            Self::EndpointBlocked(c) => write!(f, "endpoint {c} is blocked"),
            Self::BudgetExhausted { expanded } => {
                write!(f, "search gave up after expanding {expanded} cells")
            }
        }
    }
}

impl std::error::Error for PathError {}
