use std::fmt;

use knight_core::{Point, Range};

/// Errors returned by [`find_paths`](crate::find_paths) and
/// [`SearchConfig::validate`](crate::SearchConfig::validate).
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The start or the destination lies outside the board.
    InvalidCoordinate { point: Point, board: Range },
    /// The search ran to completion without reaching the destination.
    NoPathFound { from: Point, to: Point },
    /// The configuration cannot drive a search.
    InvalidConfig(&'static str),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { point, board } => write!(
                f,
                "coordinate ({},{}) is outside the board (1..={}, 1..={})",
                point.x,
                point.y,
                board.max.x - 1,
                board.max.y - 1
            ),
            Self::NoPathFound { from, to } => write!(
                f,
                "no path found from ({},{}) to ({},{})",
                from.x, from.y, to.x, to.y
            ),
            Self::InvalidConfig(reason) => write!(f, "invalid search configuration: {reason}"),
        }
    }
}

impl std::error::Error for SearchError {}
