use std::fmt;

use maze_core::{Cell, GridError};

/// Errors surfaced by [`MazeSession`](crate::MazeSession).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No carve connected start to goal within the attempt budget.
    GenerationFailed { attempts: u32 },
    /// A configured start or goal cannot be used.
    InvalidEndpoint { cell: Cell, reason: &'static str },
    /// Grid access outside its extents.
    Grid(GridError),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenerationFailed { attempts } => {
                write!(f, "no solvable maze after {attempts} attempts")
            }
            Self::InvalidEndpoint { cell, reason } => {
                write!(f, "invalid endpoint {cell}: {reason}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for MazeError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
