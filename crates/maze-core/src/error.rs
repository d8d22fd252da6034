use std::fmt;

use crate::geom::Cell;

/// Errors raised by bounds-checked [`Grid`](crate::Grid) access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A cell coordinate lies outside the grid extents.
    OutOfBounds { cell: Cell, width: i32, height: i32 },
    /// Stored dimensions and cell count do not describe an odd-sided grid.
    InvalidShape {
        width: i32,
        height: i32,
        cells: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                cell,
                width,
                height,
            } => write!(f, "cell {cell} is outside the {width}x{height} grid"),
            Self::InvalidShape {
                width,
                height,
                cells,
            } => write!(f, "{cells} cells do not form an odd-sided {width}x{height} grid"),
        }
    }
}

impl std::error::Error for GridError {}
