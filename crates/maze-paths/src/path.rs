use std::fmt;
use std::ops::Deref;

use maze_core::{Cell, Grid};

/// An ordered, non-empty sequence of cells from a start to a goal, both
/// inclusive.
///
/// Searches only ever return complete paths; "no path" is `None` at the
/// call site.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Cell>", into = "Vec<Cell>"))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Wrap a cell sequence. Returns `None` for an empty sequence.
    pub fn new(cells: Vec<Cell>) -> Option<Self> {
        if cells.is_empty() {
            None
        } else {
            Some(Self { cells })
        }
    }

    /// First cell of the path.
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    /// Last cell of the path.
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of moves, i.e. cells minus one.
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    /// The cells as a slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether every consecutive pair of cells is orthogonally adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Total cost of walking the path on `grid`: the sum of the entry cost
    /// of every cell after the start.
    ///
    /// Returns `None` if the path crosses a wall or leaves the grid.
    pub fn cost(&self, grid: &Grid) -> Option<u32> {
        self.cells[1..]
            .iter()
            .try_fold(0u32, |acc, &c| Some(acc + grid.at(c)?.cost()?))
    }
}

impl TryFrom<Vec<Cell>> for Path {
    type Error = &'static str;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        Self::new(cells).ok_or("a path needs at least one cell")
    }
}

impl From<Path> for Vec<Cell> {
    fn from(path: Path) -> Self {
        path.cells
    }
}

impl Deref for Path {
    type Target = [Cell];

    fn deref(&self) -> &[Cell] {
        &self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
