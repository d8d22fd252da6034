use std::fmt;

use maze_core::{Cell, Grid, GridError, TerrainKind};
use maze_paths::Path;

/// Read-only view of a session's maze: dimensions, terrain, endpoints and
/// the cached path if one has been computed.
#[derive(Debug, Clone, Copy)]
pub struct MazeSnapshot<'a> {
    pub(crate) grid: &'a Grid,
    pub(crate) start: Cell,
    pub(crate) goal: Cell,
    pub(crate) path: Option<&'a Path>,
}

impl<'a> MazeSnapshot<'a> {
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Terrain at `cell`, failing outside the grid.
    pub fn terrain(&self, cell: Cell) -> Result<TerrainKind, GridError> {
        self.grid.get(cell)
    }

    /// The underlying grid.
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// The cached path, if the session has one.
    pub fn path(&self) -> Option<&'a Path> {
        self.path
    }

    /// `(Cell, TerrainKind)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, TerrainKind)> + 'a {
        self.grid.iter()
    }
}

/// One character per cell: terrain glyphs, `S`/`G` for the endpoints and
/// `*` for cells on the cached path.
impl fmt::Display for MazeSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let cell = Cell::new(x, y);
                let ch = if cell == self.start {
                    'S'
                } else if cell == self.goal {
                    'G'
                } else if self.path.is_some_and(|p| p.contains(&cell)) {
                    '*'
                } else {
                    self.grid.at(cell).unwrap_or_default().glyph()
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
