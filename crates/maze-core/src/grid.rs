//! A fixed-size 2D grid of [`TerrainKind`] values.
//!
//! Dimensions are always odd: a requested even width or height is bumped to
//! the next odd value, so that a carving lattice anchored on odd coordinates
//! tiles the grid exactly with a wall border.

use crate::error::GridError;
use crate::geom::{Cell, Range};
use crate::terrain::TerrainKind;

/// Smallest odd value that is `>= n` (and at least 1).
#[inline]
pub fn odd_at_least(n: i32) -> i32 {
    let n = n.max(1);
    if n % 2 == 0 { n + 1 } else { n }
}

/// Number of cells in a `width` × `height` grid, computed without `i32`
/// overflow. Negative sides count as zero.
#[inline]
fn area(width: i32, height: i32) -> usize {
    width.max(0) as usize * height.max(0) as usize
}

/// A width × height array of terrain, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    cells: Vec<TerrainKind>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a new grid with every cell set to [`TerrainKind::Wall`].
    ///
    /// `width` and `height` are coerced to the nearest odd value not below
    /// the input.
    pub fn new(width: i32, height: i32) -> Self {
        let width = odd_at_least(width);
        let height = odd_at_least(height);
        Self {
            cells: vec![TerrainKind::Wall; area(width, height)],
            width,
            height,
        }
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Range covering the whole grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Range covering every non-border cell.
    #[inline]
    pub fn interior(&self) -> Range {
        self.bounds().inset(1)
    }

    /// Whether `cell` lies inside the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.bounds().contains(cell)
    }

    /// Whether `cell` is on the outermost ring of the grid.
    #[inline]
    pub fn is_border(&self, cell: Cell) -> bool {
        self.contains(cell)
            && (cell.x == 0 || cell.y == 0 || cell.x == self.width - 1 || cell.y == self.height - 1)
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.y as usize * self.width as usize + cell.x as usize)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, cell: Cell) -> GridError {
        GridError::OutOfBounds {
            cell,
            width: self.width,
            height: self.height,
        }
    }

    /// Terrain at `cell`, failing with [`GridError::OutOfBounds`] outside
    /// the grid.
    pub fn get(&self, cell: Cell) -> Result<TerrainKind, GridError> {
        self.at(cell).ok_or_else(|| self.out_of_bounds(cell))
    }

    /// Terrain at `cell`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, cell: Cell) -> Option<TerrainKind> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Set the terrain at `cell`, failing with [`GridError::OutOfBounds`]
    /// outside the grid.
    pub fn set(&mut self, cell: Cell, kind: TerrainKind) -> Result<(), GridError> {
        let i = self.index(cell).ok_or_else(|| self.out_of_bounds(cell))?;
        self.cells[i] = kind;
        Ok(())
    }

    /// Cost of entering `cell`: `Ok(None)` for walls.
    pub fn cost(&self, cell: Cell) -> Result<Option<u32>, GridError> {
        self.get(cell).map(TerrainKind::cost)
    }

    /// Whether `cell` is inside the grid and passable.
    #[inline]
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.at(cell).is_some_and(TerrainKind::is_passable)
    }

    /// Apply a transformation to every cell.
    pub fn map_cells(&mut self, mut f: impl FnMut(Cell, TerrainKind) -> TerrainKind) {
        let width = self.width as usize;
        for (i, kind) in self.cells.iter_mut().enumerate() {
            let cell = Cell::new((i % width) as i32, (i / width) as i32);
            *kind = f(cell, *kind);
        }
    }

    /// Count how many cells hold the given kind.
    pub fn count(&self, kind: TerrainKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Count how many cells are passable.
    pub fn count_passable(&self) -> usize {
        self.cells.iter().filter(|k| k.is_passable()).count()
    }

    /// Whether any cell carries a weighted terrain kind.
    pub fn has_weighted_terrain(&self) -> bool {
        self.cells.iter().any(|k| k.is_weighted())
    }

    /// Iterate over `(Cell, TerrainKind)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, TerrainKind)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Iterate over the passable cells in row-major order.
    pub fn passable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter(|(_, kind)| kind.is_passable())
            .map(|(cell, _)| cell)
    }
}

/// Unchecked wire form of a [`Grid`]; converted through [`TryFrom`] so
/// that deserialized grids keep their shape invariants.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    cells: Vec<TerrainKind>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        let GridRepr {
            cells,
            width,
            height,
        } = repr;
        if width < 1
            || height < 1
            || width % 2 == 0
            || height % 2 == 0
            || cells.len() != area(width, height)
        {
            return Err(GridError::InvalidShape {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }
}
