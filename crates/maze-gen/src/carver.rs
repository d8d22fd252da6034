//! Randomized recursive-backtracking maze carving.
//!
//! Carving works on a 2-step lattice: odd-coordinate cells are rooms and the
//! cells between them are walls that may be knocked through. Starting from
//! an odd cell of an all-wall grid, the result is a perfect maze: exactly
//! one simple path joins any two open cells.

use maze_core::{Cell, Grid, GridError, TerrainKind};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::weights::TerrainWeights;

/// The four lattice offsets, before shuffling.
pub const LATTICE_STEPS: [Cell; 4] = [
    Cell::new(2, 0),
    Cell::new(-2, 0),
    Cell::new(0, 2),
    Cell::new(0, -2),
];

/// One pending cell of the backtracker: its shuffled offsets and how many
/// of them have been tried.
struct Frame {
    cell: Cell,
    steps: [Cell; 4],
    next: usize,
}

/// Maze carver driven by an explicit random source.
pub struct MazeCarver<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeCarver<R> {
    /// Create a carver that draws from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn frame(&mut self, cell: Cell) -> Frame {
        let mut steps = LATTICE_STEPS;
        steps.shuffle(&mut self.rng);
        Frame {
            cell,
            steps,
            next: 0,
        }
    }

    /// Carve a maze into `grid` starting from `start`.
    ///
    /// `start` is opened, then the backtracker repeatedly takes the next
    /// shuffled lattice offset of the newest pending cell; if the target is
    /// strictly interior and unvisited, it opens the wall in between and the
    /// target and descends into it. The pending cells live on an explicit
    /// stack, so call depth does not grow with the grid.
    ///
    /// Returns the number of cells opened.
    pub fn carve(&mut self, grid: &mut Grid, start: Cell) -> Result<usize, GridError> {
        grid.set(start, TerrainKind::Open)?;
        let interior = grid.interior();
        let width = grid.width() as usize;
        let index = |c: Cell| c.y as usize * width + c.x as usize;

        let mut visited = vec![false; grid.bounds().len()];
        visited[index(start)] = true;
        let mut opened = 1;

        let mut stack = vec![self.frame(start)];
        while let Some(top) = stack.last_mut() {
            if top.next == top.steps.len() {
                stack.pop();
                continue;
            }
            let cell = top.cell;
            let target = cell + top.steps[top.next];
            top.next += 1;

            if !interior.contains(target) || visited[index(target)] {
                continue;
            }
            visited[index(target)] = true;
            grid.set(cell.midpoint(target), TerrainKind::Open)?;
            grid.set(target, TerrainKind::Open)?;
            opened += 2;

            let frame = self.frame(target);
            stack.push(frame);
        }

        Ok(opened)
    }

    /// Reassign open cells to weighted terrain; see [`TerrainWeights::apply`].
    pub fn weight(&mut self, grid: &mut Grid, weights: &TerrainWeights, keep: &[Cell]) -> usize {
        weights.apply(grid, &mut self.rng, keep)
    }
}
