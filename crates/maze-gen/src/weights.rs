use maze_core::{Cell, Grid, TerrainKind};
use rand::Rng;

/// Discrete distribution over passable terrain, as relative weights.
///
/// The default is 60 % open floor, 25 % forest and 15 % mud.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainWeights {
    pub open: u32,
    pub forest: u32,
    pub mud: u32,
}

impl Default for TerrainWeights {
    fn default() -> Self {
        Self {
            open: 60,
            forest: 25,
            mud: 15,
        }
    }
}

impl TerrainWeights {
    /// Create a distribution from relative weights.
    pub const fn new(open: u32, forest: u32, mud: u32) -> Self {
        Self { open, forest, mud }
    }

    /// Sum of the weights; `u64` so that any three `u32` weights fit.
    fn total(&self) -> u64 {
        u64::from(self.open) + u64::from(self.forest) + u64::from(self.mud)
    }

    /// Draw one passable terrain kind. An all-zero distribution always
    /// yields [`TerrainKind::Open`].
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TerrainKind {
        let total = self.total();
        if total == 0 {
            return TerrainKind::Open;
        }
        let r = rng.random_range(0..total);
        let open = u64::from(self.open);
        if r < open {
            TerrainKind::Open
        } else if r < open + u64::from(self.forest) {
            TerrainKind::Forest
        } else {
            TerrainKind::Mud
        }
    }

    /// Independently redraw every open cell of `grid` except those in
    /// `keep`, then force the `keep` cells back to plain floor.
    ///
    /// Walls are never touched, so connectivity is unchanged. Returns the
    /// number of cells that ended up weighted.
    pub fn apply<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R, keep: &[Cell]) -> usize {
        grid.map_cells(|cell, kind| {
            if keep.contains(&cell) {
                TerrainKind::Open
            } else if kind == TerrainKind::Open {
                self.sample(&mut *rng)
            } else {
                kind
            }
        });
        grid.count(TerrainKind::Forest) + grid.count(TerrainKind::Mud)
    }
}
