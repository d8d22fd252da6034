use maze_core::{Cell, Grid, TerrainKind};

/// Minimal search interface: which cells may be entered, and from where.
pub trait Pather {
    /// Whether a path may occupy `c`.
    fn passable(&self, c: Cell) -> bool;

    /// Append the passable orthogonal neighbours of `c` into `buf`, in
    /// [`Cell::DIRECTIONS`] order. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(c.neighbors_4().into_iter().filter(|&n| self.passable(n)));
    }
}

/// Pather with weighted (positive-cost) moves.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` into adjacent `to`. Must be > 0.
    fn cost(&self, from: Cell, to: Cell) -> u32;
}

impl Pather for Grid {
    #[inline]
    fn passable(&self, c: Cell) -> bool {
        self.is_passable(c)
    }
}

impl WeightedPather for Grid {
    /// The cost of the entered cell. Walls never reach this point because
    /// [`Pather::neighbors`] filters them out.
    #[inline]
    fn cost(&self, _from: Cell, to: Cell) -> u32 {
        self.at(to).and_then(TerrainKind::cost).unwrap_or(u32::MAX)
    }
}
