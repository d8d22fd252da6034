use std::collections::VecDeque;

use maze_core::{Cell, Grid, Range};

// ---------------------------------------------------------------------------
// Internal per-cell search node
// ---------------------------------------------------------------------------

/// Parent sentinel: no valid flat index ever equals it.
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) cost: u32,
    pub(crate) parent: usize,
    /// A node is only meaningful when its generation matches the finder's
    /// current one; anything older is treated as unvisited.
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            cost: 0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Heap entry ordered by `(cost, seq)` so that [`BinaryHeap`] pops the
/// cheapest entry first and, among equal costs, the one pushed first.
///
/// [`BinaryHeap`]: std::collections::BinaryHeap
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: u32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Owner of the search buffers for one grid rectangle.
///
/// BFS, Dijkstra and the reachability check all run through a `PathFinder`,
/// which keeps its node array, queue and stack between calls. Each search
/// bumps a generation counter instead of clearing the node array.
pub struct PathFinder {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) stack: Vec<usize>,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Cell>,
}

impl PathFinder {
    /// Create a finder for the given rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            queue: VecDeque::new(),
            stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Create a finder covering the whole of `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.bounds())
    }

    /// Start a new search: every node becomes unvisited.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old stamps could collide with the new ones.
            self.nodes.fill(Node::default());
            self.generation = 1;
        }
        self.generation
    }

    /// Whether node `i` was touched during the current search.
    #[inline]
    pub(crate) fn seen(&self, i: usize) -> bool {
        self.nodes[i].generation == self.generation
    }

    /// Mark node `i` as reached from `parent` at `cost`.
    #[inline]
    pub(crate) fn visit(&mut self, i: usize, parent: usize, cost: u32) {
        let generation = self.generation;
        let n = &mut self.nodes[i];
        n.generation = generation;
        n.parent = parent;
        n.cost = cost;
        n.open = true;
    }

    /// Walk parent pointers back from `goal` and return the cells in
    /// start-to-goal order.
    pub(crate) fn reconstruct(&self, goal: usize) -> Vec<Cell> {
        let mut cells = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            cells.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        cells.reverse();
        cells
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Cell` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Cell) -> Option<usize> {
        if !self.rng.contains(c) {
            return None;
        }
        let x = (c.x - self.rng.min.x) as usize;
        let y = (c.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Cell`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Cell {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Cell::new(x, y)
    }
}
