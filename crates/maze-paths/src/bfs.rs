use maze_core::Cell;

use crate::PathFinder;
use crate::finder::NO_PARENT;
use crate::path::Path;
use crate::traits::Pather;

impl PathFinder {
    /// Shortest path by number of moves, using breadth-first search.
    ///
    /// Neighbours are expanded in [`Cell::DIRECTIONS`] order, so among
    /// equally short routes the result is deterministic. The search stops
    /// the first time `to` is dequeued. Returns `None` when either endpoint
    /// is impassable or outside the range, or when `to` is never reached.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Cell, to: Cell) -> Option<Path> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;
        if !pather.passable(from) || !pather.passable(to) {
            return None;
        }

        self.next_generation();
        self.queue.clear();
        self.visit(start_idx, NO_PARENT, 0);
        self.queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.queue.pop_front() {
            if ci == goal_idx {
                found = true;
                break;
            }
            let depth = self.nodes[ci].cost;
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.seen(ni) {
                    continue;
                }
                self.visit(ni, ci, depth + 1);
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;

        if !found {
            return None;
        }
        Path::new(self.reconstruct(goal_idx))
    }
}
