//! Reachability checks by depth-first traversal.

use maze_core::Cell;

use crate::PathFinder;
use crate::finder::NO_PARENT;
use crate::traits::Pather;

impl PathFinder {
    /// Whether `to` can be reached from `from` through passable cells.
    ///
    /// Iterative DFS over an explicit stack: cells are marked when pushed
    /// and never revisited, and walls are never crossed. Neighbours are
    /// pushed in reverse so they are explored in [`Cell::DIRECTIONS`] order.
    pub fn is_reachable<P: Pather>(&mut self, pather: &P, from: Cell, to: Cell) -> bool {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return false;
        };
        if !pather.passable(from) || !pather.passable(to) {
            return false;
        }

        self.next_generation();
        self.stack.clear();
        self.visit(start_idx, NO_PARENT, 0);
        self.stack.push(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.stack.pop() {
            if ci == goal_idx {
                found = true;
                break;
            }
            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter().rev() {
                if let Some(ni) = self.idx(np) {
                    if !self.seen(ni) {
                        self.visit(ni, ci, 0);
                        self.stack.push(ni);
                    }
                }
            }
        }

        self.nbuf = nbuf;
        found
    }

    /// All cells reachable from `from`, in depth-first visiting order.
    ///
    /// Like [`is_reachable`](Self::is_reachable), neighbours are explored in
    /// [`Cell::DIRECTIONS`] order. Returns an empty vector if `from` is
    /// impassable or outside the range.
    pub fn reachable_from<P: Pather>(&mut self, pather: &P, from: Cell) -> Vec<Cell> {
        let mut result = Vec::new();
        let Some(si) = self.idx(from) else {
            return result;
        };
        if !pather.passable(from) {
            return result;
        }

        self.next_generation();
        self.stack.clear();
        self.visit(si, NO_PARENT, 0);
        self.stack.push(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.stack.pop() {
            let cp = self.point(ci);
            result.push(cp);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter().rev() {
                if let Some(ni) = self.idx(np) {
                    if !self.seen(ni) {
                        self.visit(ni, ci, 0);
                        self.stack.push(ni);
                    }
                }
            }
        }

        self.nbuf = nbuf;
        result
    }
}
