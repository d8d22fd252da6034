use std::collections::BinaryHeap;

use maze_core::Cell;

use crate::PathFinder;
use crate::finder::{NO_PARENT, NodeRef};
use crate::path::Path;
use crate::traits::WeightedPather;

impl PathFinder {
    /// Cheapest path under `pather`'s move costs, using Dijkstra's algorithm.
    ///
    /// Improved cells are pushed again rather than updated in place; stale
    /// heap entries are skipped when popped. Equal accumulated costs are
    /// settled in the order they were pushed (FIFO). Returns `None` when
    /// either endpoint is impassable or outside the range, or when `to` is
    /// never reached.
    pub fn dijkstra_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Cell,
        to: Cell,
    ) -> Option<Path> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;
        if !pather.passable(from) || !pather.passable(to) {
            return None;
        }

        self.next_generation();
        self.visit(start_idx, NO_PARENT, 0);

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(NodeRef {
            idx: start_idx,
            cost: 0,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip entries for cells already settled.
            if !self.nodes[ci].open {
                continue;
            }
            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_cost = self.nodes[ci].cost;
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_cost.saturating_add(pather.cost(cp, np));
                if self.seen(ni) && tentative >= self.nodes[ni].cost {
                    continue;
                }

                self.visit(ni, ci, tentative);
                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                    seq,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }
        Path::new(self.reconstruct(goal_idx))
    }
}
