use std::fmt;

use maze_core::{Cell, Grid};

use crate::PathFinder;
use crate::path::Path;
use crate::traits::WeightedPather;

/// Which shortest-path algorithm answers a path request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStrategy {
    /// Fewest moves; correct when every passable cell costs the same.
    Breadth,
    /// Cheapest total entry cost.
    Dijkstra,
}

impl SearchStrategy {
    /// Dijkstra if any weighted terrain is present, breadth-first otherwise.
    pub fn for_grid(grid: &Grid) -> Self {
        if grid.has_weighted_terrain() {
            Self::Dijkstra
        } else {
            Self::Breadth
        }
    }

    /// Run the selected search from `from` to `to`.
    pub fn find_path<P: WeightedPather>(
        self,
        finder: &mut PathFinder,
        pather: &P,
        from: Cell,
        to: Cell,
    ) -> Option<Path> {
        let path = match self {
            Self::Breadth => finder.bfs_path(pather, from, to),
            Self::Dijkstra => finder.dijkstra_path(pather, from, to),
        };
        match &path {
            Some(p) => log::debug!("{self} search {from} -> {to}: {} cells", p.len()),
            None => log::debug!("{self} search {from} -> {to}: no path"),
        }
        path
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breadth => f.write_str("bfs"),
            Self::Dijkstra => f.write_str("dijkstra"),
        }
    }
}
