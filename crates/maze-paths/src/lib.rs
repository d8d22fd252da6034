//! Reachability and shortest-path search over maze grids.
//!
//! All algorithms operate through [`PathFinder`], which owns and reuses its
//! internal buffers so that repeated queries on the same grid do not
//! reallocate:
//!
//! - **BFS** fewest-moves paths ([`PathFinder::bfs_path`])
//! - **Dijkstra** cheapest paths over weighted terrain ([`PathFinder::dijkstra_path`])
//! - **DFS** reachability ([`PathFinder::is_reachable`], [`PathFinder::reachable_from`])
//!
//! [`SearchStrategy`] picks BFS or Dijkstra for a given grid.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, reachability |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |

mod bfs;
mod dijkstra;
mod finder;
mod path;
mod reach;
mod strategy;
mod traits;

pub use finder::PathFinder;
pub use path::Path;
pub use strategy::SearchStrategy;
pub use traits::{Pather, WeightedPather};
