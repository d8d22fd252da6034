//! **maze-core**: grid and terrain types for maze generation and search.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace: cell coordinates, rectangles, the terrain cost model and a
//! bounds-checked odd-sized [`Grid`].

pub mod error;
pub mod geom;
pub mod grid;
pub mod terrain;

pub use error::GridError;
pub use geom::{Cell, Range, RangeIter};
pub use grid::{Grid, odd_at_least};
pub use terrain::TerrainKind;
