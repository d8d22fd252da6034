//! Maze generation and the maze session.
//!
//! [`MazeCarver`] carves perfect mazes with a randomized backtracker and can
//! sprinkle weighted terrain over the result. [`MazeSession`] owns one maze:
//! it regenerates until the goal is reachable from the start and answers
//! shortest-path requests, caching the answer until the next regeneration.
//!
//! ```
//! use maze_gen::{MazeSession, SessionState};
//!
//! let mut session = MazeSession::new(21, 21, 7);
//! session.generate().unwrap();
//! assert_eq!(session.state(), SessionState::Generated);
//!
//! let path = session.request_path().unwrap().clone();
//! assert_eq!(path.start(), session.start());
//! assert_eq!(path.goal(), session.goal());
//! ```

mod carver;
mod config;
mod error;
mod session;
mod snapshot;
mod weights;

pub use carver::{LATTICE_STEPS, MazeCarver};
pub use config::{MIN_SIDE, MazeConfig};
pub use error::MazeError;
pub use session::{MazeSession, SessionState};
pub use snapshot::MazeSnapshot;
pub use weights::TerrainWeights;
