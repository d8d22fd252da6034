//! Session configuration.

use maze_core::{Cell, odd_at_least};

use crate::weights::TerrainWeights;

/// Smallest side length a session accepts; anything smaller is raised to it.
pub const MIN_SIDE: i32 = 3;

/// Parameters for a [`MazeSession`](crate::MazeSession).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub width: i32,
    pub height: i32,
    /// Carve/verify budget used by [`MazeSession::generate`](crate::MazeSession::generate).
    pub max_attempts: u32,
    /// Defaults to `(1, 1)`.
    pub start: Option<Cell>,
    /// Defaults to the interior corner opposite the start.
    pub goal: Option<Cell>,
    /// `None` carves a uniform-cost maze.
    pub weights: Option<TerrainWeights>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 21,
            height: 21,
            max_attempts: 100,
            start: None,
            goal: None,
            weights: None,
        }
    }
}

impl MazeConfig {
    /// Uniform-cost configuration of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the attempt budget (builder).
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Override the start cell (builder).
    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = Some(start);
        self
    }

    /// Override the goal cell (builder).
    pub fn with_goal(mut self, goal: Cell) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Enable the weighted-terrain pass (builder).
    pub fn with_weights(mut self, weights: TerrainWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Effective grid dimensions: odd and at least [`MIN_SIDE`].
    pub fn dimensions(&self) -> (i32, i32) {
        (
            odd_at_least(self.width.max(MIN_SIDE)),
            odd_at_least(self.height.max(MIN_SIDE)),
        )
    }

    /// Effective start cell.
    pub fn start_cell(&self) -> Cell {
        self.start.unwrap_or(Cell::new(1, 1))
    }

    /// Effective goal cell.
    pub fn goal_cell(&self) -> Cell {
        let (w, h) = self.dimensions();
        self.goal.unwrap_or(Cell::new(w - 2, h - 2))
    }
}
