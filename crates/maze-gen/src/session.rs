//! The maze session: generate, verify, and answer path requests.
//!
//! A [`MazeSession`] exclusively owns the current [`Grid`] and the last
//! computed [`Path`]. It moves through three states:
//!
//! ```text
//! Uninitialized --regenerate--> Generated --request_path--> PathReady
//!       ^                          ^  |                         |
//!       +------ failed ------------+  +------- regenerate ------+
//! ```
//!
//! The path is computed lazily on the first request after a successful
//! regeneration and cached until the next regeneration.

use maze_core::{Cell, Grid, TerrainKind};
use maze_paths::{Path, PathFinder, SearchStrategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::carver::MazeCarver;
use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::snapshot::MazeSnapshot;

/// Lifecycle of a [`MazeSession`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No maze has been accepted yet.
    Uninitialized,
    /// A solvable maze exists; no path has been computed for it.
    Generated,
    /// The path for the current maze is cached.
    PathReady,
}

/// Owner of one maze, its endpoints, its random source and its cached path.
pub struct MazeSession<R: Rng = StdRng> {
    config: MazeConfig,
    carver: MazeCarver<R>,
    finder: PathFinder,
    grid: Grid,
    path: Option<Path>,
    start: Cell,
    goal: Cell,
    state: SessionState,
    attempts: u32,
}

impl MazeSession<StdRng> {
    /// Uniform-cost session of (at least) `width` × `height`, seeded for
    /// reproducible mazes.
    pub fn new(width: i32, height: i32, random_seed: u64) -> Self {
        Self::build(
            MazeConfig::new(width, height),
            StdRng::seed_from_u64(random_seed),
        )
    }

    /// Session from a full configuration, seeded.
    pub fn from_config(config: MazeConfig, random_seed: u64) -> Result<Self, MazeError> {
        Self::with_rng(config, StdRng::seed_from_u64(random_seed))
    }
}

impl<R: Rng> MazeSession<R> {
    /// Session from a full configuration and an explicit random source.
    ///
    /// Fails with [`MazeError::InvalidEndpoint`] if the start or goal is not
    /// strictly inside the grid, or if the goal is not on the start's
    /// carving lattice (both coordinates an even distance from the start).
    /// An off-lattice goal would be forced open next to carved passages and
    /// could close a loop.
    pub fn with_rng(config: MazeConfig, rng: R) -> Result<Self, MazeError> {
        let (width, height) = config.dimensions();
        let interior = Grid::new(width, height).interior();
        let (start, goal) = (config.start_cell(), config.goal_cell());
        for cell in [start, goal] {
            if !interior.contains(cell) {
                return Err(MazeError::InvalidEndpoint {
                    cell,
                    reason: "must lie strictly inside the border",
                });
            }
        }
        if (goal.x - start.x) % 2 != 0 || (goal.y - start.y) % 2 != 0 {
            return Err(MazeError::InvalidEndpoint {
                cell: goal,
                reason: "must lie on the start's carving lattice",
            });
        }
        Ok(Self::build(config, rng))
    }

    fn build(config: MazeConfig, rng: R) -> Self {
        let (width, height) = config.dimensions();
        let start = config.start_cell();
        let goal = config.goal_cell();
        let grid = blank_grid(width, height, start, goal);
        Self {
            finder: PathFinder::for_grid(&grid),
            carver: MazeCarver::new(rng),
            config,
            grid,
            path: None,
            start,
            goal,
            state: SessionState::Uninitialized,
            attempts: 0,
        }
    }

    /// [`regenerate`](Self::regenerate) with the configured attempt budget.
    pub fn generate(&mut self) -> Result<(), MazeError> {
        self.regenerate(self.config.max_attempts)
    }

    /// Carve fresh mazes until the goal is reachable from the start, giving
    /// up after `max_attempts` carves.
    ///
    /// Any cached path is discarded. On success the session is
    /// [`Generated`](SessionState::Generated); on failure it is
    /// [`Uninitialized`](SessionState::Uninitialized) with an uncarved grid.
    pub fn regenerate(&mut self, max_attempts: u32) -> Result<(), MazeError> {
        self.path = None;
        let (width, height) = (self.grid.width(), self.grid.height());

        for attempt in 1..=max_attempts {
            let mut grid = Grid::new(width, height);
            self.carver.carve(&mut grid, self.start)?;
            grid.set(self.start, TerrainKind::Open)?;
            grid.set(self.goal, TerrainKind::Open)?;
            if let Some(weights) = &self.config.weights {
                self.carver.weight(&mut grid, weights, &[self.start, self.goal]);
            }

            if self.finder.is_reachable(&grid, self.start, self.goal) {
                log::info!(
                    "generated {}x{} maze after {} attempt(s), {} open cells",
                    width,
                    height,
                    attempt,
                    grid.count_passable()
                );
                self.grid = grid;
                self.state = SessionState::Generated;
                self.attempts = attempt;
                return Ok(());
            }
            log::debug!(
                "attempt {attempt}: goal {} unreachable from {}, retrying",
                self.goal,
                self.start
            );
        }

        log::warn!("no solvable {width}x{height} maze within {max_attempts} attempt(s)");
        self.grid = blank_grid(width, height, self.start, self.goal);
        self.state = SessionState::Uninitialized;
        self.attempts = max_attempts;
        Err(MazeError::GenerationFailed {
            attempts: max_attempts,
        })
    }

    /// Path from start to goal on the current maze.
    ///
    /// Computed on the first request after a regeneration and cached;
    /// later requests return the cached value. Returns `None` when no maze
    /// has been generated or the goal is unreachable.
    pub fn request_path(&mut self) -> Option<&Path> {
        match self.state {
            SessionState::Uninitialized => None,
            SessionState::PathReady => self.path.as_ref(),
            SessionState::Generated => {
                let strategy = self.strategy();
                let path = strategy.find_path(&mut self.finder, &self.grid, self.start, self.goal)?;
                log::debug!(
                    "{strategy} path: {} steps, cost {:?}",
                    path.steps(),
                    path.cost(&self.grid)
                );
                self.state = SessionState::PathReady;
                self.path = Some(path);
                self.path.as_ref()
            }
        }
    }

    /// Read-only view of the current maze.
    pub fn grid_snapshot(&self) -> MazeSnapshot<'_> {
        MazeSnapshot {
            grid: &self.grid,
            start: self.start,
            goal: self.goal,
            path: self.path.as_ref(),
        }
    }

    /// Search used for path requests on the current grid.
    pub fn strategy(&self) -> SearchStrategy {
        SearchStrategy::for_grid(&self.grid)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Carves used by the last [`regenerate`](Self::regenerate).
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }
}

/// All-wall grid with only the endpoints open.
fn blank_grid(width: i32, height: i32, start: Cell, goal: Cell) -> Grid {
    let mut grid = Grid::new(width, height);
    grid.map_cells(|cell, kind| {
        if cell == start || cell == goal {
            TerrainKind::Open
        } else {
            kind
        }
    });
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::TerrainWeights;
    use std::collections::{HashSet, VecDeque};

    /// Open cells reachable from `from`, by an independent BFS.
    fn flood(grid: &Grid, from: Cell) -> HashSet<Cell> {
        let mut seen = HashSet::from([from]);
        let mut queue = VecDeque::from([from]);
        while let Some(c) = queue.pop_front() {
            for n in c.neighbors_4() {
                if grid.is_passable(n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen
    }

    /// Number of 4-adjacent pairs of open cells.
    fn open_edges(grid: &Grid) -> usize {
        grid.passable_cells()
            .map(|c| {
                [Cell::new(1, 0), Cell::new(0, 1)]
                    .into_iter()
                    .filter(|&d| grid.is_passable(c + d))
                    .count()
            })
            .sum()
    }

    fn assert_perfect_maze(s: &MazeSession) {
        let snap = s.grid_snapshot();
        let grid = snap.grid();
        assert_eq!(snap.terrain(s.start()), Ok(TerrainKind::Open));
        assert_eq!(snap.terrain(s.goal()), Ok(TerrainKind::Open));
        for (cell, kind) in snap.iter() {
            if grid.is_border(cell) {
                assert_eq!(kind, TerrainKind::Wall, "border cell {cell} is open");
            }
        }
        let open = grid.count_passable();
        assert_eq!(flood(grid, s.start()).len(), open, "open region is disconnected");
        assert_eq!(open_edges(grid), open - 1, "open region has a cycle");
    }

    fn assert_valid_path(s: &MazeSession, path: &Path) {
        let grid = s.grid_snapshot().grid();
        assert_eq!(path.start(), s.start());
        assert_eq!(path.goal(), s.goal());
        assert!(path.is_contiguous());
        assert!(path.iter().all(|&c| grid.is_passable(c)));
    }

    #[test]
    fn test_new_is_uninitialized_all_wall() {
        let mut s = MazeSession::new(9, 9, 1);
        assert_eq!(s.state(), SessionState::Uninitialized);
        assert_eq!(s.start(), Cell::new(1, 1));
        assert_eq!(s.goal(), Cell::new(7, 7));
        let snap = s.grid_snapshot();
        assert_eq!(snap.grid().count_passable(), 2);
        assert_eq!(snap.terrain(s.goal()), Ok(TerrainKind::Open));
        assert!(s.request_path().is_none());
        assert_eq!(s.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_regenerate_produces_perfect_maze() {
        let mut s = MazeSession::new(21, 15, 7);
        s.regenerate(10).unwrap();
        assert_eq!(s.state(), SessionState::Generated);
        assert_eq!(s.attempts(), 1);
        assert_eq!(s.strategy(), SearchStrategy::Breadth);
        assert_perfect_maze(&s);
    }

    #[test]
    fn test_five_by_five_path() {
        let mut s = MazeSession::new(5, 5, 0);
        s.regenerate(1).unwrap();
        let path = s.request_path().cloned().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.start(), Cell::new(1, 1));
        assert_eq!(path.goal(), Cell::new(3, 3));
        assert_valid_path(&s, &path);
    }

    #[test]
    fn test_request_path_is_cached() {
        let mut s = MazeSession::new(15, 15, 99);
        s.generate().unwrap();
        let first = s.request_path().cloned().unwrap();
        assert_eq!(s.state(), SessionState::PathReady);
        let second = s.request_path().cloned().unwrap();
        assert_eq!(first, second);
        assert_eq!(s.grid_snapshot().path(), Some(&first));
        assert_valid_path(&s, &first);
    }

    #[test]
    fn test_regenerate_discards_path() {
        let mut s = MazeSession::new(15, 15, 5);
        s.generate().unwrap();
        s.request_path().unwrap();
        s.generate().unwrap();
        assert_eq!(s.state(), SessionState::Generated);
        assert!(s.grid_snapshot().path().is_none());
        let path = s.request_path().cloned().unwrap();
        assert_valid_path(&s, &path);
    }

    #[test]
    fn test_same_seed_same_maze_and_path() {
        let mut a = MazeSession::new(25, 17, 1234);
        let mut b = MazeSession::new(25, 17, 1234);
        a.generate().unwrap();
        b.generate().unwrap();
        assert_eq!(a.grid_snapshot().grid(), b.grid_snapshot().grid());
        assert_eq!(a.request_path().cloned(), b.request_path().cloned());
    }

    #[test]
    fn test_weighted_session_uses_dijkstra() {
        let config = MazeConfig::new(21, 21).with_weights(TerrainWeights::default());
        let mut s = MazeSession::from_config(config, 8).unwrap();
        s.generate().unwrap();
        assert_eq!(s.strategy(), SearchStrategy::Dijkstra);
        let snap = s.grid_snapshot();
        assert_eq!(snap.terrain(s.start()), Ok(TerrainKind::Open));
        assert_eq!(snap.terrain(s.goal()), Ok(TerrainKind::Open));
        assert_perfect_maze(&s);

        let path = s.request_path().cloned().unwrap();
        assert_valid_path(&s, &path);
        // A perfect maze has one route, so its cost is fully determined.
        let grid = s.grid_snapshot().grid();
        assert!(path.cost(grid).unwrap() >= path.steps() as u32);
    }

    #[test]
    fn test_off_lattice_goal_rejected() {
        // A pillar and a wall between rooms, either of which would add a
        // second route once forced open.
        for goal in [Cell::new(4, 4), Cell::new(1, 2), Cell::new(2, 3)] {
            let config = MazeConfig::new(9, 9).with_goal(goal);
            assert!(matches!(
                MazeSession::from_config(config, 0),
                Err(MazeError::InvalidEndpoint { cell, .. }) if cell == goal
            ));
        }
        // The default goal is odd, so an even start no longer matches it.
        let even_start = MazeConfig::new(9, 9).with_start(Cell::new(2, 2));
        assert!(MazeSession::from_config(even_start, 0).is_err());
    }

    #[test]
    fn test_even_lattice_endpoints_carve_perfect_maze() {
        let config = MazeConfig::new(11, 9)
            .with_start(Cell::new(2, 2))
            .with_goal(Cell::new(8, 6));
        for seed in 0..20 {
            let mut s = MazeSession::from_config(config.clone(), seed).unwrap();
            s.generate().unwrap();
            assert_eq!(s.attempts(), 1);
            assert_perfect_maze(&s);
            let path = s.request_path().cloned().unwrap();
            assert_valid_path(&s, &path);
        }
    }

    #[test]
    fn test_mixed_parity_endpoints_stay_acyclic() {
        // Start and goal both on the (odd, even) lattice.
        let config = MazeConfig::new(9, 9)
            .with_start(Cell::new(1, 2))
            .with_goal(Cell::new(7, 6));
        for seed in 0..20 {
            let mut s = MazeSession::from_config(config.clone(), seed).unwrap();
            s.generate().unwrap();
            assert_perfect_maze(&s);
        }
    }

    #[test]
    fn test_zero_attempts_fails() {
        let mut s = MazeSession::new(7, 7, 0);
        assert_eq!(
            s.regenerate(0),
            Err(MazeError::GenerationFailed { attempts: 0 })
        );
    }

    #[test]
    fn test_generate_uses_configured_budget() {
        let config = MazeConfig::new(9, 9).with_max_attempts(0);
        let mut s = MazeSession::from_config(config, 3).unwrap();
        assert_eq!(s.generate(), Err(MazeError::GenerationFailed { attempts: 0 }));
        assert_eq!(s.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_failed_regenerate_resets_session() {
        let mut s = MazeSession::new(9, 9, 3);
        s.generate().unwrap();
        assert!(s.request_path().is_some());

        assert!(s.regenerate(0).is_err());
        assert_eq!(s.state(), SessionState::Uninitialized);
        assert_eq!(s.attempts(), 0);
        assert!(s.request_path().is_none());
        let snap = s.grid_snapshot();
        assert!(snap.path().is_none());
        assert_eq!(snap.grid().count_passable(), 2);
        assert_eq!(snap.terrain(Cell::new(1, 1)), Ok(TerrainKind::Open));
        assert_eq!(snap.terrain(Cell::new(7, 7)), Ok(TerrainKind::Open));
    }

    #[test]
    fn test_extreme_weights_generate() {
        let config =
            MazeConfig::new(15, 15).with_weights(TerrainWeights::new(u32::MAX, 1, u32::MAX));
        let mut s = MazeSession::from_config(config, 6).unwrap();
        s.generate().unwrap();
        assert_perfect_maze(&s);
    }

    #[test]
    fn test_invalid_endpoints_rejected() {
        let border = MazeConfig::new(9, 9).with_goal(Cell::new(0, 4));
        assert!(matches!(
            MazeSession::from_config(border, 0),
            Err(MazeError::InvalidEndpoint { cell, .. }) if cell == Cell::new(0, 4)
        ));
        let outside = MazeConfig::new(9, 9).with_start(Cell::new(20, 20));
        assert!(MazeSession::from_config(outside, 0).is_err());
    }

    #[test]
    fn test_tiny_dimensions_are_raised() {
        let mut s = MazeSession::new(1, 0, 0);
        let snap = s.grid_snapshot();
        assert_eq!((snap.width(), snap.height()), (3, 3));
        s.generate().unwrap();
        let path = s.request_path().unwrap();
        assert_eq!(path.cells(), &[Cell::new(1, 1)]);
    }

    #[test]
    fn test_with_rng_matches_seeded() {
        let rng = StdRng::seed_from_u64(17);
        let mut a = MazeSession::with_rng(MazeConfig::new(11, 11), rng).unwrap();
        let mut b = MazeSession::from_config(MazeConfig::new(11, 11), 17).unwrap();
        a.generate().unwrap();
        b.generate().unwrap();
        assert_eq!(a.grid_snapshot().grid(), b.grid_snapshot().grid());
    }

    #[test]
    fn test_snapshot_display() {
        let mut s = MazeSession::new(5, 5, 0);
        s.generate().unwrap();
        s.request_path();
        let text = s.grid_snapshot().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 5));
        assert_eq!(lines[0], "#####");
        assert_eq!(lines[1].chars().nth(1), Some('S'));
        assert_eq!(lines[3].chars().nth(3), Some('G'));
        assert_eq!(text.matches('*').count(), 3);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn regenerated_mazes_are_perfect(
                half_w in 2i32..12,
                half_h in 2i32..12,
                seed in any::<u64>(),
            ) {
                let mut s = MazeSession::new(half_w * 2 + 1, half_h * 2 + 1, seed);
                prop_assert!(s.generate().is_ok());
                assert_perfect_maze(&s);
                let path = s.request_path().cloned();
                prop_assert!(path.is_some());
                let path = path.unwrap();
                assert_valid_path(&s, &path);
                let snap = s.grid_snapshot();
                prop_assert!(path.iter().all(|&c| snap.terrain(c) == Ok(TerrainKind::Open)));
            }

            #[test]
            fn weighted_mazes_stay_connected(
                half in 2i32..10,
                seed in any::<u64>(),
            ) {
                let config = MazeConfig::new(half * 2 + 1, half * 2 + 1)
                    .with_weights(TerrainWeights::default());
                let mut s = MazeSession::from_config(config, seed).unwrap();
                prop_assert!(s.generate().is_ok());
                assert_perfect_maze(&s);
                let first = s.request_path().cloned();
                let second = s.request_path().cloned();
                prop_assert!(first.is_some());
                prop_assert_eq!(first, second);
            }

            #[test]
            fn configured_endpoints_are_rejected_or_perfect(
                half_w in 2i32..8,
                half_h in 2i32..8,
                sx in 1i32..15,
                sy in 1i32..15,
                gx in 1i32..15,
                gy in 1i32..15,
                weighted in any::<bool>(),
                seed in any::<u64>(),
            ) {
                let (w, h) = (half_w * 2 + 1, half_h * 2 + 1);
                let inside = |x: i32, y: i32| Cell::new(x % (w - 2) + 1, y % (h - 2) + 1);
                let (start, goal) = (inside(sx, sy), inside(gx, gy));
                let mut config = MazeConfig::new(w, h).with_start(start).with_goal(goal);
                if weighted {
                    config = config.with_weights(TerrainWeights::default());
                }
                let same_lattice = (goal.x - start.x) % 2 == 0 && (goal.y - start.y) % 2 == 0;
                match MazeSession::from_config(config, seed) {
                    Err(MazeError::InvalidEndpoint { cell, .. }) => {
                        prop_assert!(!same_lattice);
                        prop_assert_eq!(cell, goal);
                    }
                    Err(e) => prop_assert!(false, "unexpected error {}", e),
                    Ok(mut s) => {
                        prop_assert!(same_lattice);
                        prop_assert!(s.generate().is_ok());
                        assert_perfect_maze(&s);
                        let path = s.request_path().cloned();
                        prop_assert!(path.is_some());
                        assert_valid_path(&s, &path.unwrap());
                    }
                }
            }
        }
    }
}
