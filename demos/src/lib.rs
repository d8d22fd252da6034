//! Shared pieces of the terminal maze demo: command-line options and a
//! walker that replays a finished path one step at a time.

use maze_core::Cell;
use maze_gen::{MazeConfig, MazeError, MazeSession, TerrainWeights};
use maze_paths::Path;

/// Demo settings, read from `maze [WIDTH HEIGHT] [--seed N] [--weighted]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub width: i32,
    pub height: i32,
    pub seed: u64,
    pub weighted: bool,
}

impl Default for Options {
    fn default() -> Self {
        let config = MazeConfig::default();
        Self {
            width: config.width,
            height: config.height,
            seed: 0,
            weighted: false,
        }
    }
}

impl Options {
    /// Parse arguments (without the program name).
    pub fn parse<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = Self::default();
        let mut dims = Vec::new();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--weighted" | "-w" => opts.weighted = true,
                "--seed" | "-s" => {
                    let value = args.next().ok_or("--seed needs a value")?;
                    opts.seed = value
                        .as_ref()
                        .parse()
                        .map_err(|e| format!("bad seed {:?}: {e}", value.as_ref()))?;
                }
                other => {
                    let n: i32 = other
                        .parse()
                        .map_err(|e| format!("bad dimension {other:?}: {e}"))?;
                    dims.push(n);
                }
            }
        }
        match dims[..] {
            [] => {}
            [w, h] => (opts.width, opts.height) = (w, h),
            _ => return Err("expected WIDTH and HEIGHT together".into()),
        }
        Ok(opts)
    }

    pub fn config(&self) -> MazeConfig {
        let config = MazeConfig::new(self.width, self.height);
        if self.weighted {
            config.with_weights(TerrainWeights::default())
        } else {
            config
        }
    }

    pub fn session(&self) -> Result<MazeSession, MazeError> {
        MazeSession::from_config(self.config(), self.seed)
    }
}

/// Actor that follows its own copy of a path; the session is never
/// consulted while walking.
#[derive(Debug, Clone)]
pub struct Walker {
    cells: Vec<Cell>,
    at: usize,
}

impl Walker {
    pub fn new(path: &Path) -> Self {
        Self {
            cells: path.cells().to_vec(),
            at: 0,
        }
    }

    pub fn position(&self) -> Cell {
        self.cells[self.at]
    }

    pub fn arrived(&self) -> bool {
        self.at + 1 == self.cells.len()
    }

    /// Advance one cell; returns the new position, or `None` once at the goal.
    pub fn step(&mut self) -> Option<Cell> {
        if self.arrived() {
            return None;
        }
        self.at += 1;
        Some(self.position())
    }
}
