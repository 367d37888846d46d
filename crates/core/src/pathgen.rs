//! Random self-avoiding walks on the grid.
//!
//! A walk that runs into a dead end is thrown away whole and a fresh attempt
//! starts again from the start cell. There is no per-step backtracking.

use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::grid::Grid;
use crate::types::CellIndex;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Ordered, non-repeating sequence of grid-adjacent cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path(Vec<CellIndex>);

impl Path {
    pub fn cells(&self) -> &[CellIndex] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<CellIndex> {
        self.0.get(step).copied()
    }

    /// True when every cell is on the grid, no cell repeats, and each
    /// consecutive pair is orthogonally adjacent.
    pub fn is_simple_walk(&self, grid: &Grid) -> bool {
        let mut seen = vec![false; grid.cell_count()];
        for &cell in &self.0 {
            if !grid.contains(cell) || seen[cell] {
                return false;
            }
            seen[cell] = true;
        }
        self.0.windows(2).all(|pair| grid.are_adjacent(pair[0], pair[1]))
    }
}

impl From<Vec<CellIndex>> for Path {
    fn from(cells: Vec<CellIndex>) -> Self {
        Self(cells)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathGenError {
    #[error("no path of length {length} found after {attempts} attempts")]
    Exhausted { attempts: u32, length: usize },
    #[error("start cell {start} is outside a grid of {cell_count} cells")]
    StartOutOfBounds { start: CellIndex, cell_count: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathGenerator {
    grid: Grid,
    max_attempts: u32,
}

impl PathGenerator {
    pub fn new(grid: Grid, max_attempts: u32) -> Self {
        Self { grid, max_attempts }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
        start: CellIndex,
    ) -> Result<Path, PathGenError> {
        self.generate_counted(rng, length, start).map(|(path, _)| path)
    }

    /// Like [`PathGenerator::generate`], also returning how many attempts the
    /// successful walk took.
    pub fn generate_counted<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
        start: CellIndex,
    ) -> Result<(Path, u32), PathGenError> {
        if !self.grid.contains(start) {
            return Err(PathGenError::StartOutOfBounds {
                start,
                cell_count: self.grid.cell_count(),
            });
        }
        if length <= 1 {
            return Ok((Path(vec![start]), 1));
        }

        for attempt in 1..=self.max_attempts {
            if let Some(path) = self.walk(rng, length, start) {
                debug!(attempt, length, start, "path_generated");
                return Ok((path, attempt));
            }
        }

        warn!(attempts = self.max_attempts, length, start, "path_generation_exhausted");
        Err(PathGenError::Exhausted { attempts: self.max_attempts, length })
    }

    fn walk<R: Rng + ?Sized>(&self, rng: &mut R, length: usize, start: CellIndex) -> Option<Path> {
        let mut visited = vec![false; self.grid.cell_count()];
        let mut cells = Vec::with_capacity(length);
        let mut candidates = Vec::with_capacity(4);

        let mut current = start;
        visited[current] = true;
        cells.push(current);

        while cells.len() < length {
            candidates.clear();
            candidates.extend(self.grid.neighbors(current).filter(|&cell| !visited[cell]));
            if candidates.is_empty() {
                return None;
            }

            current = candidates[pick_index(rng, candidates.len())];
            visited[current] = true;
            cells.push(current);
        }

        Some(Path(cells))
    }
}

fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}
