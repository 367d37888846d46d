use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pathgen::PathGenError;

/// Flat cell address on an N×N grid: `row * N + col`.
pub type CellIndex = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    WrongTile { index: CellIndex, expected: CellIndex },
    Timeout,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Showing,
    Playing,
    Success,
    Failed(FailureKind),
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Success | Phase::Failed(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    WrongTile { index: CellIndex, expected: CellIndex },
    Timeout,
    PathGenerationExhausted { attempts: u32 },
}

impl From<FailureKind> for Outcome {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::WrongTile { index, expected } => Outcome::WrongTile { index, expected },
            FailureKind::Timeout => Outcome::Timeout,
        }
    }
}

/// Numeric timing data attached to every outcome. The presentation layer owns the wording.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeStats {
    pub elapsed_secs: u32,
    /// `Some` only in timed mode.
    pub remaining_secs: Option<u32>,
    pub correct_tiles: usize,
    pub path_length: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    GameStarted { length: usize, timed: bool },
    RevealStep { step: usize, index: CellIndex },
    RevealComplete,
    TileAccepted { index: CellIndex, progress: usize },
    TimerTick { display_value: u32, is_countdown: bool },
    AttemptReset,
    Outcome { outcome: Outcome, stats: OutcomeStats },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileResponse {
    /// Not in `Playing`; the press had no effect.
    Ignored,
    Accepted { progress: usize },
    Completed,
    Rejected { expected: CellIndex },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the path is still being revealed")]
    RevealInProgress,
    #[error("no game has been started yet")]
    NoTargetPath,
    #[error(transparent)]
    PathGeneration(#[from] PathGenError),
}
