use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::CellIndex;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    #[serde(default)]
    pub config: GameConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    StartGame { length: usize, timed: bool },
    SubmitTile { index: CellIndex },
    ResetAttempt,
    Advance { elapsed_ms: u64 },
}

impl InputJournal {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config, inputs: Vec::new() }
    }

    pub fn next_seq(&self) -> u64 {
        self.inputs.len() as u64
    }

    pub fn append(&mut self, payload: InputPayload) {
        let seq = self.next_seq();
        self.inputs.push(InputRecord { seq, payload });
    }

    /// Merges consecutive clock advances so idle frames don't bloat the journal.
    pub fn append_advance(&mut self, elapsed_ms: u64) {
        if elapsed_ms == 0 {
            return;
        }
        if let Some(InputRecord { payload: InputPayload::Advance { elapsed_ms: total }, .. }) =
            self.inputs.last_mut()
        {
            *total += elapsed_ms;
            return;
        }
        self.append(InputPayload::Advance { elapsed_ms });
    }
}
