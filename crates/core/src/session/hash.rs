//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl GameSession {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.now_ms);
        hasher.write_u64(self.games_started);
        hasher.write_u8(phase_code(self.phase));
        if let Phase::Failed(FailureKind::WrongTile { index, expected }) = self.phase {
            hasher.write_usize(index);
            hasher.write_usize(expected);
        }
        hasher.write_u8(u8::from(self.timed_mode));
        hasher.write_u32(self.remaining_secs);
        hasher.write_u32(self.elapsed_secs);
        hasher.write_usize(self.target_path.len());
        for &cell in self.target_path.cells() {
            hasher.write_usize(cell);
        }
        hasher.write_usize(self.progress.len());
        for &cell in &self.progress {
            hasher.write_usize(cell);
        }
        if let Some(reveal) = &self.reveal {
            hasher.write_usize(reveal.revealed());
        }
        if let Some(due) = self.clock.next_due() {
            hasher.write_u64(due);
        }
        hasher.finish()
    }
}

fn phase_code(phase: Phase) -> u8 {
    match phase {
        Phase::Idle => 0,
        Phase::Showing => 1,
        Phase::Playing => 2,
        Phase::Success => 3,
        Phase::Failed(FailureKind::WrongTile { .. }) => 4,
        Phase::Failed(FailureKind::Timeout) => 5,
    }
}
