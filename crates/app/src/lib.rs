pub mod app_loop;
pub mod board_layout;
pub mod board_view;
pub mod journal_store;
pub mod launch;
pub mod seed;
pub mod settings_file;
pub mod ui_text;

use pathrecall_core::Outcome;

pub const APP_NAME: &str = "PathRecall";

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Stable short code for an outcome, used in logs.
pub fn outcome_code(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Success => "SUCCESS",
        Outcome::WrongTile { .. } => "WRONG_TILE",
        Outcome::Timeout => "TIMEOUT",
        Outcome::PathGenerationExhausted { .. } => "PATHGEN_EXHAUSTED",
    }
}
