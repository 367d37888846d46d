//! Headless re-execution of an input journal.


use thiserror::Error;

use crate::{
    Outcome, Phase, SessionError,
    config::ConfigError,
    journal::{InputJournal, InputPayload, JOURNAL_FORMAT_VERSION},
    session::GameSession,
};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("journal format {found} is not supported (expected {})", JOURNAL_FORMAT_VERSION)]
    UnsupportedFormat { found: u16 },
    #[error("journal config is invalid: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("input #{seq} was rejected on replay: {error}")]
    Diverged { seq: u64, error: SessionError },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_phase: Phase,
    pub last_outcome: Option<Outcome>,
    pub final_snapshot_hash: u64,
    pub final_time_ms: u64,
    pub games_started: u64,
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat { found: journal.format_version });
    }

    let mut session = GameSession::new(journal.seed, journal.config.clone())?;
    for record in &journal.inputs {
        let applied = match &record.payload {
            // Exhaustion is deterministic for a given seed, so it reproduces on replay.
            InputPayload::StartGame { length, timed } => {
                match session.start_game(*length, *timed) {
                    Err(SessionError::PathGeneration(_)) => Ok(()),
                    other => other,
                }
            }
            InputPayload::ResetAttempt => session.reset_attempt(),
            InputPayload::SubmitTile { index } => {
                session.submit_tile(*index);
                Ok(())
            }
            InputPayload::Advance { elapsed_ms } => {
                session.advance(*elapsed_ms);
                Ok(())
            }
        };
        applied.map_err(|error| ReplayError::Diverged { seq: record.seq, error })?;
        session.drain_events();
    }

    Ok(ReplayResult {
        final_phase: session.phase(),
        last_outcome: session.last_outcome(),
        final_snapshot_hash: session.snapshot_hash(),
        final_time_ms: session.now_ms(),
        games_started: session.games_started(),
    })
}
