//! The memorise-then-repeat state machine.
//!
//! One `GameSession` is owned by the caller. Inputs arrive as method calls,
//! time arrives through [`GameSession::advance`], and everything the
//! presentation layer needs comes back out as [`SessionEvent`]s.

mod hash;


use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::pathgen::{Path, PathGenError, PathGenerator};
use crate::timer::{RevealSequence, RevealStep, Timer};
use crate::types::*;

/// Upper bound on tick events emitted by a single `advance` call.
const MAX_CATCH_UP_TICKS: u64 = 3_600;

pub struct GameSession {
    seed: u64,
    config: GameConfig,
    generator: PathGenerator,
    rng: ChaCha8Rng,
    now_ms: u64,
    phase: Phase,
    target_path: Path,
    progress: Vec<CellIndex>,
    timed_mode: bool,
    remaining_secs: u32,
    elapsed_secs: u32,
    reveal: Option<RevealSequence>,
    clock: Timer,
    last_outcome: Option<Outcome>,
    pending_events: Vec<SessionEvent>,
    games_started: u64,
}

impl GameSession {
    pub fn new(seed: u64, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(seed, config))
    }

    pub fn with_defaults(seed: u64) -> Self {
        Self::build(seed, GameConfig::default())
    }

    fn build(seed: u64, config: GameConfig) -> Self {
        let generator = PathGenerator::new(config.grid(), config.max_attempts);
        Self {
            seed,
            config,
            generator,
            rng: ChaCha8Rng::seed_from_u64(seed),
            now_ms: 0,
            phase: Phase::Idle,
            target_path: Path::default(),
            progress: Vec::new(),
            timed_mode: false,
            remaining_secs: 0,
            elapsed_secs: 0,
            reveal: None,
            clock: Timer::new(),
            last_outcome: None,
            pending_events: Vec::new(),
            games_started: 0,
        }
    }

    /// Generates a fresh path and begins revealing it. A `length` of zero
    /// means "not given" and uses the configured default.
    ///
    /// On generation failure the session keeps its previous state and an
    /// `Outcome::PathGenerationExhausted` event is emitted.
    pub fn start_game(&mut self, length: usize, timed: bool) -> Result<(), SessionError> {
        if self.phase == Phase::Showing {
            debug!("start_game_rejected_during_reveal");
            return Err(SessionError::RevealInProgress);
        }

        let length = if length == 0 { self.config.default_length } else { length };
        let start = self.config.start_cell();
        let path = match self.generator.generate(&mut self.rng, length, start) {
            Ok(path) => path,
            Err(err) => {
                let attempts = match err {
                    PathGenError::Exhausted { attempts, .. } => attempts,
                    PathGenError::StartOutOfBounds { .. } => 0,
                };
                self.pending_events.push(SessionEvent::Outcome {
                    outcome: Outcome::PathGenerationExhausted { attempts },
                    stats: OutcomeStats::default(),
                });
                return Err(err.into());
            }
        };

        self.clock.stop();
        self.reveal = Some(RevealSequence::new(
            path.cells().to_vec(),
            self.now_ms,
            self.config.reveal_step_ms,
            self.config.display_ms,
        ));
        self.target_path = path;
        self.progress.clear();
        self.timed_mode = timed;
        self.remaining_secs = 0;
        self.elapsed_secs = 0;
        self.last_outcome = None;
        self.games_started += 1;
        self.set_phase(Phase::Showing);

        info!(length, timed, game = self.games_started, "game_started");
        self.pending_events.push(SessionEvent::GameStarted { length, timed });
        Ok(())
    }

    pub fn submit_tile(&mut self, index: CellIndex) -> TileResponse {
        if self.phase != Phase::Playing {
            return TileResponse::Ignored;
        }
        let Some(expected) = self.target_path.get(self.progress.len()) else {
            return TileResponse::Ignored;
        };

        if index != expected {
            self.fail(FailureKind::WrongTile { index, expected });
            return TileResponse::Rejected { expected };
        }

        self.progress.push(index);
        let progress = self.progress.len();
        self.pending_events.push(SessionEvent::TileAccepted { index, progress });
        if progress < self.target_path.len() {
            return TileResponse::Accepted { progress };
        }

        self.clock.stop();
        self.set_phase(Phase::Success);
        self.record_outcome(Outcome::Success);
        TileResponse::Completed
    }

    /// Retries the current path from the beginning without regenerating it.
    pub fn reset_attempt(&mut self) -> Result<(), SessionError> {
        if self.target_path.is_empty() {
            return Err(SessionError::NoTargetPath);
        }
        if self.phase == Phase::Showing {
            return Err(SessionError::RevealInProgress);
        }

        self.last_outcome = None;
        self.pending_events.push(SessionEvent::AttemptReset);
        self.enter_playing();
        Ok(())
    }

    /// Moves the logical clock forward, firing every scheduled task that
    /// falls due in time order.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let target = self.now_ms.saturating_add(elapsed_ms);
        while let Some(due) = self.next_due().filter(|&due| due <= target) {
            self.now_ms = self.now_ms.max(due);
            if self.skip_surplus_ticks(target) {
                continue;
            }
            if !self.fire_due() {
                break;
            }
        }
        self.now_ms = target;
    }

    /// Folds all but the last `MAX_CATCH_UP_TICKS` due clock ticks into the
    /// counters without emitting an event per tick. A timed attempt keeps at
    /// least one second so the timeout still fires as a regular tick.
    fn skip_surplus_ticks(&mut self, target: u64) -> bool {
        if self.reveal.is_some() || self.phase != Phase::Playing {
            return false;
        }
        let mut surplus = self.clock.due_count(target).saturating_sub(MAX_CATCH_UP_TICKS);
        if self.timed_mode {
            surplus = surplus.min(u64::from(self.remaining_secs.saturating_sub(1)));
        }
        if surplus == 0 {
            return false;
        }

        self.clock.skip_periods(surplus);
        let skipped = u32::try_from(surplus).unwrap_or(u32::MAX);
        self.elapsed_secs = self.elapsed_secs.saturating_add(skipped);
        if self.timed_mode {
            self.remaining_secs -= skipped;
        }
        debug!(skipped = surplus, at_ms = self.now_ms, "clock_ticks_skipped");
        true
    }

    fn next_due(&self) -> Option<u64> {
        let reveal_due = self.reveal.as_ref().and_then(RevealSequence::next_due);
        match (reveal_due, self.clock.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn fire_due(&mut self) -> bool {
        if let Some(reveal) = self.reveal.as_mut()
            && let Some(step) = reveal.poll(self.now_ms)
        {
            match step {
                RevealStep::Reveal { step, index } => {
                    self.pending_events.push(SessionEvent::RevealStep { step, index });
                }
                RevealStep::Complete => {
                    self.reveal = None;
                    self.pending_events.push(SessionEvent::RevealComplete);
                    self.enter_playing();
                }
            }
            return true;
        }

        if self.clock.fire_if_due(self.now_ms).is_some() {
            self.on_clock_tick();
            return true;
        }
        false
    }

    fn enter_playing(&mut self) {
        self.progress.clear();
        self.elapsed_secs = 0;
        self.set_phase(Phase::Playing);

        if self.timed_mode {
            self.remaining_secs = self.config.time_limit_secs(self.target_path.len());
            self.pending_events.push(SessionEvent::TimerTick {
                display_value: self.remaining_secs,
                is_countdown: true,
            });
            if self.remaining_secs == 0 {
                self.fail(FailureKind::Timeout);
                return;
            }
        } else {
            self.remaining_secs = 0;
            self.pending_events
                .push(SessionEvent::TimerTick { display_value: 0, is_countdown: false });
        }

        self.clock.start(self.now_ms, self.config.tick_ms);
    }

    fn on_clock_tick(&mut self) {
        if self.phase != Phase::Playing {
            self.clock.stop();
            return;
        }

        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        if !self.timed_mode {
            self.pending_events.push(SessionEvent::TimerTick {
                display_value: self.elapsed_secs,
                is_countdown: false,
            });
            return;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.pending_events.push(SessionEvent::TimerTick {
            display_value: self.remaining_secs,
            is_countdown: true,
        });
        if self.remaining_secs == 0 {
            self.fail(FailureKind::Timeout);
        }
    }

    fn fail(&mut self, kind: FailureKind) {
        self.clock.stop();
        self.set_phase(Phase::Failed(kind));
        self.record_outcome(kind.into());
    }

    fn record_outcome(&mut self, outcome: Outcome) {
        let stats = self.stats();
        info!(
            ?outcome,
            elapsed = stats.elapsed_secs,
            correct = stats.correct_tiles,
            "attempt_finished"
        );
        self.last_outcome = Some(outcome);
        self.pending_events.push(SessionEvent::Outcome { outcome, stats });
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, at_ms = self.now_ms, "phase_changed");
        self.phase = phase;
    }

    pub fn stats(&self) -> OutcomeStats {
        OutcomeStats {
            elapsed_secs: self.elapsed_secs,
            remaining_secs: self.timed_mode.then_some(self.remaining_secs),
            correct_tiles: self.progress.len(),
            path_length: self.target_path.len(),
        }
    }

    /// Events emitted since the last drain, oldest first.
    pub fn events(&self) -> &[SessionEvent] {
        &self.pending_events
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn progress(&self) -> &[CellIndex] {
        &self.progress
    }

    pub fn timed_mode(&self) -> bool {
        self.timed_mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn games_started(&self) -> u64 {
        self.games_started
    }

    pub fn is_timer_running(&self) -> bool {
        self.clock.is_active()
    }

    /// Milliseconds until the reveal hands over to the player, if revealing.
    pub fn reveal_remaining_ms(&self) -> Option<u64> {
        let reveal = self.reveal.as_ref()?;
        Some(reveal.finishes_at_ms().saturating_sub(self.now_ms))
    }
}
