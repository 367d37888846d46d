//! Cancellable scheduled tasks on the session's logical millisecond clock.
//!
//! Nothing here reads wall time. The owner moves the clock forward and asks
//! each task whether it is due.

use crate::types::CellIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ActiveTimer {
    handle: TimerHandle,
    next_due_ms: u64,
    period_ms: u64,
}

/// A single repeating task slot. Starting a new task replaces the old one, so
/// two tasks can never run at once.
#[derive(Clone, Debug, Default)]
pub struct Timer {
    issued: u64,
    active: Option<ActiveTimer>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now_ms: u64, period_ms: u64) -> TimerHandle {
        self.issued += 1;
        let handle = TimerHandle(self.issued);
        let period_ms = period_ms.max(1);
        let next_due_ms = now_ms.saturating_add(period_ms);
        self.active = Some(ActiveTimer { handle, next_due_ms, period_ms });
        handle
    }

    /// Returns whether a task was running. Safe to call when idle.
    pub fn stop(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        self.active.map(|active| active.handle)
    }

    /// A task pushed to `u64::MAX` has run off the end of the clock and is
    /// never due again.
    pub fn next_due(&self) -> Option<u64> {
        self.active.map(|active| active.next_due_ms).filter(|&due| due != u64::MAX)
    }

    /// How many periods have fallen due by `now_ms`.
    pub fn due_count(&self, now_ms: u64) -> u64 {
        match (self.active, self.next_due()) {
            (Some(active), Some(due)) if due <= now_ms => (now_ms - due) / active.period_ms + 1,
            _ => 0,
        }
    }

    /// Drops `count` periods without firing them.
    pub fn skip_periods(&mut self, count: u64) {
        if let Some(active) = self.active.as_mut() {
            let skipped = count.saturating_mul(active.period_ms);
            active.next_due_ms = active.next_due_ms.saturating_add(skipped);
        }
    }

    /// Fires at most one period and schedules the next one.
    pub fn fire_if_due(&mut self, now_ms: u64) -> Option<TimerHandle> {
        let due = self.next_due()?;
        let active = self.active.as_mut()?;
        if due > now_ms {
            return None;
        }
        active.next_due_ms = due.saturating_add(active.period_ms);
        Some(active.handle)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    Reveal { step: usize, index: CellIndex },
    Complete,
}

/// Ordered reveal of a path: one cell per `step_ms`, then the whole path
/// stays visible for `hold_ms` before `Complete`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealSequence {
    cells: Vec<CellIndex>,
    started_at_ms: u64,
    step_ms: u64,
    hold_ms: u64,
    revealed: usize,
    finished: bool,
}

impl RevealSequence {
    pub fn new(cells: Vec<CellIndex>, started_at_ms: u64, step_ms: u64, hold_ms: u64) -> Self {
        Self { cells, started_at_ms, step_ms, hold_ms, revealed: 0, finished: false }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Total time from start until `Complete` fires.
    pub fn duration_ms(&self) -> u64 {
        (self.cells.len() as u64).saturating_mul(self.step_ms).saturating_add(self.hold_ms)
    }

    pub fn finishes_at_ms(&self) -> u64 {
        self.started_at_ms.saturating_add(self.duration_ms())
    }

    pub fn next_due(&self) -> Option<u64> {
        if self.finished {
            return None;
        }
        if self.revealed < self.cells.len() {
            let offset = (self.revealed as u64 + 1).saturating_mul(self.step_ms);
            return Some(self.started_at_ms.saturating_add(offset));
        }
        Some(self.finishes_at_ms())
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<RevealStep> {
        let due = self.next_due()?;
        if due > now_ms {
            return None;
        }
        if self.revealed < self.cells.len() {
            let step = self.revealed;
            self.revealed += 1;
            return Some(RevealStep::Reveal { step, index: self.cells[step] });
        }
        self.finished = true;
        Some(RevealStep::Complete)
    }
}
