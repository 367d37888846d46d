//! Per-tile visual state. Tile marks are rebuilt purely from session events;
//! the keyboard focus cursor is local to the view.

use pathrecall_core::{CellIndex, Grid, Outcome, Pos, SessionEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileLook {
    Idle,
    Lit,
    Wrong,
    Disabled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    grid: Grid,
    lit: Vec<bool>,
    wrong: Option<CellIndex>,
    disabled: bool,
    focus: CellIndex,
}

impl BoardView {
    /// Focus starts on the centre cell, where every path begins by default.
    pub fn new(grid_size: usize) -> Self {
        let grid = Grid::new(grid_size);
        Self {
            grid,
            lit: vec![false; grid.cell_count()],
            wrong: None,
            disabled: false,
            focus: grid.center(),
        }
    }

    pub fn focus(&self) -> CellIndex {
        self.focus
    }

    /// Moves the focus by one row/column step, stopping at the board edge.
    pub fn move_focus(&mut self, dy: i32, dx: i32) {
        let pos = self.grid.pos_of(self.focus);
        let target = Pos { y: pos.y + dy, x: pos.x + dx };
        if let Some(index) = self.grid.index_of(target) {
            self.focus = index;
        }
    }

    pub fn set_focus(&mut self, index: CellIndex) {
        if self.grid.contains(index) {
            self.focus = index;
        }
    }

    pub fn cell_count(&self) -> usize {
        self.lit.len()
    }

    pub fn look(&self, index: CellIndex) -> TileLook {
        if self.wrong == Some(index) {
            return TileLook::Wrong;
        }
        if self.lit.get(index).copied().unwrap_or(false) {
            return TileLook::Lit;
        }
        if self.disabled {
            return TileLook::Disabled;
        }
        TileLook::Idle
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::GameStarted { .. } | SessionEvent::AttemptReset => self.clear(),
            SessionEvent::RevealStep { index, .. } | SessionEvent::TileAccepted { index, .. } => {
                self.light(*index);
            }
            SessionEvent::RevealComplete => self.lit.fill(false),
            SessionEvent::TimerTick { .. } => {}
            SessionEvent::Outcome { outcome, .. } => match outcome {
                Outcome::WrongTile { index, .. } => {
                    self.wrong = Some(*index);
                    self.disabled = true;
                }
                Outcome::Timeout => self.disabled = true,
                Outcome::Success | Outcome::PathGenerationExhausted { .. } => {}
            },
        }
    }

    fn light(&mut self, index: CellIndex) {
        if let Some(cell) = self.lit.get_mut(index) {
            *cell = true;
        }
    }

    fn clear(&mut self) {
        self.lit.fill(false);
        self.wrong = None;
        self.disabled = false;
    }
}
