use macroquad::prelude::KeyCode;
use pathrecall_core::{CellIndex, GameSession, InputPayload, SessionError, SessionEvent};
use tracing::{debug, info};

use crate::board_view::BoardView;
use crate::outcome_code;
use crate::ui_text::{WELCOME_TEXT, status_for_event, timer_text};

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 20;

/// Arrow keys as (row, column) steps of the focus cursor.
const FOCUS_MOVES: [(KeyCode, i32, i32); 4] = [
    (KeyCode::Up, -1, 0),
    (KeyCode::Down, 1, 0),
    (KeyCode::Left, 0, -1),
    (KeyCode::Right, 0, 1),
];

/// Everything the player did during one rendered frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub clicked_tile: Option<CellIndex>,
    pub elapsed_ms: u64,
}

pub struct AppState {
    pub requested_length: usize,
    pub timed_mode: bool,
    pub show_help: bool,
    pub board: BoardView,
    pub status: String,
    pub timer_line: String,
    /// Inputs accepted by the session during the current frame's `tick()` call.
    /// Drained by the caller after each tick to persist to the journal.
    pub accepted_inputs: Vec<InputPayload>,
}

impl AppState {
    pub fn new(grid_size: usize, requested_length: usize, timed_mode: bool) -> Self {
        Self {
            requested_length: requested_length.clamp(MIN_LENGTH, MAX_LENGTH),
            timed_mode,
            show_help: false,
            board: BoardView::new(grid_size),
            status: WELCOME_TEXT.to_string(),
            timer_line: String::new(),
            accepted_inputs: Vec::new(),
        }
    }

    /// Process one frame: time passes first, then this frame's input is applied.
    pub fn tick(&mut self, session: &mut GameSession, input: &FrameInput) {
        self.accepted_inputs.clear();

        if input.elapsed_ms > 0 {
            session.advance(input.elapsed_ms);
            self.accepted_inputs.push(InputPayload::Advance { elapsed_ms: input.elapsed_ms });
        }

        self.handle_keys(session, &input.keys_pressed);

        if let Some(index) = input.clicked_tile
            && !self.show_help
        {
            self.board.set_focus(index);
            self.press_tile(session, index);
        }

        for event in session.drain_events() {
            self.apply_event(&event);
        }
    }

    fn handle_keys(&mut self, session: &mut GameSession, keys_pressed: &[KeyCode]) {
        if keys_pressed.contains(&KeyCode::H) {
            self.show_help = !self.show_help;
        }
        if self.show_help {
            if keys_pressed.contains(&KeyCode::Escape) {
                self.show_help = false;
            }
            return;
        }

        for (key, dy, dx) in FOCUS_MOVES {
            if keys_pressed.contains(&key) {
                self.board.move_focus(dy, dx);
            }
        }
        if keys_pressed.contains(&KeyCode::RightBracket) {
            self.requested_length = (self.requested_length + 1).min(MAX_LENGTH);
        }
        if keys_pressed.contains(&KeyCode::LeftBracket) {
            self.requested_length = self.requested_length.saturating_sub(1).max(MIN_LENGTH);
        }
        if keys_pressed.contains(&KeyCode::T) {
            self.timed_mode = !self.timed_mode;
        }

        if keys_pressed.contains(&KeyCode::Enter) {
            let (length, timed) = (self.requested_length, self.timed_mode);
            match session.start_game(length, timed) {
                // A failed generation still consumed randomness, so it is journaled too.
                Ok(()) | Err(SessionError::PathGeneration(_)) => {
                    self.accepted_inputs.push(InputPayload::StartGame { length, timed });
                }
                Err(err) => debug!(%err, "start_game_rejected"),
            }
        }

        if keys_pressed.contains(&KeyCode::R) {
            match session.reset_attempt() {
                Ok(()) => self.accepted_inputs.push(InputPayload::ResetAttempt),
                Err(err) => debug!(%err, "reset_attempt_rejected"),
            }
        }

        if keys_pressed.contains(&KeyCode::Space) {
            self.press_tile(session, self.board.focus());
        }
    }

    fn press_tile(&mut self, session: &mut GameSession, index: CellIndex) {
        let response = session.submit_tile(index);
        debug!(index, ?response, "tile_pressed");
        self.accepted_inputs.push(InputPayload::SubmitTile { index });
    }

    fn apply_event(&mut self, event: &SessionEvent) {
        self.board.apply(event);
        if let Some(status) = status_for_event(event) {
            self.status = status;
        }
        match event {
            SessionEvent::GameStarted { .. } => self.timer_line.clear(),
            SessionEvent::TimerTick { display_value, is_countdown } => {
                self.timer_line = timer_text(*display_value, *is_countdown);
            }
            SessionEvent::Outcome { outcome, stats } => {
                info!(
                    outcome = outcome_code(outcome),
                    elapsed = stats.elapsed_secs,
                    correct = stats.correct_tiles,
                    of = stats.path_length,
                    "attempt_result"
                );
            }
            _ => {}
        }
    }
}
