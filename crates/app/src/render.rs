//! Drawing of the tile board, status lines, and help overlay.

use app::app_loop::AppState;
use app::board_layout::BoardLayout;
use app::board_view::TileLook;
use app::ui_text::{HELP_LINES, settings_line};
use macroquad::prelude::*;

pub const TOP_RESERVED: f32 = 110.0;

const TEXT_X: f32 = 20.0;
const STATUS_FONT_SIZE: f32 = 28.0;
const DETAIL_FONT_SIZE: f32 = 20.0;
const LINE_STEP: f32 = 28.0;
const IDLE_COLOR: Color = Color { r: 0.22, g: 0.24, b: 0.28, a: 1.0 };
const LIT_COLOR: Color = Color { r: 0.95, g: 0.85, b: 0.25, a: 1.0 };
const WRONG_COLOR: Color = Color { r: 0.85, g: 0.2, b: 0.2, a: 1.0 };
const DISABLED_ALPHA: f32 = 0.45;
const FOCUS_COLOR: Color = Color { r: 0.4, g: 0.75, b: 1.0, a: 1.0 };
const FOCUS_THICKNESS: f32 = 3.0;

pub fn draw_frame(app_state: &AppState, layout: &BoardLayout) {
    draw_board(app_state, layout);
    draw_status(app_state);
    if app_state.show_help {
        draw_help_overlay();
    }
}

fn tile_color(look: TileLook, disabled: bool) -> Color {
    let base = match look {
        TileLook::Idle | TileLook::Disabled => IDLE_COLOR,
        TileLook::Lit => LIT_COLOR,
        TileLook::Wrong => WRONG_COLOR,
    };
    if disabled || look == TileLook::Disabled { Color { a: DISABLED_ALPHA, ..base } } else { base }
}

fn draw_board(app_state: &AppState, layout: &BoardLayout) {
    let disabled = app_state.board.is_disabled();
    for index in 0..app_state.board.cell_count() {
        let rect = layout.tile_rect(index);
        let color = tile_color(app_state.board.look(index), disabled);
        draw_rectangle(rect.x, rect.y, rect.size, rect.size, color);
    }

    let focus = layout.tile_rect(app_state.board.focus());
    draw_rectangle_lines(focus.x, focus.y, focus.size, focus.size, FOCUS_THICKNESS, FOCUS_COLOR);
}

fn draw_status(app_state: &AppState) {
    let mut y = LINE_STEP;
    draw_text(&app_state.status, TEXT_X, y, STATUS_FONT_SIZE, WHITE);
    y += LINE_STEP;
    if !app_state.timer_line.is_empty() {
        draw_text(&app_state.timer_line, TEXT_X, y, DETAIL_FONT_SIZE, LIGHTGRAY);
    }
    y += LINE_STEP;
    let settings = settings_line(app_state.requested_length, app_state.timed_mode);
    draw_text(&settings, TEXT_X, y, DETAIL_FONT_SIZE, GRAY);
}

fn draw_help_overlay() {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color { a: 0.85, ..BLACK });
    let mut y = TOP_RESERVED;
    for line in HELP_LINES {
        draw_text(line, TEXT_X * 2.0, y, DETAIL_FONT_SIZE, WHITE);
        y += LINE_STEP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_board_dims_every_look() {
        for look in [TileLook::Idle, TileLook::Lit, TileLook::Wrong] {
            assert_eq!(tile_color(look, true).a, DISABLED_ALPHA);
            assert_eq!(tile_color(look, false).a, 1.0);
        }
        assert_eq!(tile_color(TileLook::Disabled, false).a, DISABLED_ALPHA);
    }

    #[test]
    fn lit_and_wrong_tiles_stand_out_from_idle() {
        assert_ne!(tile_color(TileLook::Lit, false), tile_color(TileLook::Idle, false));
        assert_ne!(tile_color(TileLook::Wrong, false), tile_color(TileLook::Lit, false));
    }
}
