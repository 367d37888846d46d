//! Keyboard and mouse input collection for one rendered frame.

use app::app_loop::FrameInput;
use app::board_layout::BoardLayout;
use macroquad::prelude::{
    KeyCode, MouseButton, get_frame_time, is_key_pressed, is_mouse_button_pressed, mouse_position,
};

const ACTION_KEYS: [KeyCode; 12] = [
    KeyCode::Enter,
    KeyCode::Space,
    KeyCode::R,
    KeyCode::T,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::LeftBracket,
    KeyCode::RightBracket,
    KeyCode::H,
    KeyCode::Escape,
];

pub fn capture_frame_input(layout: &BoardLayout) -> FrameInput {
    let keys_pressed = ACTION_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();

    let clicked_tile = if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        layout.hit_test(x, y)
    } else {
        None
    };

    FrameInput { keys_pressed, clicked_tile, elapsed_ms: frame_millis(get_frame_time()) }
}

fn frame_millis(frame_secs: f32) -> u64 {
    if !frame_secs.is_finite() || frame_secs <= 0.0 {
        return 0;
    }
    (frame_secs * 1000.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::frame_millis;

    #[test]
    fn converts_frame_time_to_whole_millis() {
        assert_eq!(frame_millis(0.016), 16);
        assert_eq!(frame_millis(0.0166), 17);
        assert_eq!(frame_millis(1.5), 1500);
    }

    #[test]
    fn rejects_negative_or_nan_frame_time() {
        assert_eq!(frame_millis(-0.5), 0);
        assert_eq!(frame_millis(f32::NAN), 0);
        assert_eq!(frame_millis(0.0), 0);
    }
}
