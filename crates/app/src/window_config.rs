//! Window configuration for the desktop app.

use app::APP_NAME;
use macroquad::window::Conf;

const DEFAULT_WINDOW_WIDTH: i32 = 720;
const DEFAULT_WINDOW_HEIGHT: i32 = 820;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // Request a high-DPI framebuffer so tiles stay crisp on scaled displays.
        high_dpi: true,
        window_resizable: true,
        ..Default::default()
    }
}
