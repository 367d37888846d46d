mod frame_input;
mod render;
mod window_config;

use app::app_loop::AppState;
use app::board_layout::BoardLayout;
use app::journal_store::{default_journal_path, save_journal_atomic};
use app::launch::LaunchArgs;
use app::seed::{generate_runtime_seed, resolve_seed};
use app::settings_file::SettingsFile;
use app::{APP_NAME, format_snapshot_hash};
use clap::Parser;
use macroquad::prelude::{
    BLACK, KeyCode, clear_background, next_frame, screen_height, screen_width,
};
use macroquad::window::Conf;
use pathrecall_core::{GameSession, InputJournal, InputPayload};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::frame_input::capture_frame_input;
use crate::render::{TOP_RESERVED, draw_frame};
use crate::window_config::build_window_conf;

fn window_conf() -> Conf {
    build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let args = LaunchArgs::parse();

    let settings_path = args.settings.clone().or_else(SettingsFile::get_default_path);
    let mut settings =
        settings_path.as_deref().map(SettingsFile::load_or_default).unwrap_or_default();
    if let Some(length) = args.length(settings.length) {
        settings.length = length;
    }
    settings.timed |= args.timed;

    let seed = resolve_seed(args.seed, generate_runtime_seed());
    info!(app = APP_NAME, seed = seed.value(), source = seed.label(), "session_seed");

    let mut session = match GameSession::new(seed.value(), settings.game.clone()) {
        Ok(session) => session,
        Err(err) => {
            warn!(%err, "invalid_game_config_using_defaults");
            GameSession::with_defaults(seed.value())
        }
    };
    let mut journal = InputJournal::new(seed.value(), session.config().clone());
    let journal_path = default_journal_path();
    let mut app = AppState::new(session.config().grid_size, settings.length, settings.timed);

    loop {
        let grid_size = session.config().grid_size;
        let layout = BoardLayout::fit(screen_width(), screen_height(), grid_size, TOP_RESERVED);
        let input = capture_frame_input(&layout);
        if input.keys_pressed.contains(&KeyCode::Escape) && !app.show_help {
            break;
        }

        let phase_before = session.phase();
        app.tick(&mut session, &input);
        record_inputs(&mut journal, &app.accepted_inputs);

        if session.phase() != phase_before && session.phase().is_terminal() {
            persist_journal(&journal, journal_path.as_deref());
        }
        if app.requested_length != settings.length || app.timed_mode != settings.timed {
            settings.length = app.requested_length;
            settings.timed = app.timed_mode;
            persist_settings(&settings, settings_path.as_deref());
        }

        clear_background(BLACK);
        draw_frame(&app, &layout);
        next_frame().await;
    }

    persist_journal(&journal, journal_path.as_deref());
    persist_settings(&settings, settings_path.as_deref());
    info!(
        games = session.games_started(),
        inputs = journal.inputs.len(),
        snapshot = %format_snapshot_hash(session.snapshot_hash()),
        "session_closed"
    );
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();
}

fn record_inputs(journal: &mut InputJournal, inputs: &[InputPayload]) {
    for payload in inputs {
        match payload {
            InputPayload::Advance { elapsed_ms } => journal.append_advance(*elapsed_ms),
            other => journal.append(other.clone()),
        }
    }
}

fn persist_journal(journal: &InputJournal, path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    if let Err(err) = save_journal_atomic(journal, path) {
        warn!(path = %path.display(), %err, "journal_save_failed");
    }
}

fn persist_settings(settings: &SettingsFile, path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    if let Err(err) = settings.write_atomic(path) {
        warn!(path = %path.display(), %err, "settings_save_failed");
    }
}

