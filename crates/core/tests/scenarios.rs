//! End-to-end scenarios over the public session surface.

use pathrecall_core::{
    FailureKind, GameSession, Grid, Outcome, OutcomeStats, Phase, SessionEvent, TileResponse,
};

fn run_reveal(session: &mut GameSession) -> Vec<SessionEvent> {
    let remaining = session.reveal_remaining_ms().expect("session should be revealing");
    session.advance(remaining);
    session.drain_events()
}

#[test]
fn free_mode_game_from_start_to_success() {
    let mut session = GameSession::with_defaults(2_718);
    session.start_game(8, false).expect("start");

    let events = run_reveal(&mut session);
    let revealed: Vec<usize> = events
        .iter()
        .filter_map(|event| match event {
            SessionEvent::RevealStep { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(revealed, session.target_path().cells());
    assert!(session.target_path().is_simple_walk(&Grid::new(12)));
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.elapsed_secs(), 0);

    session.advance(4_200);
    for cell in revealed {
        assert_ne!(session.submit_tile(cell), TileResponse::Ignored);
    }

    assert_eq!(session.phase(), Phase::Success);
    let events = session.drain_events();
    assert_eq!(
        events.last(),
        Some(&SessionEvent::Outcome {
            outcome: Outcome::Success,
            stats: OutcomeStats {
                elapsed_secs: 4,
                remaining_secs: None,
                correct_tiles: 8,
                path_length: 8,
            },
        })
    );
}

#[test]
fn timed_game_timeout_then_retry_then_success() {
    let mut session = GameSession::with_defaults(1_618);
    session.start_game(5, true).expect("start");
    run_reveal(&mut session);
    assert_eq!(session.remaining_secs(), 10);

    session.advance(10_000);
    assert_eq!(session.phase(), Phase::Failed(FailureKind::Timeout));

    session.reset_attempt().expect("retry");
    session.advance(2_000);
    for cell in session.target_path().cells().to_vec() {
        session.submit_tile(cell);
    }
    assert_eq!(session.phase(), Phase::Success);
    assert_eq!(session.stats().remaining_secs, Some(8));
}

#[test]
fn many_seeds_generate_full_length_paths_on_the_default_board() {
    let grid = Grid::new(12);
    for seed in 0..500 {
        let mut session = GameSession::with_defaults(seed);
        session.start_game(8, false).expect("8 cells on 12x12 should not exhaust");
        let path = session.target_path();
        assert_eq!(path.len(), 8);
        assert_eq!(path.get(0), Some(78));
        assert!(path.is_simple_walk(&grid), "seed={seed} path={path:?}");
    }
}
