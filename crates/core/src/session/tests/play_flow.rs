//! Tests for tile validation, outcomes, and retrying the same path.

use proptest::prelude::*;

use super::support::*;

#[test]
fn correct_sequence_stays_playing_until_the_last_tile() {
    let mut session = playing_session(8, false);
    let path = session.target_path().cells().to_vec();

    for (step, &cell) in path.iter().enumerate().take(path.len() - 1) {
        assert_eq!(session.submit_tile(cell), TileResponse::Accepted { progress: step + 1 });
        assert_eq!(session.phase(), Phase::Playing);
    }
    assert_eq!(session.submit_tile(path[path.len() - 1]), TileResponse::Completed);
    assert_eq!(session.phase(), Phase::Success);
    assert_eq!(session.last_outcome(), Some(Outcome::Success));
    assert!(!session.is_timer_running());
}

#[test]
fn free_mode_success_reports_elapsed_seconds() {
    let mut session = playing_session(8, false);
    session.advance(3_500);

    for cell in session.target_path().cells().to_vec() {
        session.submit_tile(cell);
    }

    let events = session.drain_events();
    let Some(SessionEvent::Outcome { outcome, stats }) = events.last() else {
        panic!("expected an outcome event, got {events:?}");
    };
    assert_eq!(*outcome, Outcome::Success);
    assert_eq!(
        *stats,
        OutcomeStats { elapsed_secs: 3, remaining_secs: None, correct_tiles: 8, path_length: 8 }
    );
}

#[test]
fn wrong_tile_after_progress_fails_and_records_the_press() {
    let mut session = playing_session(8, false);
    let first = expected_next(&session);
    session.submit_tile(first);
    let second = expected_next(&session);
    session.submit_tile(second);

    let expected = expected_next(&session);
    let wrong = some_other_cell(expected);
    assert_eq!(session.submit_tile(wrong), TileResponse::Rejected { expected });
    assert_eq!(
        session.phase(),
        Phase::Failed(FailureKind::WrongTile { index: wrong, expected })
    );
    assert!(!session.is_timer_running());
    assert_eq!(
        outcomes(&session.drain_events()),
        vec![Outcome::WrongTile { index: wrong, expected }]
    );

    assert_eq!(session.submit_tile(expected), TileResponse::Ignored);
    assert_eq!(session.progress().len(), 2);
}

#[test]
fn repeated_resets_always_leave_empty_progress_in_playing() {
    let mut session = playing_session(8, false);
    let path = session.target_path().clone();

    for _ in 0..5 {
        session.reset_attempt().expect("reset");
        assert!(session.progress().is_empty());
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.target_path(), &path);
    }
}

#[test]
fn reset_after_failure_retries_the_same_path() {
    let mut session = playing_session(6, false);
    let path = session.target_path().clone();
    let wrong = some_other_cell(expected_next(&session));
    session.submit_tile(wrong);
    session.drain_events();

    session.reset_attempt().expect("reset");
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.target_path(), &path);
    assert_eq!(session.last_outcome(), None);
    assert_eq!(
        session.drain_events(),
        vec![
            SessionEvent::AttemptReset,
            SessionEvent::TimerTick { display_value: 0, is_countdown: false },
        ]
    );

    for cell in path.cells() {
        session.submit_tile(*cell);
    }
    assert_eq!(session.phase(), Phase::Success);
}

#[test]
fn new_game_after_success_replaces_the_path_and_mode() {
    let mut session = playing_session(8, false);
    for cell in session.target_path().cells().to_vec() {
        session.submit_tile(cell);
    }
    assert_eq!(session.phase(), Phase::Success);

    session.start_game(10, true).expect("restart");
    assert_eq!(session.phase(), Phase::Showing);
    assert_eq!(session.target_path().len(), 10);
    assert!(session.timed_mode());
    assert!(session.progress().is_empty());
    assert_eq!(session.games_started(), 2);
    assert_eq!(session.last_outcome(), None);
}

#[test]
fn starting_mid_attempt_abandons_the_running_timer() {
    let mut session = playing_session(8, true);
    assert!(session.is_timer_running());

    session.start_game(8, false).expect("restart while playing");
    assert!(!session.is_timer_running());
    assert_eq!(session.phase(), Phase::Showing);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn any_wrong_press_fails_regardless_of_prior_progress(
        correct_prefix in 0_usize..8,
        offset in 1_usize..144,
    ) {
        let mut session = playing_session(8, false);
        let path = session.target_path().cells().to_vec();
        for &cell in &path[..correct_prefix] {
            session.submit_tile(cell);
        }

        let expected = path[correct_prefix];
        let wrong = (expected + offset) % 144;
        prop_assert_eq!(session.submit_tile(wrong), TileResponse::Rejected { expected });
        prop_assert_eq!(
            session.phase(),
            Phase::Failed(FailureKind::WrongTile { index: wrong, expected })
        );
    }
}
