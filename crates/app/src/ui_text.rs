//! Player-facing wording for session events and outcomes.

use pathrecall_core::{Outcome, OutcomeStats, SessionEvent};

pub const MEMORIZE_TEXT: &str = "Memorize the sequence...";
pub const YOUR_TURN_TEXT: &str = "Your turn! Repeat the path.";
pub const RESET_TEXT: &str = "Attempt reset! Try again...";
pub const WELCOME_TEXT: &str = "Press Enter to start.";

pub const HELP_LINES: [&str; 8] = [
    "How to play",
    "1. Watch the path light up one tile at a time.",
    "2. When it fades, click the tiles in the same order.",
    "3. Timed mode gives you a few seconds per tile.",
    "Enter: new game   R: reset attempt   T: toggle timed mode",
    "Arrows: move focus   Space: press focused tile",
    "[ / ]: path length   H: close help   Esc: quit",
    "A wrong tile ends the attempt; reset to retry the same path.",
];

pub fn outcome_text(outcome: &Outcome, stats: &OutcomeStats) -> String {
    match outcome {
        Outcome::Success => match stats.remaining_secs {
            Some(remaining) => format!("Success! {remaining}s remaining."),
            None => format!("Success! Finished in {}s.", stats.elapsed_secs),
        },
        Outcome::WrongTile { .. } => "Incorrect! Press 'Reset Attempt' to try again.".to_string(),
        Outcome::Timeout => "Time's up! Attempt failed.".to_string(),
        Outcome::PathGenerationExhausted { .. } => {
            "Error generating path. Please try again.".to_string()
        }
    }
}

pub fn timer_text(display_value: u32, is_countdown: bool) -> String {
    if is_countdown {
        format!("Time Left: {display_value}s")
    } else {
        format!("Time: {display_value}s")
    }
}

/// New status line for an event, if the event changes it.
pub fn status_for_event(event: &SessionEvent) -> Option<String> {
    match event {
        SessionEvent::GameStarted { .. } => Some(MEMORIZE_TEXT.to_string()),
        SessionEvent::RevealComplete => Some(YOUR_TURN_TEXT.to_string()),
        SessionEvent::AttemptReset => Some(RESET_TEXT.to_string()),
        SessionEvent::Outcome { outcome, stats } => Some(outcome_text(outcome, stats)),
        SessionEvent::RevealStep { .. }
        | SessionEvent::TileAccepted { .. }
        | SessionEvent::TimerTick { .. } => None,
    }
}

pub fn settings_line(length: usize, timed: bool) -> String {
    let mode = if timed { "timed" } else { "free" };
    format!("Length: {length}   Mode: {mode}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_text_depends_on_timing_mode() {
        let free = OutcomeStats { elapsed_secs: 7, ..OutcomeStats::default() };
        let timed = OutcomeStats { remaining_secs: Some(4), ..OutcomeStats::default() };
        assert_eq!(outcome_text(&Outcome::Success, &free), "Success! Finished in 7s.");
        assert_eq!(outcome_text(&Outcome::Success, &timed), "Success! 4s remaining.");
    }

    #[test]
    fn failures_have_their_own_messages() {
        let stats = OutcomeStats::default();
        assert!(outcome_text(&Outcome::Timeout, &stats).starts_with("Time's up"));
        assert!(
            outcome_text(&Outcome::WrongTile { index: 3, expected: 4 }, &stats)
                .starts_with("Incorrect")
        );
        assert!(
            outcome_text(&Outcome::PathGenerationExhausted { attempts: 100 }, &stats)
                .starts_with("Error generating path")
        );
    }

    #[test]
    fn timer_only_says_time_left_when_counting_down() {
        assert_eq!(timer_text(10, true), "Time Left: 10s");
        assert_eq!(timer_text(3, false), "Time: 3s");
    }

    #[test]
    fn ticks_and_steps_leave_the_status_alone() {
        assert_eq!(status_for_event(&SessionEvent::RevealStep { step: 0, index: 78 }), None);
        assert_eq!(
            status_for_event(&SessionEvent::TimerTick { display_value: 1, is_countdown: false }),
            None
        );
        assert_eq!(
            status_for_event(&SessionEvent::RevealComplete).as_deref(),
            Some(YOUR_TURN_TEXT)
        );
    }
}
