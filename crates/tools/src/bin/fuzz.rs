use anyhow::{Result, bail};
use clap::Parser;
use pathrecall_core::{
    GameSession, InputJournal, InputPayload, Outcome, Phase, SessionError, SessionEvent,
    TileResponse, replay_to_end,
};
use pathrecall_tools::init_tracing;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 5000)]
    steps: u32,
}

#[derive(Default)]
struct Tally {
    successes: u32,
    wrong_tiles: u32,
    timeouts: u32,
    rejected: u32,
}

fn roll(rng: &mut ChaCha8Rng, below: u64) -> u64 {
    rng.next_u64() % below
}

fn random_input(rng: &mut ChaCha8Rng, session: &GameSession) -> InputPayload {
    let cell_count = session.config().grid().cell_count() as u64;
    match roll(rng, 10) {
        0 => InputPayload::StartGame {
            length: roll(rng, 21) as usize,
            timed: roll(rng, 2) == 0,
        },
        1 => InputPayload::ResetAttempt,
        2..=4 => InputPayload::Advance { elapsed_ms: roll(rng, 1500) },
        // Bias toward the expected tile so games actually reach the end
        _ => {
            let expected = session.target_path().get(session.progress().len());
            let index = match expected {
                Some(cell) if roll(rng, 8) != 0 => cell,
                _ => roll(rng, cell_count) as usize,
            };
            InputPayload::SubmitTile { index }
        }
    }
}

fn apply(
    session: &mut GameSession,
    payload: &InputPayload,
    tally: &mut Tally,
) -> Result<(), SessionError> {
    match payload {
        InputPayload::StartGame { length, timed } => session.start_game(*length, *timed),
        InputPayload::ResetAttempt => session.reset_attempt(),
        InputPayload::SubmitTile { index } => {
            match session.submit_tile(*index) {
                TileResponse::Completed => tally.successes += 1,
                TileResponse::Rejected { .. } => tally.wrong_tiles += 1,
                TileResponse::Ignored | TileResponse::Accepted { .. } => {}
            }
            Ok(())
        }
        InputPayload::Advance { elapsed_ms } => {
            session.advance(*elapsed_ms);
            Ok(())
        }
    }
}

fn check_invariants(session: &GameSession, step: u32) -> Result<()> {
    let path = session.target_path();
    if !path.is_simple_walk(&session.config().grid()) {
        bail!("step {step}: target path is not a simple orthogonal walk");
    }
    let progress = session.progress();
    if progress.len() > path.len() || progress != &path.cells()[..progress.len()] {
        bail!("step {step}: progress {progress:?} is not a prefix of the path");
    }
    match session.phase() {
        Phase::Playing => {
            if !session.is_timer_running() {
                bail!("step {step}: playing without a running timer");
            }
            if session.timed_mode() && session.remaining_secs() == 0 {
                bail!("step {step}: playing with no time left");
            }
        }
        phase if phase.is_terminal() => {
            if session.is_timer_running() {
                bail!("step {step}: timer still running in {phase:?}");
            }
        }
        Phase::Showing => {
            if session.reveal_remaining_ms().is_none() {
                bail!("step {step}: showing without a reveal in progress");
            }
        }
        _ => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} steps...", args.seed, args.steps);
    let mut session = GameSession::with_defaults(args.seed);
    let mut journal = InputJournal::new(args.seed, session.config().clone());
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut tally = Tally::default();

    for step in 0..args.steps {
        let payload = random_input(&mut rng, &session);
        match apply(&mut session, &payload, &mut tally) {
            Ok(()) | Err(SessionError::PathGeneration(_)) => match payload {
                InputPayload::Advance { elapsed_ms } => journal.append_advance(elapsed_ms),
                other => journal.append(other),
            },
            Err(_) => tally.rejected += 1,
        }
        for event in session.drain_events() {
            if let SessionEvent::Outcome { outcome: Outcome::Timeout, .. } = event {
                tally.timeouts += 1;
            }
        }
        if let Err(err) = check_invariants(&session, step) {
            warn!(seed = args.seed, step, %err, "invariant_violated");
            return Err(err);
        }
    }

    let replayed = replay_to_end(&journal)?;
    if replayed.final_snapshot_hash != session.snapshot_hash() {
        warn!(
            seed = args.seed,
            inputs = journal.inputs.len(),
            live = session.snapshot_hash(),
            replay = replayed.final_snapshot_hash,
            "replay_diverged"
        );
        bail!(
            "replay diverged: live 0x{:016x} vs replay 0x{:016x}",
            session.snapshot_hash(),
            replayed.final_snapshot_hash
        );
    }

    println!(
        "Games: {} | successes: {} | wrong tiles: {} | timeouts: {} | rejected commands: {}",
        session.games_started(),
        tally.successes,
        tally.wrong_tiles,
        tally.timeouts,
        tally.rejected
    );
    info!(seed = args.seed, steps = args.steps, inputs = journal.inputs.len(), "fuzz_passed");
    println!("Fuzzing completed successfully.");
    Ok(())
}
