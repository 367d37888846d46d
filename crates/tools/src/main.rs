use anyhow::{Context, Result};
use clap::Parser;
use pathrecall_core::{InputJournal, ReplayResult, replay_to_end};
use pathrecall_tools::init_tracing;
use std::fs;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: InputJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    info!(seed = journal.seed, inputs = journal.inputs.len(), "journal_loaded");
    let result: ReplayResult =
        replay_to_end(&journal).with_context(|| format!("Replay of seed {} failed", journal.seed))?;

    println!("Replay complete.");
    println!("Seed: {}", journal.seed);
    println!("Inputs: {}", journal.inputs.len());
    println!("Games Started: {}", result.games_started);
    println!("Final Time: {}ms", result.final_time_ms);
    println!("Final Phase: {:?}", result.final_phase);
    println!("Last Outcome: {:?}", result.last_outcome);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
