//! Samples the path generator across many seeds and reports how often the
//! random walk dead-ends.

use anyhow::{Result, bail};
use clap::Parser;
use pathrecall_core::{GameConfig, PathGenError, PathGenerator};
use pathrecall_tools::init_tracing;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use tracing::{debug, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 0)]
    start_seed: u64,
    #[arg(long, default_value_t = 1000)]
    samples: u64,
    #[arg(short, long, default_value_t = 8)]
    length: usize,
    #[arg(short, long, default_value_t = 12)]
    grid: usize,
    #[arg(long, default_value_t = 100)]
    max_attempts: u32,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct PathStats {
    samples: u64,
    generated: u64,
    exhausted: u64,
    total_attempts: u64,
    worst_attempts: u32,
}

impl PathStats {
    fn record(&mut self, outcome: Result<u32, PathGenError>) {
        self.samples += 1;
        match outcome {
            Ok(attempts) => {
                self.generated += 1;
                self.total_attempts += u64::from(attempts);
                self.worst_attempts = self.worst_attempts.max(attempts);
            }
            Err(_) => self.exhausted += 1,
        }
    }

    fn mean_attempts(&self) -> f64 {
        if self.generated == 0 {
            return 0.0;
        }
        self.total_attempts as f64 / self.generated as f64
    }

    fn exhaustion_rate(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.exhausted as f64 / self.samples as f64
    }
}

fn sample(generator: &PathGenerator, start: usize, length: usize, seeds: &[u64]) -> PathStats {
    let mut stats = PathStats::default();
    for &seed in seeds {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let outcome =
            generator.generate_counted(&mut rng, length, start).map(|(_, attempts)| attempts);
        if let Err(err) = &outcome {
            debug!(seed, %err, "sample_exhausted");
        }
        stats.record(outcome);
    }
    stats
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = GameConfig {
        grid_size: args.grid,
        max_attempts: args.max_attempts,
        ..GameConfig::default()
    };
    if let Err(err) = config.validate() {
        bail!("invalid generator settings: {err}");
    }

    let generator = PathGenerator::new(config.grid(), config.max_attempts);
    let start = config.start_cell();
    let seeds: Vec<u64> = (0..args.samples).map(|i| args.start_seed.wrapping_add(i)).collect();
    let stats = sample(&generator, start, args.length, &seeds);
    info!(
        samples = stats.samples,
        exhausted = stats.exhausted,
        worst_attempts = stats.worst_attempts,
        "sampling_finished"
    );

    println!(
        "grid {0}x{0}, start {start}, length {1}, max attempts {2}",
        args.grid, args.length, args.max_attempts
    );
    println!("Samples: {}", stats.samples);
    println!("Generated: {}", stats.generated);
    println!("Exhausted: {} ({:.2}%)", stats.exhausted, stats.exhaustion_rate() * 100.0);
    println!("Mean attempts: {:.3}", stats.mean_attempts());
    println!("Worst attempts: {}", stats.worst_attempts);
    Ok(())
}
