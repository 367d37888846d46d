use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Where the session seed came from; a `--seed` flag makes a run reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cli(_) => "cli",
            Self::Generated(_) => "generated",
        }
    }
}

static SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    let entropy = (nanos as u64)
        ^ ((nanos >> 64) as u64)
        ^ u64::from(process::id()).rotate_left(23)
        ^ counter.rotate_left(11);
    splitmix(entropy)
}

pub fn resolve_seed(cli_seed: Option<u64>, generated_seed: u64) -> SeedChoice {
    match cli_seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    }
}

fn splitmix(mut value: u64) -> u64 {
    value = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    value = (value ^ (value >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value = (value ^ (value >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
