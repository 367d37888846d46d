//! Command-line flags for the desktop app.

use clap::Parser;
use pathrecall_core::parse_length_input;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pathrecall", version, about = "Grid path memory game", long_about = None)]
pub struct LaunchArgs {
    /// Fixed seed for reproducible paths
    #[arg(long)]
    pub seed: Option<u64>,
    /// Initial path length, overriding the saved setting. Anything that is
    /// not a positive number keeps the saved length.
    #[arg(long, allow_hyphen_values = true)]
    pub length: Option<String>,
    /// Start in timed mode
    #[arg(long)]
    pub timed: bool,
    /// Settings file to load and save instead of the per-user default
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

impl LaunchArgs {
    /// Requested length, with unusable text resolved to `fallback`.
    pub fn length(&self, fallback: usize) -> Option<usize> {
        self.length.as_deref().map(|raw| parse_length_input(raw, fallback))
    }
}
