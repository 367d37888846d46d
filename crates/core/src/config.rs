//! Tunable game constants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::Grid;
use crate::pathgen::DEFAULT_MAX_ATTEMPTS;
use crate::types::CellIndex;

pub const DEFAULT_GRID_SIZE: usize = 12;
pub const DEFAULT_PATH_LENGTH: usize = 8;
pub const DEFAULT_REVEAL_STEP_MS: u64 = 200;
pub const DEFAULT_DISPLAY_MS: u64 = 2000;
pub const DEFAULT_SECONDS_PER_STEP: u32 = 2;
pub const DEFAULT_TICK_MS: u64 = 1000;
pub const MAX_GRID_SIZE: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: usize,
    pub default_length: usize,
    pub max_attempts: u32,
    /// `None` uses the grid's centre cell.
    pub start_cell: Option<CellIndex>,
    pub reveal_step_ms: u64,
    pub display_ms: u64,
    pub seconds_per_step: u32,
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            default_length: DEFAULT_PATH_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            start_cell: None,
            reveal_step_ms: DEFAULT_REVEAL_STEP_MS,
            display_ms: DEFAULT_DISPLAY_MS,
            seconds_per_step: DEFAULT_SECONDS_PER_STEP,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },
    #[error("start cell {start} is outside a {size}x{size} grid")]
    StartOutOfBounds { start: CellIndex, size: usize },
    #[error("max_attempts must be at least 1")]
    NoAttempts,
    #[error("default_length must be at least 1")]
    ZeroDefaultLength,
    #[error("tick_ms must be at least 1")]
    ZeroTick,
}

impl GameConfig {
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }

    pub fn start_cell(&self) -> CellIndex {
        self.start_cell.unwrap_or_else(|| self.grid().center())
    }

    /// Countdown budget for a path of `length` cells.
    pub fn time_limit_secs(&self, length: usize) -> u32 {
        (length as u32).saturating_mul(self.seconds_per_step)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge { size: self.grid_size, max: MAX_GRID_SIZE });
        }
        if let Some(start) = self.start_cell
            && !self.grid().contains(start)
        {
            return Err(ConfigError::StartOutOfBounds { start, size: self.grid_size });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.default_length == 0 {
            return Err(ConfigError::ZeroDefaultLength);
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

/// Reads a requested path length from raw UI text. Anything that is not a
/// positive integer falls back to `default`.
pub fn parse_length_input(raw: &str, default: usize) -> usize {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => value as usize,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.grid().cell_count(), 144);
        assert_eq!(config.start_cell(), 78);
        assert_eq!(config.time_limit_secs(5), 10);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn explicit_start_cell_overrides_centre() {
        let config = GameConfig { start_cell: Some(137), ..GameConfig::default() };
        assert_eq!(config.start_cell(), 137);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validation_rejects_unusable_values() {
        let cases = [
            (GameConfig { grid_size: 0, ..GameConfig::default() }, ConfigError::EmptyGrid),
            (
                GameConfig { grid_size: MAX_GRID_SIZE + 1, ..GameConfig::default() },
                ConfigError::GridTooLarge { size: MAX_GRID_SIZE + 1, max: MAX_GRID_SIZE },
            ),
            (
                GameConfig { grid_size: 1 << 33, start_cell: Some(5), ..GameConfig::default() },
                ConfigError::GridTooLarge { size: 1 << 33, max: MAX_GRID_SIZE },
            ),
            (
                GameConfig { start_cell: Some(144), ..GameConfig::default() },
                ConfigError::StartOutOfBounds { start: 144, size: 12 },
            ),
            (GameConfig { max_attempts: 0, ..GameConfig::default() }, ConfigError::NoAttempts),
            (
                GameConfig { default_length: 0, ..GameConfig::default() },
                ConfigError::ZeroDefaultLength,
            ),
            (GameConfig { tick_ms: 0, ..GameConfig::default() }, ConfigError::ZeroTick),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn length_input_falls_back_for_anything_but_a_positive_integer() {
        assert_eq!(parse_length_input("12", 8), 12);
        assert_eq!(parse_length_input(" 5 ", 8), 5);
        assert_eq!(parse_length_input("", 8), 8);
        assert_eq!(parse_length_input("abc", 8), 8);
        assert_eq!(parse_length_input("0", 8), 8);
        assert_eq!(parse_length_input("-3", 8), 8);
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"grid_size": 6}"#).expect("partial config");
        assert_eq!(config.grid_size, 6);
        assert_eq!(config.default_length, DEFAULT_PATH_LENGTH);
        assert_eq!(config.start_cell(), 21);
    }
}
