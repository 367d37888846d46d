pub mod config;
pub mod grid;
pub mod journal;
pub mod pathgen;
pub mod replay;
pub mod session;
pub mod timer;
pub mod types;

pub use config::{ConfigError, GameConfig, MAX_GRID_SIZE, parse_length_input};
pub use grid::Grid;
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use pathgen::{Path, PathGenError, PathGenerator};
pub use replay::*;
pub use session::GameSession;
pub use types::*;
