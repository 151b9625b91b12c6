#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

//! Binary-space-partition dungeon levels: rooms carved into partition
//! leaves, joined by L-shaped tunnels with doors, plus the movement rules
//! for walking them.

pub mod bsp;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod level;
pub mod movement;
pub mod rect;
pub mod render;
pub mod rng;
pub mod room;
pub mod session;
pub mod tunnel;

pub use config::LevelConfig;
pub use error::{ConfigError, GridError, LevelError};
pub use grid::{Grid, Tile, Vector};
pub use level::{generate_level, Level};
pub use movement::{attempt_move, Direction, MoveOutcome};
pub use rect::{Axis, Rect};
pub use rng::DungeonRng;
pub use session::GameSession;
