use log::{debug, info, warn};

use crate::{
    config::LevelConfig,
    error::LevelError,
    grid::Vector,
    level::{generate_from_config, Level},
    movement::{attempt_move, Direction, MoveOutcome},
    rng::DungeonRng,
};

/// Everything a game in progress owns: the current level, where the player
/// stands, and the random source all later levels are drawn from.
pub struct GameSession {
    config: LevelConfig,
    rng: DungeonRng,
    level: Level,
    player: Vector,
    levels_completed: u32,
}

impl GameSession {
    pub fn new(config: LevelConfig, mut rng: DungeonRng) -> Result<Self, LevelError> {
        info!("starting session with seed {}", rng.seed());
        let level = Self::playable_level(&config, &mut rng)?;
        Ok(Self {
            config,
            rng,
            player: level.start,
            level,
            levels_completed: 0,
        })
    }

    pub const fn level(&self) -> &Level {
        &self.level
    }

    pub const fn player(&self) -> Vector {
        self.player
    }

    pub const fn levels_completed(&self) -> u32 {
        self.levels_completed
    }

    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Move the player one step. On reaching the exit a new level replaces
    /// the current one and the player is placed on its start tile.
    pub fn step(&mut self, direction: Direction) -> Result<MoveOutcome, LevelError> {
        let outcome = attempt_move(&mut self.level, &mut self.player, direction);
        debug!("{direction:?} -> {outcome:?}");
        if outcome == MoveOutcome::LevelComplete {
            info!("level {} complete, generating the next", self.levels_completed + 1);
            self.level = Self::playable_level(&self.config, &mut self.rng)?;
            self.player = self.level.start;
            self.levels_completed += 1;
        }
        Ok(outcome)
    }

    /// A level that has an exit. A level without one is regenerated, up to
    /// `max_attempts` times; if none turns up, the last level is kept as is.
    fn playable_level(config: &LevelConfig, rng: &mut DungeonRng) -> Result<Level, LevelError> {
        let mut level = generate_from_config(config, rng)?;
        for _ in 1..config.max_attempts {
            if level.exit.is_some() {
                break;
            }
            warn!("generated level has no exit, regenerating");
            level = generate_from_config(config, rng)?;
        }
        Ok(level)
    }
}
