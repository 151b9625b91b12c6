use std::fmt::Display;

use crate::{
    grid::{Tile, Vector},
    level::Level,
};

pub const PLAYER_CHAR: char = '@';
pub const EXIT_CHAR: char = '>';

/// A level with the player drawn on top, framed in a border.
pub struct LevelView<'a> {
    pub level: &'a Level,
    pub player: Vector,
}

impl<'a> LevelView<'a> {
    pub const fn new(level: &'a Level, player: Vector) -> Self {
        Self { level, player }
    }

    fn cell(&self, pos: Vector) -> char {
        if pos == self.player {
            PLAYER_CHAR
        } else if self.level.is_exit(pos) {
            EXIT_CHAR
        } else {
            self.level.grid.get(pos).map_or('?', Tile::to_char)
        }
    }
}

impl Display for LevelView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let grid = &self.level.grid;
        for _ in 0..grid.width() + 2 {
            write!(f, "-")?;
        }
        writeln!(f)?;
        for y in 0..grid.height() {
            write!(f, "|")?;
            for x in 0..grid.width() {
                write!(f, "{}", self.cell(Vector(x, y)))?;
            }
            writeln!(f, "|")?;
        }
        for _ in 0..grid.width() + 2 {
            write!(f, "-")?;
        }
        Ok(())
    }
}
