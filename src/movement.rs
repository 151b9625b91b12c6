use crate::{
    grid::{Tile, Vector},
    level::Level,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
    ];

    pub const fn delta(self) -> Vector {
        match self {
            Self::Up => Vector(0, -1),
            Self::Down => Vector(0, 1),
            Self::Left => Vector(-1, 0),
            Self::Right => Vector(1, 0),
            Self::UpLeft => Vector(-1, -1),
            Self::UpRight => Vector(1, -1),
            Self::DownLeft => Vector(-1, 1),
            Self::DownRight => Vector(1, 1),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Blocked,
    DoorOpened,
    Moved,
    LevelComplete,
}

/// Resolve one step of `player` in `direction`.
///
/// Walls, empty space, and anything off the grid block. A closed door opens
/// and the player stays put. Reaching the exit reports
/// [`MoveOutcome::LevelComplete`] without moving; the caller regenerates.
pub fn attempt_move(level: &mut Level, player: &mut Vector, direction: Direction) -> MoveOutcome {
    let target = *player + direction.delta();
    let Ok(tile) = level.grid.get(target) else {
        return MoveOutcome::Blocked;
    };

    match tile {
        Tile::Wall | Tile::Empty => MoveOutcome::Blocked,
        Tile::ClosedDoor => {
            let opened = level.grid.set(target, Tile::OpenDoor);
            debug_assert!(opened.is_ok());
            MoveOutcome::DoorOpened
        }
        Tile::Floor | Tile::OpenDoor if level.is_exit(target) => MoveOutcome::LevelComplete,
        Tile::Floor | Tile::OpenDoor => {
            *player = target;
            MoveOutcome::Moved
        }
    }
}
