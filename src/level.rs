//! Assembling a playable level: partition, carve, connect, then pick the
//! start and exit tiles.

use log::{debug, warn};
use rand::{seq::SliceRandom, Rng};

use crate::{
    bsp::{partition, AxisChooser, SquarishChooser},
    config::LevelConfig,
    error::LevelError,
    grid::{Grid, Tile, Vector},
    rect::Rect,
    room::carve_room,
    tunnel::connect_rooms,
};

/// Draws allowed when looking for an exit that shares neither row nor
/// column with the start.
pub const EXIT_ATTEMPTS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub grid: Grid,
    /// Carved rooms, in partition-leaf order.
    pub rooms: Vec<Rect>,
    pub start: Vector,
    /// `None` when every draw for an exit collided with the start's row or
    /// column.
    pub exit: Option<Vector>,
}

impl Level {
    pub fn is_exit(&self, pos: Vector) -> bool {
        self.exit == Some(pos)
    }
}

/// Generate a level, cutting the partition with [`SquarishChooser`].
pub fn generate_level(
    width: i32,
    height: i32,
    depth: u32,
    rng: &mut impl Rng,
) -> Result<Level, LevelError> {
    let grid = Grid::new(width, height)?;
    debug!("partitioning {width}x{height} to depth {depth}");
    let leaves = partition(
        Rect::new(0, 0, width, height),
        depth,
        &mut SquarishChooser::new(rng),
    )
    .leaves();
    furnish(grid, &leaves, rng)
}

/// Generate a level with a caller-supplied split policy.
pub fn generate_level_with(
    width: i32,
    height: i32,
    depth: u32,
    chooser: &mut impl AxisChooser,
    rng: &mut impl Rng,
) -> Result<Level, LevelError> {
    let grid = Grid::new(width, height)?;
    debug!("partitioning {width}x{height} to depth {depth}");
    let leaves = partition(Rect::new(0, 0, width, height), depth, chooser).leaves();
    furnish(grid, &leaves, rng)
}

/// Generate from `config`, retrying up to `config.max_attempts` times while
/// the result has no floor.
pub fn generate_from_config(config: &LevelConfig, rng: &mut impl Rng) -> Result<Level, LevelError> {
    let mut attempt = 1;
    loop {
        match generate_level(config.width, config.height, config.depth, rng) {
            Err(LevelError::NoFloorTiles { .. }) if attempt < config.max_attempts => {
                warn!("level {attempt} had no floor tiles, regenerating");
                attempt += 1;
            }
            Err(LevelError::NoFloorTiles { .. }) => {
                return Err(LevelError::NoFloorTiles { attempts: attempt })
            }
            other => return other,
        }
    }
}

fn furnish(mut grid: Grid, leaves: &[Rect], rng: &mut impl Rng) -> Result<Level, LevelError> {
    debug!("carving {} leaves", leaves.len());
    let mut rooms = Vec::with_capacity(leaves.len());
    for &leaf in leaves {
        if let Some(room) = carve_room(&mut grid, leaf, rng)? {
            rooms.push(room);
        }
    }

    debug!("connecting {} rooms", rooms.len());
    connect_rooms(&mut grid, &rooms)?;

    let floors = grid.positions_of(Tile::Floor);
    let start = *floors
        .choose(rng)
        .ok_or(LevelError::NoFloorTiles { attempts: 1 })?;
    let exit = choose_exit(&floors, start, rng);
    if exit.is_none() {
        warn!("no exit found in {EXIT_ATTEMPTS} draws from {} floor tiles", floors.len());
    }

    Ok(Level {
        grid,
        rooms,
        start,
        exit,
    })
}

/// Draw up to [`EXIT_ATTEMPTS`] floor tiles, taking the first whose row and
/// column both differ from `start`.
pub fn choose_exit(floors: &[Vector], start: Vector, rng: &mut impl Rng) -> Option<Vector> {
    (0..EXIT_ATTEMPTS)
        .filter_map(|_| floors.choose(rng).copied())
        .find(|pos| pos.x() != start.x() && pos.y() != start.y())
}
