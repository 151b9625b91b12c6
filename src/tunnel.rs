//! Joining rooms with L-shaped tunnels.

use log::trace;

use crate::{
    error::GridError,
    grid::{Grid, Tile, Vector},
    rect::Rect,
};

/// Connect each room to the next in order, wrapping the last back to the
/// first. With fewer than two rooms there is nothing to join.
pub fn connect_rooms(grid: &mut Grid, rooms: &[Rect]) -> Result<(), GridError> {
    if rooms.len() < 2 {
        return Ok(());
    }
    for (i, &from) in rooms.iter().enumerate() {
        let to = rooms[(i + 1) % rooms.len()];
        dig_tunnel(grid, from.source_anchor(), to.destination_anchor())?;
    }
    Ok(())
}

/// Dig from `from` to `to`: first along `from`'s column down (or up) to
/// `to`'s row, then along that row to `to`'s column.
pub fn dig_tunnel(grid: &mut Grid, from: Vector, to: Vector) -> Result<(), GridError> {
    trace!("tunnel {from:?} -> {to:?}");
    let Vector(x1, y1) = from;
    let Vector(x2, y2) = to;
    for y in y1.min(y2)..=y1.max(y2) {
        dig(grid, Vector(x1, y))?;
    }
    for x in x1.min(x2)..=x1.max(x2) {
        dig(grid, Vector(x, y2))?;
    }
    Ok(())
}

/// Empty becomes floor, a wall becomes a closed door, anything else stays.
fn dig(grid: &mut Grid, pos: Vector) -> Result<(), GridError> {
    match grid.get(pos)? {
        Tile::Empty => grid.set(pos, Tile::Floor),
        Tile::Wall => grid.set(pos, Tile::ClosedDoor),
        Tile::Floor | Tile::ClosedDoor | Tile::OpenDoor => Ok(()),
    }
}
