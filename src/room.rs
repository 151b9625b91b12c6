//! Carving inset rooms into partition leaves.

use log::trace;
use rand::Rng;

use crate::{
    error::GridError,
    grid::{Grid, Tile, Vector},
    rect::Rect,
};

/// Range the width and height insets are drawn from.
pub const INSET_RANGE: std::ops::Range<i32> = 1..4;

/// A room no wider or taller than this is not carved.
pub const MIN_ROOM_EXTENT: i32 = 2;

/// Carve a room into `leaf` using random insets.
///
/// Returns the carved rectangle, or `None` if the leaf was too small.
pub fn carve_room(grid: &mut Grid, leaf: Rect, rng: &mut impl Rng) -> Result<Option<Rect>, GridError> {
    let inset_w = rng.gen_range(INSET_RANGE);
    let inset_h = rng.gen_range(INSET_RANGE);
    carve_room_with_insets(grid, leaf, inset_w, inset_h)
}

/// Carve the rectangle `(x + 1, y + 1, w - inset_w, h - inset_h)`: a ring of
/// walls around a floor interior, overwriting whatever was there.
///
/// A room hanging off the grid is an error and leaves the grid untouched.
pub fn carve_room_with_insets(
    grid: &mut Grid,
    leaf: Rect,
    inset_w: i32,
    inset_h: i32,
) -> Result<Option<Rect>, GridError> {
    let room = Rect::new(leaf.x + 1, leaf.y + 1, leaf.w - inset_w, leaf.h - inset_h);
    if room.w <= MIN_ROOM_EXTENT || room.h <= MIN_ROOM_EXTENT {
        trace!("leaf {leaf:?} too small for a room");
        return Ok(None);
    }
    // Opposite corners in bounds put the whole room in bounds.
    grid.get(Vector(room.left(), room.top()))?;
    grid.get(Vector(room.right() - 1, room.bottom() - 1))?;

    for y in room.top()..room.bottom() {
        for x in room.left()..room.right() {
            let pos = Vector(x, y);
            let tile = if room.on_border(pos) {
                Tile::Wall
            } else {
                Tile::Floor
            };
            grid.set(pos, tile)?;
        }
    }
    trace!("carved room {room:?}");
    Ok(Some(room))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn carves_walls_around_floor() {
        let mut grid = Grid::new(8, 8).unwrap();
        let room = carve_room_with_insets(&mut grid, Rect::new(0, 0, 8, 8), 2, 3)
            .unwrap()
            .unwrap();
        assert_eq!(room, Rect::new(1, 1, 6, 5));
        for pos in grid.positions() {
            let expected = if !room.contains(pos) {
                Tile::Empty
            } else if room.on_border(pos) {
                Tile::Wall
            } else {
                Tile::Floor
            };
            assert_eq!(grid.get(pos), Ok(expected), "at {pos:?}");
        }
    }

    #[test]
    fn three_by_three_leaf_is_skipped() {
        for inset in INSET_RANGE {
            let mut grid = Grid::new(3, 3).unwrap();
            let carved = carve_room_with_insets(&mut grid, Rect::new(0, 0, 3, 3), inset, inset);
            assert_eq!(carved, Ok(None));
            assert!(grid.positions().all(|p| grid.get(p) == Ok(Tile::Empty)));
        }
    }

    #[test]
    fn overhanging_room_writes_nothing() {
        let mut grid = Grid::new(3, 3).unwrap();
        let carved = carve_room_with_insets(&mut grid, Rect::new(0, 0, 3, 3), 0, 0);
        assert_eq!(
            carved,
            Err(GridError::OutOfBounds {
                x: 3,
                y: 3,
                width: 3,
                height: 3
            })
        );
        assert!(grid.positions().all(|p| grid.get(p) == Ok(Tile::Empty)));
    }

    #[test]
    fn thin_room_is_skipped() {
        let mut grid = Grid::new(10, 10).unwrap();
        let carved = carve_room_with_insets(&mut grid, Rect::new(0, 0, 10, 4), 1, 2).unwrap();
        assert_eq!(carved, None);
    }

    #[test]
    fn overwrites_previous_content() {
        let mut grid = Grid::filled(6, 6, Tile::ClosedDoor).unwrap();
        carve_room_with_insets(&mut grid, Rect::new(0, 0, 6, 6), 1, 1).unwrap();
        assert_eq!(grid.get(Vector(1, 1)), Ok(Tile::Wall));
        assert_eq!(grid.get(Vector(3, 3)), Ok(Tile::Floor));
        assert_eq!(grid.get(Vector(0, 0)), Ok(Tile::ClosedDoor));
    }

    #[test]
    fn random_room_stays_inside_leaf() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..100 {
            let mut grid = Grid::new(12, 9).unwrap();
            let leaf = Rect::new(2, 1, 10, 8);
            if let Some(room) = carve_room(&mut grid, leaf, &mut rng).unwrap() {
                assert!(room.left() > leaf.left() && room.right() <= leaf.right());
                assert!(room.top() > leaf.top() && room.bottom() <= leaf.bottom());
                assert!(room.w >= 3 && room.h >= 3);
            }
        }
    }
}
