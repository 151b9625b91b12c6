use std::collections::{HashMap, VecDeque};

use bsp_dungeon::{
    bsp::partition, generate_level, level::generate_level_with, Axis, Direction, DungeonRng,
    GameSession, Level, LevelConfig, MoveOutcome, Rect, Tile, Vector,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn vertical_halves(_: Rect, _: u32) -> (Axis, f64) {
    (Axis::Vertical, 0.5)
}

/// Directions leading from `from` to `to` over passable tiles, if any.
fn route(level: &Level, from: Vector, to: Vector) -> Option<Vec<Direction>> {
    let mut came_from: HashMap<Vector, (Vector, Direction)> = HashMap::new();
    let mut queue = VecDeque::from([from]);
    while let Some(pos) = queue.pop_front() {
        if pos == to {
            let mut steps = Vec::new();
            let mut at = to;
            while at != from {
                let (prev, direction) = came_from[&at];
                steps.push(direction);
                at = prev;
            }
            steps.reverse();
            return Some(steps);
        }
        for direction in Direction::ALL {
            let next = pos + direction.delta();
            let passable = level.grid.get(next).is_ok_and(Tile::is_passable);
            if passable && next != from && !came_from.contains_key(&next) {
                came_from.insert(next, (pos, direction));
                queue.push_back(next);
            }
        }
    }
    None
}

#[test]
fn stubbed_split_gives_two_halves() {
    let leaves = partition(Rect::new(0, 0, 10, 10), 1, &mut vertical_halves).leaves();
    assert_eq!(leaves, vec![Rect::new(0, 0, 5, 10), Rect::new(5, 0, 5, 10)]);

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let level = generate_level_with(10, 10, 1, &mut vertical_halves, &mut rng).unwrap();
    assert_eq!((level.grid.width(), level.grid.height()), (10, 10));
    assert!(level.rooms.len() <= 2);
}

#[test]
fn seeded_generation_replays() {
    let config = LevelConfig::default();
    let a = GameSession::new(config.clone(), DungeonRng::new(1234)).unwrap();
    let b = GameSession::new(config, DungeonRng::new(1234)).unwrap();
    assert_eq!(a.level(), b.level());
    assert_eq!(a.player(), b.player());
}

#[test]
fn default_levels_have_rooms_and_doors() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    for _ in 0..10 {
        let level = generate_level(32, 25, 3, &mut rng).unwrap();
        assert!(level.rooms.len() >= 2, "{}", level.grid);
        assert!(!level.grid.positions_of(Tile::ClosedDoor).is_empty());
        for room in &level.rooms {
            assert!(room.w >= 3 && room.h >= 3);
        }
    }
}

#[test]
fn walking_to_the_exit_starts_a_new_level() {
    let mut session = (0..20)
        .map(|seed| GameSession::new(LevelConfig::default(), DungeonRng::new(seed)).unwrap())
        .find(|session| session.level().exit.is_some())
        .expect("a seed with an exit");
    let exit = session.level().exit.unwrap();
    let first_level = session.level().clone();
    let steps = route(session.level(), session.player(), exit).expect("exit reachable");
    let (last, walk) = steps.split_last().unwrap();

    for &direction in walk {
        let before = session.player();
        match session.step(direction).unwrap() {
            MoveOutcome::Moved => {}
            MoveOutcome::DoorOpened => {
                assert_eq!(session.player(), before);
                assert_eq!(session.step(direction).unwrap(), MoveOutcome::Moved);
            }
            other => panic!("unexpected {other:?} walking {direction:?}"),
        }
        assert_eq!(session.player(), before + direction.delta());
    }

    assert_eq!(session.step(*last).unwrap(), MoveOutcome::LevelComplete);
    assert_eq!(session.levels_completed(), 1);
    assert_eq!(session.player(), session.level().start);
    assert_ne!(session.level(), &first_level);
}
