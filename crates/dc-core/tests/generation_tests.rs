use std::collections::VecDeque;

use dc_core::dungeon::{Dungeon, Position, Tile};
use dc_core::{GameConfig, GameRng};
use proptest::prelude::*;

fn generate(seed: u64, width: i32, height: i32) -> Dungeon {
    let config = GameConfig {
        width,
        height,
        ..GameConfig::default()
    };
    let mut rng = GameRng::new(seed);
    Dungeon::generate(&config, 1, &mut rng)
}

/// Walkable cells reachable from `start` in four directions
fn reachable(dungeon: &Dungeon, start: Position) -> Vec<Vec<bool>> {
    let mut seen = vec![vec![false; dungeon.height() as usize]; dungeon.width() as usize];
    let mut queue = VecDeque::from([start]);
    seen[start.x as usize][start.y as usize] = true;

    while let Some(pos) = queue.pop_front() {
        for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
            let next = pos.offset(dx, dy);
            if dungeon.is_walkable(next) && !seen[next.x as usize][next.y as usize] {
                seen[next.x as usize][next.y as usize] = true;
                queue.push_back(next);
            }
        }
    }

    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_rooms_fit_and_keep_apart(
        seed in any::<u64>(),
        width in 30i32..100,
        height in 20i32..40
    ) {
        let d = generate(seed, width, height);

        prop_assert!(!d.rooms().is_empty());
        for room in d.rooms() {
            prop_assert!(room.x >= 1 && room.y >= 1);
            prop_assert!(room.x + room.width <= width - 1);
            prop_assert!(room.y + room.height <= height - 1);
            prop_assert!((4..=10).contains(&room.width));
            prop_assert!((4..=10).contains(&room.height));
        }
        for (i, a) in d.rooms().iter().enumerate() {
            for b in &d.rooms()[i + 1..] {
                prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_grid_matches_dimensions(
        seed in any::<u64>(),
        width in 30i32..100,
        height in 20i32..40
    ) {
        let d = generate(seed, width, height);

        prop_assert_eq!(d.width(), width);
        prop_assert_eq!(d.height(), height);
        prop_assert_eq!(d.tiles().count(), (width * height) as usize);

        // The border is never carved
        for x in 0..width {
            prop_assert_eq!(d.tile(Position::new(x, 0)), Tile::Wall);
            prop_assert_eq!(d.tile(Position::new(x, height - 1)), Tile::Wall);
        }
    }

    #[test]
    fn test_one_stairs_in_last_room(seed in any::<u64>()) {
        let d = generate(seed, 80, 24);

        prop_assert_eq!(d.count_tiles(Tile::StairsDown), 1);
        let last = *d.rooms().last().unwrap();
        prop_assert_eq!(d.tile(last.center()), Tile::StairsDown);
    }

    #[test]
    fn test_stairs_reachable_from_start(seed in any::<u64>()) {
        let d = generate(seed, 80, 24);
        let start = d.start_position();
        let seen = reachable(&d, start);

        let (stairs, _) = d.tiles().find(|&(_, t)| t == Tile::StairsDown).unwrap();
        prop_assert!(seen[stairs.x as usize][stairs.y as usize]);
    }

    #[test]
    fn test_population_placement(seed in any::<u64>()) {
        let d = generate(seed, 80, 24);
        let start_room = d.rooms()[0];

        if d.rooms().len() < 2 {
            prop_assert!(d.enemies().is_empty());
        } else {
            prop_assert!((3..=6).contains(&d.enemies().len()));
        }
        for e in d.enemies() {
            prop_assert!(d.is_walkable(e.pos));
            prop_assert!(!start_room.contains(e.pos));
            prop_assert!(e.is_alive());
        }
        for item in d.items() {
            prop_assert!(d.is_walkable(item.pos));
            prop_assert!(!item.collected);
        }
    }
}

#[test]
fn test_same_seed_same_level() {
    let a = generate(1234, 80, 24);
    let b = generate(1234, 80, 24);
    assert_eq!(a.rooms(), b.rooms());
    assert!(a.tiles().eq(b.tiles()));
    assert_eq!(a.enemies(), b.enemies());
}

#[test]
fn test_minimum_grid_generates() {
    let side = GameConfig::MIN_GRID_SIDE;
    for seed in 0..50 {
        let d = generate(seed, side, side);
        assert!(!d.rooms().is_empty());
        assert_eq!(d.count_tiles(Tile::StairsDown), 1);
    }
}
