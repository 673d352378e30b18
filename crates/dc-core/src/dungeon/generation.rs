//! Level generation
//!
//! Builds a level in four passes over a grid of solid wall:
//! rooms, corridors, features, enemies.

use tracing::debug;

use super::corridor::connect_rooms;
use super::features::place_features;
use super::{Dungeon, Room};
use crate::config::{CountRange, GameConfig};
use crate::monster::spawn_enemies;
use crate::rng::GameRng;
use crate::{ROOM_MAX_SIZE, ROOM_MIN_SIZE};

/// Generate a standard level with rooms, corridors, features and enemies
pub fn generate_level(config: &GameConfig, level: u32, rng: &mut GameRng) -> Dungeon {
    let mut dungeon = Dungeon::new(config.width, config.height, level);

    generate_rooms(&mut dungeon, config.room_count, rng);
    connect_rooms(&mut dungeon, rng);
    let features = place_features(&mut dungeon, config.loot_chance, rng);
    let enemies = spawn_enemies(&mut dungeon, config.enemy_count, rng);

    debug!(
        level,
        rooms = dungeon.rooms().len(),
        doors = features.doors,
        treasures = features.treasures,
        traps = features.traps,
        loot = features.loot,
        enemies,
        "generated level"
    );

    dungeon
}

/// Place non-overlapping rooms.
///
/// Makes `count` attempts; a candidate touching any placed room (with a
/// one-tile buffer) is dropped rather than retried. When every attempt fails a
/// room covering the middle of the grid is forced in, so a level always has at
/// least one room.
///
/// The grid must satisfy `width - ROOM_MAX_SIZE - 2 > 0` (and likewise for
/// height); [`GameConfig::validate`] enforces this.
pub fn generate_rooms(dungeon: &mut Dungeon, count: CountRange, rng: &mut GameRng) {
    let attempts = count.roll(rng);
    let size_span = (ROOM_MAX_SIZE - ROOM_MIN_SIZE + 1) as u32;

    for _ in 0..attempts {
        let width = ROOM_MIN_SIZE + rng.rn2(size_span) as i32;
        let height = ROOM_MIN_SIZE + rng.rn2(size_span) as i32;

        // Leave a border of wall
        let x = 1 + rng.rn2((dungeon.width() - width - 2) as u32) as i32;
        let y = 1 + rng.rn2((dungeon.height() - height - 2) as u32) as i32;

        let room = Room::new(x, y, width, height);

        if dungeon.rooms().iter().any(|r| room.overlaps(r)) {
            continue;
        }

        dungeon.add_room(room);
    }

    if dungeon.rooms().is_empty() {
        let (w, h) = (dungeon.width(), dungeon.height());
        dungeon.add_room(Room::new(w / 4, h / 4, w / 2, h / 2));
    }
}
