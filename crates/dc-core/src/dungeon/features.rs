//! Feature placement: doors, treasure, traps, stairs and loot.
//!
//! Runs after corridors are carved. The order is fixed: doors look for
//! floor pinched between walls, traps only land on plain floor, and stairs
//! may overwrite whatever the earlier passes put at the last room's center.

use super::{Dungeon, Position, Tile};
use crate::consts::*;
use crate::object::Item;
use crate::rng::GameRng;

const LOOT_WEAPONS: [(&str, i32); 4] = [
    ("Dagger", 4),
    ("Short Sword", 5),
    ("Mace", 6),
    ("Long Sword", 7),
];

const LOOT_ARMOR: [(&str, i32); 3] = [("Leather Armor", 2), ("Chain Mail", 3), ("Plate Mail", 4)];

/// How many of each feature ended up on the level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureSummary {
    pub doors: usize,
    pub treasures: usize,
    pub traps: usize,
    pub loot: usize,
}

/// Run every feature pass in order
pub fn place_features(
    dungeon: &mut Dungeon,
    loot_chance: u32,
    rng: &mut GameRng,
) -> FeatureSummary {
    let doors = place_doors(dungeon, rng);
    let treasures = place_treasure(dungeon, rng);
    let traps = place_traps(dungeon, rng);
    place_stairs(dungeon);
    let loot = place_loot(dungeon, loot_chance, rng);

    FeatureSummary {
        doors,
        treasures,
        traps,
        loot,
    }
}

/// Check if a floor cell sits between two walls, vertically or horizontally
pub fn is_pinch_point(dungeon: &Dungeon, pos: Position) -> bool {
    let wall = |dx, dy| dungeon.tile(pos.offset(dx, dy)) == Tile::Wall;
    dungeon.tile(pos) == Tile::Floor && ((wall(0, -1) && wall(0, 1)) || (wall(-1, 0) && wall(1, 0)))
}

/// Turn some pinch points into doors. Border cells are never considered.
pub fn place_doors(dungeon: &mut Dungeon, rng: &mut GameRng) -> usize {
    let mut placed = 0;

    for y in 1..dungeon.height() - 1 {
        for x in 1..dungeon.width() - 1 {
            let pos = Position::new(x, y);
            if is_pinch_point(dungeon, pos) && rng.percent(DOOR_CHANCE) {
                dungeon.set_tile(pos, Tile::Door);
                placed += 1;
            }
        }
    }

    placed
}

/// Give each room a chance at a treasure tile with a matching gold pile
pub fn place_treasure(dungeon: &mut Dungeon, rng: &mut GameRng) -> usize {
    let rooms = dungeon.rooms().to_vec();
    let mut placed = 0;

    for room in rooms {
        if !rng.percent(TREASURE_CHANCE) {
            continue;
        }

        let pos = room.random_position(rng);
        dungeon.set_tile(pos, Tile::Treasure);

        let amount = rng.range(TREASURE_GOLD.0, TREASURE_GOLD.1);
        dungeon.add_item(Item::gold(pos, amount));
        placed += 1;
    }

    placed
}

/// Scatter traps on plain floor anywhere inside the border.
///
/// A trap that finds no floor in [`TRAP_ATTEMPTS`] tries is skipped.
pub fn place_traps(dungeon: &mut Dungeon, rng: &mut GameRng) -> usize {
    let count = rng.range(TRAP_COUNT.0, TRAP_COUNT.1);
    let mut placed = 0;

    for _ in 0..count {
        for _ in 0..TRAP_ATTEMPTS {
            let x = 1 + rng.rn2((dungeon.width() - 2) as u32) as i32;
            let y = 1 + rng.rn2((dungeon.height() - 2) as u32) as i32;
            let pos = Position::new(x, y);

            if dungeon.tile(pos) == Tile::Floor {
                dungeon.set_tile(pos, Tile::Trap);
                placed += 1;
                break;
            }
        }
    }

    placed
}

/// Put the down staircase at the center of the last room
pub fn place_stairs(dungeon: &mut Dungeon) {
    if let Some(room) = dungeon.rooms().last() {
        let pos = room.center();
        dungeon.set_tile(pos, Tile::StairsDown);
    }
}

/// Leave a potion, weapon or armor in some rooms, on free plain floor
pub fn place_loot(dungeon: &mut Dungeon, chance: u32, rng: &mut GameRng) -> usize {
    if chance == 0 {
        return 0;
    }

    let rooms = dungeon.rooms().to_vec();
    let mut placed = 0;

    for room in rooms {
        if !rng.percent(chance) {
            continue;
        }

        let spot = (0..LOOT_ATTEMPTS)
            .map(|_| room.random_position(rng))
            .find(|&p| dungeon.tile(p) == Tile::Floor && dungeon.item_at(p).is_none());

        let Some(pos) = spot else {
            continue;
        };

        let item = match rng.rn2(3) {
            0 => Item::health_potion(pos),
            1 => {
                let (name, attack) = *rng.choose(&LOOT_WEAPONS).unwrap_or(&LOOT_WEAPONS[0]);
                Item::weapon(pos, name, attack)
            }
            _ => {
                let (name, defense) = *rng.choose(&LOOT_ARMOR).unwrap_or(&LOOT_ARMOR[0]);
                Item::armor(pos, name, defense)
            }
        };

        dungeon.add_item(item);
        placed += 1;
    }

    placed
}
