//! Corridor generation
//!
//! Each room is joined to the next one in placement order by an L-shaped
//! corridor between their centers. Corridors carve straight through whatever
//! they cross; crossing existing floor is harmless.

use super::{Dungeon, Position, Tile};
use crate::rng::GameRng;

/// Connect room[i] to room[i + 1] for every consecutive pair
pub fn connect_rooms(dungeon: &mut Dungeon, rng: &mut GameRng) {
    if dungeon.rooms().len() <= 1 {
        return;
    }

    let centers: Vec<Position> = dungeon.rooms().iter().map(|r| r.center()).collect();

    for pair in centers.windows(2) {
        let (from, to) = (pair[0], pair[1]);

        if rng.one_in(2) {
            // Horizontal then vertical
            carve_horizontal(dungeon, from.x, to.x, from.y);
            carve_vertical(dungeon, from.y, to.y, to.x);
        } else {
            // Vertical then horizontal
            carve_vertical(dungeon, from.y, to.y, from.x);
            carve_horizontal(dungeon, from.x, to.x, to.y);
        }
    }
}

/// Carve floor along row `y` from `x1` to `x2` inclusive, clipped to the grid
pub fn carve_horizontal(dungeon: &mut Dungeon, x1: i32, x2: i32, y: i32) {
    let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
    for x in lo..=hi {
        dungeon.set_tile(Position::new(x, y), Tile::Floor);
    }
}

/// Carve floor along column `x` from `y1` to `y2` inclusive, clipped to the grid
pub fn carve_vertical(dungeon: &mut Dungeon, y1: i32, y2: i32, x: i32) {
    let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
    for y in lo..=hi {
        dungeon.set_tile(Position::new(x, y), Tile::Floor);
    }
}
