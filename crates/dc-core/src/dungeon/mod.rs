//! Dungeon system
//!
//! Contains the tile grid, rooms, and the generator that fills a level.

mod corridor;
mod features;
mod generation;
mod level;
mod position;
mod room;
mod tile;

pub use corridor::{carve_horizontal, carve_vertical, connect_rooms};
pub use features::{
    is_pinch_point, place_doors, place_features, place_loot, place_stairs, place_traps,
    place_treasure, FeatureSummary,
};
pub use generation::{generate_level, generate_rooms};
pub use level::Dungeon;
pub use position::Position;
pub use room::Room;
pub use tile::Tile;
