//! Map tile kinds

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::consts::*;

/// Terrain kind stored in each grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter)]
#[repr(u8)]
pub enum Tile {
    Floor = 0,
    #[default]
    Wall = 1,
    Door = 2,
    Treasure = 3,
    Trap = 4,
    StairsDown = 5,
}

impl Tile {
    /// Check if this is passable (can walk through)
    pub const fn is_walkable(&self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Floor => FLOOR_SYM,
            Tile::Wall => WALL_SYM,
            Tile::Door => DOOR_SYM,
            Tile::Treasure => TREASURE_SYM,
            Tile::Trap => TRAP_SYM,
            Tile::StairsDown => STAIRS_DOWN_SYM,
        }
    }

    /// Inverse of [`Tile::symbol`]
    pub const fn from_symbol(c: char) -> Option<Tile> {
        match c {
            FLOOR_SYM => Some(Tile::Floor),
            WALL_SYM => Some(Tile::Wall),
            DOOR_SYM => Some(Tile::Door),
            TREASURE_SYM => Some(Tile::Treasure),
            TRAP_SYM => Some(Tile::Trap),
            STAIRS_DOWN_SYM => Some(Tile::StairsDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_symbols_round_trip() {
        for tile in Tile::iter() {
            assert_eq!(Tile::from_symbol(tile.symbol()), Some(tile));
        }
        assert_eq!(Tile::from_symbol('?'), None);
    }

    #[test]
    fn test_only_wall_blocks() {
        let blocking: Vec<_> = Tile::iter().filter(|t| !t.is_walkable()).collect();
        assert_eq!(blocking, vec![Tile::Wall]);
    }
}
