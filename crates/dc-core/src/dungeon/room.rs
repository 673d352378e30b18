//! Rooms
//!
//! A room is a top-left anchored rectangle of floor carved out of solid wall.
//! Rooms are immutable once placed.

use serde::{Deserialize, Serialize};

use super::Position;
use crate::rng::GameRng;

/// Rectangle representing a room interior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// X coordinate of room interior (left edge)
    pub x: i32,
    /// Y coordinate of room interior (top edge)
    pub y: i32,
    /// Width of room interior
    pub width: i32,
    /// Height of room interior
    pub height: i32,
}

impl Room {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center cell (rounded toward the top-left)
    pub const fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if a position lies inside the room
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x
            && pos.x < self.x + self.width
            && pos.y >= self.y
            && pos.y < self.y + self.height
    }

    /// Check if this room, padded by one tile, touches another room.
    ///
    /// The padded edges are inclusive, so rooms separated by a single wall
    /// column still count as overlapping.
    pub const fn overlaps(&self, other: &Room) -> bool {
        self.x - 1 <= other.x + other.width
            && self.x + self.width + 1 >= other.x
            && self.y - 1 <= other.y + other.height
            && self.y + self.height + 1 >= other.y
    }

    /// Uniformly random interior position
    pub fn random_position(&self, rng: &mut GameRng) -> Position {
        let x = self.x + rng.rn2(self.width as u32) as i32;
        let y = self.y + rng.rn2(self.height as u32) as i32;
        Position::new(x, y)
    }

    /// Iterate over every interior position, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let Room {
            x,
            y,
            width,
            height,
        } = *self;
        (y..y + height).flat_map(move |py| (x..x + width).map(move |px| Position::new(px, py)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        assert_eq!(Room::new(2, 3, 5, 4).center(), Position::new(4, 5));
    }

    #[test]
    fn test_contains() {
        let room = Room::new(2, 2, 3, 3);
        assert!(room.contains(Position::new(2, 2)));
        assert!(room.contains(Position::new(4, 4)));
        assert!(!room.contains(Position::new(5, 4)));
        assert!(!room.contains(Position::new(1, 2)));
    }

    #[test]
    fn test_overlap_with_buffer() {
        let a = Room::new(1, 1, 4, 4);
        // Interior overlap
        assert!(a.overlaps(&Room::new(3, 3, 4, 4)));
        // Separated by a single column: still within the padded box
        assert!(a.overlaps(&Room::new(6, 1, 4, 4)));
        // Far apart
        assert!(!a.overlaps(&Room::new(8, 1, 4, 4)));
        assert!(!a.overlaps(&Room::new(1, 8, 4, 4)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Room::new(10, 5, 6, 4);
        let b = Room::new(17, 9, 4, 4);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn test_random_position_inside() {
        let mut rng = GameRng::new(42);
        let room = Room::new(5, 6, 4, 7);
        for _ in 0..200 {
            assert!(room.contains(room.random_position(&mut rng)));
        }
    }

    #[test]
    fn test_positions_cover_interior() {
        let room = Room::new(1, 1, 3, 2);
        let cells: Vec<_> = room.positions().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Position::new(1, 1));
        assert_eq!(cells[5], Position::new(3, 2));
    }
}
