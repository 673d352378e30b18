//! Dungeon level structure
//!
//! Owns the tile grid, the rooms it was carved from, the enemies roaming it and
//! the items lying on it. Tiles and items are separate layers: consuming a
//! tile never touches an item at the same cell and vice versa.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{Position, Room, Tile};
use crate::config::GameConfig;
use crate::monster::{Enemy, EnemyId, EnemyKind};
use crate::object::Item;
use crate::rng::GameRng;

/// Serde helper for `HashMap<Position, Vec<Item>>`: JSON requires string
/// keys, so the item layer is stored as a flat list and re-keyed on load.
mod item_layer_serde {
    use super::*;

    pub fn serialize<S>(
        map: &HashMap<Position, Vec<Item>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let flat: Vec<&Item> = map.values().flatten().collect();
        flat.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<Position, Vec<Item>>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let flat = Vec::<Item>::deserialize(deserializer)?;
        let mut map: HashMap<Position, Vec<Item>> = HashMap::new();
        for item in flat {
            map.entry(item.pos).or_default().push(item);
        }
        Ok(map)
    }
}

/// One generated dungeon level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dungeon {
    width: i32,
    height: i32,

    /// Map cells, indexed `[x][y]`
    pub(crate) cells: Vec<Vec<Tile>>,

    /// Rooms in placement order; room 0 is the player's start room
    pub(crate) rooms: Vec<Room>,

    /// Living enemies
    pub(crate) enemies: Vec<Enemy>,

    /// Items on the floor, keyed by cell
    #[serde(with = "item_layer_serde")]
    pub(crate) items: HashMap<Position, Vec<Item>>,

    /// Depth, starting at 1
    pub level: u32,

    /// Next enemy ID to assign
    next_enemy_id: u32,
}

impl Dungeon {
    /// Create a level of solid wall
    pub fn new(width: i32, height: i32, level: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Tile::Wall; height.max(0) as usize]; width.max(0) as usize],
            rooms: Vec::new(),
            enemies: Vec::new(),
            items: HashMap::new(),
            level,
            next_enemy_id: 1,
        }
    }

    /// Generate a complete level: rooms, corridors, features and enemies
    pub fn generate(config: &GameConfig, level: u32, rng: &mut GameRng) -> Self {
        super::generation::generate_level(config, level, rng)
    }

    /// Build a level from a hand-drawn map using the tile symbols
    /// (`#`, `.`, `+`, `$`, `^`, `>`). Unknown characters become floor.
    ///
    /// Rows shorter than the widest one are padded with wall. The level has no
    /// rooms; add them with [`Dungeon::add_room`] when a test needs one.
    pub fn from_ascii(level: u32, rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut dungeon = Self::new(width, height, level);

        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let tile = Tile::from_symbol(c).unwrap_or(Tile::Floor);
                dungeon.cells[x][y] = tile;
            }
        }

        dungeon
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if a position lies inside the grid
    pub fn is_valid_pos(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Tile at a position; out of bounds reads as wall
    pub fn tile(&self, pos: Position) -> Tile {
        if self.is_valid_pos(pos) {
            self.cells[pos.x as usize][pos.y as usize]
        } else {
            Tile::Wall
        }
    }

    /// Overwrite a tile; out-of-bounds writes are ignored
    pub fn set_tile(&mut self, pos: Position, tile: Tile) {
        if self.is_valid_pos(pos) {
            self.cells[pos.x as usize][pos.y as usize] = tile;
        }
    }

    /// Check whether a position is in bounds and not a wall
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.is_valid_pos(pos) && self.tile(pos).is_walkable()
    }

    /// Iterate over every cell with its tile, column by column
    pub fn tiles(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, &tile)| (Position::new(x as i32, y as i32), tile))
        })
    }

    /// Count cells holding a given tile kind
    pub fn count_tiles(&self, kind: Tile) -> usize {
        self.tiles().filter(|&(_, t)| t == kind).count()
    }

    // ------------------------------------------------------------------
    // Rooms
    // ------------------------------------------------------------------

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Append a room and carve its interior to floor
    pub fn add_room(&mut self, room: Room) {
        for pos in room.positions() {
            self.set_tile(pos, Tile::Floor);
        }
        self.rooms.push(room);
    }

    /// Where the player enters this level: the center of the first room
    pub fn start_position(&self) -> Position {
        self.rooms
            .first()
            .map(Room::center)
            .unwrap_or(Position::new(1, 1))
    }

    // ------------------------------------------------------------------
    // Enemies
    // ------------------------------------------------------------------

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    /// Living enemy standing at a position
    pub fn enemy_at(&self, pos: Position) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.pos == pos && e.is_alive())
    }

    /// Create an enemy of the given kind and return its ID
    pub fn add_enemy(&mut self, kind: EnemyKind, pos: Position) -> EnemyId {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;
        self.enemies.push(Enemy::new(id, kind, pos));
        id
    }

    /// Remove an enemy by ID
    pub fn remove_enemy(&mut self, id: EnemyId) -> Option<Enemy> {
        let idx = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(idx))
    }

    /// Relocate an enemy without any checks
    pub fn move_enemy(&mut self, id: EnemyId, pos: Position) {
        if let Some(enemy) = self.enemy_mut(id) {
            enemy.pos = pos;
        }
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    /// Place an item on the floor at its own position
    pub fn add_item(&mut self, item: Item) {
        self.items.entry(item.pos).or_default().push(item);
    }

    /// First uncollected item at a position
    pub fn item_at(&self, pos: Position) -> Option<&Item> {
        self.items
            .get(&pos)
            .and_then(|stack| stack.iter().find(|i| !i.collected))
    }

    /// Flag the first uncollected item at a position as collected and return
    /// a copy of it
    pub fn collect_item_at(&mut self, pos: Position) -> Option<Item> {
        let item = self
            .items
            .get_mut(&pos)
            .and_then(|stack| stack.iter_mut().find(|i| !i.collected))?;
        item.collected = true;
        Some(item.clone())
    }

    /// Iterate over every item on the level, collected or not
    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ItemKind;

    fn corridor() -> Dungeon {
        Dungeon::from_ascii(1, &["#####", "#.$^#", "#####"])
    }

    #[test]
    fn test_from_ascii_dimensions() {
        let d = corridor();
        assert_eq!(d.width(), 5);
        assert_eq!(d.height(), 3);
        assert_eq!(d.tile(Position::new(2, 1)), Tile::Treasure);
        assert_eq!(d.tile(Position::new(3, 1)), Tile::Trap);
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let d = corridor();
        assert_eq!(d.tile(Position::new(-1, 0)), Tile::Wall);
        assert_eq!(d.tile(Position::new(5, 1)), Tile::Wall);
        assert!(!d.is_walkable(Position::new(0, 5)));
        assert!(d.is_walkable(Position::new(1, 1)));
    }

    #[test]
    fn test_add_room_carves_floor() {
        let mut d = Dungeon::new(20, 20, 1);
        d.add_room(Room::new(2, 3, 4, 5));
        assert_eq!(d.count_tiles(Tile::Floor), 20);
        assert_eq!(d.start_position(), Position::new(4, 5));
    }

    #[test]
    fn test_enemy_ids_are_unique() {
        let mut d = corridor();
        let a = d.add_enemy(EnemyKind::Rat, Position::new(1, 1));
        let b = d.add_enemy(EnemyKind::Rat, Position::new(1, 1));
        assert_ne!(a, b);
        d.remove_enemy(a);
        assert!(d.enemy(a).is_none());
        assert_eq!(d.enemy_at(Position::new(1, 1)).map(|e| e.id), Some(b));
    }

    #[test]
    fn test_collect_item_once() {
        let mut d = corridor();
        let pos = Position::new(2, 1);
        d.add_item(Item::gold(pos, 15));
        assert_eq!(d.item_at(pos).map(|i| i.kind), Some(ItemKind::Gold));

        let item = d.collect_item_at(pos).unwrap();
        assert_eq!(item.value, 15);
        assert!(d.item_at(pos).is_none());
        assert!(d.collect_item_at(pos).is_none());
        // Still on record, just flagged
        assert_eq!(d.items().count(), 1);
    }

    #[test]
    fn test_serde_round_trip_keeps_items() {
        let mut d = corridor();
        d.add_item(Item::health_potion(Position::new(1, 1)));
        let json = serde_json::to_string(&d).unwrap();
        let restored: Dungeon = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.tile(Position::new(3, 1)), Tile::Trap);
        assert!(restored.item_at(Position::new(1, 1)).is_some());
    }
}
