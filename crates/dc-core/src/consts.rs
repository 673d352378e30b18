//! Core game constants

/// Default map dimensions
pub const DEFAULT_WIDTH: i32 = 80;
pub const DEFAULT_HEIGHT: i32 = 24;

/// Room size limits (inclusive)
pub const ROOM_MIN_SIZE: i32 = 4;
pub const ROOM_MAX_SIZE: i32 = 10;

/// Percent chance for a pinch-point floor cell to become a door
pub const DOOR_CHANCE: u32 = 10;
/// Percent chance for a room to hold treasure
pub const TREASURE_CHANCE: u32 = 40;
/// Gold value of a treasure pile (inclusive)
pub const TREASURE_GOLD: (i32, i32) = (10, 99);
/// Traps per level (inclusive)
pub const TRAP_COUNT: (i32, i32) = (2, 5);
/// Placement attempts per trap before giving up
pub const TRAP_ATTEMPTS: u32 = 50;
/// Placement attempts per loot item
pub const LOOT_ATTEMPTS: u32 = 10;

/// Enemies pursue the player within this Manhattan distance
pub const PURSUIT_RANGE: i32 = 5;

/// Player starting stats
pub const PLAYER_START_HEALTH: i32 = 20;
pub const PLAYER_START_ATTACK: i32 = 3;
pub const PLAYER_START_DEFENSE: i32 = 1;

/// Experience needed per player level
pub const EXP_PER_LEVEL: u32 = 100;
/// Max health gained per level
pub const LEVEL_UP_HEALTH: i32 = 5;

/// Gold picked up from a treasure tile (inclusive)
pub const TREASURE_TILE_GOLD: (i32, i32) = (10, 29);
/// Damage dealt by a trap (inclusive)
pub const TRAP_DAMAGE: (i32, i32) = (2, 4);
/// Gold dropped by a slain enemy (inclusive), awarded half the time
pub const ENEMY_GOLD_DROP: (i32, i32) = (1, 10);
/// Health recovered by an undisturbed rest (inclusive)
pub const REST_HEAL: (i32, i32) = (2, 4);

/// Healing of a standard health potion
pub const POTION_HEAL: i32 = 10;

/// Map symbols
pub const PLAYER_SYM: char = '@';
pub const FLOOR_SYM: char = '.';
pub const WALL_SYM: char = '#';
pub const DOOR_SYM: char = '+';
pub const TREASURE_SYM: char = '$';
pub const TRAP_SYM: char = '^';
pub const STAIRS_DOWN_SYM: char = '>';

/// Item symbols
pub const GOLD_SYM: char = '$';
pub const POTION_SYM: char = '!';
pub const WEAPON_SYM: char = '/';
pub const ARMOR_SYM: char = '[';
pub const KEY_SYM: char = 'k';
