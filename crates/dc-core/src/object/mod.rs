//! Object system
//!
//! Items lying on the floor and carried in the player's inventory.

mod item;

pub use item::{Item, ItemKind};
