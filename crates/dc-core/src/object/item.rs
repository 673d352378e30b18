//! Item instances

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::*;
use crate::dungeon::Position;

/// Item kind; decides what `value` means
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum ItemKind {
    /// `value` is an amount of gold
    #[default]
    Gold = 0,
    /// `value` is health restored
    Potion = 1,
    /// `value` is the attack it grants when equipped
    Weapon = 2,
    /// `value` is the defense it grants when equipped
    Armor = 3,
    /// `value` is an amount of gold
    Treasure = 4,
    /// Unlocks nothing yet
    Key = 5,
}

impl ItemKind {
    /// Gold-like items go straight into the purse instead of the pack
    pub const fn is_currency(&self) -> bool {
        matches!(self, ItemKind::Gold | ItemKind::Treasure)
    }

    /// Kinds kept in the inventory when picked up
    pub const fn is_carried(&self) -> bool {
        matches!(self, ItemKind::Potion | ItemKind::Weapon | ItemKind::Armor)
    }
}

/// Item instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Position (when on the floor)
    pub pos: Position,
    pub kind: ItemKind,
    pub name: String,
    pub description: String,
    pub value: i32,
    /// Map symbol
    pub symbol: char,
    /// Picked up already; never returned by floor queries again
    pub collected: bool,
}

impl Item {
    fn new(
        pos: Position,
        kind: ItemKind,
        name: &str,
        description: String,
        value: i32,
        symbol: char,
    ) -> Self {
        Self {
            pos,
            kind,
            name: name.to_string(),
            description,
            value,
            symbol,
            collected: false,
        }
    }

    /// A pile of gold
    pub fn gold(pos: Position, amount: i32) -> Self {
        Self::new(
            pos,
            ItemKind::Gold,
            "Gold",
            format!("Worth {} gold", amount),
            amount,
            GOLD_SYM,
        )
    }

    /// Standard health potion
    pub fn health_potion(pos: Position) -> Self {
        Self::new(
            pos,
            ItemKind::Potion,
            "Health Potion",
            format!("Restores {} health points", POTION_HEAL),
            POTION_HEAL,
            POTION_SYM,
        )
    }

    pub fn weapon(pos: Position, name: &str, attack: i32) -> Self {
        Self::new(
            pos,
            ItemKind::Weapon,
            name,
            format!("Increases attack by {}", attack),
            attack,
            WEAPON_SYM,
        )
    }

    pub fn armor(pos: Position, name: &str, defense: i32) -> Self {
        Self::new(
            pos,
            ItemKind::Armor,
            name,
            format!("Increases defense by {}", defense),
            defense,
            ARMOR_SYM,
        )
    }

    pub fn key(pos: Position) -> Self {
        Self::new(
            pos,
            ItemKind::Key,
            "Key",
            "Can unlock doors".to_string(),
            1,
            KEY_SYM,
        )
    }
}
