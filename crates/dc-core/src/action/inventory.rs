//! Using inventory items

use super::ActionResult;
use crate::error::ActionError;
use crate::gameloop::GameState;
use crate::object::ItemKind;
use crate::player::Player;

/// What using an item did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemUse {
    /// Potion drunk and removed from the pack
    Drank { name: String, heal: i32 },
    /// Weapon wielded; attack is now `attack`
    Wielded { name: String, attack: i32 },
    /// Armor worn; defense is now `defense`
    Wore { name: String, defense: i32 },
    /// Nothing happens for this kind
    Nothing,
}

/// Use the item at a 0-based inventory index.
///
/// Potions heal by their value (capped at max health) and are consumed.
/// Weapons and armor replace attack or defense outright and stay in the pack.
pub fn use_item(player: &mut Player, index: usize) -> Result<ItemUse, ActionError> {
    let len = player.inventory.len();
    let item = player
        .inventory
        .get(index)
        .ok_or(ActionError::InvalidItemIndex {
            index: index + 1,
            len,
        })?;
    let (kind, name, value) = (item.kind, item.name.clone(), item.value);

    let used = match kind {
        ItemKind::Potion => {
            player.heal(value);
            player.inventory.remove(index);
            ItemUse::Drank { name, heal: value }
        }
        ItemKind::Weapon => {
            player.attack = value;
            ItemUse::Wielded {
                name,
                attack: player.attack,
            }
        }
        ItemKind::Armor => {
            player.defense = value;
            ItemUse::Wore {
                name,
                defense: player.defense,
            }
        }
        ItemKind::Gold | ItemKind::Treasure | ItemKind::Key => ItemUse::Nothing,
    };

    Ok(used)
}

/// Use the item at a 1-based index, as typed on the inventory screen
pub fn do_use_item(state: &mut GameState, number: usize) -> ActionResult {
    let Some(index) = number.checked_sub(1) else {
        return ActionResult::Failed(ActionError::InvalidItemSelection(number.to_string()));
    };

    match use_item(&mut state.player, index) {
        Ok(ItemUse::Drank { name, heal }) => {
            state.message(format!("You drink the {} and heal for {} health points.", name, heal));
        }
        Ok(ItemUse::Wielded { name, attack }) => {
            state.message(format!("You equip the {}. Your attack is now {}.", name, attack));
        }
        Ok(ItemUse::Wore { name, defense }) => {
            state.message(format!("You equip the {}. Your defense is now {}.", name, defense));
        }
        Ok(ItemUse::Nothing) => {}
        Err(err) => return ActionResult::Failed(err),
    }

    ActionResult::NoTime
}
