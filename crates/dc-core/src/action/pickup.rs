//! Picking up floor items

use crate::gameloop::GameState;
use crate::object::Item;
use crate::player::Player;

/// Where a picked-up item went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pickup {
    /// Added to the purse; carries the new total
    Gold { amount: u32, total: u32 },
    /// Appended to the inventory
    Carried(String),
    /// Taken off the floor but not kept
    Discarded(String),
}

/// Hand an item to the player
pub fn collect_item(player: &mut Player, item: Item) -> Pickup {
    match item.kind {
        kind if kind.is_currency() => {
            let amount = u32::try_from(item.value).unwrap_or(0);
            player.gold = player.gold.saturating_add(amount);
            Pickup::Gold {
                amount,
                total: player.gold,
            }
        }
        kind if kind.is_carried() => {
            let name = item.name.clone();
            player.inventory.push(item);
            Pickup::Carried(name)
        }
        _ => Pickup::Discarded(item.name),
    }
}

/// Collect the first uncollected item under the player, if any
pub fn pickup_here(state: &mut GameState) -> Option<Pickup> {
    let item = state.dungeon.collect_item_at(state.player.pos)?;
    let pickup = collect_item(&mut state.player, item);

    match &pickup {
        Pickup::Gold { amount, total } => {
            state.message(format!("You collected {} gold! You now have {} gold.", amount, total));
        }
        Pickup::Carried(name) => state.message(format!("You picked up a {}.", name)),
        Pickup::Discarded(_) => {}
    }

    Some(pickup)
}
