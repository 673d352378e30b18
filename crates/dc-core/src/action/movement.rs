//! Player movement and on-arrival tile effects

use super::combat::do_attack;
use super::pickup::pickup_here;
use super::{ActionResult, Direction};
use crate::consts::{TRAP_DAMAGE, TREASURE_TILE_GOLD};
use crate::dungeon::Tile;
use crate::error::ActionError;
use crate::gameloop::GameState;

/// Move one step, or fight whatever stands in the way.
///
/// The player never advances onto an enemy's cell, even after killing it.
pub fn do_move(state: &mut GameState, dir: Direction) -> ActionResult {
    let (dx, dy) = dir.delta();
    let target = state.player.pos.offset(dx, dy);

    if let Some(id) = state.dungeon.enemy_at(target).map(|e| e.id) {
        return do_attack(state, id);
    }

    if !state.dungeon.is_walkable(target) {
        return ActionResult::Failed(ActionError::Blocked);
    }

    state.player.pos = target;
    arrive(state)
}

/// Apply the effect of the tile under the player, then pick up any item there.
///
/// Treasure, traps and doors are consumed and turn into floor, so stepping on
/// the same cell again does nothing.
pub fn arrive(state: &mut GameState) -> ActionResult {
    let pos = state.player.pos;

    match state.dungeon.tile(pos) {
        Tile::Treasure => {
            let (lo, hi) = TREASURE_TILE_GOLD;
            let amount = state.rng.range(lo, hi) as u32;
            state.player.gold = state.player.gold.saturating_add(amount);
            state.dungeon.set_tile(pos, Tile::Floor);
            state.message(format!(
                "You found some gold! You now have {} gold.",
                state.player.gold
            ));
        }
        Tile::Trap => {
            let (lo, hi) = TRAP_DAMAGE;
            let damage = state.rng.range(lo, hi);
            state.player.take_damage(damage);
            state.dungeon.set_tile(pos, Tile::Floor);
            state.message(format!("You triggered a trap! You take {} damage.", damage));

            if state.player.is_dead() {
                pickup_here(state);
                state.message("You died from a trap! Game over.");
                return ActionResult::Died("killed by a trap".to_string());
            }
        }
        Tile::Door => {
            state.dungeon.set_tile(pos, Tile::Floor);
            state.message("You open the door.");
        }
        Tile::StairsDown => {
            state.message("You found stairs leading down! Press '>' to descend to the next level.");
        }
        Tile::Floor | Tile::Wall => {}
    }

    pickup_here(state);
    ActionResult::Success
}
