//! Resting

use super::ActionResult;
use crate::consts::REST_HEAL;
use crate::gameloop::GameState;
use crate::monster::spawn_near;

/// Rest for a turn.
///
/// One time in three a wandering monster turns up next to the player instead:
/// no healing happens and the enemy phase is skipped, the arrival being the
/// enemies' move. Otherwise heal 2-4 and let the enemies act as usual.
pub fn do_rest(state: &mut GameState) -> ActionResult {
    if state.rng.one_in(3) {
        state.message("Your rest is interrupted by a wandering monster!");
        let player = state.player.pos;
        if let Some(id) = spawn_near(&mut state.dungeon, player, &mut state.rng) {
            let name = state.dungeon.enemy(id).map(|e| e.name()).unwrap_or_default();
            state.message(format!("A {} appears!", name));
        }
        return ActionResult::NoTime;
    }

    let (lo, hi) = REST_HEAL;
    let amount = state.rng.range(lo, hi);
    state.player.heal(amount);
    state.message(format!("You rest and recover {} health points.", amount));

    ActionResult::Success
}
