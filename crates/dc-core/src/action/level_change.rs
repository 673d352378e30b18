//! Level transitions

use tracing::info;

use super::ActionResult;
use crate::dungeon::{Dungeon, Tile};
use crate::error::ActionError;
use crate::gameloop::GameState;

/// Go down the stairs the player is standing on.
///
/// The next level is generated from scratch at the configured size and the
/// player is moved to the centre of its first room. Everything the player
/// carries comes along.
pub fn do_descend(state: &mut GameState) -> ActionResult {
    if state.dungeon.tile(state.player.pos) != Tile::StairsDown {
        return ActionResult::Failed(ActionError::NoStairsHere);
    }

    let depth = state.dungeon.level + 1;
    state.dungeon = Dungeon::generate(&state.config, depth, &mut state.rng);
    state.player.pos = state.dungeon.start_position();

    info!(depth, rooms = state.dungeon.rooms().len(), "descended");
    state.message(format!("You descend to dungeon level {}...", depth));

    ActionResult::NoTime
}
