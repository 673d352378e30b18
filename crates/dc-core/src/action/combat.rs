//! Melee combat
//!
//! The player always strikes first for their full attack. A surviving enemy
//! strikes back at once; enemies never attack during their own phase.

use tracing::debug;

use super::ActionResult;
use crate::consts::ENEMY_GOLD_DROP;
use crate::dungeon::Dungeon;
use crate::gameloop::GameState;
use crate::monster::EnemyId;
use crate::player::Player;
use crate::rng::GameRng;

/// Everything that happened in one exchange of blows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatOutcome {
    pub enemy_name: String,
    /// Damage the player dealt
    pub damage_dealt: i32,
    pub killed: bool,
    pub exp_gained: u32,
    pub levels_gained: u32,
    /// Gold dropped by a slain enemy
    pub gold_found: u32,
    /// Damage taken from the counterattack
    pub damage_taken: i32,
}

/// Experience for killing an enemy that hits this hard
pub const fn kill_experience(enemy_damage: i32) -> u32 {
    let bonus = if enemy_damage > 0 { enemy_damage as u32 * 2 } else { 0 };
    5 + bonus
}

/// Damage an enemy's counterattack does after armor; never less than 1
pub fn counter_damage(enemy_damage: i32, defense: i32) -> i32 {
    (enemy_damage - defense).max(1)
}

/// Resolve the player attacking an enemy.
///
/// A kill awards experience (with any level-ups), removes the enemy and has
/// an even chance of dropping 1-10 gold. Otherwise the enemy hits back.
/// Returns `None` if the enemy is not on this level.
pub fn resolve_attack(
    player: &mut Player,
    dungeon: &mut Dungeon,
    id: EnemyId,
    rng: &mut GameRng,
) -> Option<CombatOutcome> {
    let damage = player.attack;
    let enemy = dungeon.enemy_mut(id)?;
    enemy.health -= damage;

    let mut outcome = CombatOutcome {
        enemy_name: enemy.name(),
        damage_dealt: damage,
        killed: !enemy.is_alive(),
        exp_gained: 0,
        levels_gained: 0,
        gold_found: 0,
        damage_taken: 0,
    };

    if outcome.killed {
        outcome.exp_gained = kill_experience(enemy.damage);
        dungeon.remove_enemy(id);

        outcome.levels_gained = player.gain_experience(outcome.exp_gained);

        if rng.one_in(2) {
            let (lo, hi) = ENEMY_GOLD_DROP;
            outcome.gold_found = rng.range(lo, hi) as u32;
            player.gold = player.gold.saturating_add(outcome.gold_found);
        }
    } else {
        outcome.damage_taken = counter_damage(enemy.damage, player.defense);
        player.take_damage(outcome.damage_taken);
    }

    debug!(
        enemy = %outcome.enemy_name,
        dealt = outcome.damage_dealt,
        killed = outcome.killed,
        taken = outcome.damage_taken,
        "melee"
    );

    Some(outcome)
}

/// Attack an enemy and report the exchange
pub fn do_attack(state: &mut GameState, id: EnemyId) -> ActionResult {
    let Some(outcome) = resolve_attack(&mut state.player, &mut state.dungeon, id, &mut state.rng)
    else {
        return ActionResult::NoTime;
    };

    state.message(format!(
        "You attack the {} for {} damage!",
        outcome.enemy_name, outcome.damage_dealt
    ));

    if outcome.killed {
        state.message(format!("You defeated the {}!", outcome.enemy_name));
        state.message(format!("You gained {} experience points.", outcome.exp_gained));
        if outcome.levels_gained > 0 {
            state.message(format!("Level up! You are now level {}.", state.player.level));
            state.message(format!(
                "Your health increased to {} and your attack increased to {}.",
                state.player.max_health, state.player.attack
            ));
        }
        if outcome.gold_found > 0 {
            state.message(format!("You found {} gold!", outcome.gold_found));
        }
        return ActionResult::Success;
    }

    state.message(format!(
        "The {} attacks you for {} damage!",
        outcome.enemy_name, outcome.damage_taken
    ));

    if state.player.is_dead() {
        state.message("You have been defeated! Game over.");
        return ActionResult::Died(format!("killed by a {}", outcome.enemy_name));
    }

    ActionResult::Success
}
