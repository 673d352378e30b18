//! Player character

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::*;
use crate::dungeon::Position;
use crate::object::Item;

/// The player character.
///
/// Survives level transitions (only `pos` changes); replaced wholesale when
/// the game restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,

    /// Current health, never above `max_health`
    pub health: i32,
    pub max_health: i32,

    pub attack: i32,
    pub defense: i32,

    pub gold: u32,

    /// Experience level, starting at 1
    pub level: u32,
    /// Experience toward the next level
    pub experience: u32,

    /// Carried items, in pickup order
    pub inventory: Vec<Item>,
}

impl Player {
    /// Fresh character with starting stats
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            health: PLAYER_START_HEALTH,
            max_health: PLAYER_START_HEALTH,
            attack: PLAYER_START_ATTACK,
            defense: PLAYER_START_DEFENSE,
            gold: 0,
            level: 1,
            experience: 0,
            inventory: Vec::new(),
        }
    }

    /// Experience needed to leave the current level
    pub const fn exp_to_next_level(&self) -> u32 {
        EXP_PER_LEVEL * self.level
    }

    /// Check if player is dead
    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Heal up to max health; returns the amount actually restored
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.health - before
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Add experience and apply any level-ups it pays for.
    ///
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, exp: u32) -> u32 {
        self.experience = self.experience.saturating_add(exp);
        self.check_level_up()
    }

    /// Level up while experience covers the current threshold.
    ///
    /// Each level costs `100 * level` experience, grants +5 max health, a full
    /// heal and +1 attack. Leftover experience carries over, so one large
    /// award can cascade through several levels.
    pub fn check_level_up(&mut self) -> u32 {
        let mut gained = 0;

        while self.experience >= self.exp_to_next_level() {
            self.experience -= self.exp_to_next_level();
            self.level += 1;
            self.max_health += LEVEL_UP_HEALTH;
            self.health = self.max_health;
            self.attack += 1;
            gained += 1;

            debug!(
                level = self.level,
                max_health = self.max_health,
                attack = self.attack,
                "level up"
            );
        }

        gained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_stats() {
        let p = Player::new(Position::new(4, 5));
        assert_eq!(p.health, 20);
        assert_eq!(p.max_health, 20);
        assert_eq!(p.attack, 3);
        assert_eq!(p.defense, 1);
        assert_eq!(p.level, 1);
        assert_eq!(p.exp_to_next_level(), 100);
        assert!(p.inventory.is_empty());
    }

    #[test]
    fn test_heal_clamps() {
        let mut p = Player::new(Position::default());
        p.health = 15;
        assert_eq!(p.heal(10), 5);
        assert_eq!(p.health, 20);
        assert_eq!(p.heal(3), 0);
    }

    #[test]
    fn test_single_level_up() {
        let mut p = Player::new(Position::default());
        p.health = 4;
        assert_eq!(p.gain_experience(120), 1);
        assert_eq!(p.level, 2);
        assert_eq!(p.experience, 20);
        assert_eq!(p.max_health, 25);
        assert_eq!(p.health, 25);
        assert_eq!(p.attack, 4);
    }

    #[test]
    fn test_cascade_subtracts_sequential_thresholds() {
        // 250 pays for level 2 (100) but not level 3 (200 more)
        let mut p = Player::new(Position::default());
        assert_eq!(p.gain_experience(250), 1);
        assert_eq!((p.level, p.experience), (2, 150));

        // 300 pays for both
        let mut p = Player::new(Position::default());
        assert_eq!(p.gain_experience(300), 2);
        assert_eq!((p.level, p.experience), (3, 0));
        assert_eq!(p.max_health, 30);
        assert_eq!(p.attack, 5);

        let mut p = Player::new(Position::default());
        p.gain_experience(350);
        assert_eq!((p.level, p.experience), (3, 50));
    }

    #[test]
    fn test_below_threshold_no_change() {
        let mut p = Player::new(Position::default());
        assert_eq!(p.gain_experience(99), 0);
        assert_eq!(p.level, 1);
        assert_eq!(p.experience, 99);
    }
}
