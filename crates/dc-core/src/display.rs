//! Text render surface
//!
//! Builds the strings a driver prints; no terminal handling happens here.

use std::fmt;

use crate::consts::PLAYER_SYM;
use crate::dungeon::{Dungeon, Position};
use crate::player::Player;

/// One string per grid row.
///
/// Each cell shows a living enemy if there is one, else the player, else the
/// tile. Floor items are not drawn.
pub fn render_rows(dungeon: &Dungeon, player: &Player) -> Vec<String> {
    let mut grid: Vec<Vec<char>> = (0..dungeon.height())
        .map(|y| {
            (0..dungeon.width())
                .map(|x| dungeon.tile(Position::new(x, y)).symbol())
                .collect()
        })
        .collect();

    let mut put = |pos: Position, sym: char| {
        if dungeon.is_valid_pos(pos) {
            grid[pos.y as usize][pos.x as usize] = sym;
        }
    };

    put(player.pos, PLAYER_SYM);
    for enemy in dungeon.enemies().iter().filter(|e| e.is_alive()) {
        put(enemy.pos, enemy.symbol());
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

/// Player status summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub health: i32,
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
    pub gold: u32,
    pub level: u32,
    pub experience: u32,
    pub exp_to_next: u32,
}

impl From<&Player> for StatusLine {
    fn from(p: &Player) -> Self {
        Self {
            health: p.health,
            max_health: p.max_health,
            attack: p.attack,
            defense: p.defense,
            gold: p.gold,
            level: p.level,
            experience: p.experience,
            exp_to_next: p.exp_to_next_level(),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Health: {}/{} | Attack: {} | Defense: {} | Gold: {} | Level: {} | Exp: {}/{}",
            self.health,
            self.max_health,
            self.attack,
            self.defense,
            self.gold,
            self.level,
            self.experience,
            self.exp_to_next
        )
    }
}

/// Numbered inventory listing
pub fn inventory_lines(player: &Player) -> Vec<String> {
    if player.inventory.is_empty() {
        return vec!["Your inventory is empty.".to_string()];
    }

    player
        .inventory
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {} ({})", i + 1, item.name, item.description))
        .collect()
}
