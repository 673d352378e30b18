//! Player action system
//!
//! Each action takes the whole [`GameState`](crate::GameState), resolves the
//! player's half of a turn and reports whether time passed. The enemy half is
//! run by [`GameLoop::tick`](crate::GameLoop::tick).

pub mod combat;
pub mod inventory;
pub mod keybindings;
pub mod level_change;
pub mod movement;
pub mod pickup;
pub mod rest;

use crate::error::ActionError;

/// Player command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Rest,
    /// Take the stairs down
    Descend,

    /// Open the inventory screen
    Inventory,
    /// Use the inventory item at this 1-based index
    UseItem(usize),
    /// Leave the inventory screen
    Back,

    Help,
    Restart,
    Quit,
}

/// Movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Action completed, time passes and the enemies act
    Success,
    /// Action completed but no time passes
    NoTime,
    /// Action was rejected; nothing changed
    Failed(ActionError),
    /// Player died
    Died(String),
    /// Player asked to leave
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas_are_unit_steps() {
        for dir in [Direction::North, Direction::South, Direction::East, Direction::West] {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{:?}", dir);
        }
        assert_eq!(Direction::North.delta(), (0, -1));
    }
}
