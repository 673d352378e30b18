//! Command vocabulary
//!
//! Maps the words typed at the prompt to [`Command`]s. What is accepted
//! depends on which screen the game is showing.

use super::{Command, Direction};
use crate::error::ActionError;
use crate::gameloop::GamePhase;

/// Help screen lines
pub const HELP_LINES: &[&str] = &[
    "=== Instructions ===",
    "Movement: w/up, a/left, s/down, d/right",
    "Actions:",
    "  i - Open inventory",
    "  > - Descend stairs (when standing on them)",
    "  r - Rest to recover health",
    "  h - Show this help",
    "  q - Quit game",
    "",
    "Symbols:",
    "  @ - Player",
    "  . - Floor",
    "  # - Wall",
    "  + - Door",
    "  $ - Treasure",
    "  ^ - Trap",
    "  > - Stairs down",
    "  g/o/T/r/s - Enemies (goblin, orc, troll, rat, skeleton)",
    "",
    "Combat: Move into enemies to attack them",
];

/// Parse one line of input for the given phase.
///
/// Tokens are matched exactly after trimming surrounding whitespace.
pub fn parse_command(phase: GamePhase, input: &str) -> Result<Command, ActionError> {
    let input = input.trim();

    match phase {
        GamePhase::Playing => parse_playing(input),
        GamePhase::Inventory => parse_inventory(input),
        GamePhase::GameOver => parse_game_over(input),
    }
}

fn parse_playing(input: &str) -> Result<Command, ActionError> {
    let cmd = match input {
        "w" | "up" => Command::Move(Direction::North),
        "s" | "down" => Command::Move(Direction::South),
        "a" | "left" => Command::Move(Direction::West),
        "d" | "right" => Command::Move(Direction::East),
        "i" | "inventory" => Command::Inventory,
        ">" => Command::Descend,
        "h" | "help" => Command::Help,
        "r" | "rest" => Command::Rest,
        "q" | "quit" => Command::Quit,
        other => return Err(ActionError::UnknownCommand(other.to_string())),
    };
    Ok(cmd)
}

fn parse_inventory(input: &str) -> Result<Command, ActionError> {
    match input {
        "b" | "back" => Ok(Command::Back),
        "q" | "quit" => Ok(Command::Quit),
        other => match other.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Command::UseItem(n)),
            _ => Err(ActionError::InvalidItemSelection(other.to_string())),
        },
    }
}

fn parse_game_over(input: &str) -> Result<Command, ActionError> {
    match input {
        "r" | "restart" => Ok(Command::Restart),
        "q" | "quit" => Ok(Command::Quit),
        _ => Err(ActionError::NotAvailable),
    }
}
