//! Error types
//!
//! None of these are fatal: the driver reports them and keeps going.
//! Player defeat is a game state, not an error (see [`crate::GameLoopResult`]).

use thiserror::Error;

/// Reasons a player command was rejected without consuming a turn
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("You can't move there!")]
    Blocked,

    #[error("Invalid item index {index} (inventory holds {len} items).")]
    InvalidItemIndex { index: usize, len: usize },

    #[error("Invalid item selection: '{0}'.")]
    InvalidItemSelection(String),

    #[error("There are no stairs here.")]
    NoStairsHere,

    #[error("Unknown command '{0}'. Type 'h' or 'help' for instructions.")]
    UnknownCommand(String),

    #[error("That command is not available right now.")]
    NotAvailable,
}

/// Configuration loading and validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("Could not parse config: {0}")]
    Parse(String),

    #[error("Grid {width}x{height} is too small, rooms need at least {min}x{min}")]
    GridTooSmall { width: i32, height: i32, min: i32 },

    #[error("Invalid {name} range: {min}..={max}")]
    InvalidRange { name: &'static str, min: u32, max: u32 },
}
