//! dc-core: Core game logic for the dungeon crawler
//!
//! This crate contains all game logic with no terminal I/O: level generation,
//! enemies, combat, items and the turn loop. A driver feeds it commands
//! through [`GameLoop`] and prints what [`display`] renders.

pub mod action;
pub mod config;
pub mod display;
pub mod dungeon;
pub mod error;
pub mod monster;
pub mod object;
pub mod player;

mod consts;
mod gameloop;
mod rng;

pub use config::{CountRange, GameConfig};
pub use consts::*;
pub use error::{ActionError, ConfigError};
pub use gameloop::{GameLoop, GameLoopResult, GamePhase, GameState};
pub use rng::GameRng;
