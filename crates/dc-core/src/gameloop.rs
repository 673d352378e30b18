//! Game loop and turn management
//!
//! A turn is two phases: the player's command resolves completely, then, if
//! it took time, every living enemy gets exactly one move.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::action::inventory::do_use_item;
use crate::action::keybindings::{HELP_LINES, parse_command};
use crate::action::level_change::do_descend;
use crate::action::movement::do_move;
use crate::action::rest::do_rest;
use crate::action::{ActionResult, Command};
use crate::config::GameConfig;
use crate::dungeon::Dungeon;
use crate::error::ActionError;
use crate::monster::move_enemies;
use crate::player::Player;
use crate::rng::GameRng;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Exploring the map
    #[default]
    Playing,
    /// Choosing an item to use
    Inventory,
    /// Dead; waiting for restart or quit
    GameOver,
}

/// Game loop result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player died with message
    PlayerDied(String),
    /// Player quit
    PlayerQuit,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,

    /// Single random source for the whole session
    pub rng: GameRng,

    /// Current level
    pub dungeon: Dungeon,

    pub player: Player,

    pub phase: GamePhase,

    /// Messages since the driver last drained them
    messages: Vec<String>,
}

impl GameState {
    /// Start a new game on a freshly generated first level.
    ///
    /// Uses the configured seed if there is one.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Self {
        let dungeon = Dungeon::generate(&config, 1, &mut rng);
        Self::with_dungeon(config, rng, dungeon)
    }

    /// Start on a prepared level, with the player at its start position
    pub fn with_dungeon(config: GameConfig, rng: GameRng, dungeon: Dungeon) -> Self {
        let player = Player::new(dungeon.start_position());
        info!(seed = rng.seed(), "new game");

        Self {
            config,
            rng,
            dungeon,
            player,
            phase: GamePhase::Playing,
            messages: Vec::new(),
        }
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// Messages waiting to be shown
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Take all pending messages
    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    /// Throw away the current run and start over at level 1.
    ///
    /// The random source carries on rather than being reseeded.
    pub fn restart(&mut self) {
        self.dungeon = Dungeon::generate(&self.config, 1, &mut self.rng);
        self.player = Player::new(self.dungeon.start_position());
        self.phase = GamePhase::Playing;
        info!("game restarted");
    }
}

/// Main game loop controller
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Parse a line of input for the current phase and run it.
    ///
    /// Unparseable input is reported as a message and costs nothing.
    pub fn tick_input(&mut self, input: &str) -> GameLoopResult {
        match parse_command(self.state.phase, input) {
            Ok(command) => self.tick(command),
            Err(err) => {
                self.state.message(err.to_string());
                GameLoopResult::Continue
            }
        }
    }

    /// Run one turn: the player's command, then the enemy phase if the
    /// command took time
    pub fn tick(&mut self, command: Command) -> GameLoopResult {
        debug!(?command, phase = ?self.state.phase, "tick");

        match self.execute_command(command) {
            ActionResult::Success => {}
            ActionResult::NoTime => return GameLoopResult::Continue,
            ActionResult::Failed(err) => {
                self.state.message(err.to_string());
                return GameLoopResult::Continue;
            }
            ActionResult::Died(msg) => {
                self.state.phase = GamePhase::GameOver;
                info!(
                    depth = self.state.dungeon.level,
                    gold = self.state.player.gold,
                    %msg,
                    "player died"
                );
                return GameLoopResult::PlayerDied(msg);
            }
            ActionResult::Quit => return GameLoopResult::PlayerQuit,
        }

        self.enemy_phase();
        GameLoopResult::Continue
    }

    /// Every living enemy moves once
    fn enemy_phase(&mut self) {
        let state = &mut self.state;
        move_enemies(&mut state.dungeon, state.player.pos, &mut state.rng);
    }

    /// Execute a player command
    fn execute_command(&mut self, command: Command) -> ActionResult {
        if command == Command::Quit {
            return ActionResult::Quit;
        }

        match (self.state.phase, command) {
            (GamePhase::Playing, Command::Move(dir)) => do_move(&mut self.state, dir),
            (GamePhase::Playing, Command::Rest) => do_rest(&mut self.state),
            (GamePhase::Playing, Command::Descend) => do_descend(&mut self.state),
            (GamePhase::Playing, Command::Inventory) => {
                self.state.phase = GamePhase::Inventory;
                ActionResult::NoTime
            }
            (GamePhase::Playing, Command::Help) => {
                for line in HELP_LINES {
                    self.state.message(*line);
                }
                ActionResult::NoTime
            }

            (GamePhase::Inventory, Command::UseItem(n)) => do_use_item(&mut self.state, n),
            (GamePhase::Inventory, Command::Back) => {
                self.state.phase = GamePhase::Playing;
                ActionResult::NoTime
            }

            (GamePhase::GameOver, Command::Restart) => {
                self.state.restart();
                ActionResult::NoTime
            }

            _ => ActionResult::Failed(ActionError::NotAvailable),
        }
    }
}
