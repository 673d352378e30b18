//! Dungeon crawler
//!
//! Main entry point: reads one command per line from stdin and prints the
//! resulting screen to stdout. Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use dc_core::action::keybindings::HELP_LINES;
use dc_core::display::{StatusLine, inventory_lines, render_rows};
use dc_core::{GameConfig, GameLoop, GameLoopResult, GamePhase, GameState};

/// Turn-based dungeon crawler
#[derive(Parser, Debug)]
#[command(name = "dungeon-crawl")]
#[command(author, version, about = "Explore the dungeon, one command at a time", long_about = None)]
struct Args {
    /// Seed for the random source (same seed, same game)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Map width in tiles
    #[arg(long = "width")]
    width: Option<i32>,

    /// Map height in tiles
    #[arg(long = "height")]
    height: Option<i32>,

    /// JSON config file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = build_config(&args)?;
    let mut game = GameLoop::new(GameState::new(config));
    info!(seed = game.state().rng.seed(), "starting");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "=== Welcome to Dungeon Crawler ===")?;
    for line in HELP_LINES {
        writeln!(out, "{}", line)?;
    }

    loop {
        draw_screen(&mut out, &game)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input ends the session
            break;
        }

        let result = game.tick_input(&line);

        for msg in game.state_mut().drain_messages() {
            writeln!(out, "{}", msg)?;
        }

        match result {
            GameLoopResult::Continue | GameLoopResult::PlayerDied(_) => {}
            GameLoopResult::PlayerQuit => {
                writeln!(out, "Thanks for playing! Goodbye!")?;
                break;
            }
        }
    }

    Ok(())
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

/// Config file (if any), then command-line overrides
fn build_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }

    config.validate()?;
    Ok(config)
}

fn draw_screen(out: &mut impl Write, game: &GameLoop) -> io::Result<()> {
    let state = game.state();

    match state.phase {
        GamePhase::Playing => {
            writeln!(out)?;
            writeln!(out, "Dungeon Level: {}", state.dungeon.level)?;
            for row in render_rows(&state.dungeon, &state.player) {
                writeln!(out, "{}", row)?;
            }
            writeln!(out, "{}", StatusLine::from(&state.player))?;
            write!(out, "\nEnter command: ")?;
        }
        GamePhase::Inventory => {
            writeln!(out, "\n=== Inventory ===")?;
            for line in inventory_lines(&state.player) {
                writeln!(out, "{}", line)?;
            }
            writeln!(out, "\nEnter item number to use it, or 'b' to go back:")?;
        }
        GamePhase::GameOver => {
            writeln!(out, "\n=== GAME OVER ===")?;
            writeln!(out, "You died on dungeon level {}.", state.dungeon.level)?;
            writeln!(out, "Final score: {} gold collected.", state.player.gold)?;
            writeln!(out, "\nPress 'r' to restart or 'q' to quit:")?;
        }
    }

    Ok(())
}
