//! Tilechase entry point.
//!
//! Loads `config.ini` and the map it names, then either opens a raylib
//! window (with the `window` feature) or runs the simulation headless for a
//! fixed number of ticks.
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features window
//! cargo run -- --ticks 120 --hold left,up --snapshot
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{error, info, warn};

use tilechase::game::Game;
use tilechase::resources::gameconfig::{ConfigError, GameConfig};
use tilechase::resources::input::PressedKeys;

/// A key held down for the whole headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HeldKey {
    Left,
    Right,
    Up,
    Down,
    Repel,
}

/// Tile chase: keep away from the enemies.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Map file, overriding the one named in the configuration.
    #[arg(long, value_name = "PATH")]
    map: Option<PathBuf>,

    /// Simulate without a window.
    #[arg(long)]
    headless: bool,

    /// Number of ticks to simulate in headless mode.
    #[arg(long, default_value_t = 300)]
    ticks: u64,

    /// Keys held down every tick in headless mode.
    #[arg(long, value_enum, value_delimiter = ',')]
    hold: Vec<HeldKey>,

    /// Print the final frame as JSON in headless mode.
    #[arg(long)]
    snapshot: bool,

    /// Write the effective configuration back to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn pressed_keys(held: &[HeldKey]) -> PressedKeys {
    PressedKeys {
        left: held.contains(&HeldKey::Left),
        right: held.contains(&HeldKey::Right),
        up: held.contains(&HeldKey::Up),
        down: held.contains(&HeldKey::Down),
        repel: held.contains(&HeldKey::Repel),
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig, ConfigError> {
    let mut config = GameConfig::with_path(&cli.config);
    match config.load_from_file() {
        Ok(()) => {}
        Err(ConfigError::Load(reason)) => {
            warn!("{reason}; using default configuration");
        }
        Err(e) => return Err(e),
    }
    if let Some(map) = &cli.map {
        config.map_path = map.clone();
    }
    Ok(config)
}

fn run_headless(mut game: Game, cli: &Cli) -> Result<(), Box<dyn Error>> {
    let keys = pressed_keys(&cli.hold);
    for _ in 0..cli.ticks {
        if !game.tick(keys) {
            break;
        }
    }
    if game.is_playing() {
        info!("Still playing after {} ticks", game.ticks());
    } else {
        info!("Player caught after {} ticks", game.ticks());
    }
    if cli.snapshot {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(&cli)?;
    if cli.write_config {
        config.save_to_file()?;
        return Ok(());
    }
    let game = Game::from_config(config)?;

    if cfg!(feature = "window") && !cli.headless {
        #[cfg(feature = "window")]
        {
            tilechase::frontend::run(game)?;
            return Ok(());
        }
    }

    run_headless(game, &cli)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
