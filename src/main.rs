use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sushi_belt::cli::{Cli, Command};
use sushi_belt::error::Result;
use sushi_belt::game::{load_config, save_config, GameConfig, SushiGame};
use sushi_belt::interface::{chef_line, display_menu, display_scoreboard, write_history_csv};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sushi_belt=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Simulate {
            rotations,
            belt_size,
            customers,
            opponents,
            seed,
            progress,
            history_csv,
        } => {
            let mut config = read_config(&cli.config)?;
            if let Some(size) = belt_size {
                config.resize_belt(size);
            }
            config.customers = customers.unwrap_or(config.customers);
            config.opponents = opponents.unwrap_or(config.opponents);
            config.seed = seed.or(config.seed);
            cmd_simulate(&config, rotations, progress, history_csv)
        }
        Command::Menu => {
            display_menu();
            Ok(())
        }
        Command::InitConfig => cmd_init_config(&cli.config),
    }
}

/// Load the config file if present, otherwise fall back to defaults.
fn read_config(path: &Path) -> Result<GameConfig> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(GameConfig::default())
    }
}

/// Run the belt for a number of rotations.
fn cmd_simulate(
    config: &GameConfig,
    rotations: u64,
    progress: u64,
    history_csv: Option<PathBuf>,
) -> Result<()> {
    let mut game = SushiGame::from_config(config)?;

    println!(
        "Belt of {} slots, {} customers, {} opponents",
        config.belt_size, config.customers, config.opponents
    );

    for i in 1..=rotations {
        game.rotate();
        if progress > 0 && i % progress == 0 {
            let line: Vec<String> = game.chefs().map(chef_line).collect();
            println!("[{}/{}] {}", i, rotations, line.join(" | "));
        }
    }

    display_scoreboard(&game);

    if let Some(path) = history_csv {
        let rows = write_history_csv(&game, &path)?;
        println!("Wrote {} history rows to {:?}", rows, path);
    }

    Ok(())
}

/// Write the default config so it can be edited.
fn cmd_init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config already exists at {:?}; leaving it alone.", path);
        return Ok(());
    }
    save_config(path, &GameConfig::default())?;
    println!("Wrote default config to {:?}", path);
    Ok(())
}
