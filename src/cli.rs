use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Conveyor-belt sushi economy simulation.
#[derive(Parser, Debug)]
#[command(name = "sushi_belt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a JSON session config. Missing file means built-in defaults.
    #[arg(short, long, default_value = "sushi_config.json")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run automated opponents for a number of rotations and print the scoreboard.
    Simulate {
        /// Number of belt rotations to run.
        #[arg(short, long, default_value = "100")]
        rotations: u64,

        /// Override the belt size from the config. The customer count is lowered to fit.
        #[arg(long)]
        belt_size: Option<usize>,

        /// Override the number of customers.
        #[arg(long)]
        customers: Option<usize>,

        /// Override the number of opponent chefs.
        #[arg(long)]
        opponents: Option<usize>,

        /// Seed for a reproducible run.
        #[arg(long)]
        seed: Option<u64>,

        /// Print chef balances every N rotations (0 = never).
        #[arg(long, default_value = "0")]
        progress: u64,

        /// Write every chef's plate history to this CSV file.
        #[arg(long)]
        history_csv: Option<PathBuf>,
    },

    /// List catalog dishes with cost, calories and the plates that can carry them.
    Menu,

    /// Write a default config file to the config path.
    InitConfig,
}

impl Default for Command {
    fn default() -> Self {
        Command::Simulate {
            rotations: 100,
            belt_size: None,
            customers: None,
            opponents: None,
            seed: None,
            progress: 0,
            history_csv: None,
        }
    }
}
