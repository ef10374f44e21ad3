use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SushiError};
use crate::pricing::{
    DEFAULT_BELT_SIZE, DEFAULT_CUSTOMERS, DEFAULT_OPPONENTS, DEFAULT_STARTING_BALANCE,
};

/// Everything needed to set up a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub belt_size: usize,
    pub customers: usize,
    pub opponents: usize,
    pub starting_balance: f64,

    /// Fixed seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Hand opponents to automated placement policies.
    pub autopilot: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            belt_size: DEFAULT_BELT_SIZE,
            customers: DEFAULT_CUSTOMERS,
            opponents: DEFAULT_OPPONENTS,
            starting_balance: DEFAULT_STARTING_BALANCE,
            seed: None,
            autopilot: true,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.belt_size < 1 {
            return Err(SushiError::InvalidConstruction(
                "belt must have size > 0".to_string(),
            ));
        }
        if self.belt_size < self.customers {
            return Err(SushiError::InvalidConstruction(format!(
                "belt size {} is smaller than the number of customers {}",
                self.belt_size, self.customers
            )));
        }
        if !self.starting_balance.is_finite() || self.starting_balance < 0.0 {
            return Err(SushiError::InvalidConstruction(format!(
                "starting balance must be a non-negative amount, got {}",
                self.starting_balance
            )));
        }
        Ok(())
    }

    /// Change the belt size, seating no more customers than it has slots.
    pub fn resize_belt(&mut self, belt_size: usize) {
        self.belt_size = belt_size;
        self.customers = self.customers.min(belt_size);
    }
}

/// Load a config from a JSON file. Missing fields take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig> {
    let content = fs::read_to_string(path)?;
    let config: GameConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Save a config as pretty JSON.
pub fn save_config<P: AsRef<Path>>(path: P, config: &GameConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
