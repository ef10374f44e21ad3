mod config;
mod session;

pub use config::{load_config, save_config, GameConfig};
pub use session::SushiGame;
