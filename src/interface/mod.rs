pub mod export;
pub mod render;

pub use export::write_history_csv;
pub use render::{chef_line, display_menu, display_scoreboard};
