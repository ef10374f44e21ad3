pub mod belt;
pub mod chef;
pub mod cli;
pub mod error;
pub mod game;
pub mod interface;
pub mod models;
pub mod policy;
pub mod pricing;

pub use belt::{Belt, BeltEvent, BeltObserver, Customer};
pub use chef::{Chef, HistoricalPlate};
pub use error::{Result, SushiError};
pub use game::{GameConfig, SushiGame};
pub use models::{Plate, PlateColor, Sushi};
