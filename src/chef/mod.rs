mod actor;
mod history;

pub use actor::Chef;
pub use history::{HistoricalPlate, HistorySummary};
