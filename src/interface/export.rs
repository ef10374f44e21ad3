use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::game::SushiGame;
use crate::models::PlateColor;

/// One row of the plate-history CSV.
#[derive(Debug, Serialize)]
struct HistoryRow<'a> {
    chef: String,
    dish: &'a str,
    color: PlateColor,
    price: String,
    cost: String,
    outcome: &'static str,
}

/// Write every chef's plate history to a CSV file, chef by chef, oldest first.
///
/// Returns the number of rows written.
pub fn write_history_csv(game: &SushiGame, path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;
    let mut rows = 0;

    for chef in game.chefs() {
        let name = chef.name();
        for entry in chef.full_plate_history() {
            wtr.serialize(HistoryRow {
                chef: name.clone(),
                dish: entry.contents().name(),
                color: entry.color(),
                price: format!("{:.2}", entry.price()),
                cost: format!("{:.2}", entry.contents().cost()),
                outcome: if entry.was_spoiled() { "spoiled" } else { "consumed" },
            })?;
            rows += 1;
        }
    }

    wtr.flush()?;
    Ok(rows)
}
