use std::rc::Rc;

use crate::chef::Chef;
use crate::game::SushiGame;
use crate::models::{PlateColor, Seafood, Sushi};

/// Print the scoreboard, richest chef first.
pub fn display_scoreboard(game: &SushiGame) {
    let board = game.scoreboard();
    if board.is_empty() {
        println!("No chefs in this session.");
        return;
    }

    println!();
    println!(
        "=== Scoreboard after {} rotations ===",
        game.belt().rotation_count()
    );
    println!();

    let max_name_len = board.iter().map(|c| c.name().len()).max().unwrap_or(10);

    for (i, chef) in board.iter().enumerate() {
        let summary = chef.history_summary();
        println!(
            "{:>3}. {:<width$}  ${:>8.2} | sold {:>3} | spoiled {:>3} | net {:+.2}",
            i + 1,
            chef.name(),
            chef.balance(),
            summary.sold,
            summary.spoiled,
            summary.net(),
            width = max_name_len
        );
    }

    println!();
    println!("--- Belt ---");
    println!("Plates on belt: {}/{}", game.belt().occupied_slots(), game.belt().size());
    println!();
}

/// Print every catalog dish with its cost and the fixed tiers that can carry it.
pub fn display_menu() {
    let dishes: Vec<Sushi> = Seafood::ALL
        .iter()
        .flat_map(|&s| [Sushi::nigiri(s), Sushi::sashimi(s)])
        .collect();

    println!();
    println!("=== Menu ===");
    println!();

    let max_name_len = dishes.iter().map(|d| d.name().len()).max().unwrap_or(10);

    for dish in &dishes {
        let tiers: Vec<&str> = PlateColor::FIXED
            .iter()
            .filter(|c| c.minimum_price() >= dish.cost())
            .map(|c| c.name())
            .collect();

        let mut flags = Vec::new();
        if dish.has_rice() {
            flags.push("rice");
        }
        if dish.has_shellfish() {
            flags.push("shellfish");
        }

        println!(
            "  {:<width$} - ${:.2}, {:>3} cal  [{}]  plates: {}",
            dish.name(),
            dish.cost(),
            dish.calories(),
            flags.join(", "),
            if tiers.is_empty() {
                "gold".to_string()
            } else {
                format!("{}, gold", tiers.join(", "))
            },
            width = max_name_len
        );
    }

    println!();
}

/// One-line status for a chef.
pub fn chef_line(chef: &Rc<Chef>) -> String {
    format!(
        "{} (${:.2}){}",
        chef.name(),
        chef.balance(),
        if chef.already_placed_this_rotation() {
            " *"
        } else {
            ""
        }
    )
}
