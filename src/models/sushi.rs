use std::fmt;

use crate::error::{Result, SushiError};
use crate::models::ingredient::{Ingredient, IngredientPortion};
use crate::pricing::{
    round_calories, round_cents, NIGIRI_RICE_AMOUNT, NIGIRI_SEAFOOD_AMOUNT, SASHIMI_SEAFOOD_AMOUNT,
};

/// Seafood that can top a nigiri or be served as sashimi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seafood {
    Tuna,
    Salmon,
    Eel,
    Crab,
    Shrimp,
}

impl Seafood {
    pub const ALL: [Seafood; 5] = [
        Seafood::Crab,
        Seafood::Eel,
        Seafood::Salmon,
        Seafood::Tuna,
        Seafood::Shrimp,
    ];

    pub fn ingredient(self) -> Ingredient {
        match self {
            Seafood::Tuna => Ingredient::Tuna,
            Seafood::Salmon => Ingredient::Salmon,
            Seafood::Eel => Ingredient::Eel,
            Seafood::Crab => Ingredient::Crab,
            Seafood::Shrimp => Ingredient::Shrimp,
        }
    }
}

/// Which kind of dish a [`Sushi`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SushiKind {
    Nigiri(Seafood),
    Sashimi(Seafood),
    Roll,
}

/// An immutable dish: its portions plus aggregates derived once at construction.
///
/// Cost is rounded half-up to the cent and calories to the whole calorie, so
/// every component that asks sees the same numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Sushi {
    kind: SushiKind,
    name: String,
    portions: Vec<IngredientPortion>,
    cost: f64,
    calories: u32,
}

impl Sushi {
    /// Seafood over a fixed portion of rice. Never vegetarian.
    pub fn nigiri(seafood: Seafood) -> Self {
        let topping = portion(seafood.ingredient(), NIGIRI_SEAFOOD_AMOUNT);
        let rice = portion(Ingredient::Rice, NIGIRI_RICE_AMOUNT);
        Self::assemble(
            SushiKind::Nigiri(seafood),
            format!("{} nigiri", seafood.ingredient()),
            vec![topping, rice],
        )
    }

    /// A single portion of seafood, no rice. Never vegetarian.
    pub fn sashimi(seafood: Seafood) -> Self {
        Self::assemble(
            SushiKind::Sashimi(seafood),
            format!("{} sashimi", seafood.ingredient()),
            vec![portion(seafood.ingredient(), SASHIMI_SEAFOOD_AMOUNT)],
        )
    }

    /// A caller-composed roll. Needs a non-blank name and at least one portion.
    pub fn roll(name: impl Into<String>, portions: Vec<IngredientPortion>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SushiError::InvalidConstruction(
                "roll name must not be empty".to_string(),
            ));
        }
        if portions.is_empty() {
            return Err(SushiError::InvalidConstruction(
                "roll must contain at least one portion".to_string(),
            ));
        }
        Ok(Self::assemble(SushiKind::Roll, name, portions))
    }

    /// Like [`Sushi::roll`], but portions of the same ingredient are merged.
    ///
    /// First-appearance order of each ingredient is kept.
    pub fn roll_combined(name: impl Into<String>, portions: Vec<IngredientPortion>) -> Result<Self> {
        let mut merged: Vec<IngredientPortion> = Vec::with_capacity(portions.len());
        for p in portions {
            match merged.iter_mut().find(|m| m.ingredient() == p.ingredient()) {
                Some(existing) => *existing = existing.combine(&p)?,
                None => merged.push(p),
            }
        }
        Self::roll(name, merged)
    }

    fn assemble(kind: SushiKind, name: String, portions: Vec<IngredientPortion>) -> Self {
        let cost = round_cents(portions.iter().map(IngredientPortion::cost).sum());
        let calories = round_calories(portions.iter().map(IngredientPortion::calories).sum());
        Self {
            kind,
            name,
            portions,
            cost,
            calories,
        }
    }

    pub fn kind(&self) -> SushiKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn portions(&self) -> &[IngredientPortion] {
        &self.portions
    }

    /// Total ingredient cost, rounded to the cent.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Total calories, rounded to the whole calorie.
    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn has_rice(&self) -> bool {
        self.portions.iter().any(IngredientPortion::is_rice)
    }

    pub fn has_shellfish(&self) -> bool {
        self.portions.iter().any(IngredientPortion::is_shellfish)
    }

    /// True only when every portion is vegetarian.
    pub fn is_vegetarian(&self) -> bool {
        match self.kind {
            SushiKind::Nigiri(_) | SushiKind::Sashimi(_) => false,
            SushiKind::Roll => self.portions.iter().all(IngredientPortion::is_vegetarian),
        }
    }
}

impl fmt::Display for Sushi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${:.2}, {} cal)", self.name, self.cost, self.calories)
    }
}

fn portion(ingredient: Ingredient, amount: f64) -> IngredientPortion {
    IngredientPortion::recipe(ingredient, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn p(ingredient: Ingredient, amount: f64) -> IngredientPortion {
        IngredientPortion::new(ingredient, amount).unwrap()
    }

    #[test]
    fn test_tuna_sashimi() {
        let s = Sushi::sashimi(Seafood::Tuna);
        assert_eq!(s.name(), "tuna sashimi");
        assert_float_absolute_eq!(s.cost(), 1.33, 1e-12);
        assert_eq!(s.calories(), 36);
        assert!(!s.has_rice());
        assert!(!s.has_shellfish());
        assert!(!s.is_vegetarian());
        assert_eq!(s.portions().len(), 1);
    }

    #[test]
    fn test_crab_nigiri() {
        let s = Sushi::nigiri(Seafood::Crab);
        assert_eq!(s.name(), "crab nigiri");
        // 0.75 * 0.75 + 0.5 * 0.12 = 0.6225
        assert_float_absolute_eq!(s.cost(), 0.62, 1e-12);
        // 0.75 * 36 + 0.5 * 37 = 45.5
        assert_eq!(s.calories(), 46);
        assert!(s.has_rice());
        assert!(s.has_shellfish());
        assert!(!s.is_vegetarian());
    }

    #[test]
    fn test_vegetarian_roll() {
        let roll = Sushi::roll(
            "Garden Roll",
            vec![p(Ingredient::Avocado, 1.0), p(Ingredient::Rice, 1.0)],
        )
        .unwrap();
        assert!(roll.is_vegetarian());
        assert!(roll.has_rice());
        assert_float_absolute_eq!(roll.cost(), 0.34, 1e-12);
        assert_eq!(roll.calories(), 82);
    }

    #[test]
    fn test_one_non_vegetarian_portion_spoils_vegetarian_flag() {
        let roll = Sushi::roll(
            "Mixed",
            vec![p(Ingredient::Avocado, 1.0), p(Ingredient::Shrimp, 0.1)],
        )
        .unwrap();
        assert!(!roll.is_vegetarian());
        assert!(roll.has_shellfish());
    }

    #[test]
    fn test_roll_requires_portions_and_name() {
        assert!(matches!(
            Sushi::roll("Empty", vec![]),
            Err(SushiError::InvalidConstruction(_))
        ));
        assert!(matches!(
            Sushi::roll("  ", vec![p(Ingredient::Rice, 1.0)]),
            Err(SushiError::InvalidConstruction(_))
        ));
    }

    #[test]
    fn test_roll_combined_merges_duplicates() {
        let roll = Sushi::roll_combined(
            "Double Salmon",
            vec![
                p(Ingredient::Salmon, 0.5),
                p(Ingredient::Rice, 0.5),
                p(Ingredient::Salmon, 0.25),
            ],
        )
        .unwrap();
        assert_eq!(roll.portions().len(), 2);
        assert_eq!(roll.portions()[0].ingredient(), Ingredient::Salmon);
        assert_float_absolute_eq!(roll.portions()[0].amount(), 0.75, 1e-12);
    }

    #[test]
    fn test_cost_is_stable_across_queries() {
        let s = Sushi::nigiri(Seafood::Eel);
        assert_eq!(s.cost().to_bits(), s.cost().to_bits());
        assert_eq!(s.clone().cost().to_bits(), s.cost().to_bits());
    }
}
