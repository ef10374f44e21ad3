use std::fmt;

use crate::error::{Result, SushiError};

/// The closed set of ingredients a dish can be made from.
///
/// Per-ounce facts are looked up from a fixed table, so two ingredients are
/// equal exactly when their variants are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    Avocado,
    Crab,
    Eel,
    Rice,
    Salmon,
    Seaweed,
    Shrimp,
    Tuna,
}

/// Static nutrition/price facts for one ingredient.
struct Facts {
    name: &'static str,
    price_per_ounce: f64,
    calories_per_ounce: u32,
    vegetarian: bool,
    rice: bool,
    shellfish: bool,
}

const fn facts(
    name: &'static str,
    price_per_ounce: f64,
    calories_per_ounce: u32,
    vegetarian: bool,
    rice: bool,
    shellfish: bool,
) -> Facts {
    Facts {
        name,
        price_per_ounce,
        calories_per_ounce,
        vegetarian,
        rice,
        shellfish,
    }
}

impl Ingredient {
    /// Every ingredient, in catalog order.
    pub const ALL: [Ingredient; 8] = [
        Ingredient::Avocado,
        Ingredient::Crab,
        Ingredient::Eel,
        Ingredient::Rice,
        Ingredient::Salmon,
        Ingredient::Seaweed,
        Ingredient::Shrimp,
        Ingredient::Tuna,
    ];

    fn facts(self) -> Facts {
        match self {
            Ingredient::Avocado => facts("avocado", 0.22, 45, true, false, false),
            Ingredient::Crab => facts("crab", 0.75, 36, false, false, true),
            Ingredient::Eel => facts("eel", 2.18, 84, false, false, false),
            Ingredient::Rice => facts("rice", 0.12, 37, true, true, false),
            Ingredient::Salmon => facts("salmon", 0.72, 56, false, false, false),
            Ingredient::Seaweed => facts("seaweed", 2.95, 113, true, false, false),
            Ingredient::Shrimp => facts("shrimp", 0.55, 39, false, false, true),
            Ingredient::Tuna => facts("tuna", 1.77, 48, false, false, false),
        }
    }

    pub fn name(self) -> &'static str {
        self.facts().name
    }

    pub fn price_per_ounce(self) -> f64 {
        self.facts().price_per_ounce
    }

    pub fn calories_per_ounce(self) -> u32 {
        self.facts().calories_per_ounce
    }

    /// Calories bought per dollar spent.
    pub fn calories_per_dollar(self) -> f64 {
        let f = self.facts();
        f.calories_per_ounce as f64 / f.price_per_ounce
    }

    pub fn is_vegetarian(self) -> bool {
        self.facts().vegetarian
    }

    pub fn is_rice(self) -> bool {
        self.facts().rice
    }

    pub fn is_shellfish(self) -> bool {
        self.facts().shellfish
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A weighed amount (in ounces) of a single ingredient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientPortion {
    ingredient: Ingredient,
    amount: f64,
}

impl IngredientPortion {
    /// Create a portion. The amount must be a positive, finite number of ounces.
    pub fn new(ingredient: Ingredient, amount: f64) -> Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(SushiError::InvalidConstruction(format!(
                "portion of {} must have a positive amount, got {}",
                ingredient, amount
            )));
        }
        Ok(Self { ingredient, amount })
    }

    /// Portion from a built-in recipe constant; amounts there are always positive.
    pub(crate) const fn recipe(ingredient: Ingredient, amount: f64) -> Self {
        Self { ingredient, amount }
    }

    pub fn ingredient(&self) -> Ingredient {
        self.ingredient
    }

    pub fn name(&self) -> &'static str {
        self.ingredient.name()
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Unrounded calories of this portion.
    pub fn calories(&self) -> f64 {
        self.amount * self.ingredient.calories_per_ounce() as f64
    }

    /// Unrounded cost of this portion.
    pub fn cost(&self) -> f64 {
        self.amount * self.ingredient.price_per_ounce()
    }

    pub fn is_vegetarian(&self) -> bool {
        self.ingredient.is_vegetarian()
    }

    pub fn is_rice(&self) -> bool {
        self.ingredient.is_rice()
    }

    pub fn is_shellfish(&self) -> bool {
        self.ingredient.is_shellfish()
    }

    /// Merge two portions of the same ingredient into one with the summed amount.
    pub fn combine(&self, other: &IngredientPortion) -> Result<IngredientPortion> {
        if other.ingredient != self.ingredient {
            return Err(SushiError::TypeMismatch {
                expected: self.ingredient,
                found: other.ingredient,
            });
        }
        IngredientPortion::new(self.ingredient, self.amount + other.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_portion_cost_and_calories() {
        let tuna = IngredientPortion::new(Ingredient::Tuna, 0.75).unwrap();
        assert_float_absolute_eq!(tuna.cost(), 1.3275, 1e-9);
        assert_float_absolute_eq!(tuna.calories(), 36.0, 1e-9);
        assert_eq!(tuna.name(), "tuna");
    }

    #[test]
    fn test_portion_rejects_non_positive_amount() {
        assert!(matches!(
            IngredientPortion::new(Ingredient::Rice, 0.0),
            Err(SushiError::InvalidConstruction(_))
        ));
        assert!(IngredientPortion::new(Ingredient::Rice, -1.0).is_err());
        assert!(IngredientPortion::new(Ingredient::Rice, f64::NAN).is_err());
    }

    #[test]
    fn test_combine_same_ingredient() {
        let a = IngredientPortion::new(Ingredient::Salmon, 0.5).unwrap();
        let b = IngredientPortion::new(Ingredient::Salmon, 0.25).unwrap();
        let merged = a.combine(&b).unwrap();
        assert_eq!(merged.ingredient(), Ingredient::Salmon);
        assert_float_absolute_eq!(merged.amount(), 0.75, 1e-12);
    }

    #[test]
    fn test_combine_different_ingredient_fails() {
        let a = IngredientPortion::new(Ingredient::Salmon, 0.5).unwrap();
        let b = IngredientPortion::new(Ingredient::Eel, 0.5).unwrap();
        match a.combine(&b) {
            Err(SushiError::TypeMismatch { expected, found }) => {
                assert_eq!(expected, Ingredient::Salmon);
                assert_eq!(found, Ingredient::Eel);
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_flags() {
        assert!(Ingredient::Rice.is_rice());
        assert!(Ingredient::Rice.is_vegetarian());
        assert!(Ingredient::Crab.is_shellfish());
        assert!(Ingredient::Shrimp.is_shellfish());
        assert!(!Ingredient::Tuna.is_vegetarian());
        assert_float_absolute_eq!(Ingredient::Avocado.calories_per_dollar(), 45.0 / 0.22, 1e-9);
    }
}
