use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::Result;
use crate::models::{ChefId, Ingredient, IngredientPortion, Plate, PlateColor, Seafood, Sushi};
use crate::pricing::{GOLD_PLATE_MIN_PRICE, GOLD_ROLL_PRICE_SPREAD};

/// What an automated chef likes to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Random sashimi on a random red, green or blue plate.
    Sashimi,
    /// Random nigiri on a random red, green or blue plate.
    Nigiri,
    /// An eight-ingredient roll of random amounts on a gold plate.
    RollMaker,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Sashimi, Strategy::Nigiri, Strategy::RollMaker];

    /// Split a uniform draw in [0, 1) into thirds.
    pub fn from_draw(draw: f64) -> Self {
        if draw < 0.333 {
            Strategy::Sashimi
        } else if draw < 0.66666 {
            Strategy::Nigiri
        } else {
            Strategy::RollMaker
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Sashimi => "Sashimi",
            Strategy::Nigiri => "Nigiri",
            Strategy::RollMaker => "Rollmaker",
        }
    }

    /// Compose a plate for `chef`. Fails with `PriceTooLow` when the chosen
    /// tier cannot carry the chosen dish.
    pub fn make_plate(self, chef: ChefId, rng: &mut impl Rng) -> Result<Plate> {
        match self {
            Strategy::Sashimi => {
                let sushi = Sushi::sashimi(pick_seafood(rng));
                Plate::new(chef, sushi, pick_fixed_color(rng))
            }
            Strategy::Nigiri => {
                let sushi = Sushi::nigiri(pick_seafood(rng));
                Plate::new(chef, sushi, pick_fixed_color(rng))
            }
            Strategy::RollMaker => {
                let portions = Ingredient::ALL
                    .iter()
                    // 1 - [0, 1) keeps every amount strictly positive
                    .map(|&ingredient| IngredientPortion::new(ingredient, 1.0 - rng.r#gen::<f64>()))
                    .collect::<Result<Vec<_>>>()?;
                let roll = Sushi::roll("Random Roll", portions)?;
                let price = GOLD_PLATE_MIN_PRICE + rng.r#gen::<f64>() * GOLD_ROLL_PRICE_SPREAD;
                Plate::gold(chef, roll, price)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn pick_seafood(rng: &mut impl Rng) -> Seafood {
    *Seafood::ALL.choose(rng).unwrap_or(&Seafood::Salmon)
}

fn pick_fixed_color(rng: &mut impl Rng) -> PlateColor {
    *PlateColor::FIXED.choose(rng).unwrap_or(&PlateColor::Blue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_from_draw_thirds() {
        assert_eq!(Strategy::from_draw(0.0), Strategy::Sashimi);
        assert_eq!(Strategy::from_draw(0.5), Strategy::Nigiri);
        assert_eq!(Strategy::from_draw(0.9), Strategy::RollMaker);
    }

    #[test]
    fn test_roll_maker_builds_gold_plates() {
        let mut rng = StdRng::seed_from_u64(3);
        let chef = ChefId::fresh();
        let mut built = 0;
        for _ in 0..50 {
            if let Ok(plate) = Strategy::RollMaker.make_plate(chef, &mut rng) {
                assert_eq!(plate.color(), PlateColor::Gold);
                assert_eq!(plate.contents().portions().len(), 8);
                assert!(plate.price() >= GOLD_PLATE_MIN_PRICE);
                assert!(plate.price() >= plate.contents().cost());
                built += 1;
            }
        }
        assert!(built > 0);
    }

    #[test]
    fn test_sashimi_plates_use_fixed_tiers() {
        let mut rng = StdRng::seed_from_u64(11);
        let chef = ChefId::fresh();
        for _ in 0..50 {
            if let Ok(plate) = Strategy::Sashimi.make_plate(chef, &mut rng) {
                assert_ne!(plate.color(), PlateColor::Gold);
                assert!(plate.contents().name().ends_with("sashimi"));
                assert_eq!(plate.chef(), chef);
            }
        }
    }
}
