pub mod ingredient;
pub mod plate;
pub mod sushi;

pub use ingredient::{Ingredient, IngredientPortion};
pub use plate::{ChefId, Plate, PlateColor};
pub use sushi::{Seafood, Sushi, SushiKind};
