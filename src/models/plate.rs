use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::error::{Result, SushiError};
use crate::models::sushi::Sushi;
use crate::pricing::{BLUE_PLATE_PRICE, GOLD_PLATE_MIN_PRICE, GREEN_PLATE_PRICE, RED_PLATE_PRICE};

/// Identity of a chef. Plates point back at their maker through this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChefId(u64);

static NEXT_CHEF_ID: AtomicU64 = AtomicU64::new(1);

impl ChefId {
    /// Allocate an id no other chef in this process has.
    pub fn fresh() -> Self {
        ChefId(NEXT_CHEF_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chef#{}", self.0)
    }
}

/// Plate tier. Red, green and blue carry a fixed price; gold is priced by the chef.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateColor {
    Red,
    Green,
    Blue,
    Gold,
}

impl PlateColor {
    /// Tiers with a fixed price, cheapest first.
    pub const FIXED: [PlateColor; 3] = [PlateColor::Red, PlateColor::Green, PlateColor::Blue];

    pub fn fixed_price(self) -> Option<f64> {
        match self {
            PlateColor::Red => Some(RED_PLATE_PRICE),
            PlateColor::Green => Some(GREEN_PLATE_PRICE),
            PlateColor::Blue => Some(BLUE_PLATE_PRICE),
            PlateColor::Gold => None,
        }
    }

    /// Lowest price the tier allows before the dish cost is considered.
    pub fn minimum_price(self) -> f64 {
        self.fixed_price().unwrap_or(GOLD_PLATE_MIN_PRICE)
    }

    pub fn name(self) -> &'static str {
        match self {
            PlateColor::Red => "red",
            PlateColor::Green => "green",
            PlateColor::Blue => "blue",
            PlateColor::Gold => "gold",
        }
    }
}

impl fmt::Display for PlateColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A priced dish owned by the chef that made it. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    chef: ChefId,
    contents: Sushi,
    price: f64,
    color: PlateColor,
}

impl Plate {
    /// Build a fixed-price plate. Gold needs an explicit price, see [`Plate::gold`].
    pub fn new(chef: ChefId, contents: Sushi, color: PlateColor) -> Result<Self> {
        match color.fixed_price() {
            Some(price) => Self::priced(chef, contents, price, color),
            None => Err(SushiError::InvalidConstruction(
                "gold plates must be given a price".to_string(),
            )),
        }
    }

    pub fn red(chef: ChefId, contents: Sushi) -> Result<Self> {
        Self::new(chef, contents, PlateColor::Red)
    }

    pub fn green(chef: ChefId, contents: Sushi) -> Result<Self> {
        Self::new(chef, contents, PlateColor::Green)
    }

    pub fn blue(chef: ChefId, contents: Sushi) -> Result<Self> {
        Self::new(chef, contents, PlateColor::Blue)
    }

    /// A gold plate at a chef-chosen price of at least [`GOLD_PLATE_MIN_PRICE`].
    pub fn gold(chef: ChefId, contents: Sushi, price: f64) -> Result<Self> {
        if !price.is_finite() {
            return Err(SushiError::InvalidConstruction(format!(
                "gold plate price must be a finite number, got {}",
                price
            )));
        }
        if price < GOLD_PLATE_MIN_PRICE {
            return Err(SushiError::PriceTooLow {
                price,
                minimum: GOLD_PLATE_MIN_PRICE,
            });
        }
        Self::priced(chef, contents, price, PlateColor::Gold)
    }

    fn priced(chef: ChefId, contents: Sushi, price: f64, color: PlateColor) -> Result<Self> {
        if contents.cost() > price {
            return Err(SushiError::PriceTooLow {
                price,
                minimum: contents.cost(),
            });
        }
        Ok(Self {
            chef,
            contents,
            price,
            color,
        })
    }

    /// The chef that made this plate.
    pub fn chef(&self) -> ChefId {
        self.chef
    }

    pub fn contents(&self) -> &Sushi {
        &self.contents
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn color(&self) -> PlateColor {
        self.color
    }

    /// Sale price minus what the dish cost to make.
    pub fn profit(&self) -> f64 {
        self.price - self.contents.cost()
    }
}
