/// Fixed sale price of a red plate.
pub const RED_PLATE_PRICE: f64 = 1.0;

/// Fixed sale price of a green plate.
pub const GREEN_PLATE_PRICE: f64 = 2.0;

/// Fixed sale price of a blue plate.
pub const BLUE_PLATE_PRICE: f64 = 4.0;

/// Lowest price a gold plate may be sold for.
pub const GOLD_PLATE_MIN_PRICE: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Dish recipes
// ─────────────────────────────────────────────────────────────────────────────

/// Ounces of seafood on a nigiri.
pub const NIGIRI_SEAFOOD_AMOUNT: f64 = 0.75;

/// Ounces of rice under a nigiri.
pub const NIGIRI_RICE_AMOUNT: f64 = 0.5;

/// Ounces of seafood in a sashimi serving.
pub const SASHIMI_SEAFOOD_AMOUNT: f64 = 0.75;

// ─────────────────────────────────────────────────────────────────────────────
// Spoilage, in whole belt laps
// ─────────────────────────────────────────────────────────────────────────────

pub const VEGETARIAN_SHELF_LAPS: u64 = 3;
pub const SEAFOOD_SHELF_LAPS: u64 = 2;
pub const SHELLFISH_SHELF_LAPS: u64 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Session defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Money every chef starts a session with.
pub const DEFAULT_STARTING_BALANCE: f64 = 100.0;

pub const DEFAULT_BELT_SIZE: usize = 20;
pub const DEFAULT_CUSTOMERS: usize = 10;
pub const DEFAULT_OPPONENTS: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Automated chefs
// ─────────────────────────────────────────────────────────────────────────────

/// Make-frequency is drawn uniformly from [MIN, MIN + SPREAD).
pub const MAKE_FREQUENCY_MIN: f64 = 0.25;
pub const MAKE_FREQUENCY_SPREAD: f64 = 0.5;

/// Gold roll prices are drawn uniformly from [GOLD_PLATE_MIN_PRICE, + SPREAD).
pub const GOLD_ROLL_PRICE_SPREAD: f64 = 3.0;

/// First names handed out to automated opponents.
pub const OPPONENT_NAMES: [&str; 15] = [
    "Bob", "Carol", "Alex", "Sejal", "Hussein", "Ming", "Carlos", "Tom", "Lester", "Maya",
    "Malcolm", "Grace", "Darius", "Thor", "Keisha",
];
