pub mod calculations;
pub mod constants;

pub use calculations::{
    is_spoiled, round_calories, round_cents, round_half_up, spoilage_age, to_cents,
};
pub use constants::*;
