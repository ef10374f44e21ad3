use thiserror::Error;

use crate::models::Ingredient;

#[derive(Debug, Error)]
pub enum SushiError {
    #[error("Plate price {price:.2} is below the required minimum {minimum:.2}")]
    PriceTooLow { price: f64, minimum: f64 },

    #[error("Insufficient balance: {balance:.2} available, {cost:.2} needed")]
    InsufficientBalance { balance: f64, cost: f64 },

    #[error("Belt is full: all {size} slots are occupied")]
    BeltFull { size: usize },

    #[error("Already placed a plate this rotation")]
    AlreadyPlacedThisRotation,

    #[error("Can not combine {found} with {expected}")]
    TypeMismatch {
        expected: Ingredient,
        found: Ingredient,
    },

    #[error("Invalid construction: {0}")]
    InvalidConstruction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SushiError>;
