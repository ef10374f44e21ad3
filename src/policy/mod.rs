mod autochef;
mod strategy;

pub use autochef::AutoChef;
pub use strategy::Strategy;
