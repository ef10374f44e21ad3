use std::rc::Rc;

use crate::belt::Customer;
use crate::models::{ChefId, Plate, PlateColor, Sushi};

/// A plate that has left the belt, and who (if anyone) ate it.
#[derive(Debug, Clone)]
pub struct HistoricalPlate {
    plate: Rc<Plate>,
    consumer: Option<Rc<dyn Customer>>,
}

impl HistoricalPlate {
    pub fn consumed(plate: Rc<Plate>, consumer: Rc<dyn Customer>) -> Self {
        Self {
            plate,
            consumer: Some(consumer),
        }
    }

    pub fn spoiled(plate: Rc<Plate>) -> Self {
        Self {
            plate,
            consumer: None,
        }
    }

    pub fn plate(&self) -> &Rc<Plate> {
        &self.plate
    }

    pub fn consumer(&self) -> Option<&Rc<dyn Customer>> {
        self.consumer.as_ref()
    }

    pub fn was_spoiled(&self) -> bool {
        self.consumer.is_none()
    }

    pub fn chef(&self) -> ChefId {
        self.plate.chef()
    }

    pub fn contents(&self) -> &Sushi {
        self.plate.contents()
    }

    pub fn price(&self) -> f64 {
        self.plate.price()
    }

    pub fn color(&self) -> PlateColor {
        self.plate.color()
    }

    pub fn profit(&self) -> f64 {
        self.plate.profit()
    }
}

/// Totals over a chef's plate history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySummary {
    pub sold: usize,
    pub spoiled: usize,
    /// Sale price of every consumed plate.
    pub revenue: f64,
    /// Sum of `price - cost` over consumed plates.
    pub profit: f64,
    /// Dish cost written off on spoiled plates.
    pub spoiled_cost: f64,
}

impl HistorySummary {
    pub fn from_history(history: &[HistoricalPlate]) -> Self {
        history.iter().fold(Self::default(), |mut acc, h| {
            if h.was_spoiled() {
                acc.spoiled += 1;
                acc.spoiled_cost += h.contents().cost();
            } else {
                acc.sold += 1;
                acc.revenue += h.price();
                acc.profit += h.profit();
            }
            acc
        })
    }

    /// Profit from sales minus what spoilage cost.
    pub fn net(&self) -> f64 {
        self.profit - self.spoiled_cost
    }
}
