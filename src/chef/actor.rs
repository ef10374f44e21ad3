use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use crate::belt::{Belt, BeltEvent, BeltObserver};
use crate::chef::history::{HistoricalPlate, HistorySummary};
use crate::error::{Result, SushiError};
use crate::models::{ChefId, Plate};

/// An economic actor that pays for dishes, places them, and is paid when
/// customers eat them.
///
/// State sits behind `Cell`/`RefCell` so the same chef can be held by the
/// belt's observer list and by whoever drives it.
#[derive(Debug)]
pub struct Chef {
    id: ChefId,
    name: RefCell<String>,
    balance: Cell<f64>,
    placed_this_rotation: Cell<bool>,
    history: RefCell<Vec<HistoricalPlate>>,
}

impl Chef {
    pub fn new(name: impl Into<String>, starting_balance: f64) -> Result<Self> {
        if !starting_balance.is_finite() || starting_balance < 0.0 {
            return Err(SushiError::InvalidConstruction(format!(
                "starting balance must be a non-negative amount, got {}",
                starting_balance
            )));
        }
        Ok(Self {
            id: ChefId::fresh(),
            name: RefCell::new(name.into()),
            balance: Cell::new(starting_balance),
            placed_this_rotation: Cell::new(false),
            history: RefCell::new(Vec::new()),
        })
    }

    /// Create a chef and subscribe it to `belt`'s events.
    pub fn join(belt: &mut Belt, name: impl Into<String>, starting_balance: f64) -> Result<Rc<Self>> {
        let chef = Rc::new(Self::new(name, starting_balance)?);
        belt.register_belt_observer(chef.clone());
        Ok(chef)
    }

    pub fn id(&self) -> ChefId {
        self.id
    }

    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.borrow_mut() = name.into();
    }

    pub fn balance(&self) -> f64 {
        self.balance.get()
    }

    pub fn already_placed_this_rotation(&self) -> bool {
        self.placed_this_rotation.get()
    }

    /// Pay for `plate`'s dish and put it on the belt at or after `position`.
    ///
    /// Checks run in a fixed order: the per-rotation limit, then the balance
    /// against the dish cost, then belt capacity. A rejection leaves the
    /// balance and the per-rotation flag untouched. The sale price is only
    /// credited later, if a customer eats the plate.
    pub fn make_and_place_plate(&self, belt: &mut Belt, plate: Rc<Plate>, position: i64) -> Result<usize> {
        if self.placed_this_rotation.get() {
            return Err(SushiError::AlreadyPlacedThisRotation);
        }

        let cost = plate.contents().cost();
        let balance = self.balance.get();
        if cost > balance {
            return Err(SushiError::InsufficientBalance { balance, cost });
        }

        let slot = belt.set_plate_nearest_to_position(plate, position)?;
        self.balance.set(self.balance.get() - cost);
        self.placed_this_rotation.set(true);
        debug!(chef = %self.id, slot, cost, "chef placed plate");
        Ok(slot)
    }

    /// Up to `max_len` most recent entries, oldest first.
    pub fn plate_history(&self, max_len: usize) -> Vec<HistoricalPlate> {
        let history = self.history.borrow();
        let start = history.len().saturating_sub(max_len);
        history[start..].to_vec()
    }

    pub fn full_plate_history(&self) -> Vec<HistoricalPlate> {
        self.history.borrow().clone()
    }

    pub fn history_summary(&self) -> HistorySummary {
        HistorySummary::from_history(&self.history.borrow())
    }
}

impl BeltObserver for Chef {
    fn handle_belt_event(&self, event: &BeltEvent, _belt: &mut Belt) {
        match event {
            BeltEvent::Rotate => self.placed_this_rotation.set(false),
            BeltEvent::PlateConsumed {
                plate, consumer, ..
            } if plate.chef() == self.id => {
                self.balance.set(self.balance.get() + plate.price());
                self.history.borrow_mut().push(HistoricalPlate::consumed(
                    Rc::clone(plate),
                    Rc::clone(consumer),
                ));
            }
            BeltEvent::PlateSpoiled { plate, .. } if plate.chef() == self.id => {
                self.history
                    .borrow_mut()
                    .push(HistoricalPlate::spoiled(Rc::clone(plate)));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::belt::{Customer, ScriptedCustomer};
    use crate::models::{Seafood, Sushi};
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_negative_starting_balance_rejected() {
        assert!(Chef::new("Broke", -1.0).is_err());
        assert!(Chef::new("Weird", f64::INFINITY).is_err());
    }

    #[test]
    fn test_set_name() {
        let chef = Chef::new("Opponent Chef 0", 10.0).unwrap();
        chef.set_name("Nigiri Maya");
        assert_eq!(chef.name(), "Nigiri Maya");
    }

    #[test]
    fn test_history_window_is_most_recent_in_order() {
        let glutton: Rc<dyn Customer> = Rc::new(ScriptedCustomer::glutton());
        let mut belt = Belt::with_customers(1, [(0, glutton)]).unwrap();
        let chef = Chef::join(&mut belt, "Sam", 100.0).unwrap();

        // Non-shellfish: on a one-slot belt they survive the first lap and reach the customer.
        let dishes = [Seafood::Tuna, Seafood::Salmon, Seafood::Eel];
        for seafood in dishes {
            let plate = Rc::new(Plate::blue(chef.id(), Sushi::nigiri(seafood)).unwrap());
            chef.make_and_place_plate(&mut belt, plate, 0).unwrap();
            belt.rotate();
        }

        let last_two = chef.plate_history(2);
        assert_eq!(last_two.len(), 2);
        assert_eq!(last_two[0].contents().name(), "salmon nigiri");
        assert_eq!(last_two[1].contents().name(), "eel nigiri");
        assert_eq!(chef.plate_history(10).len(), 3);
        assert!(chef.plate_history(0).is_empty());

        let summary = chef.history_summary();
        assert_eq!(summary.sold, 3);
        assert_eq!(summary.spoiled, 0);
        assert_float_absolute_eq!(summary.revenue, 12.0, 1e-9);
    }

    #[test]
    fn test_history_window_keeps_spoiled_entries_in_order() {
        let glutton: Rc<dyn Customer> = Rc::new(ScriptedCustomer::glutton());
        let mut belt = Belt::with_customers(1, [(0, glutton)]).unwrap();
        let chef = Chef::join(&mut belt, "Sam", 100.0).unwrap();

        // Shellfish spoils at age 1 on a one-slot belt, before the customer sees it.
        let dishes = [Seafood::Crab, Seafood::Salmon, Seafood::Shrimp];
        for seafood in dishes {
            let plate = Rc::new(Plate::blue(chef.id(), Sushi::nigiri(seafood)).unwrap());
            chef.make_and_place_plate(&mut belt, plate, 0).unwrap();
            belt.rotate();
        }

        let names: Vec<String> = chef
            .plate_history(3)
            .iter()
            .map(|h| h.contents().name().to_string())
            .collect();
        assert_eq!(names, ["crab nigiri", "salmon nigiri", "shrimp nigiri"]);
        let spoiled: Vec<bool> = chef.full_plate_history().iter().map(|h| h.was_spoiled()).collect();
        assert_eq!(spoiled, [true, false, true]);

        let summary = chef.history_summary();
        assert_eq!(summary.sold, 1);
        assert_eq!(summary.spoiled, 2);
        assert_float_absolute_eq!(summary.revenue, 4.0, 1e-9);
    }
}
