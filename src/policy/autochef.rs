use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::belt::{Belt, BeltEvent, BeltObserver};
use crate::chef::Chef;
use crate::error::{Result, SushiError};
use crate::policy::strategy::Strategy;
use crate::pricing::{MAKE_FREQUENCY_MIN, MAKE_FREQUENCY_SPREAD};

/// Drives a [`Chef`] automatically: on every rotation it rolls its
/// make-frequency and, on a hit, tries to place a plate from its strategy.
///
/// Register it after the chef so the chef's per-rotation flag is already
/// cleared when this observer hears ROTATE.
pub struct AutoChef<R = StdRng> {
    chef: Rc<Chef>,
    strategy: Strategy,
    make_frequency: f64,
    rng: RefCell<R>,
}

impl<R: Rng> AutoChef<R> {
    /// Make-frequency is drawn from `rng` in [0.25, 0.75).
    pub fn new(chef: Rc<Chef>, strategy: Strategy, mut rng: R) -> Self {
        let make_frequency = MAKE_FREQUENCY_MIN + rng.r#gen::<f64>() * MAKE_FREQUENCY_SPREAD;
        Self {
            chef,
            strategy,
            make_frequency,
            rng: RefCell::new(rng),
        }
    }

    pub fn with_frequency(chef: Rc<Chef>, strategy: Strategy, make_frequency: f64, rng: R) -> Result<Self> {
        if !(0.0..=1.0).contains(&make_frequency) {
            return Err(SushiError::InvalidConstruction(format!(
                "make frequency must lie in [0, 1], got {}",
                make_frequency
            )));
        }
        Ok(Self {
            chef,
            strategy,
            make_frequency,
            rng: RefCell::new(rng),
        })
    }

    pub fn chef(&self) -> &Rc<Chef> {
        &self.chef
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn make_frequency(&self) -> f64 {
        self.make_frequency
    }
}

impl<R> fmt::Debug for AutoChef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoChef")
            .field("chef", &self.chef.id())
            .field("strategy", &self.strategy)
            .field("make_frequency", &self.make_frequency)
            .finish_non_exhaustive()
    }
}

impl<R: Rng> BeltObserver for AutoChef<R> {
    fn handle_belt_event(&self, event: &BeltEvent, belt: &mut Belt) {
        if !matches!(event, BeltEvent::Rotate) {
            return;
        }

        let (plate, position) = {
            let mut rng = self.rng.borrow_mut();
            if rng.r#gen::<f64>() >= self.make_frequency {
                return;
            }
            let plate = match self.strategy.make_plate(self.chef.id(), &mut *rng) {
                Ok(plate) => plate,
                Err(e) => {
                    debug!(chef = %self.chef.id(), strategy = %self.strategy, error = %e, "skipped plate");
                    return;
                }
            };
            (plate, rng.gen_range(0..belt.size()) as i64)
        };

        if let Err(e) = self
            .chef
            .make_and_place_plate(belt, Rc::new(plate), position)
        {
            debug!(chef = %self.chef.id(), strategy = %self.strategy, error = %e, "placement rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_default_frequency_range() {
        for seed in 0..20 {
            let chef = Rc::new(Chef::new("Auto", 100.0).unwrap());
            let auto = AutoChef::new(chef, Strategy::Nigiri, StdRng::seed_from_u64(seed));
            assert!(auto.make_frequency() >= 0.25 && auto.make_frequency() < 0.75);
        }
    }

    #[test]
    fn test_always_on_autochef_places_each_rotation() {
        let mut belt = Belt::new(10).unwrap();
        let chef = Chef::join(&mut belt, "Auto", 1_000.0).unwrap();
        let auto =
            AutoChef::with_frequency(Rc::clone(&chef), Strategy::RollMaker, 1.0, StdRng::seed_from_u64(5))
                .unwrap();
        belt.register_belt_observer(Rc::new(auto));

        for _ in 0..5 {
            belt.rotate();
        }

        assert!(belt.occupied_slots() >= 1);
        // No customers and nothing old enough to spoil: every debit is still on the belt.
        let on_belt: f64 = (0..10)
            .filter_map(|pos| belt.plate_at_position(pos))
            .map(|plate| plate.contents().cost())
            .sum();
        assert!((1_000.0 - chef.balance() - on_belt).abs() < 1e-9);
    }

    #[test]
    fn test_never_on_autochef_does_nothing() {
        let mut belt = Belt::new(4).unwrap();
        let chef = Chef::join(&mut belt, "Idle", 50.0).unwrap();
        let auto =
            AutoChef::with_frequency(Rc::clone(&chef), Strategy::Sashimi, 0.0, StdRng::seed_from_u64(1))
                .unwrap();
        belt.register_belt_observer(Rc::new(auto));
        for _ in 0..10 {
            belt.rotate();
        }
        assert_eq!(belt.occupied_slots(), 0);
        assert_eq!(chef.balance(), 50.0);
    }

    #[test]
    fn test_invalid_frequency() {
        let chef = Rc::new(Chef::new("Auto", 1.0).unwrap());
        assert!(AutoChef::with_frequency(chef, Strategy::Nigiri, 1.5, StdRng::seed_from_u64(0)).is_err());
    }
}
