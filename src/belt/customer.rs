use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SushiError};
use crate::models::Plate;

/// Someone seated at a belt slot who decides, once per rotation, whether to
/// eat the plate in front of them.
///
/// All randomness in the engine lives behind this trait.
pub trait Customer: fmt::Debug {
    fn consumes_plate(&self, plate: &Plate) -> bool;
}

/// Accepts each plate with probability `pickiness`, drawn from an injected RNG.
pub struct RandomCustomer<R = StdRng> {
    pickiness: f64,
    rng: RefCell<R>,
}

impl<R: Rng> RandomCustomer<R> {
    pub fn new(pickiness: f64, rng: R) -> Result<Self> {
        if !(0.0..=1.0).contains(&pickiness) {
            return Err(SushiError::InvalidConstruction(format!(
                "pickiness must lie in [0, 1], got {}",
                pickiness
            )));
        }
        Ok(Self {
            pickiness,
            rng: RefCell::new(rng),
        })
    }

    pub fn pickiness(&self) -> f64 {
        self.pickiness
    }
}

impl RandomCustomer<StdRng> {
    /// Customer backed by a seeded [`StdRng`].
    pub fn seeded(pickiness: f64, seed: u64) -> Result<Self> {
        Self::new(pickiness, StdRng::seed_from_u64(seed))
    }
}

impl<R> fmt::Debug for RandomCustomer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomCustomer")
            .field("pickiness", &self.pickiness)
            .finish_non_exhaustive()
    }
}

impl<R: Rng> Customer for RandomCustomer<R> {
    fn consumes_plate(&self, _plate: &Plate) -> bool {
        self.rng.borrow_mut().r#gen::<f64>() < self.pickiness
    }
}

/// Replays a fixed list of decisions, then answers `fallback` forever.
#[derive(Debug)]
pub struct ScriptedCustomer {
    decisions: RefCell<VecDeque<bool>>,
    fallback: bool,
    offered: Cell<usize>,
}

impl ScriptedCustomer {
    pub fn new(decisions: impl IntoIterator<Item = bool>, fallback: bool) -> Self {
        Self {
            decisions: RefCell::new(decisions.into_iter().collect()),
            fallback,
            offered: Cell::new(0),
        }
    }

    /// Eats everything it is offered.
    pub fn glutton() -> Self {
        Self::new([], true)
    }

    /// Never eats anything.
    pub fn fasting() -> Self {
        Self::new([], false)
    }

    /// How many plates this customer has been asked about.
    pub fn plates_offered(&self) -> usize {
        self.offered.get()
    }
}

impl Customer for ScriptedCustomer {
    fn consumes_plate(&self, _plate: &Plate) -> bool {
        self.offered.set(self.offered.get() + 1);
        self.decisions
            .borrow_mut()
            .pop_front()
            .unwrap_or(self.fallback)
    }
}
