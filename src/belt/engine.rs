use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::belt::customer::Customer;
use crate::belt::event::BeltEvent;
use crate::error::{Result, SushiError};
use crate::models::Plate;
use crate::pricing::is_spoiled;

/// Receives every [`BeltEvent`] in registration order.
///
/// The handler gets the belt back so it can react in place, e.g. a chef
/// placing a new plate on ROTATE sees the post-shift, pre-spoilage belt.
pub trait BeltObserver {
    fn handle_belt_event(&self, event: &BeltEvent, belt: &mut Belt);
}

impl<F> BeltObserver for F
where
    F: Fn(&BeltEvent, &mut Belt),
{
    fn handle_belt_event(&self, event: &BeltEvent, belt: &mut Belt) {
        self(event, belt)
    }
}

/// Handle returned by [`Belt::register_belt_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

/// A plate on the belt together with the rotation it was placed on.
#[derive(Debug, Clone)]
struct TimedPlate {
    plate: Rc<Plate>,
    incept_date: u64,
}

/// Fixed-size circular belt of plate slots, with customers seated at some slots.
pub struct Belt {
    slots: Vec<Option<TimedPlate>>,
    customers: Vec<Option<Rc<dyn Customer>>>,
    rotation_count: u64,
    observers: Vec<(ObserverId, Rc<dyn BeltObserver>)>,
    next_observer: u64,
}

impl Belt {
    /// An empty belt with no customers.
    pub fn new(size: usize) -> Result<Self> {
        if size < 1 {
            return Err(SushiError::InvalidConstruction(
                "belt size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            slots: vec![None; size],
            customers: vec![None; size],
            rotation_count: 0,
            observers: Vec::new(),
            next_observer: 0,
        })
    }

    /// A belt with customers seated once and for all.
    ///
    /// Positions are normalized; a later seat at the same slot replaces an earlier one.
    pub fn with_customers(
        size: usize,
        seats: impl IntoIterator<Item = (i64, Rc<dyn Customer>)>,
    ) -> Result<Self> {
        let mut belt = Self::new(size)?;
        for (position, customer) in seats {
            let idx = belt.normalize_position(position);
            belt.customers[idx] = Some(customer);
        }
        Ok(belt)
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn rotation_count(&self) -> u64 {
        self.rotation_count
    }

    /// Map any integer position (negative included) into `[0, size)`.
    pub fn normalize_position(&self, position: i64) -> usize {
        position.rem_euclid(self.size() as i64) as usize
    }

    pub fn plate_at_position(&self, position: i64) -> Option<Rc<Plate>> {
        self.slots[self.normalize_position(position)]
            .as_ref()
            .map(|timed| Rc::clone(&timed.plate))
    }

    /// Rotations since the plate at `position` was placed; `None` for an empty slot.
    pub fn age_of_plate_at_position(&self, position: i64) -> Option<u64> {
        self.slots[self.normalize_position(position)]
            .as_ref()
            .map(|timed| self.rotation_count - timed.incept_date)
    }

    pub fn customer_at_position(&self, position: i64) -> Option<Rc<dyn Customer>> {
        self.customers[self.normalize_position(position)].clone()
    }

    /// First slot holding this very plate (by identity, not value).
    pub fn find_plate(&self, plate: &Rc<Plate>) -> Option<usize> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|timed| Rc::ptr_eq(&timed.plate, plate))
        })
    }

    /// Number of slots currently holding a plate.
    pub fn occupied_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Put `plate` at `position`, or the first free slot after it going forward.
    ///
    /// Returns the slot actually used. Probes at most `size` slots.
    pub fn set_plate_nearest_to_position(&mut self, plate: Rc<Plate>, position: i64) -> Result<usize> {
        let size = self.size();
        let start = self.normalize_position(position);
        for offset in 0..size {
            let idx = (start + offset) % size;
            if self.slots[idx].is_none() {
                self.slots[idx] = Some(TimedPlate {
                    plate: Rc::clone(&plate),
                    incept_date: self.rotation_count,
                });
                debug!(
                    position = idx,
                    requested = start,
                    dish = plate.contents().name(),
                    color = %plate.color(),
                    "plate placed"
                );
                self.notify(&BeltEvent::PlatePlaced {
                    plate,
                    position: idx,
                });
                return Ok(idx);
            }
        }
        Err(SushiError::BeltFull { size })
    }

    /// One simulation step: shift, announce, spoil, then let customers eat.
    ///
    /// The last slot's plate wraps to slot 0; every other plate moves up one index.
    pub fn rotate(&mut self) {
        self.slots.rotate_right(1);
        self.rotation_count += 1;
        trace!(rotation = self.rotation_count, "belt rotated");
        self.notify(&BeltEvent::Rotate);

        for position in 0..self.size() {
            if self.plate_is_spoiled(position) {
                if let Some(plate) = self.remove_plate(position) {
                    debug!(position, dish = plate.contents().name(), "plate spoiled");
                    self.notify(&BeltEvent::PlateSpoiled { plate, position });
                }
            }
        }

        for position in 0..self.size() {
            let Some(consumer) = self.customers[position].clone() else {
                continue;
            };
            let Some(plate) = self.plate_at_position(position as i64) else {
                continue;
            };
            if consumer.consumes_plate(&plate) {
                self.remove_plate(position);
                debug!(position, dish = plate.contents().name(), "plate consumed");
                self.notify(&BeltEvent::PlateConsumed {
                    plate,
                    position,
                    consumer,
                });
            }
        }
    }

    pub fn register_belt_observer(&mut self, observer: Rc<dyn BeltObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns false if the id was not registered.
    pub fn unregister_belt_observer(&mut self, id: ObserverId) -> bool {
        match self.observers.iter().position(|(oid, _)| *oid == id) {
            Some(idx) => {
                self.observers.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // Walks the live list by id, which only grows at the tail, so observers
    // added during delivery also hear this event and removals never skip one.
    fn notify(&mut self, event: &BeltEvent) {
        let mut last_delivered: Option<ObserverId> = None;
        loop {
            let next = match last_delivered {
                Some(last) => self.observers.partition_point(|(id, _)| *id <= last),
                None => 0,
            };
            let Some((id, observer)) = self.observers.get(next).cloned() else {
                break;
            };
            observer.handle_belt_event(event, self);
            last_delivered = Some(id);
        }
    }

    fn remove_plate(&mut self, position: usize) -> Option<Rc<Plate>> {
        self.slots[position].take().map(|timed| timed.plate)
    }

    fn plate_is_spoiled(&self, position: usize) -> bool {
        match &self.slots[position] {
            Some(timed) => {
                let sushi = timed.plate.contents();
                is_spoiled(
                    self.rotation_count - timed.incept_date,
                    sushi.is_vegetarian(),
                    sushi.has_shellfish(),
                    self.size(),
                )
            }
            None => false,
        }
    }
}

impl fmt::Debug for Belt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Belt")
            .field("size", &self.size())
            .field("rotation_count", &self.rotation_count)
            .field("occupied", &self.occupied_slots())
            .field("observers", &self.observers.len())
            .finish()
    }
}
