use std::rc::Rc;

use crate::belt::customer::Customer;
use crate::models::Plate;

/// Something that happened on the belt, delivered synchronously to every observer.
#[derive(Debug, Clone)]
pub enum BeltEvent {
    /// Plates shifted one slot and the rotation count went up.
    Rotate,
    PlatePlaced {
        plate: Rc<Plate>,
        position: usize,
    },
    PlateConsumed {
        plate: Rc<Plate>,
        position: usize,
        consumer: Rc<dyn Customer>,
    },
    PlateSpoiled {
        plate: Rc<Plate>,
        position: usize,
    },
}

/// Discriminant tag for [`BeltEvent`], handy for filtering and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeltEventKind {
    Rotate,
    PlatePlaced,
    PlateConsumed,
    PlateSpoiled,
}

impl BeltEvent {
    pub fn kind(&self) -> BeltEventKind {
        match self {
            BeltEvent::Rotate => BeltEventKind::Rotate,
            BeltEvent::PlatePlaced { .. } => BeltEventKind::PlatePlaced,
            BeltEvent::PlateConsumed { .. } => BeltEventKind::PlateConsumed,
            BeltEvent::PlateSpoiled { .. } => BeltEventKind::PlateSpoiled,
        }
    }

    /// The plate this event is about, if any.
    pub fn plate(&self) -> Option<&Rc<Plate>> {
        match self {
            BeltEvent::Rotate => None,
            BeltEvent::PlatePlaced { plate, .. }
            | BeltEvent::PlateConsumed { plate, .. }
            | BeltEvent::PlateSpoiled { plate, .. } => Some(plate),
        }
    }

    /// Slot the event happened at, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            BeltEvent::Rotate => None,
            BeltEvent::PlatePlaced { position, .. }
            | BeltEvent::PlateConsumed { position, .. }
            | BeltEvent::PlateSpoiled { position, .. } => Some(*position),
        }
    }
}
