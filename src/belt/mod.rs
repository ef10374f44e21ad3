mod customer;
mod engine;
mod event;

pub use customer::{Customer, RandomCustomer, ScriptedCustomer};
pub use engine::{Belt, BeltObserver, ObserverId};
pub use event::{BeltEvent, BeltEventKind};
