use std::cell::Cell;
use std::rc::Rc;

use jiff::{SignedDuration, Timestamp};

/// Clock used for cache freshness decisions and write stamps.
///
/// Production code uses the system clock; tests pin a fixed instant and
/// advance it explicitly so TTL behavior is deterministic.
#[derive(Clone)]
pub enum TimeSource {
    System,
    Fixed(Rc<Cell<Timestamp>>),
}

impl TimeSource {
    pub fn system() -> Self {
        TimeSource::System
    }

    pub fn fixed(initial: Timestamp) -> Self {
        TimeSource::Fixed(Rc::new(Cell::new(initial)))
    }

    pub fn now(&self) -> Timestamp {
        match self {
            TimeSource::System => Timestamp::now(),
            TimeSource::Fixed(time) => time.get(),
        }
    }

    /// No-op on the system clock.
    pub fn advance(&self, by: SignedDuration) {
        if let TimeSource::Fixed(time) = self {
            time.set(time.get() + by);
        }
    }

    /// No-op on the system clock.
    pub fn set(&self, to: Timestamp) {
        if let TimeSource::Fixed(time) = self {
            time.set(to);
        }
    }
}
