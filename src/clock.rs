use std::cell::Cell;
use std::rc::Rc;
use chrono::{Duration, Local, NaiveDateTime};

/// Source of the current wall-clock time for task timestamps.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A manually driven clock for deterministic sessions and tests.
///
/// Clones share the same instant, so a test can keep a handle and advance
/// time after handing a clone to the store.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Rc<Cell<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self { instant: Rc::new(Cell::new(instant)) }
    }

    pub fn set(&self, instant: NaiveDateTime) {
        self.instant.set(instant);
    }

    pub fn advance(&self, by: Duration) {
        self.instant.set(self.instant.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant.get()
    }
}
