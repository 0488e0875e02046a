//! Injectable "today" source.
//!
//! Date validation and the calendar view both depend on the current date.
//! Routing that dependency through a trait keeps every consumer testable
//! with a pinned date instead of the wall clock.

use chrono::{Local, NaiveDate};

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used by the demo binary.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
