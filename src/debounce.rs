//! Restartable deferred execution.
//!
//! The search box fires on every keystroke; only the value that survives a
//! quiet window should actually run. Time is passed in explicitly, so the
//! window logic is deterministic under test and the caller decides how
//! polling is scheduled.

use std::time::{Duration, Instant};

pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: None,
        }
    }

    /// Queue `value`, restarting the quiet window. Any previously queued
    /// value is dropped unfired.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Take the queued value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().map(|(_, due)| *due)?;
        if now >= due {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Drop the queued value. A later poll returns nothing; this is the
    /// teardown path when the view owning the debouncer goes away.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
