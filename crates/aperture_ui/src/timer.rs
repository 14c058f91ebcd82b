//! Cancellable delayed transitions.
//!
//! A [`TimerSlot`] holds at most one pending transition. Arming the slot
//! replaces whatever was pending, so a stale transition can never fire
//! after a newer one has been scheduled.
//!
//! Timestamps are host-supplied monotonic [`Duration`]s measured from an
//! arbitrary epoch (page load, app start, test zero).

use std::time::Duration;

/// A transition scheduled for a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline<T> {
    /// When the transition becomes due.
    pub due: Duration,
    /// What to do when it fires.
    pub payload: T,
}

/// Single-slot timer with cancel-on-rebind semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSlot<T> {
    pending: Option<Deadline<T>>,
}

impl<T> TimerSlot<T> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedules `payload` to fire `delay` after `now`.
    ///
    /// Returns the payload that was cancelled, if any.
    pub fn arm(&mut self, now: Duration, delay: Duration, payload: T) -> Option<T> {
        self.pending
            .replace(Deadline {
                due: now + delay,
                payload,
            })
            .map(|old| old.payload)
    }

    /// Cancels the pending transition.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|d| d.payload)
    }

    /// Takes the pending transition if it is due at `now`.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        if self.pending.as_ref().is_some_and(|d| d.due <= now) {
            self.cancel()
        } else {
            None
        }
    }

    /// Returns true if a transition is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the pending deadline.
    #[must_use]
    pub fn pending(&self) -> Option<&Deadline<T>> {
        self.pending.as_ref()
    }
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
