//! # Recorder – keeps every accepted event
//!
//! An observer that appends each event passing the terminal gate to an
//! in-memory tape. Handy for tests and demos that assert on exact sequences.
//!
//! ## Example
//! ```rust
//! use rxcore::{just, Event, ObservableExt, Recorder};
//!
//! let rec = Recorder::new();
//! just(1).subscribe(&rec);
//! assert_eq!(rec.snapshot(), vec![Event::Next(1), Event::Completed]);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::events::Event;
use crate::observers::{Observer, ObserverBase, Sink};

struct Tape<T>(Mutex<Vec<Event<T>>>);

impl<T> Tape<T> {
    fn lock(&self) -> MutexGuard<'_, Vec<Event<T>>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Sink<T> for Tape<T> {
    fn on_core(&self, event: Event<T>) {
        self.lock().push(event);
    }
}

/// Observer recording accepted events in arrival order.
pub struct Recorder<T> {
    inner: ObserverBase<Tape<T>>,
}

impl<T> Recorder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ObserverBase::new(Tape(Mutex::new(Vec::new()))),
        }
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.inner.sink().lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` once a terminal event has been recorded.
    pub fn is_stopped(&self) -> bool {
        self.inner.is_stopped()
    }

    /// Drains the tape. The stop flag is left untouched.
    pub fn take(&self) -> Vec<Event<T>> {
        std::mem::take(&mut *self.inner.sink().lock())
    }

    /// Consumes the recorder, returning the tape.
    pub fn into_events(self) -> Vec<Event<T>> {
        self.inner
            .into_sink()
            .0
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Recorder<T> {
    /// Copies the tape.
    pub fn snapshot(&self) -> Vec<Event<T>> {
        self.inner.sink().lock().clone()
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Observer<T> for Recorder<T> {
    #[inline]
    fn on(&self, event: Event<T>) {
        self.inner.on(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StreamError;

    #[test]
    fn test_records_until_terminal() {
        let rec = Recorder::new();
        rec.on(Event::Next('a'));
        rec.on(Event::Error(StreamError::fail("x")));
        rec.on(Event::Next('b'));
        rec.on(Event::Completed);

        assert!(rec.is_stopped());
        assert_eq!(rec.len(), 2);
        assert_eq!(
            rec.into_events(),
            vec![Event::Next('a'), Event::Error(StreamError::fail("x"))]
        );
    }

    #[test]
    fn test_take_drains_but_keeps_stopped() {
        let rec: Recorder<u8> = Recorder::default();
        assert!(rec.is_empty());
        rec.on(Event::Completed);

        assert_eq!(rec.take(), vec![Event::Completed]);
        assert!(rec.is_empty());

        rec.on(Event::Next(1));
        assert!(rec.is_empty());
        assert!(rec.is_stopped());
    }
}
