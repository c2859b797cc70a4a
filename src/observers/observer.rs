//! # Observer: the receiving end of a stream
//!
//! The [`Observer`] trait is the contract every consumer satisfies: it accepts
//! one [`Event`] at a time through [`Observer::on`].
//!
//! Most observers are not written against [`Observer`] directly. They implement
//! the narrower [`Sink`] hook and are wrapped in [`ObserverBase`](crate::ObserverBase),
//! which adds the terminal-event guarantee:
//!
//! ```text
//! Producer::run ── on(Event) ──► ObserverBase ── gate(stop flag) ──► Sink::on_core(Event)
//!                                     │
//!                                     └─► dropped: Next after terminal, second terminal
//! ```
//!
//! # Example: custom sink
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use rxcore::{Event, Observer, ObserverBase, Sink};
//!
//! #[derive(Default)]
//! struct Counter(AtomicUsize);
//!
//! impl Sink<u8> for Counter {
//!     fn on_core(&self, event: Event<u8>) {
//!         if event.is_next() {
//!             self.0.fetch_add(1, Ordering::Relaxed);
//!         }
//!     }
//! }
//!
//! let obs = ObserverBase::new(Counter::default());
//! obs.on(Event::Next(1));
//! obs.on(Event::Completed);
//! obs.on(Event::Next(2)); // dropped
//! assert_eq!(obs.sink().0.load(Ordering::Relaxed), 1);
//! ```

use std::sync::Arc;

use crate::events::Event;

/// # Receives events pushed by an observable.
///
/// `on` never fails. A panicking implementation is a defect of that
/// implementation; the runtime does not catch or isolate it.
///
/// Implementations taking `&self` may be shared (`&O`, `Arc<O>`) between
/// producers or threads; [`ObserverBase`](crate::ObserverBase) stays correct in that case.
pub trait Observer<T> {
    /// Delivers one event.
    fn on(&self, event: Event<T>);
}

/// # Emission hook behind [`ObserverBase`](crate::ObserverBase).
///
/// Receives only events that passed the stop-flag gate:
/// any number of `Next`, then at most one terminal event.
pub trait Sink<T> {
    /// Handles one accepted event.
    fn on_core(&self, event: Event<T>);
}

impl<T, O> Observer<T> for &O
where
    O: Observer<T> + ?Sized,
{
    #[inline]
    fn on(&self, event: Event<T>) {
        (**self).on(event)
    }
}

impl<T, O> Observer<T> for Box<O>
where
    O: Observer<T> + ?Sized,
{
    #[inline]
    fn on(&self, event: Event<T>) {
        (**self).on(event)
    }
}

impl<T, O> Observer<T> for Arc<O>
where
    O: Observer<T> + ?Sized,
{
    #[inline]
    fn on(&self, event: Event<T>) {
        (**self).on(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Raw(Mutex<Vec<Event<i32>>>);

    impl Observer<i32> for Raw {
        fn on(&self, event: Event<i32>) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_forwarding_impls_reach_the_same_observer() {
        let raw = Arc::new(Raw::default());

        (&*raw).on(Event::Next(1));
        raw.on(Event::Next(2));
        let boxed: Box<dyn Observer<i32>> = Box::new(Arc::clone(&raw));
        boxed.on(Event::Completed);

        let got = raw.0.lock().unwrap().clone();
        assert_eq!(got, vec![Event::Next(1), Event::Next(2), Event::Completed]);
    }

    #[test]
    fn test_plain_observer_has_no_gate() {
        // Without ObserverBase nothing filters post-terminal events.
        let raw = Raw::default();
        raw.on(Event::Completed);
        raw.on(Event::Next(9));
        assert_eq!(raw.0.lock().unwrap().len(), 2);
    }
}
