//! # Observable: the producing side of a stream
//!
//! [`Observable`] is the object-safe contract: it binds one observer to its
//! emission logic. [`ObservableExt`] layers the caller-facing API on top of it
//! and is implemented for every observable, trait objects included.
//!
//! ## Subscribe paths
//! ```text
//! subscribe_fn(callback) ──► AnonymousObserver::new(callback) ─┐
//!                                                              ▼
//! subscribe(observer) ─────────────────────────────────► subscribe_dyn(&observer)
//!                                                              │
//!                                                              ▼
//!                                              Producer::run(observer)  (synchronous)
//! ```
//!
//! Every call runs to completion on the caller's thread: by the time
//! `subscribe` returns, the observer has seen the whole stream.
//!
//! ## Example
//! ```rust
//! use rxcore::{just, Event, Observable, ObservableExt};
//!
//! let source = just("hi");
//! let erased: &dyn Observable<&str> = source.as_observable();
//!
//! erased.subscribe_fn(|ev: Event<&str>| match ev {
//!     Event::Next(v) => println!("next {v}"),
//!     Event::Error(e) => println!("error {e}"),
//!     Event::Completed => println!("done"),
//! });
//! ```

use crate::events::Event;
use crate::observers::{AnonymousObserver, Observer};

/// # Reusable description of an event stream.
///
/// Each call to [`Observable::subscribe_dyn`] produces an independent stream;
/// an implementation must not carry state from one subscription into the next.
pub trait Observable<T> {
    /// Binds `observer` to this observable's emission logic.
    fn subscribe_dyn(&self, observer: &dyn Observer<T>);
}

/// Caller-facing subscribe API, available on every [`Observable`].
pub trait ObservableExt<T>: Observable<T> {
    /// Subscribes any observer; it is owned by this subscription and dropped when it ends.
    ///
    /// Pass `&observer` to keep it after the call.
    fn subscribe<O>(&self, observer: O)
    where
        O: Observer<T>,
    {
        self.subscribe_dyn(&observer);
    }

    /// Subscribes a plain callback by wrapping it in an [`AnonymousObserver`].
    fn subscribe_fn<F>(&self, callback: F)
    where
        F: Fn(Event<T>),
    {
        self.subscribe(AnonymousObserver::new(callback));
    }

    /// Returns the same instance through the narrower contract.
    fn as_observable(&self) -> &dyn Observable<T>
    where
        Self: Sized,
    {
        self
    }
}

impl<T, S> ObservableExt<T> for S where S: Observable<T> + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StreamError;
    use crate::observers::Recorder;
    use std::sync::Mutex;

    /// Hand-written observable that is not a producer.
    struct Failing;

    impl Observable<u8> for Failing {
        fn subscribe_dyn(&self, observer: &dyn Observer<u8>) {
            observer.on(Event::Next(1));
            observer.on(Event::Error(StreamError::fail("nope")));
        }
    }

    #[test]
    fn test_subscribe_owned_and_borrowed() {
        let rec = Recorder::new();
        Failing.subscribe(&rec);
        assert_eq!(
            rec.into_events(),
            vec![Event::Next(1), Event::Error(StreamError::fail("nope"))]
        );

        // Owned observer is consumed by the subscription.
        Failing.subscribe(Recorder::new());
    }

    #[test]
    fn test_subscribe_fn_matches_manual_wrap() {
        let via_fn = Mutex::new(Vec::new());
        Failing.subscribe_fn(|ev| via_fn.lock().unwrap().push(ev));

        let manual = Mutex::new(Vec::new());
        Failing.subscribe(AnonymousObserver::new(|ev| manual.lock().unwrap().push(ev)));

        assert_eq!(via_fn.into_inner().unwrap(), manual.into_inner().unwrap());
    }

    #[test]
    fn test_as_observable_is_identity() {
        let source = Failing;
        let erased = source.as_observable();
        assert!(std::ptr::eq(
            erased as *const dyn Observable<u8> as *const u8,
            &source as *const Failing as *const u8
        ));

        let rec = Recorder::new();
        erased.subscribe(&rec);
        assert_eq!(rec.len(), 2);
    }
}
