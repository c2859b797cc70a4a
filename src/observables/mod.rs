//! Observables and their producers.
//!
//! ## Contents
//! - [`Observable`] / [`ObservableExt`] the subscribe contract and its caller-facing API
//! - [`Producer`] observables whose subscribe step is fixed to "run the emission logic"
//! - [`Empty`], [`Just`] the two built-in producers, built by [`empty`] and [`just`]
//!
//! ## Quick wiring
//! ```text
//! just(v) / empty()  ──►  Just<T> / Empty<T>  (impl Producer<T>)
//!      └─► blanket impl Observable<T>
//!           └─► ObservableExt<T>::{subscribe, subscribe_fn, as_observable}
//! ```

mod empty;
mod just;
mod observable;
mod producer;

pub use empty::Empty;
pub use just::Just;
pub use observable::{Observable, ObservableExt};
pub use producer::Producer;

/// Builds a producer emitting `value` then completing.
///
/// # Example
/// ```rust
/// use rxcore::{just, Event, ObservableExt, Recorder};
///
/// let rec = Recorder::new();
/// just(1).subscribe(&rec);
/// assert_eq!(rec.into_events(), vec![Event::Next(1), Event::Completed]);
/// ```
#[must_use]
pub fn just<T>(value: T) -> Just<T> {
    Just::new(value)
}

/// Builds a producer that completes without emitting items.
///
/// # Example
/// ```rust
/// use rxcore::{empty, Event, ObservableExt, Recorder};
///
/// let rec = Recorder::<u8>::new();
/// empty().subscribe(&rec);
/// assert_eq!(rec.into_events(), vec![Event::Completed]);
/// ```
#[must_use]
pub fn empty<T>() -> Empty<T> {
    Empty::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use crate::observers::{AnonymousObserver, Recorder};
    use crate::resources::Resources;
    use std::sync::{Arc, Mutex};

    fn record<T, O>(source: &O) -> Vec<Event<T>>
    where
        O: Observable<T> + ?Sized,
    {
        let rec = Recorder::new();
        source.subscribe(&rec);
        rec.into_events()
    }

    #[test]
    fn test_just_sequence_for_several_types() {
        assert_eq!(record(&just(1)), vec![Event::Next(1), Event::Completed]);
        assert_eq!(record(&just("s")), vec![Event::Next("s"), Event::Completed]);
        assert_eq!(record(&just(())), vec![Event::Next(()), Event::Completed]);
        assert_eq!(
            record(&just(Some(2.5f64.to_bits()))),
            vec![Event::Next(Some(2.5f64.to_bits())), Event::Completed]
        );
    }

    #[test]
    fn test_empty_sequence_for_several_types() {
        assert_eq!(record(&empty::<i32>()), vec![Event::Completed]);
        assert_eq!(record(&empty::<String>()), vec![Event::Completed]);
        assert_eq!(record(&empty::<Vec<u8>>()), vec![Event::Completed]);
    }

    #[test]
    fn test_same_observable_subscribed_twice_is_independent() {
        let source = just(String::from("x"));

        let first = Recorder::new();
        source.subscribe(&first);
        // First observer is stopped; a new one must still see the whole stream.
        assert!(first.is_stopped());

        let second = Recorder::new();
        source.subscribe(&second);

        let expected = vec![Event::Next(String::from("x")), Event::Completed];
        assert_eq!(first.into_events(), expected);
        assert_eq!(second.into_events(), expected);
    }

    #[test]
    fn test_reusing_a_stopped_observer_delivers_nothing() {
        let rec = Recorder::new();
        just(1).subscribe(&rec);
        just(2).subscribe(&rec);
        assert_eq!(rec.into_events(), vec![Event::Next(1), Event::Completed]);
    }

    #[test]
    fn test_callback_subscribe_equivalence() {
        for source in [just(5), just(6)] {
            let via_fn = Mutex::new(Vec::new());
            source.subscribe_fn(|ev| via_fn.lock().unwrap().push(ev));

            let manual = Mutex::new(Vec::new());
            source.subscribe(AnonymousObserver::new(|ev| manual.lock().unwrap().push(ev)));

            assert_eq!(via_fn.into_inner().unwrap(), manual.into_inner().unwrap());
        }

        let via_fn = Mutex::new(Vec::new());
        empty::<u8>().subscribe_fn(|ev| via_fn.lock().unwrap().push(ev));
        assert_eq!(via_fn.into_inner().unwrap(), vec![Event::Completed]);
    }

    #[test]
    fn test_trait_objects_subscribe_like_concrete_types() {
        let sources: Vec<Box<dyn Observable<i32>>> =
            vec![Box::new(just(3)), Box::new(empty::<i32>())];

        let got: Vec<_> = sources.iter().map(|s| record(&**s)).collect();
        assert_eq!(
            got,
            vec![vec![Event::Next(3), Event::Completed], vec![Event::Completed]]
        );
    }

    #[test]
    fn test_subscriptions_release_tracked_observers() {
        let res = Arc::new(Resources::new());

        let noop = |_ev: Event<i32>| {};
        for i in 0..10 {
            just(i).subscribe(AnonymousObserver::with_tracker(noop, &res));
            empty::<i32>().subscribe(AnonymousObserver::with_tracker(noop, &res));
        }

        assert_eq!(res.total(), 0);
        assert_eq!(res.acquired(), 20);
    }
}
