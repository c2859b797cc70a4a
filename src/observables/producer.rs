//! # Producer: observable with a fixed subscribe step
//!
//! A [`Producer`] only says **what** to emit, in [`Producer::run`]. Every
//! producer is an [`Observable`] through a blanket impl whose `subscribe_dyn`
//! hands the observer straight to `run`:
//!
//! ```text
//! subscribe_dyn(observer)
//!   ├─► (subscribe-time setup: none yet; resource release / thread placement would go here)
//!   └─► run(observer) ──► on(Next)* ──► on(Completed | Error)
//! ```
//!
//! `run` executes synchronously on the subscriber's thread. It should push zero
//! or more `Next` events followed by exactly one terminal event and then return.
//!
//! # Example: custom producer
//! ```rust
//! use rxcore::{Event, ObservableExt, Observer, Producer, Recorder};
//!
//! struct Range(u32);
//!
//! impl Producer<u32> for Range {
//!     fn run(&self, observer: &dyn Observer<u32>) {
//!         for i in 0..self.0 {
//!             observer.on(Event::Next(i));
//!         }
//!         observer.on(Event::Completed);
//!     }
//! }
//!
//! let rec = Recorder::new();
//! Range(2).subscribe(&rec);
//! assert_eq!(rec.into_events(), vec![Event::Next(0), Event::Next(1), Event::Completed]);
//! ```

use crate::observables::Observable;
use crate::observers::Observer;

/// Emission logic of an observable.
pub trait Producer<T> {
    /// Pushes this producer's events into `observer`.
    fn run(&self, observer: &dyn Observer<T>);
}

impl<T, P> Observable<T> for P
where
    P: Producer<T>,
{
    #[inline]
    fn subscribe_dyn(&self, observer: &dyn Observer<T>) {
        self.run(observer);
    }
}
