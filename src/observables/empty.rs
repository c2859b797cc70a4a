//! # Empty – completes immediately
//!
//! ```text
//! run(observer) ──► on(Completed)
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::events::Event;
use crate::observables::Producer;
use crate::observers::Observer;

/// Producer that emits no items, only [`Event::Completed`].
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Producer<T> for Empty<T> {
    fn run(&self, observer: &dyn Observer<T>) {
        observer.on(Event::Completed);
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}
