//! # Just – a single item, then completion
//!
//! ```text
//! run(observer) ──► on(Next(value.clone())) ──► on(Completed)
//! ```
//!
//! The stored value is never mutated; each subscription receives its own clone.

use crate::events::Event;
use crate::observables::Producer;
use crate::observers::Observer;

/// Producer that emits one stored value followed by [`Event::Completed`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Just<T> {
    value: T,
}

impl<T> Just<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrows the stored value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Producer<T> for Just<T> {
    fn run(&self, observer: &dyn Observer<T>) {
        observer.on(Event::Next(self.value.clone()));
        observer.on(Event::Completed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observables::ObservableExt;
    use crate::observers::Recorder;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_emits_value_then_completed() {
        let rec = Recorder::new();
        Just::new(vec![1, 2]).subscribe(&rec);
        assert_eq!(
            rec.into_events(),
            vec![Event::Next(vec![1, 2]), Event::Completed]
        );
    }

    #[test]
    fn test_value_is_cloned_per_subscription() {
        let shared = Arc::new(AtomicUsize::new(0));
        let source = Just::new(Arc::clone(&shared));

        source.subscribe_fn(|ev: Event<Arc<AtomicUsize>>| {
            if let Event::Next(counter) = ev {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        source.subscribe_fn(|ev: Event<Arc<AtomicUsize>>| {
            if let Event::Next(counter) = ev {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert_eq!(shared.load(Ordering::SeqCst), 2);
        // Clones handed to subscribers are gone; the producer keeps its own.
        assert_eq!(Arc::strong_count(&shared), 2);
        assert!(Arc::ptr_eq(source.value(), &shared));
    }
}
