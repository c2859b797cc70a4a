//! # AnonymousObserver – observer from a closure
//!
//! Lets a caller subscribe with a plain function instead of authoring a
//! dedicated [`Sink`] type. The closure sits behind an [`ObserverBase`], so it
//! inherits the terminal-event guarantee.
//!
//! ## Example
//! ```rust
//! use rxcore::{AnonymousObserver, Event, Observer};
//!
//! let obs = AnonymousObserver::new(|ev: Event<&str>| println!("{ev:?}"));
//! obs.on(Event::Next("hello"));
//! obs.on(Event::Completed);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::events::Event;
use crate::observers::{Observer, ObserverBase, Sink};
use crate::resources::Resources;

/// Stores the user callback; its hook is "call the callback".
struct Callback<F>(F);

impl<T, F> Sink<T> for Callback<F>
where
    F: Fn(Event<T>),
{
    #[inline]
    fn on_core(&self, event: Event<T>) {
        (self.0)(event)
    }
}

/// Observer that forwards every accepted event to a stored callback.
pub struct AnonymousObserver<F> {
    inner: ObserverBase<Callback<F>>,
}

impl<F> AnonymousObserver<F> {
    /// Wraps `handler`. The handler is immutable for the observer's lifetime.
    #[must_use]
    pub fn new<T>(handler: F) -> Self
    where
        F: Fn(Event<T>),
    {
        Self {
            inner: ObserverBase::new(Callback(handler)),
        }
    }

    /// Same as [`AnonymousObserver::new`], counted in `resources` while alive.
    #[must_use]
    pub fn with_tracker<T>(handler: F, resources: &Arc<Resources>) -> Self
    where
        F: Fn(Event<T>),
    {
        Self {
            inner: ObserverBase::with_tracker(Callback(handler), resources),
        }
    }

    /// Returns `true` once a terminal event has been accepted.
    pub fn is_stopped(&self) -> bool {
        self.inner.is_stopped()
    }
}

impl<T, F> Observer<T> for AnonymousObserver<F>
where
    F: Fn(Event<T>),
{
    #[inline]
    fn on(&self, event: Event<T>) {
        self.inner.on(event)
    }
}

impl<F> fmt::Debug for AnonymousObserver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnonymousObserver")
            .field("stopped", &self.is_stopped())
            .finish_non_exhaustive()
    }
}
