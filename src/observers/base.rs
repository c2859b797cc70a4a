//! # ObserverBase – terminal-event gate
//!
//! Wraps a [`Sink`] and guarantees it receives **at most one** terminal event,
//! no matter how many are pushed or from how many threads.
//!
//! ## Rules
//! - `Next` while running → forwarded to [`Sink::on_core`].
//! - `Next` after a terminal event → dropped silently.
//! - First `Error`/`Completed` → wins the stop flag, forwarded.
//! - Any later `Error`/`Completed` → loses the stop flag, dropped silently.
//!
//! ## Internal scheme
//! ```text
//! on(ev):
//!   ├─ Next(v)            => if !stopped.load()             { sink.on_core(ev) }
//!   └─ Error(_)|Completed => if stopped.cas(false -> true)  { sink.on_core(ev) }
//! ```
//!
//! The flag transition is a single `compare_exchange`, so two racing terminal
//! events cannot both observe "not stopped".

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::events::Event;
use crate::observers::{Observer, Sink};
use crate::resources::{ResourceGuard, Resources};

/// One-way "stopped" flag.
#[derive(Debug, Default)]
pub struct StopFlag(AtomicBool);

impl StopFlag {
    #[must_use]
    pub fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Flips the flag to stopped.
    ///
    /// Returns `true` for exactly one caller: the one that performed the transition.
    #[inline]
    pub fn try_stop(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Observer enforcing the terminal-event invariant in front of a [`Sink`].
///
/// Each subscription should get its own instance: once stopped, an
/// `ObserverBase` stays stopped.
#[derive(Debug)]
pub struct ObserverBase<S> {
    sink: S,
    stop: StopFlag,
    _guard: Option<ResourceGuard>,
}

impl<S> ObserverBase<S> {
    /// Wraps `sink` with a fresh (not stopped) flag.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            stop: StopFlag::new(),
            _guard: None,
        }
    }

    /// Same as [`ObserverBase::new`], counted in `resources` while alive.
    #[must_use]
    pub fn with_tracker(sink: S, resources: &Arc<Resources>) -> Self {
        Self {
            sink,
            stop: StopFlag::new(),
            _guard: Some(resources.track()),
        }
    }

    /// Returns `true` once a terminal event has been accepted.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Borrows the wrapped sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Unwraps the sink, releasing any resource guard.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<T, S> Observer<T> for ObserverBase<S>
where
    S: Sink<T>,
{
    fn on(&self, event: Event<T>) {
        match event {
            Event::Next(_) => {
                if !self.stop.is_stopped() {
                    self.sink.on_core(event);
                }
            }
            Event::Error(_) | Event::Completed => {
                if self.stop.try_stop() {
                    self.sink.on_core(event);
                }
            }
        }
    }
}
