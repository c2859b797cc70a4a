//! # Observers: the consuming side of a stream
//!
//! ```text
//!   Producer::run ── on(Event) ──► Observer
//!                                     │
//!              ┌──────────────────────┼───────────────────────┐
//!              ▼                      ▼                       ▼
//!      AnonymousObserver          Recorder               LogObserver
//!        (closure)            (in-memory tape)       (stdout, `logging`)
//!              └──────────────────────┼───────────────────────┘
//!                                     ▼
//!                       ObserverBase (terminal gate) ──► Sink::on_core
//! ```
//!
//! User-defined observers either:
//!   - implement [`Sink`] and wrap it in [`ObserverBase`] (gets the terminal-event guarantee), or
//!   - implement [`Observer`] directly (no guarantee; the implementation owns the invariant).

mod anonymous;
mod base;
#[cfg(feature = "logging")]
mod embedded;
mod observer;
mod recorder;

pub use anonymous::AnonymousObserver;
pub use base::{ObserverBase, StopFlag};
#[cfg(feature = "logging")]
pub use embedded::LogObserver;
pub use observer::{Observer, Sink};
pub use recorder::Recorder;
