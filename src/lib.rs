//! # rxcore
//!
//! **rxcore** is a minimal push-based reactive stream core for Rust.
//!
//! It provides the subscription protocol between a producer ([`Observable`])
//! and a consumer ([`Observer`]), the event algebra they exchange ([`Event`]),
//! and the terminal-event guarantee: an observer built on [`ObserverBase`]
//! processes at most one terminal event, exactly once, even when several
//! threads race to deliver one.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   just(v)    │   │   empty()    │   │ user Producer│
//!     │   Just<T>    │   │   Empty<T>   │   │  (run logic) │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            └──────────────────┼──────────────────┘
//!                               ▼  blanket impl
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Observable<T>::subscribe_dyn(&dyn Observer<T>)                    │
//! │  ObservableExt<T>::{subscribe(O), subscribe_fn(F), as_observable}  │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                ▼  Producer::run (synchronous)
//!                   on(Next)* ──► on(Completed | Error)
//!                                ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  ObserverBase<S>  (AtomicBool stop flag, compare-and-swap)        │
//! │   - Next after terminal      → dropped                            │
//! │   - second terminal          → dropped                            │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                ▼
//!                       Sink<T>::on_core(Event<T>)
//!                 AnonymousObserver │ Recorder │ LogObserver │ user sink
//! ```
//!
//! ### Lifecycle
//! ```text
//! subscribe(observer)
//!   ├─► subscribe_dyn(&observer)
//!   ├─► Producer::run(&observer)
//!   │       ├─► on(Next(v))     ── zero or more
//!   │       └─► on(Completed)   ── or on(Error(e)); exactly one
//!   └─► return: the stream is over, the observer is dropped
//! ```
//!
//! ## Features
//! | Area              | Description                                                | Key types / traits                         |
//! |-------------------|------------------------------------------------------------|--------------------------------------------|
//! | **Events**        | Payload and terminal notifications.                        | [`Event`], [`StreamError`]                 |
//! | **Observers**     | Consumers with the terminal-event guarantee.               | [`Observer`], [`Sink`], [`ObserverBase`]   |
//! | **Adapters**      | Subscribe with a closure or record a stream.               | [`AnonymousObserver`], [`Recorder`]        |
//! | **Observables**   | Subscribe contract and producers.                          | [`Observable`], [`ObservableExt`], [`Producer`] |
//! | **Factories**     | Built-in producers.                                        | [`just`], [`empty`]                        |
//! | **Accounting**    | Count live observers in tests.                             | [`Resources`]                              |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogObserver`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use rxcore::{empty, just, Event, ObservableExt};
//!
//! just(1).subscribe_fn(|ev: Event<i32>| println!("{ev:?}"));
//! // Next(1)
//! // Completed
//!
//! empty::<i32>().subscribe_fn(|ev: Event<i32>| println!("{ev:?}"));
//! // Completed
//! ```
mod error;
mod events;
mod observables;
mod observers;
mod resources;

// ---- Public re-exports ----

pub use error::StreamError;
pub use events::Event;
pub use observables::{empty, just, Empty, Just, Observable, ObservableExt, Producer};
pub use observers::{AnonymousObserver, Observer, ObserverBase, Recorder, Sink, StopFlag};
pub use resources::{ResourceGuard, Resources};

// Optional: expose a simple built-in logger observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;
