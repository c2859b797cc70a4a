//! Stream events.
//!
//! This module groups the event **data model** exchanged between observables
//! and observers.
//!
//! ## Contents
//! - [`Event`] payload (`Next`) and terminal (`Error`, `Completed`) notifications
//!
//! ## Quick reference
//! - **Publishers**: [`Producer::run`](crate::Producer::run) implementations (`Just`, `Empty`, user producers).
//! - **Consumers**: [`Observer::on`](crate::Observer::on), gated by [`ObserverBase`](crate::ObserverBase).

mod event;

pub use event::Event;
