//! # Built-in observers
//!
//! Small, self-contained implementations useful for demos and debugging.
//!
//! - [`LogObserver`]: prints events in a human-readable form (demo/debug).

mod log;

pub use log::LogObserver;
