//! # Example: log_observer
//!
//! Attaches the built-in [`LogObserver`] to both built-in producers.
//!
//! ## Run
//! Requires the `logging` feature.
//! ```bash
//! cargo run --example log_observer --features logging
//! ```

use rxcore::{empty, just, LogObserver, ObservableExt};

fn main() {
    just("hello").subscribe(LogObserver::new("just"));
    empty::<&str>().subscribe(LogObserver::new("empty"));
}
