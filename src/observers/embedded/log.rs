//! # LogObserver — simple event printer
//!
//! A minimal observer that prints incoming [`Event`]s to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! [next] stream="numbers" value=1
//! [error] stream="numbers" label=stream_failed msg="error: boom"
//! [completed] stream="numbers"
//! ```

use std::fmt::Debug;

use crate::events::Event;
use crate::observers::{Observer, ObserverBase, Sink};

struct Printer {
    name: &'static str,
}

impl Printer {
    fn line<T: Debug>(&self, e: &Event<T>) -> String {
        match e {
            Event::Next(v) => format!("[next] stream={:?} value={:?}", self.name, v),
            Event::Error(err) => format!(
                "[error] stream={:?} label={} msg={:?}",
                self.name,
                err.as_label(),
                err.as_message()
            ),
            Event::Completed => format!("[completed] stream={:?}", self.name),
        }
    }
}

impl<T: Debug> Sink<T> for Printer {
    fn on_core(&self, e: Event<T>) {
        println!("{}", self.line(&e));
    }
}

/// Event printer observer.
pub struct LogObserver {
    inner: ObserverBase<Printer>,
}

impl LogObserver {
    /// Construct a new [`LogObserver`] labelled `name` in every line.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            inner: ObserverBase::new(Printer { name }),
        }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new("stream")
    }
}

impl<T: Debug> Observer<T> for LogObserver {
    fn on(&self, e: Event<T>) {
        self.inner.on(e)
    }
}
