//! # Events pushed from an observable to its observer.
//!
//! [`Event`] is a closed sum type with three variants:
//! - **Payload**: [`Event::Next`] carries one item; zero or more may occur.
//! - **Terminal**: [`Event::Error`] and [`Event::Completed`] end the stream.
//!
//! ## Stream invariant
//! Within one subscription, `Error` and `Completed` are mutually exclusive and
//! each occurs at most once; no `Next` follows a terminal event.
//! [`ObserverBase`](crate::ObserverBase) enforces this on the receiving side.
//!
//! ## Example
//! ```rust
//! use rxcore::{Event, StreamError};
//!
//! let ev: Event<i32> = Event::Next(7);
//! assert!(!ev.is_terminal());
//! assert_eq!(ev.value(), Some(&7));
//!
//! let ev: Event<i32> = Event::Error(StreamError::fail("boom"));
//! assert!(ev.is_terminal());
//! assert_eq!(ev.as_label(), "error");
//! ```

use crate::error::StreamError;

/// A single notification delivered to an [`Observer`](crate::Observer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<T> {
    /// One payload item.
    Next(T),

    /// The stream failed. Terminal.
    Error(StreamError),

    /// The stream finished successfully. Terminal.
    Completed,
}

impl<T> Event<T> {
    /// Returns `true` for [`Event::Error`] and [`Event::Completed`].
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::Error(_) | Event::Completed)
    }

    /// Returns `true` for [`Event::Next`].
    #[inline]
    pub fn is_next(&self) -> bool {
        matches!(self, Event::Next(_))
    }

    /// Borrows the payload of a [`Event::Next`].
    pub fn value(&self) -> Option<&T> {
        match self {
            Event::Next(v) => Some(v),
            _ => None,
        }
    }

    /// Consumes the event, returning the payload of a [`Event::Next`].
    pub fn into_value(self) -> Option<T> {
        match self {
            Event::Next(v) => Some(v),
            _ => None,
        }
    }

    /// Borrows the error of a [`Event::Error`].
    pub fn error(&self) -> Option<&StreamError> {
        match self {
            Event::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Event::Next(_) => "next",
            Event::Error(_) => "error",
            Event::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_classification() {
        assert!(!Event::Next(1).is_terminal());
        assert!(Event::<i32>::Completed.is_terminal());
        assert!(Event::<i32>::Error(StreamError::fail("x")).is_terminal());

        assert!(Event::Next(1).is_next());
        assert!(!Event::<i32>::Completed.is_next());
    }

    #[test]
    fn test_accessors() {
        let ev = Event::Next(String::from("a"));
        assert_eq!(ev.value().map(String::as_str), Some("a"));
        assert_eq!(ev.error(), None);
        assert_eq!(ev.into_value(), Some(String::from("a")));

        let ev: Event<String> = Event::Error(StreamError::fatal("b"));
        assert_eq!(ev.value(), None);
        assert_eq!(ev.error(), Some(&StreamError::fatal("b")));
        assert_eq!(ev.into_value(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Event::Next(()).as_label(), "next");
        assert_eq!(Event::<()>::Error(StreamError::fail("e")).as_label(), "error");
        assert_eq!(Event::<()>::Completed.as_label(), "completed");
    }
}
