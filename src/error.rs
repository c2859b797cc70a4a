//! Error values carried by streams.
//!
//! A stream never raises its failure: it delivers it as data, inside
//! [`Event::Error`](crate::Event::Error). [`StreamError`] is that payload.
//!
//! Like every other event payload it provides helper methods (`as_label`, `as_message`)
//! for logging/metrics.

use thiserror::Error;

/// # Failure reason of a stream.
///
/// Carried by the terminal [`Event::Error`](crate::Event::Error) variant.
/// Producers shipped with this crate never construct one; user producers do.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// The stream failed; the message describes why.
    #[error("stream failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// The stream hit an unrecoverable condition.
    #[error("fatal stream error: {error}")]
    Fatal {
        /// The underlying error message.
        error: String,
    },
}

impl StreamError {
    /// Builds a [`StreamError::Fail`] from any message.
    pub fn fail(error: impl Into<String>) -> Self {
        StreamError::Fail {
            error: error.into(),
        }
    }

    /// Builds a [`StreamError::Fatal`] from any message.
    pub fn fatal(error: impl Into<String>) -> Self {
        StreamError::Fatal {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use rxcore::StreamError;
    ///
    /// let err = StreamError::fail("connection reset");
    /// assert_eq!(err.as_label(), "stream_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StreamError::Fail { .. } => "stream_failed",
            StreamError::Fatal { .. } => "stream_fatal",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            StreamError::Fail { error } => format!("error: {error}"),
            StreamError::Fatal { error } => format!("fatal: {error}"),
        }
    }

    /// Indicates whether the failure is unrecoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StreamError::Fatal { .. })
    }
}

impl From<String> for StreamError {
    fn from(error: String) -> Self {
        StreamError::Fail { error }
    }
}

impl From<&str> for StreamError {
    fn from(error: &str) -> Self {
        StreamError::fail(error)
    }
}
