//! Tracing integration for easy-result.
//!
//! Records failures as `tracing` events without altering the result.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! easy-result = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::{Error, Result};

impl<T> Result<T> {
    /// Emits a `warn`-level event for a failure and returns `self` unchanged.
    ///
    /// The event carries the error's code and message as the `error_code` and
    /// `error_message` fields. Nothing is emitted for a success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use easy_result::{Error, Result};
    ///
    /// let r: Result<u32> = Result::failure(Error::new("Cache.Miss", "Key not cached."));
    /// let r = r.trace_failure();
    /// assert!(r.is_failure());
    /// ```
    #[inline]
    pub fn trace_failure(self) -> Self {
        self.tap_error(record_failure)
    }

    /// Like [`trace_failure`](Self::trace_failure), but emits the event
    /// inside `span`, so subscribers attribute the failure to it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use easy_result::{Error, Result};
    /// use tracing::info_span;
    ///
    /// let span = info_span!("load_profile", user_id = 42);
    /// let r: Result<()> = Result::failure(Error::new("Profile.Missing", "No profile."));
    /// assert!(r.trace_failure_in(&span).is_failure());
    /// ```
    #[inline]
    pub fn trace_failure_in(self, span: &Span) -> Self {
        self.tap_error(|error| span.in_scope(|| record_failure(error)))
    }
}

fn record_failure(error: &Error) {
    tracing::warn!(
        target: "easy_result",
        error_code = error.code(),
        error_message = error.message(),
        "operation failed"
    );
}
