//! Reporting of programming-error faults.
//!
//! A fault is a broken invariant: building a success that carries an error,
//! a failure that carries [`Error::NONE`](crate::Error::NONE), or reading the
//! value of a failure. Faults are bugs in the calling code, so they panic
//! instead of being turned into an [`Error`](crate::Error).

use core::fmt::Arguments;

pub(crate) const SUCCESS_WITH_ERROR: &str = "A success result cannot contain an error.";
pub(crate) const FAILURE_WITHOUT_ERROR: &str = "A failure result must contain an error.";

/// Reports the violated invariant and panics.
///
/// With the `tracing` feature the diagnostic is also emitted as an
/// `error`-level event before unwinding starts.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn invariant_violated(args: Arguments<'_>) -> ! {
    #[cfg(feature = "tracing")]
    {
        let location = core::panic::Location::caller();
        tracing::error!(
            target: "easy_result",
            file = location.file(),
            line = location.line(),
            "{}",
            args
        );
    }
    panic!("{}", args)
}

/// Panic message used when the value of a failure is read.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn value_of_failure(code: &str) -> ! {
    invariant_violated(format_args!(
        "The value of a failure result can not be accessed. (error code: {})",
        code
    ))
}
