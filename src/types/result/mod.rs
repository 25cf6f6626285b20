//! Value-based outcome type with an explicit success/failure state.
//!
//! [`Result<T>`] either holds a success payload of type `T` or a failure
//! [`Error`]. `Result<()>`, spelled plain `Result`, covers operations that
//! produce no value.
//!
//! The state is fixed at construction and cannot change afterwards; every
//! operator returns a new value.
//!
//! # Examples
//!
//! ```
//! use easy_result::{Error, Result};
//!
//! fn divide(a: i32, b: i32) -> Result<i32> {
//!     if b == 0 {
//!         return Result::failure(Error::new("Math.DivideByZero", "Cannot divide by zero."));
//!     }
//!     Result::success(a / b)
//! }
//!
//! assert_eq!(*divide(10, 2).value(), 5);
//! assert_eq!(divide(1, 0).error().code(), "Math.DivideByZero");
//! ```

use crate::fault;
use crate::types::Error;
use core::fmt::{self, Debug};

mod ops;
mod traits;

static NO_ERROR: Error = Error::NONE;

#[derive(Clone, PartialEq, Eq, Hash)]
enum State<T> {
    Success(T),
    Failure(Error),
}

/// Outcome of an operation: a success payload or a failure [`Error`].
///
/// Construct with [`Result::success`], [`Result::failure`], the shared
/// [`Result::SUCCESS`] constant, or the conversions in [`crate::convert`].
///
/// # Invariant
///
/// A success never carries an error and a failure never carries
/// [`Error::NONE`]. Attempting to build a failure from `Error::NONE` is a
/// programming error and panics.
///
/// # Examples
///
/// ```
/// use easy_result::{Error, Result};
///
/// let saved: Result = Result::SUCCESS;
/// assert!(saved.is_success());
///
/// let rejected: Result<u32> = Result::failure(Error::new("Quota.Exceeded", "Too many requests."));
/// assert!(rejected.is_failure());
/// assert_eq!(rejected.error().message(), "Too many requests.");
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Result<T = ()> {
    state: State<T>,
}

impl Result<()> {
    /// The shared success instance for operations without a payload.
    pub const SUCCESS: Result<()> = Result { state: State::Success(()) };
}

impl<T> Result<T> {
    /// Single checked entry point; every constructor funnels through here.
    ///
    /// A present value means success.
    #[inline]
    #[track_caller]
    fn from_parts(value: Option<T>, error: Error) -> Self {
        match value {
            Some(value) => {
                if !error.is_none() {
                    fault::invariant_violated(format_args!("{}", fault::SUCCESS_WITH_ERROR));
                }
                Self { state: State::Success(value) }
            },
            None => {
                if error.is_none() {
                    fault::invariant_violated(format_args!("{}", fault::FAILURE_WITHOUT_ERROR));
                }
                Self { state: State::Failure(error) }
            },
        }
    }

    /// Creates a successful result holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use easy_result::Result;
    ///
    /// let r = Result::success("ready");
    /// assert_eq!(*r.value(), "ready");
    /// ```
    #[inline]
    #[track_caller]
    pub fn success(value: T) -> Self {
        Self::from_parts(Some(value), Error::NONE)
    }

    /// Creates a failed result holding `error`.
    ///
    /// # Panics
    ///
    /// Panics if `error` equals [`Error::NONE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use easy_result::{Error, Result};
    ///
    /// let r: Result<i32> = Result::failure(Error::new("E1", "bad"));
    /// assert_eq!(r.error().code(), "E1");
    /// ```
    #[inline]
    #[track_caller]
    pub fn failure(error: Error) -> Self {
        Self::from_parts(None, error)
    }

    /// Returns `true` if the operation succeeded.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Returns `true` if the operation failed.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the failure error, or [`Error::NONE`] on success.
    #[must_use]
    #[inline]
    pub fn error(&self) -> &Error {
        match &self.state {
            State::Success(_) => &NO_ERROR,
            State::Failure(error) => error,
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the result is a failure. The panic message names the
    /// failure's error code. Check [`is_success`](Self::is_success) first or
    /// use one of the non-panicking accessors such as [`ok`](Self::ok).
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use easy_result::{Error, Result};
    ///
    /// let r: Result<i32> = Result::failure(Error::new("E1", "bad"));
    /// let _ = r.value(); // panics: "... (error code: E1)"
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Success(value) => value,
            State::Failure(error) => fault::value_of_failure(error.code()),
        }
    }

    /// Consumes the result and returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`value`](Self::value).
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(error) => fault::value_of_failure(error.code()),
        }
    }

    /// Converts into `Some(value)` on success, `None` on failure.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Converts into `Some(error)` on failure, `None` on success.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<Error> {
        match self.state {
            State::Success(_) => None,
            State::Failure(error) => Some(error),
        }
    }

    /// Splits the result into `(is_success, error)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use easy_result::{Error, Result};
    ///
    /// let r: Result = Result::failure(Error::new("Auth.Denied", "Access denied."));
    /// match r.deconstruct() {
    ///     (true, _) => unreachable!(),
    ///     (false, error) => assert_eq!(error.code(), "Auth.Denied"),
    /// }
    /// ```
    #[must_use]
    #[inline]
    pub fn deconstruct(&self) -> (bool, &Error) {
        (self.is_success(), self.error())
    }

    /// Borrows the payload, producing a `Result<&T>`.
    ///
    /// The error is cloned on failure.
    #[inline]
    pub fn as_ref(&self) -> Result<&T> {
        match &self.state {
            State::Success(value) => Result { state: State::Success(value) },
            State::Failure(error) => Result { state: State::Failure(error.clone()) },
        }
    }

    /// Drops the payload and keeps the outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use easy_result::Result;
    ///
    /// let created: Result<u64> = Result::success(17);
    /// assert_eq!(created.into_unit(), Result::SUCCESS);
    /// ```
    #[inline]
    pub fn into_unit(self) -> Result<()> {
        match self.state {
            State::Success(_) => Result::SUCCESS,
            State::Failure(error) => Result { state: State::Failure(error) },
        }
    }
}

impl<T: Debug> Debug for Result<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => f.debug_tuple("Success").field(value).finish(),
            State::Failure(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}
