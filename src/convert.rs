//! Conversion helpers between bare values, [`Error`], `core::result::Result`
//! and [`Result`].
//!
//! Rust has no implicit conversions, so the ergonomic "return a bare value or
//! a bare error" style is expressed through `From` impls and the named
//! constructors below. An absent value (`None`) is a failure with
//! [`Error::NULL_VALUE`]; every present value is a success, including `0`,
//! `""` and `false`.
//!
//! # Examples
//!
//! ```
//! use easy_result::{Error, Result};
//!
//! fn find_user(id: u32) -> Result<&'static str> {
//!     if id == 0 {
//!         return Error::new("User.InvalidId", "Id must be positive.").into();
//!     }
//!     [(1, "alice"), (2, "bob")]
//!         .iter()
//!         .find(|(key, _)| *key == id)
//!         .map(|(_, name)| *name)
//!         .into()
//! }
//!
//! assert_eq!(*find_user(2).value(), "bob");
//! assert_eq!(find_user(9).error(), &Error::NULL_VALUE);
//! assert_eq!(find_user(0).error().code(), "User.InvalidId");
//! ```

use crate::types::alloc_type::Vec;
use crate::types::{Error, Result};

impl<T> Result<T> {
    /// Coerces an optional value: `Some(v)` is a success, `None` a failure
    /// carrying [`Error::NULL_VALUE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use easy_result::{Error, Result};
    ///
    /// assert!(Result::from_value(Some(0)).is_success());
    /// assert!(Result::from_value(Some(false)).is_success());
    /// assert_eq!(Result::<i32>::from_value(None).error(), &Error::NULL_VALUE);
    /// ```
    #[inline]
    pub fn from_value(value: Option<T>) -> Self {
        value.into()
    }

    /// Coerces an error into a failure.
    ///
    /// # Panics
    ///
    /// Panics if `error` is [`Error::NONE`].
    #[inline]
    #[track_caller]
    pub fn from_error(error: Error) -> Self {
        error.into()
    }

    /// Converts into a standard `Result`, so `?` can be used at call sites
    /// that return `core::result::Result<_, Error>`.
    ///
    /// ```
    /// use easy_result::{Error, Result};
    ///
    /// fn total(a: Result<u32>, b: Result<u32>) -> core::result::Result<u32, Error> {
    ///     Ok(a.into_std()? + b.into_std()?)
    /// }
    ///
    /// assert_eq!(total(Result::success(1), Result::success(2)), Ok(3));
    /// ```
    #[inline]
    pub fn into_std(self) -> core::result::Result<T, Error> {
        self.into()
    }
}

/// Wraps a standard `Result` whose error side is already an [`Error`].
///
/// # Panics
///
/// Panics on `Err(Error::NONE)`.
///
/// # Examples
///
/// ```
/// use easy_result::convert::from_std_result;
/// use easy_result::Error;
///
/// let parsed: Result<u8, Error> = "12".parse().map_err(|_| Error::new("Parse", "not a number"));
/// assert_eq!(*from_std_result(parsed).value(), 12);
/// ```
#[inline]
#[track_caller]
pub fn from_std_result<T>(result: core::result::Result<T, Error>) -> Result<T> {
    result.into()
}

/// Unwraps into a standard `Result`.
#[inline]
pub fn into_std_result<T>(result: Result<T>) -> core::result::Result<T, Error> {
    result.into()
}

/// Maps any standard `Result` onto [`Result`], building the [`Error`] from the
/// foreign error.
///
/// # Examples
///
/// ```
/// use easy_result::convert::from_std_result_with;
/// use easy_result::Error;
///
/// let r = from_std_result_with("x1".parse::<u32>(), |e| Error::new("Parse.Int", e.to_string()));
/// assert_eq!(r.error().code(), "Parse.Int");
/// ```
#[inline]
#[track_caller]
pub fn from_std_result_with<T, E, F>(result: core::result::Result<T, E>, f: F) -> Result<T>
where
    F: FnOnce(E) -> Error,
{
    match result {
        Ok(value) => Result::success(value),
        Err(error) => Result::failure(f(error)),
    }
}

/// Collects payloads into a `Vec`, returning the first failure encountered.
///
/// # Examples
///
/// ```
/// use easy_result::convert::collect_results;
/// use easy_result::{Error, Result};
///
/// let all = collect_results([Result::success(1), Result::success(2)]);
/// assert_eq!(all.value(), &vec![1, 2]);
///
/// let bad = Error::new("Row.Invalid", "row 2 is malformed");
/// let some = collect_results([Result::success(1), Result::failure(bad.clone())]);
/// assert_eq!(some.error(), &bad);
/// ```
#[inline]
pub fn collect_results<T, I>(results: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = Result<T>>,
{
    results.into_iter().collect()
}
