//! Domain error descriptor carried by failed results.
//!
//! An [`Error`] is an immutable `(code, message)` pair. The code is a stable,
//! machine-readable identifier; the message is meant for humans. Two errors
//! are equal when both fields are equal.
//!
//! # Examples
//!
//! ```
//! use easy_result::Error;
//!
//! let err = Error::new("User.NotFound", "The user with the given id was not found.");
//! assert_eq!(err.code(), "User.NotFound");
//! assert_eq!(err.to_string(), "User.NotFound");
//! assert_ne!(err, Error::NONE);
//! ```

use crate::types::alloc_type::{Cow, String};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable `(code, message)` pair identifying a domain failure.
///
/// The empty code is reserved for [`Error::NONE`], the "no error" marker held
/// by every successful [`Result`](crate::Result). Nothing stops a caller from
/// building `Error::new("", "")`; such a value simply compares equal to
/// `Error::NONE`.
///
/// # String conversion
///
/// Every string view of an error yields its **code** only: [`Display`],
/// `to_string()`, `String::from(error)` and `AsRef<str>`. The message is
/// available through [`Error::message`].
///
/// # Serde Support
///
/// With the `serde` feature `Error` serializes as `{"code": ..., "message": ...}`.
/// The wire format is left to the caller.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Error {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl Error {
    /// The "no error" marker, `("", "")`.
    pub const NONE: Error = Error::from_static("", "");

    /// Produced when a result is coerced from an absent value.
    pub const NULL_VALUE: Error =
        Error::from_static("Error.NullValue", "The specified result value is null.");

    /// Creates an error from a code and a message.
    ///
    /// Both arguments accept `&'static str` or an owned `String`. No
    /// validation is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use easy_result::Error;
    ///
    /// let id = 7;
    /// let err = Error::new("Order.Missing", format!("order {id} does not exist"));
    /// assert_eq!(err.message(), "order 7 does not exist");
    /// ```
    #[inline]
    pub fn new<C, M>(code: C, message: M) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self { code: code.into(), message: message.into() }
    }

    /// `const` constructor for errors declared as constants.
    ///
    /// ```
    /// use easy_result::Error;
    ///
    /// const EMAIL_TAKEN: Error = Error::from_static("User.EmailTaken", "The email is already in use.");
    /// assert_eq!(EMAIL_TAKEN.code(), "User.EmailTaken");
    /// ```
    #[inline]
    pub const fn from_static(code: &'static str, message: &'static str) -> Self {
        Self { code: Cow::Borrowed(code), message: Cow::Borrowed(message) }
    }

    /// Returns the stable error code.
    #[must_use]
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this error equals [`Error::NONE`].
    #[must_use]
    #[inline]
    pub fn is_none(&self) -> bool {
        self.code.is_empty() && self.message.is_empty()
    }
}

impl Default for Error {
    #[inline]
    fn default() -> Self {
        Self::NONE
    }
}

impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl AsRef<str> for Error {
    #[inline]
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl From<Error> for String {
    #[inline]
    fn from(error: Error) -> Self {
        error.code.into_owned()
    }
}

impl From<&Error> for String {
    #[inline]
    fn from(error: &Error) -> Self {
        String::from(error.code())
    }
}

impl core::error::Error for Error {}
