//! Composition operators over [`Result`].
//!
//! Every operator consumes its input and returns a new value. None of them
//! catches panics raised by the closures they call.

use super::{Result, State};
use crate::types::Error;

impl<T> Result<T> {
    /// Runs `on_success` with the payload or `on_failure` with the error.
    ///
    /// Exactly one closure is called and its output is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use easy_result::{Error, Result};
    ///
    /// let render = |r: Result<i32>| {
    ///     r.match_with(|v| format!("ok:{v}"), |e| format!("err:{}", e.code()))
    /// };
    ///
    /// assert_eq!(render(Result::success(42)), "ok:42");
    /// assert_eq!(render(Result::failure(Error::new("E1", "bad"))), "err:E1");
    /// ```
    #[inline]
    pub fn match_with<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(Error) -> U,
    {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(error) => on_failure(error),
        }
    }

    /// Transforms the payload of a success.
    ///
    /// A failure is carried over with the very same error and `f` is never
    /// called.
    ///
    /// # Examples
    ///
    /// ```
    /// use easy_result::Result;
    ///
    /// let doubled = Result::success(5).map(|x| x * 2);
    /// assert_eq!(*doubled.value(), 10);
    /// ```
    #[inline]
    #[track_caller]
    pub fn map<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Success(value) => Result::success(f(value)),
            State::Failure(error) => Result::failure(error),
        }
    }

    /// Calls `action` with the payload of a success and returns `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use easy_result::Result;
    ///
    /// let mut seen = Vec::new();
    /// let r = Result::success(3).tap(|v| seen.push(*v));
    /// assert_eq!(seen, vec![3]);
    /// assert_eq!(r, Result::success(3));
    /// ```
    #[inline]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let State::Success(value) = &self.state {
            action(value);
        }
        self
    }

    /// Calls `action` with the error of a failure and returns `self`.
    #[inline]
    pub fn tap_error<F>(self, action: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let State::Failure(error) = &self.state {
            action(error);
        }
        self
    }

    /// Turns a success into `failure(error)` when `predicate` rejects its payload.
    ///
    /// A failure is returned unchanged without evaluating `predicate`.
    ///
    /// # Panics
    ///
    /// Panics if the predicate rejects the payload and `error` is
    /// [`Error::NONE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use easy_result::{Error, Result};
    ///
    /// let too_young = Error::new("Age.TooYoung", "Must be at least 18.");
    ///
    /// let adult = Result::success(30).ensure(|age| *age >= 18, too_young.clone());
    /// assert!(adult.is_success());
    ///
    /// let minor = Result::success(12).ensure(|age| *age >= 18, too_young.clone());
    /// assert_eq!(minor.error(), &too_young);
    /// ```
    #[inline]
    #[track_caller]
    pub fn ensure<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.ensure_with(predicate, |_| error)
    }

    /// Like [`ensure`](Self::ensure), but builds the error only when the
    /// predicate rejects the payload.
    ///
    /// ```
    /// use easy_result::{Error, Result};
    ///
    /// let r = Result::success(250_u32).ensure_with(
    ///     |len| *len <= 200,
    ///     |len| Error::new("Name.TooLong", format!("{len} characters exceeds the limit of 200.")),
    /// );
    /// assert_eq!(r.error().message(), "250 characters exceeds the limit of 200.");
    /// ```
    #[inline]
    #[track_caller]
    pub fn ensure_with<P, E>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: FnOnce(&T) -> Error,
    {
        if let State::Success(value) = &self.state {
            if !predicate(value) {
                return Self::failure(error(value));
            }
        }
        self
    }

    /// Chains an operation that itself may fail.
    ///
    /// ```
    /// use easy_result::{Error, Result};
    ///
    /// fn parse(input: &str) -> Result<u16> {
    ///     input.parse::<u16>().map_or_else(
    ///         |_| Result::failure(Error::new("Port.Invalid", "Not a port number.")),
    ///         Result::success,
    ///     )
    /// }
    ///
    /// let port = Result::success("8080").and_then(parse);
    /// assert_eq!(*port.value(), 8080);
    /// ```
    #[inline]
    #[track_caller]
    pub fn and_then<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        match self.state {
            State::Success(value) => f(value),
            State::Failure(error) => Result::failure(error),
        }
    }

    /// Gives a failure the chance to recover; a success is returned unchanged.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Self,
    {
        match self.state {
            State::Success(value) => Self { state: State::Success(value) },
            State::Failure(error) => f(error),
        }
    }

    /// Rewrites the error of a failure.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns [`Error::NONE`].
    #[inline]
    #[track_caller]
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self.state {
            State::Success(value) => Self { state: State::Success(value) },
            State::Failure(error) => Self::failure(f(error)),
        }
    }

    /// Returns the payload, or `default` on failure.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) => default,
        }
    }

    /// Returns the payload, or computes one from the error on failure.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        match self.state {
            State::Success(value) => value,
            State::Failure(error) => f(error),
        }
    }
}

impl Result<()> {
    /// [`match_with`](Result::match_with) for results without a payload.
    ///
    /// ```
    /// use easy_result::{Error, Result};
    ///
    /// let status = Result::SUCCESS.match_unit(|| 204, |_| 500);
    /// assert_eq!(status, 204);
    ///
    /// let failed: Result = Result::failure(Error::new("Db.Down", "Database unavailable."));
    /// assert_eq!(failed.match_unit(|| 204, |_| 500), 500);
    /// ```
    #[inline]
    pub fn match_unit<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce() -> U,
        F: FnOnce(Error) -> U,
    {
        self.match_with(|()| on_success(), on_failure)
    }
}
