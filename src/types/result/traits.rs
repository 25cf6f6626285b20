use super::{Result, State};
use crate::types::Error;

impl<T> From<Option<T>> for Result<T> {
    /// `Some(value)` becomes a success, `None` becomes a failure with
    /// [`Error::NULL_VALUE`].
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::success(value),
            None => Self::failure(Error::NULL_VALUE),
        }
    }
}

impl<T> From<Error> for Result<T> {
    /// Always produces a failure.
    ///
    /// # Panics
    ///
    /// Panics if `error` is [`Error::NONE`].
    #[inline]
    #[track_caller]
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

impl<T> From<core::result::Result<T, Error>> for Result<T> {
    /// # Panics
    ///
    /// Panics on `Err(Error::NONE)`.
    #[inline]
    #[track_caller]
    fn from(result: core::result::Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T> From<Result<T>> for core::result::Result<T, Error> {
    #[inline]
    fn from(result: Result<T>) -> Self {
        match result.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
        }
    }
}

impl<T, C> FromIterator<Result<T>> for Result<C>
where
    C: FromIterator<T>,
{
    /// Collects every payload, stopping at the first failure.
    fn from_iter<I: IntoIterator<Item = Result<T>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|result| match result.state {
                State::Success(value) => Some(value),
                State::Failure(error) => {
                    failure = Some(error);
                    None
                },
            })
            .collect();

        match failure {
            Some(error) => Self::failure(error),
            None => Self::success(collected),
        }
    }
}
