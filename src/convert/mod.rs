//! Conversion helpers between `Result` and [`Outcome`].
//!
//! These adapters let code that speaks `Result` adopt outcomes one call site
//! at a time, and flatten outcomes back into plain `Result`s at API
//! boundaries that only want the first error.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let outcome = result_to_outcome::<u8, &str>(Err("empty payload"));
//! assert!(outcome.is_failure());
//!
//! let first = outcome_to_result(Outcome::<u8>::fail_many(["bad header", "bad body"]));
//! assert_eq!(first.unwrap_err().message(), "bad header");
//! ```

use core::iter::FusedIterator;

use crate::outcome::Outcome;
use crate::types::{Error, Errors};

/// Converts an [`Outcome`] to a `Result`, keeping only the first error.
///
/// Use [`Outcome::into_result`] to keep every error instead.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::ok(3)).ok(), Some(3));
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Error> {
    outcome.into_result().map_err(Errors::into_first)
}

/// Converts a `Result` to an [`Outcome`], turning `Err(e)` into one error.
///
/// Same as `Outcome::from(result)`.
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Into<Error>,
{
    Outcome::from(result)
}

/// Flattens a nested outcome.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::flatten;
/// use outcome_rail::Outcome;
///
/// let nested = Outcome::ok(Outcome::<i32>::fail("inner"));
/// assert_eq!(flatten(nested).failure().unwrap().message(), "inner");
/// ```
#[inline]
pub fn flatten<T>(outcome: Outcome<Outcome<T>>) -> Outcome<T> {
    outcome.and_then(|inner| inner)
}

/// Builds a valueless outcome from a list of errors: success when the list is
/// empty, otherwise a failure carrying every error in order.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_errors;
/// use outcome_rail::Outcome;
///
/// assert_eq!(collect_errors(Vec::<&str>::new()), Outcome::OK);
/// assert_eq!(collect_errors(["no name", "no email"]).errors().len(), 2);
/// ```
#[inline]
pub fn collect_errors<E, I>(errors: I) -> Outcome
where
    I: IntoIterator<Item = E>,
    E: Into<Error>,
{
    match Errors::from_iter_checked(errors.into_iter().map(Into::into)) {
        Some(errors) => Outcome::Failure(errors),
        None => Outcome::OK,
    }
}

/// Iterator returned by [`split_errors`].
pub enum SplitErrorsIter<T> {
    Success(Option<T>),
    Failure(<Errors as IntoIterator>::IntoIter),
}

impl<T> Iterator for SplitErrorsIter<T> {
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Success(value) => value.take().map(Ok),
            Self::Failure(errors) => errors.next().map(Err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Success(value) => {
                let len = usize::from(value.is_some());
                (len, Some(len))
            },
            Self::Failure(errors) => errors.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for SplitErrorsIter<T> {}
impl<T> FusedIterator for SplitErrorsIter<T> {}

/// Splits an [`Outcome`] into individual `Result`s.
///
/// Yields `Ok(value)` once for a success, or one `Err(error)` per error for a
/// failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::split_errors;
/// use outcome_rail::Outcome;
///
/// let failed = Outcome::<i32>::fail_many(["too short", "no digit"]);
/// let messages: Vec<_> = split_errors(failed)
///     .map(|result| result.unwrap_err().message().to_owned())
///     .collect();
/// assert_eq!(messages, ["too short", "no digit"]);
/// ```
pub fn split_errors<T>(outcome: Outcome<T>) -> SplitErrorsIter<T> {
    match outcome {
        Outcome::Success(value) => SplitErrorsIter::Success(Some(value)),
        Outcome::Failure(errors) => SplitErrorsIter::Failure(errors.into_iter()),
    }
}
