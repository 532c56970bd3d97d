//! Aggregation of many outcomes into one.
//!
//! Every combinator here visits all of its input, in order, and accumulates
//! every error it sees; none of them stops at the first failure. Sequence
//! variants accept any single-pass iterator. Slice variants borrow a list whose
//! length is known up front, pre-size the value buffer, and clone what they
//! keep.
//!
//! Value-carrying variants stop buffering values at the first failure and
//! release the buffer, since a failed result never returns them.
//!
//! | input | valueless | value-carrying |
//! |---|---|---|
//! | iterator | [`collect_all`] | [`collect_values`] |
//! | slice | [`collect_all_slice`] | [`collect_values_slice`] |

use alloc::vec::Vec;

use crate::outcome::core::Outcome;
use crate::types::{Accumulator, Error};

/// Combines valueless outcomes: success if every input succeeded, otherwise a
/// failure with all errors in input order.
///
/// # Examples
///
/// ```
/// use outcome_rail::{collect_all, Error, Outcome};
///
/// let checks = vec![Outcome::OK, Outcome::fail("disk full"), Outcome::fail("no network")];
/// let combined = collect_all(checks);
///
/// let messages: Vec<_> = combined.iter_errors().map(Error::message).collect();
/// assert_eq!(messages, ["disk full", "no network"]);
///
/// assert_eq!(collect_all(Vec::<Outcome>::new()), Outcome::OK);
/// ```
pub fn collect_all<I>(outcomes: I) -> Outcome
where
    I: IntoIterator<Item = Outcome>,
{
    let mut errors = Accumulator::new();
    for outcome in outcomes {
        if let Outcome::Failure(failed) = outcome {
            errors.extend(failed);
        }
    }
    finish(errors, || ())
}

/// Combines value-carrying outcomes: every value in input order if all
/// succeeded, otherwise a failure with all errors in input order.
///
/// # Examples
///
/// ```
/// use outcome_rail::{collect_values, Outcome};
///
/// let parsed = collect_values(vec![Outcome::ok(1), Outcome::ok(2), Outcome::ok(3)]);
/// assert_eq!(parsed.into_value(), vec![1, 2, 3]);
///
/// let failed = collect_values(vec![Outcome::ok(1), Outcome::fail("bad"), Outcome::ok(3)]);
/// assert_eq!(failed.errors().len(), 1);
/// ```
pub fn collect_values<I, T>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut values = Some(Vec::new());
    let mut errors = Accumulator::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => {
                if let Some(values) = values.as_mut() {
                    values.push(value);
                }
            },
            Outcome::Failure(failed) => {
                values = None;
                errors.extend(failed);
            },
        }
    }
    finish(errors, || values.unwrap_or_default())
}

/// Slice form of [`collect_all`].
pub fn collect_all_slice(outcomes: &[Outcome]) -> Outcome {
    let mut errors = Accumulator::new();
    for outcome in outcomes {
        if let Outcome::Failure(failed) = outcome {
            errors.extend(failed.iter().cloned());
        }
    }
    finish(errors, || ())
}

/// Slice form of [`collect_values`]; the value buffer is sized to the slice.
///
/// # Examples
///
/// ```
/// use outcome_rail::{collect_values, collect_values_slice, Outcome};
///
/// let list = [Outcome::ok('a'), Outcome::fail("bad char"), Outcome::fail("eof")];
/// assert_eq!(collect_values_slice(&list), collect_values(list.clone()));
/// ```
pub fn collect_values_slice<T: Clone>(outcomes: &[Outcome<T>]) -> Outcome<Vec<T>> {
    let mut values = Some(Vec::with_capacity(outcomes.len()));
    let mut errors = Accumulator::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => {
                if let Some(values) = values.as_mut() {
                    values.push(value.clone());
                }
            },
            Outcome::Failure(failed) => {
                values = None;
                errors.extend(failed.iter().cloned());
            },
        }
    }
    finish(errors, || values.unwrap_or_default())
}

fn finish<T, F>(errors: Accumulator<Error>, value: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    #[cfg(feature = "tracing")]
    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "collected outcomes contain failures");
    }
    Outcome::from_accumulated(errors, value)
}

impl<T> FromIterator<Outcome<T>> for Outcome<Vec<T>> {
    /// Same as [`collect_values`].
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        collect_values(iter)
    }
}

impl FromIterator<Outcome> for Outcome {
    /// Same as [`collect_all`].
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        collect_all(iter)
    }
}
