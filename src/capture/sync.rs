use std::panic::{self, AssertUnwindSafe};

use crate::capture::{captured, Invoke};
use crate::outcome::Outcome;
use crate::types::{BoxError, Fault};

/// Calls a fallible callable and converts its result into an [`Outcome`].
///
/// `Ok(value)` becomes `Outcome::ok(value)`. An `Err(error)` or a panic is
/// captured as a [`Fault`] and returned as a failure with a single error whose
/// message is `"<kind>: <message>"` and whose `"Exception"` metadata entry is
/// the fault.
///
/// The error type may be any concrete error, a `Box` of one, or an erased
/// [`BoxError`]; see [`Fault::capture`] for how each is named.
///
/// # Arguments
///
/// * `f` - The callable, taking up to sixteen positional arguments
/// * `args` - The arguments, packed in a tuple (`()` for none)
///
/// # Examples
///
/// ```
/// use outcome_rail::capture::try_call;
/// use std::num::ParseIntError;
///
/// fn parse_port(raw: &str) -> Result<u16, ParseIntError> {
///     raw.parse()
/// }
///
/// assert_eq!(try_call(parse_port, ("8080",)).into_value(), 8080);
///
/// let failed = try_call(parse_port, ("http",));
/// let error = failed.failure().unwrap();
/// assert_eq!(error.message(), "ParseIntError: invalid digit found in string");
/// assert!(error.fault().unwrap().is::<ParseIntError>());
/// ```
pub fn try_call<F, Args, T, E>(f: F, args: Args) -> Outcome<T>
where
    F: Invoke<Args, Output = Result<T, E>>,
    E: Into<BoxError> + 'static,
{
    match panic::catch_unwind(AssertUnwindSafe(move || f.invoke(args))) {
        Ok(Ok(value)) => Outcome::ok(value),
        Ok(Err(error)) => captured(Fault::capture(error)),
        Err(payload) => captured(Fault::from_panic(payload)),
    }
}

/// Calls a callable that reports failure only by panicking.
///
/// The return value becomes `Outcome::ok(value)`; a panic becomes a failure
/// exactly as in [`try_call`], with fault kind `"Panic"`.
///
/// # Examples
///
/// ```
/// use outcome_rail::capture::catch_panic;
///
/// let items = vec![1, 2, 3];
/// let outcome = catch_panic(|index: usize| items[index], (7,));
///
/// assert!(outcome.failure().unwrap().message().starts_with("Panic: index out of bounds"));
/// ```
pub fn catch_panic<F, Args, T>(f: F, args: Args) -> Outcome<T>
where
    F: Invoke<Args, Output = T>,
{
    match panic::catch_unwind(AssertUnwindSafe(move || f.invoke(args))) {
        Ok(value) => Outcome::ok(value),
        Err(payload) => captured(Fault::from_panic(payload)),
    }
}
