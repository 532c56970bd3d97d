//! Extension trait for turning `Result`s into [`Outcome`]s.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::OutcomeExt;
//!
//! let parsed: Result<u16, &'static str> = Err("port missing");
//! let outcome = parsed.into_outcome();
//!
//! assert_eq!(outcome.failure().unwrap().message(), "port missing");
//! ```


use crate::outcome::Outcome;
use crate::types::{BoxError, Error, Fault};

/// Conversions from `Result<T, E>` into [`Outcome<T>`].
pub trait OutcomeExt<T, E> {
    /// Converts the result, turning `Err(e)` into a single [`Error`] via `Into`.
    fn into_outcome(self) -> Outcome<T>
    where
        E: Into<Error>;

    /// Converts the result, capturing `Err(e)` as a [`Fault`].
    ///
    /// The failure looks exactly like one produced by
    /// [`try_call`](crate::capture::try_call): message `"<kind>: <message>"`
    /// and the fault under [`EXCEPTION_KEY`](crate::EXCEPTION_KEY).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::OutcomeExt;
    /// use std::num::ParseFloatError;
    ///
    /// let outcome = "1,5".parse::<f32>().into_captured();
    /// let fault = outcome.failure().unwrap().fault().unwrap();
    ///
    /// assert_eq!(fault.kind(), "ParseFloatError");
    /// assert!(fault.is::<ParseFloatError>());
    /// ```
    fn into_captured(self) -> Outcome<T>
    where
        E: Into<BoxError> + 'static;
}

impl<T, E> OutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T>
    where
        E: Into<Error>,
    {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::fail(error),
        }
    }

    #[inline]
    fn into_captured(self) -> Outcome<T>
    where
        E: Into<BoxError> + 'static,
    {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::fail(Fault::capture(error)),
        }
    }
}
