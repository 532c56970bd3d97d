use crate::types::{Accumulator, Error, Errors};

/// The outcome of an operation that can fail: a success, optionally carrying a
/// value, or a failure carrying one or more errors.
///
/// `Outcome` (the default `T = ()`) is the valueless form; `Outcome<T>` carries
/// a success payload. A failure always holds at least one [`Error`], because
/// [`Errors`] cannot be empty.
///
/// # Type Parameters
///
/// * `T` - The success value type, `()` for the valueless form
///
/// # Variants
///
/// * `Success(T)` - Contains the success value
/// * `Failure(Errors)` - Contains one or more errors, in the order they were reported
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome};
///
/// let saved: Outcome = Outcome::OK;
/// assert!(saved.is_success());
///
/// let port: Outcome<u16> = Outcome::ok(8080);
/// assert_eq!(port.success(), Some(&8080));
///
/// let missing: Outcome<u16> = Outcome::fail(Error::new("port is not set"));
/// assert_eq!(missing.failure().map(Error::message), Some("port is not set"));
/// ```
#[must_use]
#[derive(Clone, PartialEq, Debug)]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(Errors),
}

impl Outcome {
    /// The valueless success.
    pub const OK: Self = Outcome::Success(());
}

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::ok(42);
    /// assert_eq!(outcome.into_value(), 42);
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome from a single error.
    ///
    /// # Arguments
    ///
    /// * `error` - The error, or anything convertible into one
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::fail("missing field");
    /// assert_eq!(outcome.errors().len(), 1);
    /// ```
    #[inline]
    pub fn fail<E: Into<Error>>(error: E) -> Self {
        Self::Failure(Errors::new(error.into()))
    }

    /// Creates a failed outcome from several errors, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty: a failure must carry at least one error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let outcome: Outcome = Outcome::fail_many([Error::new("too short"), Error::new("no digit")]);
    /// let messages: Vec<_> = outcome.iter_errors().map(Error::message).collect();
    /// assert_eq!(messages, ["too short", "no digit"]);
    /// ```
    #[track_caller]
    pub fn fail_many<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>,
    {
        match Errors::from_iter_checked(errors.into_iter().map(Into::into)) {
            Some(errors) => Self::Failure(errors),
            None => panic!("Outcome::fail_many requires at least one error"),
        }
    }

    /// Returns `true` if the outcome is a success.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is a failure.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value, or `None` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::ok("ready");
    /// if let Some(state) = outcome.success() {
    ///     assert_eq!(*state, "ready");
    /// }
    /// ```
    #[must_use]
    #[inline]
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the first error, or `None` on success.
    #[must_use]
    #[inline]
    pub fn failure(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors.first()),
        }
    }

    /// Borrows the outcome as a `Result` over the value and the error list.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<u8> = Outcome::fail("out of range");
    /// match outcome.as_result() {
    ///     Ok(value) => println!("got {value}"),
    ///     Err(errors) => assert_eq!(errors.first().message(), "out of range"),
    /// }
    /// ```
    #[inline]
    pub fn as_result(&self) -> Result<&T, &Errors> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Converts the outcome into a `Result`, so it can be propagated with `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, Errors> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[must_use]
    #[track_caller]
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => {
                panic!("called `Outcome::value()` on a failure: {errors}")
            },
        }
    }

    /// Consumes the outcome, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[track_caller]
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => {
                panic!("called `Outcome::into_value()` on a failure: {errors}")
            },
        }
    }

    /// Returns the error list.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[must_use]
    #[track_caller]
    #[inline]
    pub fn errors(&self) -> &Errors {
        match self {
            Self::Success(_) => panic!("called `Outcome::errors()` on a success"),
            Self::Failure(errors) => errors,
        }
    }

    /// Consumes the outcome, returning the error list.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[track_caller]
    #[inline]
    pub fn into_errors(self) -> Errors {
        match self {
            Self::Success(_) => panic!("called `Outcome::into_errors()` on a success"),
            Self::Failure(errors) => errors,
        }
    }

    /// Maps the success value, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::ok(21).map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), 42);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Chains a step that may fail, invoking `f` only on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn even(input: i32) -> Outcome<i32> {
    ///     if input % 2 == 0 { Outcome::ok(input) } else { Outcome::fail("not even") }
    /// }
    ///
    /// assert!(Outcome::ok(4).and_then(even).is_success());
    /// assert!(Outcome::ok(3).and_then(even).is_failure());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Rewrites every error of a failure, keeping their order.
    #[inline]
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnMut(Error) -> Error,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => Self::fail_many(errors.into_iter().map(f)),
        }
    }

    /// Combines two outcomes into a tuple, accumulating the errors of both.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let pair = Outcome::ok(1).zip(Outcome::ok("one"));
    /// assert_eq!(pair.into_value(), (1, "one"));
    ///
    /// let both: Outcome<(i32, i32)> = Outcome::fail("left").zip(Outcome::fail("right"));
    /// assert_eq!(both.errors().len(), 2);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success((a, b)),
            (Outcome::Failure(errors), Outcome::Success(_))
            | (Outcome::Success(_), Outcome::Failure(errors)) => Outcome::Failure(errors),
            (Outcome::Failure(mut left), Outcome::Failure(right)) => {
                left.append(right);
                Outcome::Failure(left)
            },
        }
    }

    /// Discards the success value.
    #[inline]
    pub fn discard(self) -> Outcome {
        self.map(|_| ())
    }

    /// Builds an outcome from accumulated errors: a failure if any error was
    /// accumulated, otherwise a success produced by `value`.
    #[inline]
    pub(crate) fn from_accumulated<F>(errors: Accumulator<Error>, value: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match errors.into_errors() {
            Some(errors) => Self::Failure(errors),
            None => Self::Success(value()),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::fail(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Errors> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
