//! Parse and create contracts for value objects.
//!
//! A value object validates its input once, at construction. Implementors
//! provide the outcome-returning constructor ([`TryParse::try_parse`] or
//! [`TryCreate::try_create`]) and get a `Result`-returning counterpart for
//! callers that want to use `?` with the first error.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::TryParse;
//! use outcome_rail::{Error, Outcome};
//!
//! #[derive(Debug, PartialEq)]
//! struct Sku(String);
//!
//! impl TryParse for Sku {
//!     fn try_parse(s: &str) -> Outcome<Self> {
//!         if s.len() == 8 && s.bytes().all(|b| b.is_ascii_alphanumeric()) {
//!             Outcome::ok(Sku(s.to_owned()))
//!         } else {
//!             Outcome::fail(Error::new("malformed sku").with("input", s.to_owned()))
//!         }
//!     }
//! }
//!
//! assert_eq!(Sku::parse("AB12CD34"), Ok(Sku("AB12CD34".into())));
//! assert_eq!(Sku::parse("ab-1").unwrap_err().message(), "malformed sku");
//! ```

use alloc::vec::Vec;

use crate::outcome::Outcome;
use crate::types::Error;

/// A value object that can be parsed from a string.
pub trait TryParse: Sized {
    /// Parses `s`, reporting every problem as an error.
    fn try_parse(s: &str) -> Outcome<Self>;

    /// Parses `s`, returning the first error on failure.
    #[inline]
    fn parse(s: &str) -> Result<Self, Error> {
        Self::try_parse(s).into_result().map_err(|errors| errors.into_first())
    }
}

/// A value object that can be created from a `V`.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::TryCreate;
/// use outcome_rail::{Error, Outcome};
///
/// struct Percent(u8);
///
/// impl TryCreate<i32> for Percent {
///     fn try_create(value: i32) -> Outcome<Self> {
///         match u8::try_from(value) {
///             Ok(p) if p <= 100 => Outcome::ok(Percent(p)),
///             _ => Outcome::fail(Error::new("percent out of range").with("value", value)),
///         }
///     }
/// }
///
/// assert_eq!(Percent::create(42).map(|p| p.0), Ok(42));
/// let error = Percent::create(-3).err().unwrap();
/// assert_eq!(error.metadata()["value"].as_i64(), Some(-3));
/// ```
pub trait TryCreate<V>: Sized {
    /// Creates a value object from `value`, reporting every problem as an error.
    fn try_create(value: V) -> Outcome<Self>;

    /// Creates a value object from `value`, returning the first error on failure.
    #[inline]
    fn create(value: V) -> Result<Self, Error> {
        Self::try_create(value).into_result().map_err(|errors| errors.into_first())
    }
}

/// Parses every `delimiter`-separated segment of `s` as a `T`.
///
/// Parsing stops at the first failing segment, whose errors become the
/// failure. Segments are passed to [`TryParse::try_parse`] unchanged, without
/// trimming.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::{parse_delimited, TryParse};
/// use outcome_rail::{Error, Outcome};
///
/// #[derive(Debug, PartialEq)]
/// struct Digit(u8);
///
/// impl TryParse for Digit {
///     fn try_parse(s: &str) -> Outcome<Self> {
///         match s.parse::<u8>() {
///             Ok(d) if d < 10 => Outcome::ok(Digit(d)),
///             _ => Outcome::fail(Error::new("not a digit").with("segment", s.to_owned())),
///         }
///     }
/// }
///
/// assert_eq!(parse_delimited::<Digit>("1,2,3", ',').into_value(), [Digit(1), Digit(2), Digit(3)]);
///
/// let failed = parse_delimited::<Digit>("1,x,y", ',');
/// assert_eq!(failed.errors().len(), 1);
/// assert_eq!(failed.failure().unwrap().metadata()["segment"].as_str(), Some("x"));
/// ```
pub fn parse_delimited<T: TryParse>(s: &str, delimiter: char) -> Outcome<Vec<T>> {
    let mut values = Vec::new();
    for segment in s.split(delimiter) {
        match T::try_parse(segment) {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(errors) => return Outcome::Failure(errors),
        }
    }
    Outcome::ok(values)
}
