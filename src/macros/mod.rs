//! Macros for building errors and failed outcomes with inline metadata.
//!
//! - [`macro@crate::error`] - Builds an [`Error`](crate::Error) from a message
//!   and any number of `key => value` metadata pairs.
//! - [`macro@crate::fail`] - Same arguments, wrapped in a failed
//!   [`Outcome`](crate::Outcome).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{error, fail, Outcome};
//!
//! fn reserve(seats: u32, free: u32) -> Outcome<u32> {
//!     if seats > free {
//!         return fail!("not enough seats", "requested" => seats, "free" => free);
//!     }
//!     Outcome::ok(free - seats)
//! }
//!
//! let failed = reserve(5, 2);
//! assert_eq!(failed.failure().unwrap().metadata()["requested"].as_u64(), Some(5));
//!
//! let err = error!("timeout");
//! assert!(err.metadata().is_empty());
//! ```

/// Creates an [`Error`](crate::Error) with optional metadata pairs.
///
/// Pairs are applied in order, so a repeated key keeps its last value at the
/// position of its first occurrence.
///
/// # Syntax
///
/// - `error!(message)` - Error without metadata
/// - `error!(message, key => value, ...)` - Error with metadata
///
/// # Examples
///
/// ```
/// use outcome_rail::error;
///
/// let err = error!("upload rejected", "size" => 12_582_912u64, "limit" => 10_485_760u64, "retry" => false);
///
/// let keys: Vec<_> = err.metadata().keys().collect();
/// assert_eq!(keys, ["size", "limit", "retry"]);
/// assert_eq!(err.metadata()["retry"].as_bool(), Some(false));
/// ```
#[macro_export]
macro_rules! error {
    ($message:expr $(,)?) => {
        $crate::Error::new($message)
    };
    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        $crate::Error::new($message)$(.with($key, $value))+
    };
}

/// Creates a failed [`Outcome`](crate::Outcome) holding one error built as by
/// [`error!`](macro@crate::error).
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// let outcome: Outcome = fail!("checksum mismatch", "block" => 17u32);
/// assert_eq!(outcome.failure().unwrap().message(), "checksum mismatch");
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)+) => {
        $crate::Outcome::fail($crate::error!($($arg)+))
    };
}
