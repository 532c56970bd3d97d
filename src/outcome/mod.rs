//! The [`Outcome`] type and its aggregation combinators.
//!
//! An [`Outcome`] is either a success, optionally carrying a value, or a
//! failure carrying one or more [`Error`](crate::Error)s. The [`collect`]
//! module folds many outcomes into one while keeping every error.
//!
//! # Key Components
//!
//! - [`Outcome`] - Core type: `Success(T)` or `Failure(Errors)`
//! - [`collect`] - `Collect` over iterators and slices
//! - Iterator adapters over the value and the errors
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let results = vec![Outcome::ok(10), Outcome::fail("bad input"), Outcome::fail("overflow")];
//! let combined: Outcome<Vec<i32>> = results.into_iter().collect();
//!
//! assert!(combined.is_failure());
//! assert_eq!(combined.iter_errors().count(), 2);
//! ```
pub mod collect;
pub mod core;
pub mod iter;

pub use self::collect::*;
pub use self::core::*;
pub use self::iter::*;
