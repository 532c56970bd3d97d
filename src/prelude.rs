//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`error!`], [`fail!`]
//! - **Types**: [`Outcome`], [`Error`], [`Errors`], [`Fault`], [`MetadataValue`]
//! - **Functions**: the `collect_*` family, plus [`try_call`] and [`catch_panic`] with `std`
//! - **Traits**: [`OutcomeExt`], [`TryParse`], [`TryCreate`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn check_name(name: &str) -> Outcome {
//!     if name.trim().is_empty() {
//!         return fail!("name is blank");
//!     }
//!     Outcome::OK
//! }
//!
//! fn check_age(age: i32) -> Outcome {
//!     if !(0..=150).contains(&age) {
//!         return fail!("age out of range", "age" => age);
//!     }
//!     Outcome::OK
//! }
//!
//! let report = collect_all([check_name(" "), check_age(200)]);
//! assert_eq!(report.iter_errors().count(), 2);
//! ```

pub use crate::{error, fail};

pub use crate::outcome::{
    collect_all, collect_all_slice, collect_values, collect_values_slice, Outcome,
};
pub use crate::types::{Error, Errors, Fault, MetadataValue};

pub use crate::traits::{OutcomeExt, TryCreate, TryParse};

#[cfg(feature = "std")]
pub use crate::capture::{catch_panic, try_call};

#[cfg(feature = "async")]
pub use crate::capture::{try_async, try_async_with, FutureCaptureExt};
