//! Error model types.
//!
//! This module provides the immutable failure description used by every
//! [`Outcome`](crate::Outcome): an [`Error`] with a message and ordered
//! [`Metadata`], the non-empty [`Errors`] list a failed outcome carries, and
//! the [`Fault`] captured from code that fails outside the outcome channel.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, MetadataValue};
//!
//! let err = Error::new("database connection failed")
//!     .with("host", "db-01")
//!     .with("retry_count", 3u32);
//!
//! assert_eq!(err.message(), "database connection failed");
//! assert_eq!(err.metadata().get("retry_count"), Some(&MetadataValue::UInt(3)));
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod error;
pub mod errors;
pub mod fault;
pub mod metadata;

pub use accumulator::Accumulator;
pub use error::{Error, EXCEPTION_KEY};
pub use errors::Errors;
pub use fault::{BoxError, Fault, Panicked};
pub use metadata::{Metadata, MetadataValue, Opaque};

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for a single element, which covers the common case of
/// a failure carrying exactly one error.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
