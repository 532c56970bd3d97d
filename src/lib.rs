//! A success/failure value type with error accumulation and fault capture.
//!
//! [`Outcome`] is either a success, optionally carrying a value, or a failure
//! carrying one or more [`Error`]s. Errors are plain values: a message plus
//! ordered metadata. Each submodule re-exports its public surface from here,
//! so consumers can depend on `outcome_rail::*` or pick focused pieces.
//!
//! # Examples
//!
//! ## Accumulating Errors
//!
//! ```
//! use outcome_rail::{collect_values, Error, Outcome};
//!
//! fn parse_field(raw: &str) -> Outcome<u32> {
//!     raw.parse::<u32>().map_err(|_| Error::new("not a number").with("input", raw.to_owned())).into()
//! }
//!
//! let fields = ["12", "x", "7", "y"].map(parse_field);
//! let parsed = collect_values(fields);
//!
//! let inputs: Vec<_> = parsed.iter_errors().map(|e| e.metadata()["input"].to_string()).collect();
//! assert_eq!(inputs, ["x", "y"]);
//! ```
//!
//! ## Capturing Faults
//!
//! ```
//! use outcome_rail::capture::try_call;
//! use std::num::ParseIntError;
//!
//! let outcome = try_call(|raw: &str| raw.parse::<i32>(), ("four",));
//! let error = outcome.failure().unwrap();
//!
//! assert_eq!(error.message(), "ParseIntError: invalid digit found in string");
//! assert!(error.fault().unwrap().is::<ParseIntError>());
//! ```
//!
//! ## Value Objects
//!
//! ```
//! use outcome_rail::traits::TryParse;
//! use outcome_rail::{Error, Outcome};
//!
//! struct Email(String);
//!
//! impl TryParse for Email {
//!     fn try_parse(s: &str) -> Outcome<Self> {
//!         match s.split_once('@') {
//!             Some((user, host)) if !user.is_empty() && host.contains('.') => Outcome::ok(Email(s.into())),
//!             _ => Outcome::fail(Error::new("invalid email")),
//!         }
//!     }
//! }
//!
//! assert!(Email::parse("dev@example.org").is_ok());
//! assert!(Email::parse("dev@localhost").is_err());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result` and Outcome
pub mod convert;
/// Error and outcome construction macros
pub mod macros;
/// The Outcome type and the collect combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Value-object contracts and Result extensions
pub mod traits;
/// Error, metadata, and captured fault types
pub mod types;

/// Exception-boundary adapters (requires `std` feature)
#[cfg(feature = "std")]
pub mod capture;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

#[cfg(feature = "serde")]
mod serialize;

pub use outcome::{collect_all, collect_all_slice, collect_values, collect_values_slice, Outcome};
pub use types::{
    BoxError, Error, ErrorVec, Errors, Fault, Metadata, MetadataValue, Opaque, Panicked,
    EXCEPTION_KEY,
};
