//! Exception-boundary adapters.
//!
//! These functions run foreign code that reports failure through `Err(e)` or a
//! panic and turn the result into an [`Outcome`]. A captured failure becomes a
//! [`Fault`], which is converted into a single [`Error`](crate::Error) whose
//! message reads `"<kind>: <message>"` and whose `"Exception"` metadata entry
//! holds the fault itself.
//!
//! Callables take their arguments as one tuple through [`Invoke`], so a single
//! entry point covers every arity from zero to sixteen.
//!
//! # Key Components
//!
//! - [`try_call`] / [`catch_panic`] - Synchronous adapters
//! - [`try_async`] / [`try_async_with`] - Asynchronous adapters (feature `async`)
//! - [`FutureCaptureExt`] - Method form of [`try_async`]
//! - [`join_captured`] / [`spawn_captured`] - Tokio task adapters (feature `async-tokio`)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::capture::try_call;
//! use outcome_rail::EXCEPTION_KEY;
//!
//! let outcome = try_call(|raw: &str| raw.parse::<f64>(), ("1.5e3",));
//! assert_eq!(outcome.into_value(), 1500.0);
//!
//! let outcome = try_call(|a: u8, b: u8| a.checked_sub(b).ok_or(std::fmt::Error), (1, 2));
//! let error = outcome.failure().unwrap();
//! assert_eq!(error.message(), "Error: an error occurred when formatting an argument");
//! assert!(error.metadata().contains_key(EXCEPTION_KEY));
//! ```

mod invoke;
mod sync;

#[cfg(feature = "async")]
mod future;
#[cfg(feature = "async-tokio")]
mod tokio_ext;

pub use self::invoke::Invoke;
pub use self::sync::{catch_panic, try_call};

#[cfg(feature = "async")]
pub use self::future::{try_async, try_async_with, CaptureFuture, FutureCaptureExt};
#[cfg(feature = "async-tokio")]
pub use self::tokio_ext::{join_captured, spawn_captured};

use crate::outcome::Outcome;
use crate::types::Fault;

pub(crate) fn captured<T>(fault: Fault) -> Outcome<T> {
    #[cfg(feature = "tracing")]
    tracing::warn!(fault.kind = fault.kind(), fault.message = fault.message(), "captured fault");
    Outcome::fail(fault.into_error())
}
