//! Tokio task adapters.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["async-tokio"] }
//! ```

use core::future::Future;

use tokio::task::{JoinError, JoinHandle};

use crate::capture::captured;
use crate::outcome::Outcome;
use crate::types::{BoxError, Fault};

/// Awaits a spawned task and converts its result into an [`Outcome`].
///
/// `Err(e)` from the task is captured like in [`try_call`](crate::capture::try_call).
/// A task that panicked is captured with the original panic payload, so the
/// fault kind is `"Panic"`. A cancelled task is captured as a `JoinError`
/// fault.
///
/// # Examples
///
/// ```rust,ignore
/// use outcome_rail::capture::join_captured;
///
/// let handle = tokio::spawn(async { "42".parse::<u32>() });
/// assert_eq!(join_captured(handle).await.into_value(), 42);
/// ```
pub async fn join_captured<T, E>(handle: JoinHandle<Result<T, E>>) -> Outcome<T>
where
    E: Into<BoxError> + 'static,
{
    match handle.await {
        Ok(Ok(value)) => Outcome::ok(value),
        Ok(Err(error)) => captured(Fault::capture(error)),
        Err(join_error) => captured(join_fault(join_error)),
    }
}

/// Spawns `future` on the current Tokio runtime and awaits it through
/// [`join_captured`].
///
/// # Panics
///
/// Panics when called outside of a Tokio runtime, as `tokio::spawn` does.
pub async fn spawn_captured<Fut, T, E>(future: Fut) -> Outcome<T>
where
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Into<BoxError> + Send + 'static,
{
    join_captured(tokio::spawn(future)).await
}

fn join_fault(error: JoinError) -> Fault {
    if error.is_panic() {
        Fault::from_panic(error.into_panic())
    } else {
        Fault::from_error(error)
    }
}
