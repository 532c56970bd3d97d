//! Capturing faults from asynchronous operations.
//!
//! [`CaptureFuture`] wraps a `Future<Output = Result<T, E>>` and resolves to
//! an [`Outcome<T>`]: `Err(e)`, or a panic raised while the inner future is
//! polled, becomes a failure. The only suspension point is the inner future's
//! own; no timer or extra task is involved.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::capture::{captured, Invoke};
use crate::outcome::Outcome;
use crate::types::{BoxError, Fault};

pin_project! {
    /// A Future wrapper that converts the inner result into an [`Outcome`].
    ///
    /// # Cancel Safety
    ///
    /// `CaptureFuture` is cancel-safe if the inner future is cancel-safe.
    /// Dropping it drops the inner future; nothing is captured in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::capture::try_async;
    ///
    /// async fn example() {
    ///     let outcome = try_async(async { "17".parse::<u8>() }).await;
    ///     assert_eq!(outcome.into_value(), 17);
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CaptureFuture<Fut> {
        #[pin]
        future: Fut,
        terminated: bool,
    }
}

impl<Fut> CaptureFuture<Fut> {
    /// Creates a new `CaptureFuture` around the given future.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self {
            future,
            terminated: false,
        }
    }
}

impl<Fut, T, E> Future for CaptureFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError> + 'static,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.terminated, "CaptureFuture polled after completion");

        let future = this.future;
        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(Ok(value))) => Outcome::ok(value),
            Ok(Poll::Ready(Err(error))) => captured(Fault::capture(error)),
            Err(payload) => captured(Fault::from_panic(payload)),
        };
        *this.terminated = true;
        Poll::Ready(outcome)
    }
}

impl<Fut, T, E> FusedFuture for CaptureFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError> + 'static,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

/// Awaits a fallible future and converts its result into an [`Outcome`].
///
/// Asynchronous counterpart of [`try_call`](crate::capture::try_call), with the
/// same capture rules.
#[inline]
pub fn try_async<Fut, T, E>(future: Fut) -> CaptureFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError> + 'static,
{
    CaptureFuture::new(future)
}

/// Calls an async callable with `args` and awaits it through [`try_async`].
///
/// A panic raised while the callable builds its future is captured too.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::capture::try_async_with;
/// use std::io;
///
/// async fn load(name: &'static str, size: usize) -> io::Result<Vec<u8>> {
///     if name.is_empty() {
///         return Err(io::Error::new(io::ErrorKind::NotFound, "no file name"));
///     }
///     Ok(vec![0; size])
/// }
///
/// async fn example() {
///     let outcome = try_async_with(load, ("", 4)).await;
///     assert_eq!(outcome.failure().unwrap().message(), "Error: no file name");
/// }
/// ```
pub async fn try_async_with<F, Args, Fut, T, E>(f: F, args: Args) -> Outcome<T>
where
    F: Invoke<Args, Output = Fut>,
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError> + 'static,
{
    match panic::catch_unwind(AssertUnwindSafe(move || f.invoke(args))) {
        Ok(future) => CaptureFuture::new(future).await,
        Err(payload) => captured(Fault::from_panic(payload)),
    }
}

/// Extension trait for converting fallible futures into [`Outcome`]s.
///
/// Mirrors [`try_async`] in method form.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::capture::FutureCaptureExt;
///
/// async fn example() {
///     let outcome = async { "x".parse::<i64>() }.capture().await;
///     assert_eq!(outcome.failure().unwrap().fault().unwrap().kind(), "ParseIntError");
/// }
/// ```
pub trait FutureCaptureExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the future so it resolves to an [`Outcome`].
    fn capture(self) -> CaptureFuture<Self>;
}

impl<Fut, T, E> FutureCaptureExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError> + 'static,
{
    #[inline]
    fn capture(self) -> CaptureFuture<Self> {
        CaptureFuture::new(self)
    }
}
