//! Tower integration.
//!
//! This module provides a Tower `Layer` and `Service` that run every call of an
//! inner service through [`CaptureFuture`], so a call that fails with `Err(e)`
//! or panics while its future is polled resolves to a failed [`Outcome`]
//! instead of an error. The inner error may be erased, so the layer can sit
//! above middleware whose error is `tower::BoxError`.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use outcome_rail::tower::CaptureLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(CaptureLayer::new())
//!     .service(my_service);
//! ```

use core::future::Future;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::capture::CaptureFuture;
use crate::outcome::Outcome;
use crate::types::BoxError;

/// A Tower [`Layer`] that turns service results into [`Outcome`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaptureLayer;

impl CaptureLayer {
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for CaptureLayer {
    type Service = CaptureService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        CaptureService::new(inner)
    }
}

/// A Tower [`Service`] whose response is the [`Outcome`] of the inner call.
///
/// Readiness errors from `poll_ready` are passed through unchanged: only calls
/// are captured. The returned future never resolves to `Err`.
#[derive(Clone, Debug)]
pub struct CaptureService<S> {
    inner: S,
}

impl<S> CaptureService<S> {
    /// Creates a new `CaptureService` wrapping the given service.
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for CaptureService<S>
where
    S: Service<Request>,
    S::Error: Into<BoxError> + 'static,
{
    type Response = Outcome<S::Response>;
    type Error = S::Error;
    type Future = CaptureServiceFuture<S::Future, S::Error>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        CaptureServiceFuture::new(self.inner.call(request))
    }
}

pin_project! {
    /// Future returned by [`CaptureService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct CaptureServiceFuture<F, E> {
        #[pin]
        inner: CaptureFuture<F>,
        _error: PhantomData<fn() -> E>,
    }
}

impl<F, E> CaptureServiceFuture<F, E> {
    #[inline]
    fn new(inner: F) -> Self {
        Self {
            inner: CaptureFuture::new(inner),
            _error: PhantomData,
        }
    }
}

impl<F, T, E> Future for CaptureServiceFuture<F, E>
where
    F: Future<Output = Result<T, E>>,
    E: Into<BoxError> + 'static,
{
    type Output = Result<Outcome<T>, E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx).map(Ok)
    }
}

impl<F, T, E> FusedFuture for CaptureServiceFuture<F, E>
where
    F: Future<Output = Result<T, E>>,
    E: Into<BoxError> + 'static,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}

/// Extension trait for wrapping a service in a [`CaptureService`].
pub trait ServiceCaptureExt<Request>: Service<Request> + Sized {
    /// Wraps this service so every call resolves to an [`Outcome`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use outcome_rail::tower::ServiceCaptureExt;
    ///
    /// let wrapped = my_service.capture_outcomes();
    /// ```
    fn capture_outcomes(self) -> CaptureService<Self> {
        CaptureService::new(self)
    }
}

impl<S, Request> ServiceCaptureExt<Request> for S where S: Service<Request> {}
