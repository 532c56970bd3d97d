//! Captured faults.
//!
//! A [`Fault`] is what the exception-boundary adapters keep when foreign code
//! fails: the error object itself (shared, never copied or stringified), its
//! short type name, its message, the snapshotted `source()` chain, and a
//! backtrace when the platform captured one.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::any::Any;
use core::error::Error as CoreError;
use core::fmt;

use crate::types::Error;

/// Kind reported for captured panics.
const PANIC_KIND: &str = "Panic";

/// Kind reported for entries of a snapshotted `source()` chain, whose concrete
/// types are no longer known.
const CAUSE_KIND: &str = "Error";

/// A captured error object or panic.
///
/// Cloning a `Fault` is cheap and preserves identity: every clone refers to the
/// same captured object, see [`Fault::ptr_eq`].
///
/// # Examples
///
/// ```
/// use outcome_rail::Fault;
///
/// let parse_err = "x1".parse::<u8>().unwrap_err();
/// let fault = Fault::from_error(parse_err);
///
/// assert_eq!(fault.kind(), "ParseIntError");
/// assert_eq!(fault.to_string(), "ParseIntError: invalid digit found in string");
/// assert!(fault.downcast_ref::<std::num::ParseIntError>().is_some());
/// ```
#[derive(Clone)]
pub struct Fault {
    inner: Arc<FaultInner>,
}

struct FaultInner {
    kind: Cow<'static, str>,
    message: String,
    backtrace: Option<String>,
    cause: Option<Fault>,
    object: Arc<dyn CoreError + Send + Sync>,
}

/// Type-erased error object, the same shape as `tower::BoxError`.
pub type BoxError = Box<dyn CoreError + Send + Sync>;

impl Fault {
    /// Captures any error convertible into a [`BoxError`].
    ///
    /// This is the entry point the capture adapters use. A concrete error type
    /// `E` names the fault after `E`, and so does `Box<E>`. An already erased
    /// `Box<dyn Error>`, or a plain string, is captured with kind `"Error"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{BoxError, Fault};
    ///
    /// let boxed: Box<std::num::ParseIntError> = Box::new("-".parse::<u8>().unwrap_err());
    /// let fault = Fault::capture(boxed);
    /// assert_eq!(fault.kind(), "ParseIntError");
    /// assert!(fault.is::<std::num::ParseIntError>());
    ///
    /// let erased: BoxError = "disk full".into();
    /// assert_eq!(Fault::capture(erased).to_string(), "Error: disk full");
    /// ```
    pub fn capture<E>(error: E) -> Self
    where
        E: Into<BoxError> + 'static,
    {
        Self::with_kind(kind_of::<E>(), Arc::from(error.into()))
    }

    /// Captures an error object, naming the fault after the error's type.
    pub fn from_error<E>(error: E) -> Self
    where
        E: CoreError + Send + Sync + 'static,
    {
        Self::from_arc(Arc::new(error))
    }

    /// Captures an error object that is already shared, keeping its identity.
    pub fn from_arc<E>(error: Arc<E>) -> Self
    where
        E: CoreError + Send + Sync + 'static,
    {
        Self::with_kind(kind_of::<E>(), error)
    }

    /// Captures a type-erased error object under kind `"Error"`.
    ///
    /// The boxed object is kept as is, so downcasting to its concrete type
    /// still works.
    pub fn from_boxed(error: BoxError) -> Self {
        Self::with_kind(CAUSE_KIND, Arc::from(error))
    }

    /// Captures an error object under an explicit kind name.
    pub fn with_kind<K>(kind: K, error: Arc<dyn CoreError + Send + Sync>) -> Self
    where
        K: Into<Cow<'static, str>>,
    {
        let message = error.to_string();
        let cause = snapshot_cause(error.source());
        Self {
            inner: Arc::new(FaultInner {
                kind: kind.into(),
                message,
                backtrace: capture_backtrace(),
                cause,
                object: error,
            }),
        }
    }

    /// Captures a panic payload as returned by `std::panic::catch_unwind`.
    ///
    /// String payloads become the fault message; other payloads are reported
    /// with a placeholder message. The captured object is a [`Panicked`].
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            String::from("Box<dyn Any>")
        };
        Self::with_kind(PANIC_KIND, Arc::new(Panicked { message }))
    }

    /// Short type name of the captured object, or `"Panic"`.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.inner.kind
    }

    /// Display output of the captured object.
    #[inline]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Backtrace captured alongside the fault, when backtraces are enabled.
    #[inline]
    pub fn backtrace(&self) -> Option<&str> {
        self.inner.backtrace.as_deref()
    }

    /// The first entry of the captured object's `source()` chain.
    #[inline]
    pub fn inner(&self) -> Option<&Fault> {
        self.inner.cause.as_ref()
    }

    /// Iterates over this fault followed by every nested inner fault.
    pub fn chain(&self) -> impl Iterator<Item = &Fault> {
        core::iter::successors(Some(self), |fault| fault.inner())
    }

    /// The captured object.
    #[inline]
    pub fn object(&self) -> &(dyn CoreError + Send + Sync + 'static) {
        &*self.inner.object
    }

    /// Returns `true` if the captured object is of type `E`.
    #[inline]
    pub fn is<E: CoreError + 'static>(&self) -> bool {
        self.downcast_ref::<E>().is_some()
    }

    /// Returns the captured object as `E`, if it has that type.
    ///
    /// An object captured as `Box<E>` downcasts to `E` as well.
    pub fn downcast_ref<E: CoreError + 'static>(&self) -> Option<&E> {
        let object = &*self.inner.object;
        object
            .downcast_ref::<E>()
            .or_else(|| object.downcast_ref::<Box<E>>().map(|boxed| &**boxed))
    }

    /// Returns `true` when both faults refer to the same captured object.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// Builds the failure [`Error`] for this fault: `"<kind>: <message>"` with
    /// the fault stored under [`EXCEPTION_KEY`](crate::EXCEPTION_KEY).
    #[inline]
    pub fn into_error(self) -> Error {
        Error::from(self)
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.inner.kind, self.inner.message)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("kind", &self.inner.kind)
            .field("message", &self.inner.message)
            .field("inner", &self.inner.cause)
            .field("has_backtrace", &self.inner.backtrace.is_some())
            .finish()
    }
}

impl CoreError for Fault {
    fn source(&self) -> Option<&(dyn CoreError + 'static)> {
        self.inner.object.source()
    }
}

/// The captured object of a panic fault.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Fault, Panicked};
///
/// let payload = std::panic::catch_unwind(|| panic!("index out of range")).unwrap_err();
/// let fault = Fault::from_panic(payload);
///
/// assert_eq!(fault.kind(), "Panic");
/// assert_eq!(fault.downcast_ref::<Panicked>().unwrap().message(), "index out of range");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl CoreError for Panicked {}

/// Message-only stand-in for an entry of a `source()` chain.
#[derive(Debug)]
struct Cause {
    message: String,
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl CoreError for Cause {}

fn snapshot_cause(source: Option<&(dyn CoreError + 'static)>) -> Option<Fault> {
    let source = source?;
    let message = source.to_string();
    Some(Fault {
        inner: Arc::new(FaultInner {
            kind: Cow::Borrowed(CAUSE_KIND),
            message: message.clone(),
            backtrace: None,
            cause: snapshot_cause(source.source()),
            object: Arc::new(Cause { message }),
        }),
    })
}

#[cfg(feature = "std")]
fn capture_backtrace() -> Option<String> {
    use std::backtrace::{Backtrace, BacktraceStatus};

    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => Some(backtrace.to_string()),
        _ => None,
    }
}

#[cfg(not(feature = "std"))]
fn capture_backtrace() -> Option<String> {
    None
}

/// Kind reported for an error of static type `E`.
///
/// `Box<E>` is named after `E`. Erased boxes and string messages have no
/// meaningful type name and report `"Error"`.
pub(crate) fn kind_of<E: ?Sized>() -> &'static str {
    let full = core::any::type_name::<E>();
    let full = match full.strip_prefix("alloc::boxed::Box<") {
        Some(rest) => rest.strip_suffix('>').unwrap_or(rest),
        None => full,
    };
    if full.starts_with("dyn ") || full == "alloc::string::String" || full == "&str" {
        CAUSE_KIND
    } else {
        short_type_name(full)
    }
}

/// Reduces a full type path to its last segment without generics:
/// `std::num::error::ParseIntError` becomes `ParseIntError`.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
