use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use core::error::Error as CoreError;
use core::fmt;

use crate::types::{Fault, Metadata, MetadataValue};

/// Metadata key under which a captured [`Fault`] is stored.
pub const EXCEPTION_KEY: &str = "Exception";

/// Immutable description of a single failure: a message plus ordered metadata.
///
/// Errors are plain values. Cloning is cheap for static messages and shares
/// every reference-counted metadata object, so the same error can sit on many
/// outcomes at once.
///
/// # Examples
///
/// ```
/// use outcome_rail::Error;
///
/// let err = Error::with_metadata("quota exceeded", [("limit", 100u32), ("used", 130u32)]);
///
/// assert_eq!(err.message(), "quota exceeded");
/// let keys: Vec<_> = err.metadata().keys().collect();
/// assert_eq!(keys, ["limit", "used"]);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    message: Cow<'static, str>,
    metadata: Metadata,
}

impl Error {
    /// Creates an error without metadata.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            message: message.into(),
            metadata: Metadata::new(),
        }
    }

    /// Creates an error with metadata pairs applied in order.
    ///
    /// A key that appears more than once keeps the last value.
    pub fn with_metadata<M, I, K, V>(message: M, pairs: I) -> Self
    where
        M: Into<Cow<'static, str>>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'static, str>>,
        V: Into<MetadataValue>,
    {
        Self {
            message: message.into(),
            metadata: pairs.into_iter().collect(),
        }
    }

    /// Returns this error with one more metadata entry.
    ///
    /// Used while building an error; the value is still immutable once it is
    /// attached to an outcome.
    #[inline]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<MetadataValue>,
    {
        self.metadata.insert(key, value);
        self
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the captured fault stored under [`EXCEPTION_KEY`], if any.
    #[inline]
    pub fn fault(&self) -> Option<&Fault> {
        self.metadata.get(EXCEPTION_KEY).and_then(MetadataValue::as_fault)
    }

    /// Consumes the error, returning its message and metadata.
    #[inline]
    pub fn into_parts(self) -> (Cow<'static, str>, Metadata) {
        (self.message, self.metadata)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl CoreError for Error {
    fn source(&self) -> Option<&(dyn CoreError + 'static)> {
        self.fault().map(|fault| fault as &(dyn CoreError + 'static))
    }
}

impl From<&'static str> for Error {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Fault> for Error {
    /// Builds `"<kind>: <message>"` with the fault as the only metadata entry.
    fn from(fault: Fault) -> Self {
        let message = format!("{}: {}", fault.kind(), fault.message());
        Self::new(message).with(EXCEPTION_KEY, fault)
    }
}
