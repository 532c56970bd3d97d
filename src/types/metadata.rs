//! Ordered key/value metadata attached to an [`Error`](crate::Error).
//!
//! [`Metadata`] keeps entries in insertion order with unique keys. Inserting a
//! key that is already present replaces its value in place, so the entry keeps
//! the position of its first insertion.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;
use core::ops::Index;

use smallvec::SmallVec;

use crate::types::Fault;

/// A single metadata value.
///
/// Primitive values are stored inline. Captured faults and arbitrary shared
/// objects are reference counted, so cloning an [`Error`](crate::Error) never
/// copies the object behind them.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'static, str>),
    Fault(Fault),
    Opaque(Opaque),
}

impl MetadataValue {
    /// Wraps an arbitrary value as an [`Opaque`] metadata entry.
    #[inline]
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Opaque::new(value))
    }

    /// Returns the string value, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(&**value),
            _ => None,
        }
    }

    /// Returns the value as `i64` for `Int`, and for `UInt` values that fit.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(value) => Some(value),
            Self::UInt(value) => i64::try_from(value).ok(),
            _ => None,
        }
    }

    /// Returns the value as `u64` for `UInt`, and for non-negative `Int` values.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::UInt(value) => Some(value),
            Self::Int(value) => u64::try_from(value).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the captured fault, if this is a `Fault`.
    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Self::Opaque(opaque) => Some(opaque),
            _ => None,
        }
    }

    /// Downcasts an `Opaque` value to the concrete object it holds.
    ///
    /// Captured faults are reached through [`as_fault`](Self::as_fault) and
    /// [`Fault::downcast_ref`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::MetadataValue;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct RequestId(u64);
    ///
    /// let value = MetadataValue::opaque(RequestId(7));
    /// assert_eq!(value.downcast_ref::<RequestId>(), Some(&RequestId(7)));
    /// assert!(value.downcast_ref::<String>().is_none());
    /// ```
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Opaque(opaque) => opaque.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
            Self::Fault(fault) => write!(f, "{fault}"),
            Self::Opaque(opaque) => write!(f, "<{}>", opaque.type_name()),
        }
    }
}

macro_rules! impl_from_metadata_value {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for MetadataValue {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_metadata_value!(Int as i64: i8, i16, i32, i64);
impl_from_metadata_value!(UInt as u64: u8, u16, u32, u64);
impl_from_metadata_value!(Float as f64: f32, f64);

impl From<bool> for MetadataValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<isize> for MetadataValue {
    #[inline]
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for MetadataValue {
    #[inline]
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<&'static str> for MetadataValue {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for MetadataValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for MetadataValue {
    #[inline]
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value)
    }
}

impl From<Fault> for MetadataValue {
    #[inline]
    fn from(fault: Fault) -> Self {
        Self::Fault(fault)
    }
}

impl From<Opaque> for MetadataValue {
    #[inline]
    fn from(opaque: Opaque) -> Self {
        Self::Opaque(opaque)
    }
}

/// A shared, type-erased metadata object.
///
/// Equality is reference identity: two `Opaque` values are equal only when
/// they point at the same allocation.
#[derive(Clone)]
pub struct Opaque {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    #[inline]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wraps an existing `Arc`, keeping its identity.
    #[inline]
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            type_name: core::any::type_name::<T>(),
            value,
        }
    }

    /// Full type name of the wrapped object, as reported by [`core::any::type_name`].
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Returns `true` when both values share the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.value, &other.value)
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opaque").field("type_name", &self.type_name).finish_non_exhaustive()
    }
}

/// Insertion-ordered metadata map with unique keys.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Metadata, MetadataValue};
///
/// let mut metadata = Metadata::new();
/// metadata.insert("field", "email");
/// metadata.insert("attempt", 1u32);
/// metadata.insert("field", "username");
///
/// let keys: Vec<_> = metadata.keys().collect();
/// assert_eq!(keys, ["field", "attempt"]);
/// assert_eq!(metadata["field"], MetadataValue::from("username"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    entries: SmallVec<[(Cow<'static, str>, MetadataValue); 1]>,
}

impl Metadata {
    /// Creates an empty metadata map.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Inserts a value, returning the previous value stored under `key`.
    ///
    /// An existing key keeps its position; only its value is replaced.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<MetadataValue>
    where
        K: Into<Cow<'static, str>>,
        V: Into<MetadataValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            },
        }
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &MetadataValue)> + '_ {
        self.entries.iter().map(|(key, value)| (&**key, value))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| &**key)
    }
}

impl Index<&str> for Metadata {
    type Output = MetadataValue;

    #[track_caller]
    fn index(&self, key: &str) -> &Self::Output {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no metadata entry for key `{key}`"),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<Cow<'static, str>>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        metadata.extend(iter);
        metadata
    }
}

impl<K, V> Extend<(K, V)> for Metadata
where
    K: Into<Cow<'static, str>>,
    V: Into<MetadataValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
