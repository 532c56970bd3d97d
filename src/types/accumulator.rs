use crate::types::{Error, ErrorVec, Errors};

/// A common abstraction for accumulating errors across many outcomes.
///
/// This struct wraps the underlying storage (currently `ErrorVec`) to provide
/// a consistent interface for the collect combinators.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Accumulator<T> {
    items: ErrorVec<T>,
}

impl<T> Accumulator<T> {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: ErrorVec::new(),
        }
    }

    /// Adds a single item to the accumulator.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Extends the accumulator with items from an iterator, preserving their order.
    #[inline]
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    /// Returns true if the accumulator is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the accumulator.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the accumulator and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<T> {
        self.items
    }
}

impl Accumulator<Error> {
    /// Converts the accumulated errors into a non-empty [`Errors`] list.
    ///
    /// Returns `None` when nothing was accumulated.
    #[inline]
    pub fn into_errors(self) -> Option<Errors> {
        Errors::from_vec(self.items)
    }
}

impl<T> From<ErrorVec<T>> for Accumulator<T> {
    fn from(items: ErrorVec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Accumulator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Accumulator<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
