use alloc::vec::Vec;
use core::error::Error as CoreError;
use core::fmt;
use core::ops::Index;

use smallvec::smallvec;

use crate::types::{Error, ErrorVec};

/// Ordered, non-empty list of errors carried by a failed outcome.
///
/// There is no way to build an empty `Errors`, so a failure always reports at
/// least one error.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Errors};
///
/// let errors = Errors::from_iter_checked([Error::new("a"), Error::new("b")]).unwrap();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().message(), "a");
///
/// assert!(Errors::from_iter_checked(Vec::<Error>::new()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Errors {
    items: ErrorVec<Error>,
}

impl Errors {
    /// A list holding exactly one error.
    #[inline]
    pub fn new(error: Error) -> Self {
        Self {
            items: smallvec![error],
        }
    }

    /// Collects errors in order; `None` if the iterator is empty.
    pub fn from_iter_checked<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Error>,
    {
        Self::from_vec(errors.into_iter().collect())
    }

    #[inline]
    pub(crate) fn from_vec(items: ErrorVec<Error>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// The first error in the list.
    #[inline]
    pub fn first(&self) -> &Error {
        &self.items[0]
    }

    /// Number of errors; always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Error] {
        &self.items
    }

    /// Consumes the list, returning the first error.
    #[inline]
    pub fn into_first(self) -> Error {
        let mut items = self.items;
        items.swap_remove(0)
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Error> {
        self.items.into_vec()
    }

    /// Appends every error of `other`, keeping its order.
    #[inline]
    pub(crate) fn append(&mut self, other: Errors) {
        self.items.extend(other.items);
    }
}

impl Index<usize> for Errors {
    type Output = Error;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl AsRef<[Error]> for Errors {
    #[inline]
    fn as_ref(&self) -> &[Error] {
        &self.items
    }
}

impl From<Error> for Errors {
    #[inline]
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Errors {
    /// Messages joined with `"; "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            f.write_str(error.message())?;
        }
        Ok(())
    }
}

impl CoreError for Errors {}
