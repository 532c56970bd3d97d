use crate::outcome::core::Outcome;
use crate::types::Error;

/// Borrowing iterator over the success value of an [`Outcome`].
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over the success value of an [`Outcome`].
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// Iterator over the errors of an [`Outcome`], empty on success.
pub enum ErrorsIter<'a> {
    Empty,
    Multi(core::slice::Iter<'a, Error>),
}

impl<'a> Iterator for ErrorsIter<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ErrorsIter::Empty => None,
            ErrorsIter::Multi(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            ErrorsIter::Empty => (0, Some(0)),
            ErrorsIter::Multi(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for ErrorsIter<'_> {}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Outcome::Success(value) => IntoIter { inner: Some(value) },
            Outcome::Failure(_) => IntoIter { inner: None },
        }
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Outcome<T> {
    /// Iterates over the success value: one item on success, none on failure.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.success(),
        }
    }

    /// Iterates over the errors in order: none on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let outcome: Outcome = Outcome::fail_many([Error::new("x"), Error::new("y")]);
    /// assert_eq!(outcome.iter_errors().len(), 2);
    ///
    /// assert_eq!(Outcome::OK.iter_errors().count(), 0);
    /// ```
    pub fn iter_errors(&self) -> ErrorsIter<'_> {
        match self {
            Outcome::Success(_) => ErrorsIter::Empty,
            Outcome::Failure(errors) => ErrorsIter::Multi(errors.iter()),
        }
    }
}
