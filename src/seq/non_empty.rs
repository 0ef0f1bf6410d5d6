//! A sequence with at least one element.

use std::iter::{Chain, Once, once};

use crate::control::Maybe;

/// A sequence guaranteed to hold a first element.
///
/// Iteration yields the first element, then the rest in order.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::seq::NonEmpty;
///
/// let values = NonEmpty::new(1, vec![2, 3]);
/// assert_eq!(*values.first(), 1);
/// assert_eq!(values.len(), 3);
/// assert_eq!(values.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// assert_eq!(NonEmpty::<i32>::from_vec(Vec::new()), Maybe::none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmpty<T> {
    first: T,
    rest: Vec<T>,
}

impl<T> NonEmpty<T> {
    /// Creates a sequence from its first element and the remaining elements.
    pub fn new(first: T, rest: impl IntoIterator<Item = T>) -> Self {
        Self {
            first,
            rest: rest.into_iter().collect(),
        }
    }

    /// Creates a one-element sequence.
    pub const fn singleton(first: T) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Creates a sequence from a `Vec`, empty when the `Vec` is empty.
    pub fn from_vec(mut values: Vec<T>) -> Maybe<Self> {
        if values.is_empty() {
            return Maybe::None;
        }
        let first = values.remove(0);
        Maybe::Some(Self {
            first,
            rest: values,
        })
    }

    /// Returns the first element.
    pub const fn first(&self) -> &T {
        &self.first
    }

    /// Returns the elements after the first.
    pub fn rest(&self) -> &[T] {
        &self.rest
    }

    /// Returns the last element.
    pub fn last(&self) -> &T {
        self.rest.last().unwrap_or(&self.first)
    }

    /// Returns the number of elements, always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Appends an element.
    pub fn push(&mut self, item: T) {
        self.rest.push(item);
    }

    /// Applies `function` to every element.
    pub fn map<U, F>(self, mut function: F) -> NonEmpty<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmpty {
            first: function(self.first),
            rest: self.rest.into_iter().map(function).collect(),
        }
    }

    /// Returns an iterator over references to the elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        once(&self.first).chain(self.rest.iter())
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = Chain<Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        once(self.first).chain(self.rest)
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(values: NonEmpty<T>) -> Self {
        let mut collected = Vec::with_capacity(values.len());
        collected.push(values.first);
        collected.extend(values.rest);
        collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn last_falls_back_to_first() {
        let single = NonEmpty::singleton('a');
        assert_eq!(*single.last(), 'a');
        assert_eq!(single.len(), 1);
    }

    #[rstest]
    fn from_vec_keeps_order() {
        let values = NonEmpty::from_vec(vec![4, 5, 6]).unwrap();
        assert_eq!(*values.first(), 4);
        assert_eq!(values.rest(), &[5, 6]);
        assert_eq!(*values.last(), 6);
    }

    #[rstest]
    fn map_and_iter() {
        let mut values = NonEmpty::new(1, [2]);
        values.push(3);
        let doubled = values.map(|value| value * 2);
        assert_eq!(doubled.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
        assert_eq!(Vec::from(doubled), vec![2, 4, 6]);
    }
}
