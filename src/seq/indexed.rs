//! Constant-time positional access.

use std::collections::VecDeque;

use crate::control::Maybe;

/// A collection with an O(1) length and O(1) positional access.
///
/// Implementing `Indexed` opts a collection into the lookups that never
/// traverse: [`maybe_element_at`](Indexed::maybe_element_at) and
/// [`maybe_last`](Indexed::maybe_last).
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::seq::Indexed;
///
/// let values = vec![1, 2];
/// assert_eq!(values.maybe_element_at(1), Maybe::some(&2));
/// assert_eq!(values.maybe_element_at(-1), Maybe::none());
/// assert_eq!(values.maybe_element_at(2), Maybe::none());
/// assert_eq!(values.maybe_last(), Maybe::some(&2));
/// ```
pub trait Indexed {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`; negative or out-of-range indexes
    /// yield an empty `Maybe`.
    fn maybe_element_at(&self, index: isize) -> Maybe<&Self::Item> {
        usize::try_from(index)
            .ok()
            .filter(|position| *position < self.len())
            .and_then(|position| self.get(position))
            .into()
    }

    /// Returns the last element.
    fn maybe_last(&self) -> Maybe<&Self::Item> {
        self.len()
            .checked_sub(1)
            .and_then(|position| self.get(position))
            .into()
    }
}

impl<T> Indexed for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Indexed for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Indexed for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Indexed for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1, Maybe::none())]
    #[case(0, Maybe::some(&1))]
    #[case(1, Maybe::some(&2))]
    #[case(2, Maybe::none())]
    #[case(isize::MAX, Maybe::none())]
    fn slice_element_at(#[case] index: isize, #[case] expected: Maybe<&i32>) {
        let values: &[i32] = &[1, 2];
        assert_eq!(values.maybe_element_at(index), expected);
    }

    #[rstest]
    fn deque_uses_logical_positions() {
        let mut values = VecDeque::from(vec![2, 3]);
        values.push_front(1);
        assert_eq!(values.maybe_element_at(0), Maybe::some(&1));
        assert_eq!(values.maybe_last(), Maybe::some(&3));
    }

    #[rstest]
    fn empty_collections_have_no_last() {
        let values: [i32; 0] = [];
        assert!(Indexed::is_empty(&values));
        assert_eq!(values.maybe_last(), Maybe::none());
        assert_eq!(Vec::<i32>::new().maybe_last(), Maybe::none());
    }
}
