//! `Maybe`-returning lookups over arbitrary sequences.
//!
//! Every function here consumes an [`IntoIterator`] and reports absence as
//! an empty [`Maybe`]. Ambiguity (several matches for
//! [`maybe_single_by`]) is also absence, never an error.

use crate::control::Maybe;
use crate::ord::{Comparator, NaturalOrder, Ordering};

/// Returns the element at `index`.
///
/// Negative indexes yield an empty `Maybe`. When the iterator reports an
/// exact length, an out-of-range index returns without traversing; otherwise
/// the iterator is advanced with [`Iterator::nth`].
///
/// Collections implementing [`Indexed`](super::Indexed) also provide an
/// O(1) method of the same name.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::seq::maybe_element_at;
///
/// assert_eq!(maybe_element_at(vec![1, 2], 1), Maybe::some(2));
/// assert_eq!(maybe_element_at(vec![1, 2], 2), Maybe::none());
/// assert_eq!(maybe_element_at(vec![1, 2], -1), Maybe::none());
/// assert_eq!(maybe_element_at((1..).filter(|n| n % 2 == 0), 2), Maybe::some(6));
/// ```
pub fn maybe_element_at<I>(sequence: I, index: isize) -> Maybe<I::Item>
where
    I: IntoIterator,
{
    let Ok(position) = usize::try_from(index) else {
        return Maybe::None;
    };
    let mut iterator = sequence.into_iter();
    if let (lower, Some(upper)) = iterator.size_hint()
        && lower == upper
        && position >= upper
    {
        return Maybe::None;
    }
    iterator.nth(position).into()
}

/// Returns the first element.
pub fn maybe_first<I>(sequence: I) -> Maybe<I::Item>
where
    I: IntoIterator,
{
    sequence.into_iter().next().into()
}

/// Returns the first element matching `predicate`.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::seq::maybe_first_by;
///
/// assert_eq!(maybe_first_by([1, 4, 7], |value| *value > 3), Maybe::some(4));
/// assert_eq!(maybe_first_by([1, 2], |value| *value > 3), Maybe::none());
/// ```
pub fn maybe_first_by<I, P>(sequence: I, mut predicate: P) -> Maybe<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().find(|item| predicate(item)).into()
}

/// Returns the last element.
///
/// Double-ended iterators over slices answer this without traversal; for
/// an explicit O(1) path use [`Indexed::maybe_last`](super::Indexed::maybe_last).
pub fn maybe_last<I>(sequence: I) -> Maybe<I::Item>
where
    I: IntoIterator,
{
    sequence.into_iter().last().into()
}

/// Returns the last element matching `predicate`.
pub fn maybe_last_by<I, P>(sequence: I, mut predicate: P) -> Maybe<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence
        .into_iter()
        .filter(|item| predicate(item))
        .last()
        .into()
}

/// Returns the only element; empty if there are zero or several.
///
/// Stops reading after the second element.
pub fn maybe_single<I>(sequence: I) -> Maybe<I::Item>
where
    I: IntoIterator,
{
    let mut iterator = sequence.into_iter();
    match (iterator.next(), iterator.next()) {
        (Some(item), None) => Maybe::Some(item),
        _ => Maybe::None,
    }
}

/// Returns the only element matching `predicate`; empty if there are zero
/// or several matches.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::seq::maybe_single_by;
///
/// assert_eq!(maybe_single_by([1, 2, 5], |value| *value > 3), Maybe::some(5));
/// assert_eq!(maybe_single_by([1, 4, 7, 2], |value| *value > 3), Maybe::none());
/// ```
pub fn maybe_single_by<I, P>(sequence: I, mut predicate: P) -> Maybe<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    maybe_single(sequence.into_iter().filter(|item| predicate(item)))
}

/// Returns the greatest element under the natural order.
///
/// Among equal maxima the last one wins.
pub fn maybe_max<I>(sequence: I) -> Maybe<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    maybe_max_by(sequence, NaturalOrder::new())
}

/// Returns the greatest element under `comparator`.
///
/// The running maximum is replaced whenever an element compares greater
/// than or equal to it, so the last of a run of equal maxima is returned.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::ord;
/// use funkit::seq::maybe_max_by;
///
/// let pairs = [(3, 'a'), (1, 'b'), (3, 'c')];
/// assert_eq!(maybe_max_by(pairs, ord::by(|pair: &(i32, char)| pair.0)), Maybe::some((3, 'c')));
/// ```
pub fn maybe_max_by<I, C>(sequence: I, comparator: C) -> Maybe<I::Item>
where
    I: IntoIterator,
    C: Comparator<I::Item>,
{
    sequence
        .into_iter()
        .reduce(|best, item| {
            if comparator.compare(&item, &best) == Ordering::LessThan {
                best
            } else {
                item
            }
        })
        .into()
}

/// Returns the least element under the natural order.
///
/// Among equal minima the first one wins.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::seq::maybe_min;
///
/// assert_eq!(maybe_min([5, 2, -2, -10, 2]), Maybe::some(-10));
/// assert_eq!(maybe_min(Vec::<i32>::new()), Maybe::none());
/// ```
pub fn maybe_min<I>(sequence: I) -> Maybe<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    maybe_min_by(sequence, NaturalOrder::new())
}

/// Returns the least element under `comparator`.
///
/// The running minimum is replaced only by an element that compares strictly
/// less, so the first of a run of equal minima is returned.
pub fn maybe_min_by<I, C>(sequence: I, comparator: C) -> Maybe<I::Item>
where
    I: IntoIterator,
    C: Comparator<I::Item>,
{
    sequence
        .into_iter()
        .reduce(|best, item| {
            if comparator.compare(&item, &best) == Ordering::LessThan {
                item
            } else {
                best
            }
        })
        .into()
}
