//! Sequence generation and splitting.

use std::fmt;
use std::iter::{self, Once};

use crate::control::Maybe;

/// Builds a lazy sequence from a seed.
///
/// `step` receives the current state and returns either the next item with
/// the following state, or an empty `Maybe` to end the sequence. The
/// iterator is single-pass and stops at the first empty step.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::seq::unfold;
///
/// let countdown: Vec<u32> = unfold(3_u32, |n| {
///     if n == 0 { Maybe::none() } else { Maybe::some((n, n - 1)) }
/// })
/// .collect();
/// assert_eq!(countdown, vec![3, 2, 1]);
///
/// let fibonacci: Vec<u64> = unfold((0_u64, 1_u64), |(a, b)| Maybe::some((a, (b, a + b))))
///     .take(6)
///     .collect();
/// assert_eq!(fibonacci, vec![0, 1, 1, 2, 3, 5]);
/// ```
pub const fn unfold<S, T, F>(seed: S, step: F) -> Unfold<S, F>
where
    F: FnMut(S) -> Maybe<(T, S)>,
{
    Unfold {
        state: Some(seed),
        step,
    }
}

/// Iterator returned by [`unfold`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Unfold<S, F> {
    state: Option<S>,
    step: F,
}

impl<S, T, F> Iterator for Unfold<S, F>
where
    F: FnMut(S) -> Maybe<(T, S)>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let state = self.state.take()?;
        let (item, next_state) = (self.step)(state).into_option()?;
        self.state = Some(next_state);
        Some(item)
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Unfold<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Unfold")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Returns a sequence holding exactly `item`.
pub fn singleton<T>(item: T) -> Once<T> {
    iter::once(item)
}

/// Splits a sequence in one pass into the elements matching `predicate`
/// and the rest, preserving order within each part.
///
/// # Examples
///
/// ```rust
/// use funkit::seq::partition;
///
/// let (even, odd) = partition(1..=6, |value| value % 2 == 0);
/// assert_eq!(even, vec![2, 4, 6]);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn partition<I, P>(sequence: I, mut predicate: P) -> (Vec<I::Item>, Vec<I::Item>)
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for item in sequence {
        if predicate(&item) {
            matching.push(item);
        } else {
            rest.push(item);
        }
    }
    (matching, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn unfold_is_lazy() {
        let calls = Cell::new(0);
        let mut naturals = unfold(0, |n| {
            calls.set(calls.get() + 1);
            Maybe::some((n, n + 1))
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(naturals.next(), Some(0));
        assert_eq!(naturals.next(), Some(1));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn unfold_stays_exhausted() {
        let mut empty = unfold((), |()| Maybe::<(i32, ())>::none());
        assert_eq!(empty.next(), None);
        assert_eq!(empty.next(), None);
    }

    #[rstest]
    fn singleton_yields_once() {
        assert_eq!(singleton("x").collect::<Vec<_>>(), vec!["x"]);
    }

    #[rstest]
    fn partition_of_empty() {
        let (matching, rest) = partition(Vec::<i32>::new(), |_| true);
        assert!(matching.is_empty());
        assert!(rest.is_empty());
    }
}
