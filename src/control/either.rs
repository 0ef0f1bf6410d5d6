//! Either type - a value carrying exactly one of two payloads.
//!
//! This module provides the `Either<L, R>` type and the sequence-level
//! helpers [`lefts`], [`rights`] and [`partition_eithers`].
//!
//! Like [`Maybe`], `Either` is plain data. The only operations that report a
//! wrong-variant access are [`Either::left`] and [`Either::right`], which
//! return [`InvalidStateAccess`] instead of a payload. Closures passed to
//! `map_left`, `bimap`, `fold` and friends are not guarded: a panic unwinds
//! into the caller.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::{Either, lefts, partition_eithers};
//!
//! let values: Vec<Either<i32, &str>> = vec![
//!     Either::Left(1),
//!     Either::Right("s1"),
//!     Either::Right("s2"),
//!     Either::Left(2),
//! ];
//!
//! assert_eq!(lefts(values.clone()).collect::<Vec<_>>(), vec![1, 2]);
//! assert_eq!(partition_eithers(values), (vec![1, 2], vec!["s1", "s2"]));
//! ```

use std::fmt;

use super::error::InvalidStateAccess;
use super::maybe::Maybe;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Values are constructed directly from the variants.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Either;
///
/// let parsed: Either<String, i32> = Either::Right(42);
/// let doubled = parsed.map_right(|value| value * 2);
/// assert_eq!(doubled, Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left payload.
    Left(L),
    /// The right payload.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left payload, consuming the either.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateAccess`] if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Either, InvalidStateAccess};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Ok(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(
    ///     right.left(),
    ///     Err(InvalidStateAccess { expected: "Left", found: "Right" })
    /// );
    /// ```
    #[inline]
    pub fn left(self) -> Result<L, InvalidStateAccess> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(WRONG_SIDE_LEFT),
        }
    }

    /// Returns the right payload, consuming the either.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateAccess`] if this is a `Left` value.
    #[inline]
    pub fn right(self) -> Result<R, InvalidStateAccess> {
        match self {
            Self::Left(_) => Err(WRONG_SIDE_RIGHT),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns a reference to the left payload.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateAccess`] if this is a `Right` value.
    #[inline]
    pub const fn left_ref(&self) -> Result<&L, InvalidStateAccess> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(WRONG_SIDE_LEFT),
        }
    }

    /// Returns a reference to the right payload.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateAccess`] if this is a `Left` value.
    #[inline]
    pub const fn right_ref(&self) -> Result<&R, InvalidStateAccess> {
        match self {
            Self::Left(_) => Err(WRONG_SIDE_RIGHT),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the left payload as a [`Maybe`].
    #[inline]
    pub fn maybe_left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Some(value),
            Self::Right(_) => Maybe::None,
        }
    }

    /// Returns the right payload as a [`Maybe`].
    #[inline]
    pub fn maybe_right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::None,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    /// Returns the left payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left payload, leaving a `Right` unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right payload, leaving a `Left` unchanged.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms whichever side is populated, preserving the tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.bimap(|value| value * 2, |text: String| text.len()), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.bimap(|value: i32| value * 2, |text| text.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the either by applying the function matching the populated side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.fold(|value: i32| value.to_string(), |text| text), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the `Left` and `Right` variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

const WRONG_SIDE_LEFT: InvalidStateAccess = InvalidStateAccess {
    expected: "Left",
    found: "Right",
};

const WRONG_SIDE_RIGHT: InvalidStateAccess = InvalidStateAccess {
    expected: "Right",
    found: "Left",
};

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)` and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)` and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Sequence Operations
// =============================================================================

/// Lazily yields the left payloads of a sequence, in order.
///
/// # Examples
///
/// ```rust
/// use funkit::control::{Either, lefts};
///
/// let values = vec![Either::Left(1), Either::<i32, &str>::Right("a"), Either::Left(2)];
/// assert_eq!(lefts(values).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn lefts<L, R, I>(sequence: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    sequence.into_iter().filter_map(|either| match either {
        Either::Left(value) => Some(value),
        Either::Right(_) => None,
    })
}

/// Lazily yields the right payloads of a sequence, in order.
pub fn rights<L, R, I>(sequence: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    sequence.into_iter().filter_map(|either| match either {
        Either::Left(_) => None,
        Either::Right(value) => Some(value),
    })
}

/// Splits a sequence into its left and right payloads in a single pass.
///
/// Relative order is preserved within each side.
pub fn partition_eithers<L, R, I>(sequence: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut left_values = Vec::new();
    let mut right_values = Vec::new();
    for either in sequence {
        match either {
            Either::Left(value) => left_values.push(value),
            Either::Right(value) => right_values.push(value),
        }
    }
    (left_values, right_values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn sample() -> Vec<Either<i32, &'static str>> {
        vec![
            Either::Left(1),
            Either::Right("s1"),
            Either::Right("s2"),
            Either::Left(2),
        ]
    }

    #[rstest]
    fn wrong_side_access_reports_both_variants() {
        let left: Either<i32, &str> = Either::Left(3);
        assert_eq!(
            left.right_ref(),
            Err(InvalidStateAccess {
                expected: "Right",
                found: "Left"
            })
        );
        assert_eq!(left.left_ref(), Ok(&3));
    }

    #[rstest]
    fn rights_preserves_order() {
        assert_eq!(rights(sample()).collect::<Vec<_>>(), vec!["s1", "s2"]);
    }

    #[rstest]
    fn lefts_is_lazy() {
        let visited = Cell::new(0);
        let source = sample().into_iter().inspect(|_| visited.set(visited.get() + 1));
        let mut left_values = lefts(source);
        assert_eq!(visited.get(), 0);
        assert_eq!(left_values.next(), Some(1));
        assert_eq!(visited.get(), 1);
    }

    #[rstest]
    fn partition_eithers_reads_source_once() {
        let visited = Cell::new(0);
        let source = sample().into_iter().inspect(|_| visited.set(visited.get() + 1));
        let (left_values, right_values) = partition_eithers(source);
        assert_eq!(left_values, vec![1, 2]);
        assert_eq!(right_values, vec!["s1", "s2"]);
        assert_eq!(visited.get(), 4);
    }

    #[rstest]
    #[should_panic(expected = "called `Either::unwrap_left()` on a `Right` value")]
    fn unwrap_left_on_right_panics() {
        Either::<i32, i32>::Right(1).unwrap_left();
    }

    #[rstest]
    #[case(Ok(1), Either::Right(1))]
    #[case(Err("bad"), Either::Left("bad"))]
    fn from_result(#[case] result: Result<i32, &'static str>, #[case] expected: Either<&'static str, i32>) {
        assert_eq!(Either::from(result), expected);
    }
}
