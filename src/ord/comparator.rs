//! Comparator trait and combinators.
//!
//! A [`Comparator<T>`] decides an [`Ordering`] between two borrowed values of
//! type `T`. Every `Fn(&T, &T) -> Ordering` is a comparator, and the structs
//! in this module build new comparators from existing ones without mutating
//! them.
//!
//! # Consistency
//!
//! Comparators are expected to describe a total order: `compare(x, y)` and
//! `compare(y, x)` are reverses of each other and `compare(x, x)` is `Equal`.
//! This is the caller's responsibility and is not checked.
//!
//! # Examples
//!
//! ```rust
//! use funkit::ord::{self, Comparator, Ordering};
//!
//! let by_length = ord::by(|word: &&str| word.len());
//! let longest_first = by_length.reversed();
//!
//! assert_eq!(longest_first.compare(&"abc", &"a"), Ordering::LessThan);
//! ```

use std::cmp;
use std::fmt;
use std::marker::PhantomData;

use super::Ordering;

/// A comparison function over borrowed values of type `T`.
///
/// Implemented for every `Fn(&T, &T) -> Ordering` and for the combinator
/// structs of this module.
pub trait Comparator<T: ?Sized> {
    /// Compares `left` against `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Chains a tie-breaking comparator.
    ///
    /// The result uses `self` unless it reports `Equal`, in which case
    /// `next` decides. Chains associate left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::ord::{self, Comparator, Ordering};
    ///
    /// let comparator = ord::by(|pair: &(i32, i32)| pair.0).then(ord::by(|pair: &(i32, i32)| pair.1));
    /// assert_eq!(comparator.compare(&(1, 9), &(2, 0)), Ordering::LessThan);
    /// assert_eq!(comparator.compare(&(1, 9), &(1, 0)), Ordering::GreaterThan);
    /// ```
    fn then<C>(self, next: C) -> Then<Self, C>
    where
        Self: Sized,
        C: Comparator<T>,
    {
        Then {
            primary: self,
            secondary: next,
        }
    }

    /// Returns a comparator that swaps the argument order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::ord::{self, Comparator, Ordering};
    ///
    /// let descending = ord::natural::<i32>().reversed();
    /// assert_eq!(descending.compare(&10, &3), Ordering::LessThan);
    /// ```
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed { inner: self }
    }

    /// Converts this comparator into an integer-returning comparison function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::ord::{self, Comparator};
    ///
    /// let comparison = ord::natural::<i32>().to_comparison();
    /// assert!(comparison(&1, &2) < 0);
    /// ```
    fn to_comparison(self) -> impl Fn(&T, &T) -> i32
    where
        Self: Sized,
    {
        move |left: &T, right: &T| self.compare(left, right).to_comparison_result()
    }

    /// Converts this comparator into a `std::cmp::Ordering`-returning
    /// function, suitable for `slice::sort_by` and friends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::ord::{self, Comparator};
    ///
    /// let mut values = vec![3, 1, 2];
    /// values.sort_by(ord::natural::<i32>().reversed().to_std());
    /// assert_eq!(values, vec![3, 2, 1]);
    /// ```
    fn to_std(self) -> impl Fn(&T, &T) -> cmp::Ordering
    where
        Self: Sized,
    {
        move |left: &T, right: &T| self.compare(left, right).into()
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

// =============================================================================
// Natural Order
// =============================================================================

/// The natural order of a type implementing [`Ord`].
///
/// Created by [`natural`] or [`NaturalOrder::new`].
pub struct NaturalOrder<T: ?Sized> {
    element_type: PhantomData<fn(&T, &T)>,
}

impl<T: ?Sized> NaturalOrder<T> {
    /// Creates the natural-order comparator for `T`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            element_type: PhantomData,
        }
    }
}

impl<T: ?Sized> Clone for NaturalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NaturalOrder<T> {}

impl<T: ?Sized> Default for NaturalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for NaturalOrder<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("NaturalOrder")
    }
}

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder<T> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right).into()
    }
}

// =============================================================================
// By Key
// =============================================================================

/// Compares values by a projected key.
///
/// Created by [`by`] and [`by_with`].
#[derive(Clone, Copy)]
pub struct By<F, C, K> {
    key: F,
    key_comparator: C,
    key_type: PhantomData<fn() -> K>,
}

impl<T, K, F, C> Comparator<T> for By<F, C, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.key_comparator
            .compare(&(self.key)(left), &(self.key)(right))
    }
}

// =============================================================================
// Then
// =============================================================================

/// A comparator with a tie-breaker. Created by [`Comparator::then`].
#[derive(Debug, Clone, Copy)]
pub struct Then<A, B> {
    primary: A,
    secondary: B,
}

impl<T, A, B> Comparator<T> for Then<A, B>
where
    T: ?Sized,
    A: Comparator<T>,
    B: Comparator<T>,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        match self.primary.compare(left, right) {
            Ordering::Equal => self.secondary.compare(left, right),
            decided => decided,
        }
    }
}

// =============================================================================
// Reversed
// =============================================================================

/// A comparator with swapped arguments. Created by [`Comparator::reversed`].
#[derive(Debug, Clone, Copy)]
pub struct Reversed<C> {
    inner: C,
}

impl<C> Reversed<C> {
    /// Returns the comparator being reversed.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> Comparator<T> for Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.inner.compare(right, left)
    }
}

// =============================================================================
// Adapters
// =============================================================================

/// Adapts an integer-returning comparison function. Created by [`from_comparison`].
#[derive(Debug, Clone, Copy)]
pub struct FromComparison<F> {
    comparison: F,
}

impl<T, F> Comparator<T> for FromComparison<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> i32,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        Ordering::from_comparison_result((self.comparison)(left, right))
    }
}

/// Adapts a `std::cmp::Ordering`-returning function. Created by [`from_std`].
#[derive(Debug, Clone, Copy)]
pub struct FromStd<F> {
    comparison: F,
}

impl<T, F> Comparator<T> for FromStd<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> cmp::Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.comparison)(left, right).into()
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Returns the natural-order comparator for `T`.
///
/// # Examples
///
/// ```rust
/// use funkit::ord::{self, Comparator, Ordering};
///
/// assert_eq!(ord::natural::<i32>().compare(&1, &2), Ordering::LessThan);
/// ```
#[inline]
pub const fn natural<T: Ord + ?Sized>() -> NaturalOrder<T> {
    NaturalOrder::new()
}

/// Compares values by the natural order of a projected key.
///
/// # Examples
///
/// ```rust
/// use funkit::ord::{self, Comparator, Ordering};
///
/// let by_length = ord::by(|text: &String| text.len());
/// assert_eq!(
///     by_length.compare(&"abcdefg".to_string(), &"hij".to_string()),
///     Ordering::GreaterThan
/// );
/// ```
pub fn by<T, K, F>(key: F) -> By<F, NaturalOrder<K>, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    by_with(key, NaturalOrder::new())
}

/// Compares values by a projected key using the supplied key comparator.
///
/// # Examples
///
/// ```rust
/// use funkit::ord::{self, Comparator, Ordering};
///
/// let by_weight = ord::by_with(
///     |weight: &(&str, f64)| weight.1,
///     ord::from_std(|left: &f64, right: &f64| left.total_cmp(right)),
/// );
/// assert_eq!(by_weight.compare(&("a", 1.5), &("b", 0.5)), Ordering::GreaterThan);
/// ```
pub fn by_with<T, K, F, C>(key: F, key_comparator: C) -> By<F, C, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    By {
        key,
        key_comparator,
        key_type: PhantomData,
    }
}

/// Chains `secondary` as the tie-breaker of `primary`.
pub fn then<T, A, B>(primary: A, secondary: B) -> Then<A, B>
where
    T: ?Sized,
    A: Comparator<T>,
    B: Comparator<T>,
{
    primary.then(secondary)
}

/// Reverses a comparator.
pub fn reverse<T, C>(comparator: C) -> Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    comparator.reversed()
}

/// Adapts an integer-returning comparison function into a comparator.
///
/// # Examples
///
/// ```rust
/// use funkit::ord::{self, Comparator, Ordering};
///
/// let comparator = ord::from_comparison(|left: &i32, right: &i32| left - right);
/// assert_eq!(comparator.compare(&1, &5), Ordering::LessThan);
/// ```
pub fn from_comparison<T, F>(comparison: F) -> FromComparison<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> i32,
{
    FromComparison { comparison }
}

/// Adapts a `std::cmp::Ordering`-returning function into a comparator.
pub fn from_std<T, F>(comparison: F) -> FromStd<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> cmp::Ordering,
{
    FromStd { comparison }
}
