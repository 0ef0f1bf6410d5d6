//! Maybe type - an optional value.
//!
//! This module provides the `Maybe<T>` type, which either holds a value
//! (`Some`) or holds nothing (`None`). Absence is ordinary data: nothing in
//! this module signals absence by failing, except the explicit
//! [`Maybe::value`] accessor, which reports [`InvalidStateAccess`] when the
//! value is missing.
//!
//! `Maybe` is not a fault barrier. A closure that panics inside
//! [`Maybe::map`] or [`Maybe::filter`] unwinds into the caller unchanged.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Maybe;
//!
//! let present = Maybe::some(21);
//! let absent: Maybe<i32> = Maybe::none();
//!
//! assert_eq!(present.map(|value| value * 2), Maybe::some(42));
//! assert_eq!(absent.map(|value| value * 2), Maybe::none());
//! assert_eq!(absent.get_or(0), 0);
//! ```

use std::fmt;

use super::error::InvalidStateAccess;
use super::try_monad::Try;
use super::TryError;

/// An optional value.
///
/// Constructing from a value always yields `Some`, including when the value
/// is a type's zero or default value.
///
/// Ordering matches [`Option`]: `None` sorts before every `Some`.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
///
/// let zero = Maybe::some(0);
/// assert!(zero.has_value());
/// assert_eq!(zero.value(), Ok(0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a populated `Maybe`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an empty `Maybe`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateAccess`] if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::some("x").value(), Ok("x"));
    /// assert!(Maybe::<&str>::none().value().is_err());
    /// ```
    #[inline]
    pub fn value(self) -> Result<T, InvalidStateAccess> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Self::missing()),
        }
    }

    /// Returns a reference to the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateAccess`] if no value is present.
    #[inline]
    pub const fn value_ref(&self) -> Result<&T, InvalidStateAccess> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Self::missing()),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if no value is present.
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Maybe::unwrap()` on a `None` value"),
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a function to the contained value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::some("hello").map(str::len), Maybe::some(5));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Applies a `Maybe`-producing function to the contained value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// let half = |value: i32| if value % 2 == 0 { Maybe::some(value / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).bind(half), Maybe::some(4));
    /// assert_eq!(Maybe::some(7).bind(half), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only if the predicate holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(4).filter(|value| *value > 3), Maybe::some(4));
    /// assert_eq!(Maybe::some(2).filter(|value| *value > 3), Maybe::none());
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.fold(|| "none".to_string(), |value| value.to_string());
    /// assert_eq!(describe(Maybe::some(3)), "3");
    /// assert_eq!(describe(Maybe::none()), "none");
    /// ```
    #[inline]
    pub fn fold<U, N, S>(self, none_function: N, some_function: S) -> U
    where
        N: FnOnce() -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => some_function(value),
            Self::None => none_function(),
        }
    }

    // =========================================================================
    // Defaults
    // =========================================================================

    /// Returns the contained value or `default`.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes one.
    ///
    /// `default_function` is only called when no value is present.
    #[inline]
    pub fn get_or_else<F>(self, default_function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default_function(),
        }
    }

    /// Returns `self` if populated, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => alternative,
        }
    }

    /// Returns `self` if populated, otherwise the result of `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => alternative(),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into an [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts into a [`Try`].
    ///
    /// An empty `Maybe` becomes a failure carrying
    /// [`TryError::NoSuchElement`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Maybe, TryError};
    ///
    /// assert_eq!(Maybe::some(1).to_try().value(), Ok(1));
    /// assert!(matches!(
    ///     Maybe::<i32>::none().to_try().value(),
    ///     Err(TryError::NoSuchElement { .. })
    /// ));
    /// ```
    pub fn to_try(self) -> Try<T> {
        match self {
            Self::Some(value) => Try::success(value),
            Self::None => Try::failed(TryError::no_such_element("maybe is empty")),
        }
    }

    /// Converts a [`Try`] into a `Maybe`, discarding any error.
    #[inline]
    pub fn from_try(attempt: Try<T>) -> Self {
        attempt.to_maybe()
    }

    /// Returns an iterator over the contained value.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Lazily keeps the populated values of a sequence, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// let values = vec![Maybe::some(1), Maybe::none(), Maybe::some(3)];
    /// let present: Vec<i32> = Maybe::somes(values).collect();
    /// assert_eq!(present, vec![1, 3]);
    /// ```
    pub fn somes<I>(sequence: I) -> impl Iterator<Item = T>
    where
        I: IntoIterator<Item = Self>,
    {
        sequence.into_iter().filter_map(Self::into_option)
    }

    const fn missing() -> InvalidStateAccess {
        InvalidStateAccess {
            expected: "Some",
            found: "None",
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::None, Self::Some)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> From<Try<T>> for Maybe<T> {
    fn from(attempt: Try<T>) -> Self {
        attempt.to_maybe()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
