//! Enumeration type class - types whose values map to consecutive integers.
//!
//! An [`Enumeration`] instance only supplies the two partial conversions
//! between values and `i32` positions. Successors, predecessors and ranges
//! are derived from them, and every derived operation reports an
//! out-of-range position as an empty [`Maybe`] or an early end of iteration.
//!
//! # Ranges
//!
//! - [`enum_from`](Enumeration::enum_from): from a value up to the last position
//! - [`enum_from_to`](Enumeration::enum_from_to): an inclusive range, empty
//!   when `first > last`
//! - [`enum_from_then_to`](Enumeration::enum_from_then_to): an inclusive
//!   range whose step is the distance from `first` to `second`; a negative
//!   step gives an empty range, a zero step gives `first` once
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Maybe;
//! use funkit::ord::Ordering;
//! use funkit::typeclass::Enumeration;
//!
//! assert_eq!(Ordering::LessThan.succ(), Maybe::some(Ordering::Equal));
//! assert_eq!(Ordering::GreaterThan.succ(), Maybe::none());
//!
//! let odd: Vec<i32> = i32::enum_from_then_to(&1, &3, &9).collect();
//! assert_eq!(odd, vec![1, 3, 5, 7, 9]);
//! ```

use std::cmp;
use std::marker::PhantomData;

use crate::control::Maybe;
use crate::ord::Ordering;

/// A type whose values correspond to consecutive `i32` positions.
pub trait Enumeration: Sized {
    /// Returns the position of `self`, if it has one.
    fn maybe_from_enum(&self) -> Maybe<i32>;

    /// Returns the value at `position`, if there is one.
    fn maybe_to_enum(position: i32) -> Maybe<Self>;

    /// Returns the value at the next position.
    fn succ(&self) -> Maybe<Self> {
        self.maybe_from_enum()
            .bind(|position| Maybe::from(position.checked_add(1)))
            .bind(Self::maybe_to_enum)
    }

    /// Returns the value at the previous position.
    fn pred(&self) -> Maybe<Self> {
        self.maybe_from_enum()
            .bind(|position| Maybe::from(position.checked_sub(1)))
            .bind(Self::maybe_to_enum)
    }

    /// Returns the value at `position`.
    fn to_enum(position: i32) -> Maybe<Self> {
        Self::maybe_to_enum(position)
    }

    /// Returns the position of `self`.
    fn from_enum(&self) -> Maybe<i32> {
        self.maybe_from_enum()
    }

    /// Lazily enumerates `self` and every following value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Enumeration;
    ///
    /// assert_eq!(false.enum_from().collect::<Vec<_>>(), vec![false, true]);
    /// ```
    fn enum_from(&self) -> EnumRange<Self> {
        match self.maybe_from_enum() {
            Maybe::Some(start) => EnumRange::new(start, i32::MAX, 1),
            Maybe::None => EnumRange::empty(),
        }
    }

    /// Lazily enumerates `first` through `last`, inclusive.
    fn enum_from_to(first: &Self, last: &Self) -> EnumRange<Self> {
        match (first.maybe_from_enum(), last.maybe_from_enum()) {
            (Maybe::Some(start), Maybe::Some(end)) => EnumRange::new(start, end, 1),
            _ => EnumRange::empty(),
        }
    }

    /// Lazily enumerates `first`, `second`, and so on up to `last`,
    /// inclusive, stepping by the distance from `first` to `second`.
    fn enum_from_then_to(first: &Self, second: &Self, last: &Self) -> EnumRange<Self> {
        let (Maybe::Some(start), Maybe::Some(next), Maybe::Some(end)) = (
            first.maybe_from_enum(),
            second.maybe_from_enum(),
            last.maybe_from_enum(),
        ) else {
            return EnumRange::empty();
        };
        let step = i64::from(next) - i64::from(start);
        match step.cmp(&0) {
            cmp::Ordering::Less => EnumRange::empty(),
            cmp::Ordering::Equal => EnumRange::new(start, end.min(start), 1),
            cmp::Ordering::Greater => EnumRange::new(start, end, step),
        }
    }
}

/// A lazy range of [`Enumeration`] values.
///
/// Iteration ends at the inclusive upper position, or earlier at the first
/// position with no value.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct EnumRange<T> {
    cursor: i64,
    last: i64,
    step: i64,
    element: PhantomData<fn() -> T>,
}

impl<T> EnumRange<T> {
    fn new(first: i32, last: i32, step: i64) -> Self {
        Self {
            cursor: i64::from(first),
            last: i64::from(last),
            step,
            element: PhantomData,
        }
    }

    const fn empty() -> Self {
        Self {
            cursor: 1,
            last: 0,
            step: 1,
            element: PhantomData,
        }
    }
}

impl<T: Enumeration> Iterator for EnumRange<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.cursor > self.last {
            return None;
        }
        let position = i32::try_from(self.cursor).ok()?;
        match T::maybe_to_enum(position) {
            Maybe::Some(value) => {
                self.cursor += self.step;
                Some(value)
            }
            Maybe::None => {
                self.cursor = self.last + 1;
                None
            }
        }
    }
}

// =============================================================================
// Instances
// =============================================================================

impl Enumeration for bool {
    fn maybe_from_enum(&self) -> Maybe<i32> {
        Maybe::Some(i32::from(*self))
    }

    fn maybe_to_enum(position: i32) -> Maybe<Self> {
        match position {
            0 => Maybe::Some(false),
            1 => Maybe::Some(true),
            _ => Maybe::None,
        }
    }
}

impl Enumeration for i32 {
    fn maybe_from_enum(&self) -> Maybe<i32> {
        Maybe::Some(*self)
    }

    fn maybe_to_enum(position: i32) -> Maybe<Self> {
        Maybe::Some(position)
    }
}

impl Enumeration for Ordering {
    fn maybe_from_enum(&self) -> Maybe<i32> {
        Maybe::Some(match self {
            Self::LessThan => 0,
            Self::Equal => 1,
            Self::GreaterThan => 2,
        })
    }

    fn maybe_to_enum(position: i32) -> Maybe<Self> {
        match position {
            0 => Maybe::Some(Self::LessThan),
            1 => Maybe::Some(Self::Equal),
            2 => Maybe::Some(Self::GreaterThan),
            _ => Maybe::None,
        }
    }
}
