//! Ordering - the result of a three-way comparison.
//!
//! [`Ordering`] is a closed enumeration of the three possible outcomes of
//! comparing two values. It converts losslessly to and from the integer
//! convention used by sort routines (negative, zero, positive) and to and
//! from [`std::cmp::Ordering`].
//!
//! # Examples
//!
//! ```rust
//! use funkit::ord::Ordering;
//!
//! assert_eq!(Ordering::from_comparison_result(-3), Ordering::LessThan);
//! assert_eq!(Ordering::GreaterThan.to_comparison_result(), 1);
//! assert_eq!(Ordering::LessThan.reverse(), Ordering::GreaterThan);
//! ```

use std::cmp;
use std::fmt;

/// The result of comparing two values.
///
/// Exactly one of `LessThan`, `Equal` or `GreaterThan`. Reversal swaps
/// `LessThan` and `GreaterThan` and leaves `Equal` unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordering {
    /// The left operand sorts before the right operand.
    LessThan,
    /// The operands are equivalent under the order.
    Equal,
    /// The left operand sorts after the right operand.
    GreaterThan,
}

impl Ordering {
    /// Converts an integer comparison result into an `Ordering`.
    ///
    /// Negative values map to `LessThan`, zero to `Equal` and positive
    /// values to `GreaterThan`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::ord::Ordering;
    ///
    /// assert_eq!(Ordering::from_comparison_result(-7), Ordering::LessThan);
    /// assert_eq!(Ordering::from_comparison_result(0), Ordering::Equal);
    /// assert_eq!(Ordering::from_comparison_result(4), Ordering::GreaterThan);
    /// ```
    #[inline]
    pub const fn from_comparison_result(result: i32) -> Self {
        if result < 0 {
            Self::LessThan
        } else if result == 0 {
            Self::Equal
        } else {
            Self::GreaterThan
        }
    }

    /// Converts this ordering into an integer comparison result.
    ///
    /// Returns `-1`, `0` or `1`, sign-compatible with
    /// [`from_comparison_result`](Self::from_comparison_result).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::ord::Ordering;
    ///
    /// assert!(Ordering::LessThan.to_comparison_result() < 0);
    /// assert_eq!(Ordering::Equal.to_comparison_result(), 0);
    /// assert!(Ordering::GreaterThan.to_comparison_result() > 0);
    /// ```
    #[inline]
    pub const fn to_comparison_result(self) -> i32 {
        match self {
            Self::LessThan => -1,
            Self::Equal => 0,
            Self::GreaterThan => 1,
        }
    }

    /// Reverses the ordering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::ord::Ordering;
    ///
    /// assert_eq!(Ordering::GreaterThan.reverse(), Ordering::LessThan);
    /// assert_eq!(Ordering::Equal.reverse(), Ordering::Equal);
    /// ```
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::LessThan => Self::GreaterThan,
            Self::Equal => Self::Equal,
            Self::GreaterThan => Self::LessThan,
        }
    }

    /// Returns `other` if this ordering is `Equal`, otherwise `self`.
    ///
    /// This is the lexicographic combination used for tie-breaking.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::ord::Ordering;
    ///
    /// assert_eq!(Ordering::Equal.then(Ordering::LessThan), Ordering::LessThan);
    /// assert_eq!(Ordering::GreaterThan.then(Ordering::LessThan), Ordering::GreaterThan);
    /// ```
    #[inline]
    #[must_use]
    pub const fn then(self, other: Self) -> Self {
        match self {
            Self::Equal => other,
            _ => self,
        }
    }

    /// Returns `true` for `LessThan`.
    #[inline]
    pub const fn is_less_than(self) -> bool {
        matches!(self, Self::LessThan)
    }

    /// Returns `true` for `Equal`.
    #[inline]
    pub const fn is_equal(self) -> bool {
        matches!(self, Self::Equal)
    }

    /// Returns `true` for `GreaterThan`.
    #[inline]
    pub const fn is_greater_than(self) -> bool {
        matches!(self, Self::GreaterThan)
    }
}

impl From<cmp::Ordering> for Ordering {
    fn from(ordering: cmp::Ordering) -> Self {
        match ordering {
            cmp::Ordering::Less => Self::LessThan,
            cmp::Ordering::Equal => Self::Equal,
            cmp::Ordering::Greater => Self::GreaterThan,
        }
    }
}

impl From<Ordering> for cmp::Ordering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::LessThan => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::GreaterThan => Self::Greater,
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::LessThan => "LT",
            Self::Equal => "EQ",
            Self::GreaterThan => "GT",
        };
        formatter.write_str(symbol)
    }
}
