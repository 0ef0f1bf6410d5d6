//! Newtype wrappers selecting a `Semigroup`/`Monoid` instance.
//!
//! One type often has several lawful ways to combine values: numbers add or
//! multiply, booleans conjoin or disjoin. Each wrapper here names one of
//! them.
//!
//! - [`Sum`] / [`Product`]: addition / multiplication via [`Num`](super::Num)
//! - [`Max`] / [`Min`]: the greater / lesser value, identity from
//!   [`Bounded`](super::Bounded)
//! - [`All`] / [`Any`]: boolean conjunction / disjunction
//! - [`First`] / [`Last`]: the first / last populated [`Maybe`]
//! - [`Dual`]: any monoid with its arguments flipped
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::{Any, Max, Monoid, Sum};
//!
//! assert_eq!(Sum::combine_all([1, 2, 3].map(Sum)), Sum(6));
//! assert_eq!(Max::combine_all([4, 9, 2].map(Max)), Max(9));
//! assert_eq!(Any::combine_all([false, true].map(Any)), Any(true));
//! ```

use crate::control::Maybe;

// =============================================================================
// Numeric Wrappers
// =============================================================================

/// Combines numbers by addition; the identity is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// Combines numbers by multiplication; the identity is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

/// Keeps the greater value; the identity is the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

/// Keeps the lesser value; the identity is the upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<A>(pub A);

// =============================================================================
// Boolean Wrappers
// =============================================================================

/// Combines booleans with `&&`; the identity is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct All(pub bool);

/// Combines booleans with `||`; the identity is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Any(pub bool);

// =============================================================================
// Maybe Wrappers
// =============================================================================

/// Keeps the first populated value.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::typeclass::{First, Monoid};
///
/// let found = First::combine_all([Maybe::none(), Maybe::some(2), Maybe::some(3)].map(First));
/// assert_eq!(found.into_inner(), Maybe::some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct First<T>(pub Maybe<T>);

/// Keeps the last populated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Last<T>(pub Maybe<T>);

// =============================================================================
// Dual
// =============================================================================

/// Flips the argument order of the wrapped monoid.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::{Dual, Semigroup};
///
/// let joined = Dual("world".to_string()).combine(Dual("hello ".to_string()));
/// assert_eq!(joined.into_inner(), "hello world");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dual<M>(pub M);

macro_rules! wrapper_accessors {
    ($($wrapper:ident<$parameter:ident> => $inner:ty),* $(,)?) => {
        $(
            impl<$parameter> $wrapper<$parameter> {
                /// Wraps a value.
                #[inline]
                pub const fn new(value: $inner) -> Self {
                    Self(value)
                }

                /// Returns the wrapped value.
                #[inline]
                pub fn into_inner(self) -> $inner {
                    self.0
                }

                /// Returns a reference to the wrapped value.
                #[inline]
                pub const fn as_inner(&self) -> &$inner {
                    &self.0
                }
            }

            impl<$parameter> From<$inner> for $wrapper<$parameter> {
                fn from(value: $inner) -> Self {
                    Self(value)
                }
            }
        )*
    };
}

wrapper_accessors! {
    Sum<A> => A,
    Product<A> => A,
    Max<A> => A,
    Min<A> => A,
    Dual<M> => M,
    First<T> => Maybe<T>,
    Last<T> => Maybe<T>,
}

impl All {
    /// Returns the wrapped boolean.
    #[inline]
    pub const fn into_inner(self) -> bool {
        self.0
    }
}

impl Any {
    /// Returns the wrapped boolean.
    #[inline]
    pub const fn into_inner(self) -> bool {
        self.0
    }
}

impl<T> First<T> {
    /// Wraps a present value.
    pub const fn some(value: T) -> Self {
        Self(Maybe::Some(value))
    }
}

impl<T> Last<T> {
    /// Wraps a present value.
    pub const fn some(value: T) -> Self {
        Self(Maybe::Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accessors_roundtrip() {
        let mut sum = Sum::new(3);
        assert_eq!(*sum.as_inner(), 3);
        sum = Sum::from(4);
        assert_eq!(sum.into_inner(), 4);
    }

    #[rstest]
    fn first_some_wraps_value() {
        assert_eq!(First::some(1).into_inner(), Maybe::some(1));
        assert_eq!(Last::some('x').into_inner(), Maybe::some('x'));
    }

    #[rstest]
    fn sum_default_is_zero() {
        assert_eq!(Sum::<i64>::default(), Sum(0));
    }
}
