//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! plus associativity, inherited from [`Semigroup`].
//!
//! # Examples
//!
//! ```rust
//! use funkit::ord::Ordering;
//! use funkit::typeclass::{Monoid, Product, Semigroup};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(Ordering::empty(), Ordering::Equal);
//! assert_eq!(Product::combine_all([2, 3, 4].map(Product)), Product(24));
//! assert_eq!(Product::<i32>::combine_all([]), Product(1));
//! ```

use crate::control::Maybe;
use crate::ord::Ordering;

use super::bounded::Bounded;
use super::num::Num;
use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Dual, First, Last, Max, Min, Product, Sum};

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Combines every value of a sequence, starting from [`empty`](Self::empty).
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns `true` if `self` is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl Monoid for Ordering {
    fn empty() -> Self {
        Self::Equal
    }
}

impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Self::None
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Num> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::ZERO)
    }
}

impl<A: Num> Monoid for Product<A> {
    fn empty() -> Self {
        Self(A::ONE)
    }
}

impl<A: Bounded + PartialOrd> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_BOUND)
    }
}

impl<A: Bounded + PartialOrd> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_BOUND)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

impl<T> Monoid for First<T> {
    fn empty() -> Self {
        Self(Maybe::None)
    }
}

impl<T> Monoid for Last<T> {
    fn empty() -> Self {
        Self(Maybe::None)
    }
}

impl<M: Monoid> Monoid for Dual<M> {
    fn empty() -> Self {
        Self(M::empty())
    }
}
