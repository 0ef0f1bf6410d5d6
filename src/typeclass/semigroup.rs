//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::ord::Ordering;
//! use funkit::typeclass::Semigroup;
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//!
//! // Orderings combine lexicographically: the first decisive one wins.
//! assert_eq!(Ordering::Equal.combine(Ordering::LessThan), Ordering::LessThan);
//! assert_eq!(Ordering::GreaterThan.combine(Ordering::LessThan), Ordering::GreaterThan);
//! ```

use crate::control::Maybe;
use crate::ord::Ordering;

use super::num::Num;
use super::wrappers::{All, Any, Dual, First, Last, Max, Min, Product, Sum};

/// A type with an associative binary operation.
pub trait Semigroup {
    /// Combines two values.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines `self` with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Combines every value of a sequence, empty for an empty sequence.
    fn reduce_all<I>(iterator: I) -> Maybe<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
            .into()
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl Semigroup for Ordering {
    fn combine(self, other: Self) -> Self {
        self.then(other)
    }
}

/// Empty values are skipped; two present values are combined.
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.combine(right)),
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            (Self::None, Self::None) => Self::None,
        }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Num> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.plus(other.0))
    }
}

impl<A: Num> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.mult(other.0))
    }
}

impl<A: PartialOrd> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }
}

impl<A: PartialOrd> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }
}

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

impl<T> Semigroup for First<T> {
    fn combine(self, other: Self) -> Self {
        if self.0.has_value() { self } else { other }
    }
}

impl<T> Semigroup for Last<T> {
    fn combine(self, other: Self) -> Self {
        if other.0.has_value() { other } else { self }
    }
}

impl<M: Semigroup> Semigroup for Dual<M> {
    fn combine(self, other: Self) -> Self {
        Self(other.0.combine(self.0))
    }
}
