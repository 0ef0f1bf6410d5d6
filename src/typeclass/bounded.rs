//! Bounded type class - types with a least and a greatest value.
//!
//! [`Max`](super::Max) and [`Min`](super::Min) use the bounds as their
//! identities, which is what makes them monoids.
//!
//! # Examples
//!
//! ```rust
//! use funkit::ord::Ordering;
//! use funkit::typeclass::Bounded;
//!
//! assert_eq!(u8::MIN_BOUND, 0);
//! assert!(<bool as Bounded>::MAX_BOUND);
//! assert_eq!(Ordering::MIN_BOUND, Ordering::LessThan);
//! ```

use crate::ord::Ordering;

/// A type with a least and a greatest value.
pub trait Bounded {
    /// The least value.
    const MIN_BOUND: Self;

    /// The greatest value.
    const MAX_BOUND: Self;
}

macro_rules! bounded_by_std_constants {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_BOUND: Self = Self::MIN;
                const MAX_BOUND: Self = Self::MAX;
            }
        )*
    };
}

bounded_by_std_constants!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Infinite bounds: every finite value combines past them.
impl Bounded for f32 {
    const MIN_BOUND: Self = Self::NEG_INFINITY;
    const MAX_BOUND: Self = Self::INFINITY;
}

impl Bounded for f64 {
    const MIN_BOUND: Self = Self::NEG_INFINITY;
    const MAX_BOUND: Self = Self::INFINITY;
}

impl Bounded for char {
    const MIN_BOUND: Self = '\0';
    const MAX_BOUND: Self = Self::MAX;
}

impl Bounded for bool {
    const MIN_BOUND: Self = false;
    const MAX_BOUND: Self = true;
}

impl Bounded for () {
    const MIN_BOUND: Self = ();
    const MAX_BOUND: Self = ();
}

impl Bounded for Ordering {
    const MIN_BOUND: Self = Self::LessThan;
    const MAX_BOUND: Self = Self::GreaterThan;
}
