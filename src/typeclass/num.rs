//! Num type class - basic arithmetic.
//!
//! [`Num`] is what [`Sum`](super::Sum) and [`Product`](super::Product)
//! need to be monoids: a zero, a one, addition and multiplication.
//! Arithmetic follows the primitive operators, so integer overflow behaves
//! as it does for `+` and `*`.
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::Num;
//!
//! fn sum_of_squares<N: Num>(values: &[N]) -> N {
//!     values.iter().fold(N::ZERO, |total, value| total.plus(value.mult(*value)))
//! }
//!
//! assert_eq!(sum_of_squares(&[1, 2, 3]), 14);
//! assert_eq!(sum_of_squares(&[0.5_f64]), 0.25);
//! ```

/// A signed numeric type.
pub trait Num: Copy {
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Returns `self + other`.
    #[must_use]
    fn plus(self, other: Self) -> Self;

    /// Returns `self * other`.
    #[must_use]
    fn mult(self, other: Self) -> Self;

    /// Returns `-self`.
    #[must_use]
    fn negate(self) -> Self;

    /// Returns the absolute value.
    #[must_use]
    fn abs(self) -> Self;

    /// Returns `-1`, `0` or `1` according to the sign.
    ///
    /// `NaN` has sign `0`.
    fn signum(self) -> i32;
}

macro_rules! num_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Num for $integer {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn plus(self, other: Self) -> Self {
                    self + other
                }

                #[inline]
                fn mult(self, other: Self) -> Self {
                    self * other
                }

                #[inline]
                fn negate(self) -> Self {
                    -self
                }

                #[inline]
                fn abs(self) -> Self {
                    <$integer>::abs(self)
                }

                #[inline]
                fn signum(self) -> i32 {
                    match self.cmp(&0) {
                        std::cmp::Ordering::Less => -1,
                        std::cmp::Ordering::Equal => 0,
                        std::cmp::Ordering::Greater => 1,
                    }
                }
            }
        )*
    };
}

macro_rules! num_for_floats {
    ($($float:ty),* $(,)?) => {
        $(
            impl Num for $float {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn plus(self, other: Self) -> Self {
                    self + other
                }

                #[inline]
                fn mult(self, other: Self) -> Self {
                    self * other
                }

                #[inline]
                fn negate(self) -> Self {
                    -self
                }

                #[inline]
                fn abs(self) -> Self {
                    <$float>::abs(self)
                }

                #[inline]
                fn signum(self) -> i32 {
                    match self.partial_cmp(&0.0) {
                        Some(std::cmp::Ordering::Less) => -1,
                        Some(std::cmp::Ordering::Greater) => 1,
                        _ => 0,
                    }
                }
            }
        )*
    };
}

num_for_integers!(i8, i16, i32, i64, i128, isize);
num_for_floats!(f32, f64);
