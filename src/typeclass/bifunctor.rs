//! Bifunctor type class - mapping over two type parameters.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! Pairs map each component independently:
//!
//! ```rust
//! use funkit::typeclass::Bifunctor;
//!
//! let pair = (3, "three");
//! assert_eq!(pair.first(|n| n * 2), (6, "three"));
//! assert_eq!(pair.second(str::len), (3, 5));
//! assert_eq!(pair.bimap(|n| n + 1, str::to_uppercase), (4, "THREE".to_string()));
//! ```
//!
//! `Result<T, E>` is a `Bifunctor<E, T>`: `first` maps the error and
//! `second` maps the value.

use crate::control::Either;

/// A type constructor with two mappable parameters.
pub trait Bifunctor<A, B> {
    /// The same constructor applied to new parameters.
    type Target<C, D>;

    /// Maps both parameters.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first parameter.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |second| second)
    }

    /// Maps the second parameter.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|first| first, function)
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }
}

impl<A, B> Bifunctor<A, B> for (A, B) {
    type Target<C, D> = (C, D);

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }
}

impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn either_first_maps_left_only() {
        let left: Either<i32, String> = Either::Left(2);
        assert_eq!(Bifunctor::first(left, |n: i32| n * 10), Either::Left(20));

        let right: Either<i32, String> = Either::Right("x".to_string());
        assert_eq!(
            Bifunctor::first(right, |n: i32| n * 10),
            Either::Right("x".to_string())
        );
    }

    #[rstest]
    fn result_first_maps_error() {
        let failure: Result<i32, &str> = Err("bad");
        assert_eq!(failure.first(str::len), Err(3));
        let success: Result<i32, &str> = Ok(1);
        assert_eq!(success.second(|n| n + 1), Ok(2));
    }
}
