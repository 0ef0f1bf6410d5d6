//! Type classes as traits.
//!
//! Instances are selected by the element type. When one type has several
//! lawful instances, a newtype wrapper names each of them (`Sum` and
//! `Product` for numbers, `All` and `Any` for booleans).
//!
//! - [`Semigroup`] / [`Monoid`]: associative combination with an identity
//! - [`Bounded`]: least and greatest values
//! - [`Num`]: zero, one and basic arithmetic
//! - [`Enumeration`]: values with consecutive integer positions
//! - [`Bifunctor`]: mapping over two type parameters
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Maybe;
//! use funkit::typeclass::{Min, Monoid, Semigroup, Sum};
//!
//! let totals = Monoid::combine_all([(Sum(1), Min(7)), (Sum(2), Min(3)), (Sum(3), Min(5))]);
//! assert_eq!(totals, (Sum(6), Min(3)));
//!
//! let merged = Maybe::some(vec![1]).combine(Maybe::none()).combine(Maybe::some(vec![2]));
//! assert_eq!(merged, Maybe::some(vec![1, 2]));
//! ```

mod bifunctor;
mod bounded;
mod enumeration;
mod monoid;
mod num;
mod semigroup;
mod wrappers;

pub use bifunctor::Bifunctor;
pub use bounded::Bounded;
pub use enumeration::{EnumRange, Enumeration};
pub use monoid::Monoid;
pub use num::Num;
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, Dual, First, Last, Max, Min, Product, Sum};
