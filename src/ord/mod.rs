//! Orderings and comparator combinators.
//!
//! This module provides a three-valued [`Ordering`] together with a
//! [`Comparator`] abstraction and combinators that build new comparators
//! from existing ones:
//!
//! - [`by`] / [`by_with`]: compare by a projected key
//! - [`then`]: tie-break with a secondary comparator
//! - [`reverse`]: swap the argument order
//! - [`from_comparison`] / [`from_std`]: adapt integer-returning and
//!   `std::cmp::Ordering`-returning functions
//!
//! # Examples
//!
//! ```rust
//! use funkit::ord::{self, Comparator, Ordering};
//!
//! #[derive(Debug)]
//! struct Entry {
//!     score: u32,
//!     id: u32,
//! }
//!
//! let comparator = ord::by(|entry: &Entry| entry.score).then(ord::by(|entry: &Entry| entry.id));
//!
//! let first = Entry { score: 2, id: 5 };
//! let second = Entry { score: 2, id: 1 };
//! assert_eq!(comparator.compare(&first, &second), Ordering::GreaterThan);
//!
//! let mut entries = vec![first, second];
//! entries.sort_by(comparator.to_std());
//! assert_eq!(entries[0].id, 1);
//! ```

mod comparator;
mod ordering;

pub use comparator::{
    By, Comparator, FromComparison, FromStd, NaturalOrder, Reversed, Then, by, by_with,
    from_comparison, from_std, natural, reverse, then,
};
pub use ordering::Ordering;
