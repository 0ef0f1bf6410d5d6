//! Safe lookups and helpers over arbitrary sequences.
//!
//! The lookups are free functions over any [`IntoIterator`] and report
//! absence as an empty [`Maybe`](crate::control::Maybe):
//!
//! - [`maybe_element_at`]: the element at a (possibly negative) index
//! - [`maybe_first`] / [`maybe_first_by`]: the first (matching) element
//! - [`maybe_last`] / [`maybe_last_by`]: the last (matching) element
//! - [`maybe_single`] / [`maybe_single_by`]: the unique (matching) element
//! - [`maybe_max`] / [`maybe_max_by`] and [`maybe_min`] / [`maybe_min_by`]
//!
//! Collections with O(1) length and positional access implement
//! [`Indexed`], whose methods answer without traversal.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Maybe;
//! use funkit::seq::{Indexed, maybe_min, maybe_single_by};
//!
//! let values = vec![5, 2, -2, -10, 2];
//! assert_eq!(maybe_min(values.iter().copied()), Maybe::some(-10));
//! assert_eq!(maybe_single_by(values.iter(), |value| **value > 3), Maybe::some(&5));
//! assert_eq!(values.maybe_last(), Maybe::some(&2));
//! ```

mod generate;
mod indexed;
mod lookup;
mod non_empty;

pub use generate::{Unfold, partition, singleton, unfold};
pub use indexed::Indexed;
pub use lookup::{
    maybe_element_at, maybe_first, maybe_first_by, maybe_last, maybe_last_by, maybe_max,
    maybe_max_by, maybe_min, maybe_min_by, maybe_single, maybe_single_by,
};
pub use non_empty::NonEmpty;
