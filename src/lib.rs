//! # funkit
//!
//! Functional programming utilities for Rust: optional values, disjoint
//! unions, fallible computations, stateful computations, comparator
//! combinators and `Maybe`-returning sequence lookups.
//!
//! ## Overview
//!
//! - **Ordering**: a three-valued [`ord::Ordering`] and composable comparators
//! - **Control Structures**: [`control::Maybe`], [`control::Either`], [`control::Try`]
//! - **Sequence Helpers**: safe element lookups over any iterable
//! - **Effects**: the [`effect::State`] monad
//! - **Type Classes**: Semigroup, Monoid, Bounded, Num, Enumeration, Bifunctor
//! - **Function Composition**: identity, constant, flip, curry
//! - **Tasks**: monadic combinators over futures
//!
//! ## Feature Flags
//!
//! - `ord`: Ordering and comparator combinators
//! - `control`: Maybe, Either and Try
//! - `seq`: Sequence lookups (`maybe_first`, `maybe_element_at`, ...)
//! - `effect`: State monad
//! - `typeclass`: Type class traits and wrappers
//! - `compose`: Function combinators
//! - `async`: Task combinators over futures
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! let parsed = Try::from_fn(|| "42".parse::<i32>().expect("numeric input"))
//!     .filter(|value| *value > 10)
//!     .map(|value| value * 2);
//! assert_eq!(parsed.to_maybe(), Maybe::some(84));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "ord")]
    pub use crate::ord::{Comparator, NaturalOrder, Ordering};

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "seq")]
    pub use crate::seq::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "ord")]
pub mod ord;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "seq")]
pub mod seq;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "async")]
pub mod task;
