//! Control structures for functional programming.
//!
//! This module provides the three sum types the rest of the crate is built on:
//!
//! - [`Maybe`]: an optional value
//! - [`Either`]: a value carrying exactly one of two payloads
//! - [`Try`]: the outcome of a computation that may fail
//!
//! # Failure model
//!
//! `Maybe` and `Either` model absence and alternatives as data. They never
//! catch anything: a panic inside a closure passed to `Maybe::map` or
//! `Either::fold` unwinds into the caller.
//!
//! `Try` is a fault barrier. Every closure passed to a `Try` combinator runs
//! under `catch_unwind`, and a panic becomes a `Failure` carrying
//! [`TryError::Panicked`].
//!
//! The wrong-variant accessors ([`Maybe::value`], [`Either::left`],
//! [`Either::right`]) return [`InvalidStateAccess`].
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::{Either, Maybe, Try};
//!
//! let from_try: Maybe<i32> = Try::success(3).to_maybe();
//! assert_eq!(from_try, Maybe::some(3));
//!
//! let either: Either<String, i32> = Either::Right(3);
//! assert_eq!(either.maybe_right(), from_try);
//! ```

mod either;
mod error;
mod maybe;
mod try_monad;

pub use either::{Either, lefts, partition_eithers, rights};
pub use error::{InvalidStateAccess, TryError};
pub use maybe::Maybe;
pub use try_monad::Try;

#[cfg(feature = "async")]
pub(crate) use error::guard;
