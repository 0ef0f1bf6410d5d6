//! Function composition utilities.
//!
//! # Examples
//!
//! ```rust
//! use funkit::compose::{compose2, constant, flip, identity};
//!
//! let divide = |numerator: i32, denominator: i32| numerator / denominator;
//! assert_eq!(flip(divide)(2, 10), 5);
//!
//! let zero_after = compose2(constant::<i32, i32>(0), identity);
//! assert_eq!(zero_after(99), 0);
//! ```

mod utils;

pub use utils::{compose2, constant, curry2, flip, identity, uncurry2};
