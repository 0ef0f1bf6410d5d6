//! Effects as values.
//!
//! - [`State`]: a deferred computation threading a state, run with
//!   [`State::run`] to obtain a [`StateResult`]
//!
//! # Examples
//!
//! ```rust
//! use funkit::effect::{State, StateResult};
//!
//! let labelled = State::get().map(|count: u32| format!("#{count}"));
//! let numbered = State::modify(|count: u32| count + 1).then(labelled);
//!
//! assert_eq!(numbered.run(1), StateResult::new(2, "#2".to_string()));
//! ```

mod state;

pub use state::{State, StateResult};
