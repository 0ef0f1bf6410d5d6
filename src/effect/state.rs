//! State monad - deferred stateful computation.
//!
//! A `State<S, A>` wraps a pure function `S -> (S, A)`: given a state it
//! produces the next state and a result. Nothing runs until
//! [`State::run`] is called, and running the same computation twice with
//! the same initial state yields identical output.
//!
//! Computations are shared behind an [`Arc`], so a `State` is cheap to
//! clone and may be run from several threads at once.
//!
//! # Laws
//!
//! ## Monad Laws
//!
//! - Left Identity: `State::from_result(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(State::from_result) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! ## State Laws
//!
//! - Get: `get().run_state(s) == s`
//! - Put: `put(s2).run_state(s1) == s2`
//! - Modify: `modify(f).run_state(s) == f(s)`
//!
//! # Examples
//!
//! ```rust
//! use funkit::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count: i32| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! assert_eq!(computation.run_result(0), 3);
//! ```

use std::fmt;
use std::sync::Arc;

/// The output of running a [`State`]: the final state and the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateResult<S, A> {
    /// The state after the computation.
    pub state: S,
    /// The value the computation produced.
    pub result: A,
}

impl<S, A> StateResult<S, A> {
    /// Creates a new output pair.
    pub const fn new(state: S, result: A) -> Self {
        Self { state, result }
    }

    /// Converts into a `(state, result)` tuple.
    pub fn into_tuple(self) -> (S, A) {
        (self.state, self.result)
    }
}

impl<S, A> From<StateResult<S, A>> for (S, A) {
    fn from(output: StateResult<S, A>) -> Self {
        output.into_tuple()
    }
}

type Transition<S, A> = dyn Fn(S) -> StateResult<S, A> + Send + Sync;

/// A computation that threads a state of type `S` and produces an `A`.
///
/// # Examples
///
/// ```rust
/// use funkit::effect::{State, StateResult};
///
/// let computation: State<i32, i32> = State::get()
///     .bind(|current: i32| State::put(current + 1).then(State::from_result(current)));
///
/// assert_eq!(computation.run(10), StateResult::new(11, 10));
/// ```
pub struct State<S, A> {
    transition: Arc<Transition<S, A>>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a computation from a transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::effect::{State, StateResult};
    ///
    /// let step: State<i32, String> =
    ///     State::new(|count: i32| StateResult::new(count + 1, format!("was {count}")));
    /// assert_eq!(step.run(4), StateResult::new(5, "was 4".to_string()));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> StateResult<S, A> + Send + Sync + 'static,
    {
        Self {
            transition: Arc::new(transition),
        }
    }

    /// Creates a computation from a function returning a `(state, result)`
    /// tuple.
    pub fn from_transition<F>(transition: F) -> Self
    where
        F: Fn(S) -> (S, A) + Send + Sync + 'static,
    {
        Self::new(move |state| {
            let (next_state, result) = transition(state);
            StateResult::new(next_state, result)
        })
    }

    /// A computation that leaves the state unchanged and yields `value`.
    pub fn from_result(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move |state| StateResult::new(state, value.clone()))
    }

    /// Alias for [`from_result`](Self::from_result).
    pub fn pure(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::from_result(value)
    }

    /// A computation yielding a projection of the current state.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + Send + Sync + 'static,
    {
        Self::new(move |state| {
            let result = projection(&state);
            StateResult::new(state, result)
        })
    }

    // =========================================================================
    // Running
    // =========================================================================

    /// Runs the computation from `initial_state`.
    pub fn run(&self, initial_state: S) -> StateResult<S, A> {
        (self.transition)(initial_state)
    }

    /// Runs the computation and keeps only the result.
    pub fn run_result(&self, initial_state: S) -> A {
        self.run(initial_state).result
    }

    /// Runs the computation and keeps only the final state.
    pub fn run_state(&self, initial_state: S) -> S {
        self.run(initial_state).state
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Transforms the result, passing the state through.
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let StateResult { state, result } = transition(state);
            StateResult::new(state, function(result))
        })
    }

    /// Runs this computation, builds the next one from its result and runs
    /// that against the intermediate state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::effect::{State, StateResult};
    ///
    /// let counter: State<i32, i32> =
    ///     State::from_transition(|count: i32| (count + 1, count));
    /// let chained = counter.bind(|seen| State::gets(move |count: &i32| seen + count));
    /// assert_eq!(chained.run(10), StateResult::new(11, 21));
    /// ```
    pub fn bind<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + Send + Sync + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let StateResult { state, result } = transition(state);
            function(result).run(state)
        })
    }

    /// Runs this computation, discards its result and runs `next`.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let StateResult { state, .. } = transition(state);
            next.run(state)
        })
    }

    /// Runs both computations left to right and combines their results.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + Send + Sync + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.transition;
        State::new(move |state| {
            let StateResult {
                state,
                result: first_result,
            } = first(state);
            let StateResult {
                state,
                result: second_result,
            } = other.run(state);
            StateResult::new(state, function(first_result, second_result))
        })
    }

    /// Runs both computations left to right and pairs their results.
    #[must_use]
    pub fn product<B>(self, other: State<S, B>) -> State<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Rewrites the whole `(state, result)` output of each run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::effect::{State, StateResult};
    ///
    /// let doubled: State<i32, String> = State::<i32, i32>::get().map_output(|output| {
    ///     StateResult::new(output.state * 2, output.result.to_string())
    /// });
    /// assert_eq!(doubled.run(3), StateResult::new(6, "3".to_string()));
    /// ```
    pub fn map_output<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(StateResult<S, A>) -> StateResult<S, B> + Send + Sync + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| function(transition(state)))
    }
}

impl<S, F> State<S, F>
where
    S: 'static,
    F: 'static,
{
    /// Applies the function this computation yields to the result of `value`.
    ///
    /// The function is produced first, then `value` runs against the
    /// intermediate state.
    pub fn ap<A, B>(self, value: State<S, A>) -> State<S, B>
    where
        F: Fn(A) -> B,
        A: 'static,
        B: 'static,
    {
        self.map2(value, |function, argument| function(argument))
    }
}

impl<S, A> State<S, State<S, A>>
where
    S: 'static,
    A: 'static,
{
    /// Flattens a computation that yields a computation.
    pub fn join(self) -> State<S, A> {
        let transition = self.transition;
        State::new(move |state| {
            let StateResult { state, result } = transition(state);
            result.run(state)
        })
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// A computation yielding the current state, unchanged.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| StateResult::new(state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// A computation replacing the state with `new_state`.
    pub fn put(new_state: S) -> Self
    where
        S: Clone + Send + Sync,
    {
        Self::new(move |_| StateResult::new(new_state.clone(), ()))
    }

    /// A computation replacing the state with `modifier(state)`.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        Self::new(move |state| StateResult::new(modifier(state), ()))
    }
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            transition: Arc::clone(&self.transition),
        }
    }
}

impl<S, A> fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<State>")
    }
}
