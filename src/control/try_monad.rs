//! Try type - the outcome of a computation that may fail.
//!
//! `Try<T>` is either `Success(T)` or `Failure(TryError)`. Unlike
//! [`Maybe`] and [`Either`](super::Either), `Try` is a fault barrier: every
//! caller-supplied closure passed to a `Try` combinator runs under
//! [`std::panic::catch_unwind`], and a panic becomes a `Failure` holding
//! [`TryError::Panicked`]. Nothing raised inside a combinator escapes to the
//! caller.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::{Try, TryError};
//!
//! let parsed = Try::attempt(|| "21".parse::<i32>()).map(|value| value * 2);
//! assert_eq!(parsed.value(), Ok(42));
//!
//! let exploded = Try::success(1).map(|_: i32| -> i32 { panic!("boom") });
//! assert!(exploded.failed_value().is_panic());
//! ```
//!
//! # Absent callbacks
//!
//! The `*_checked` variants accept the callback as an `Option`; `None`
//! produces a `Failure` carrying [`TryError::MissingArgument`] instead of a
//! crash.
//!
//! ```rust
//! use funkit::control::{Try, TryError};
//!
//! let missing: Option<fn(&i32) -> bool> = None;
//! let result = Try::success(4).filter_checked(missing);
//! assert_eq!(result.failed_value(), TryError::MissingArgument { name: "predicate" });
//! ```

use std::error::Error as StdError;

use super::error::{TryError, guard};
use super::maybe::Maybe;

/// The outcome of a computation: a value, or the error that prevented it.
///
/// A `Try` is immutable once constructed; combinators return new values.
#[derive(Debug, Clone, PartialEq)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(TryError),
}

impl<T> Try<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful `Try`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed `Try`.
    #[inline]
    pub const fn failed(error: TryError) -> Self {
        Self::Failure(error)
    }

    /// Runs `function`, capturing a panic as a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Try;
    ///
    /// assert_eq!(Try::from_fn(|| 5).value(), Ok(5));
    /// assert!(Try::from_fn(|| -> i32 { panic!("nope") }).is_failure());
    /// ```
    pub fn from_fn<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        guard("from_fn", function).into()
    }

    /// Like [`from_fn`](Self::from_fn), treating an absent function as a
    /// [`TryError::MissingArgument`] failure.
    pub fn from_fn_checked<F>(function: Option<F>) -> Self
    where
        F: FnOnce() -> T,
    {
        function.map_or_else(|| Self::missing("function"), Self::from_fn)
    }

    /// Runs a `Try`-producing function, capturing a panic as a `Failure`.
    pub fn create<F>(function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        guard("create", function).unwrap_or_else(Self::Failure)
    }

    /// Like [`create`](Self::create), treating an absent function as a
    /// [`TryError::MissingArgument`] failure.
    pub fn create_checked<F>(function: Option<F>) -> Self
    where
        F: FnOnce() -> Self,
    {
        function.map_or_else(|| Self::missing("function"), Self::create)
    }

    /// Runs a fallible function; an `Err` becomes [`TryError::Raised`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Try;
    ///
    /// let failure = Try::attempt(|| "x".parse::<i32>());
    /// assert_eq!(failure.failed_value().to_string(), "invalid digit found in string");
    /// ```
    pub fn attempt<E, F>(function: F) -> Self
    where
        E: StdError + Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        match guard("attempt", function) {
            Ok(result) => Self::from_result(result),
            Err(error) => Self::Failure(error),
        }
    }

    /// Converts a `Result`, wrapping the error with [`TryError::raised`].
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(TryError::raised(error)),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value, or the captured error.
    ///
    /// # Errors
    ///
    /// Returns the captured [`TryError`] if this is a `Failure`.
    #[inline]
    pub fn value(self) -> Result<T, TryError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Borrowing form of [`value`](Self::value).
    ///
    /// # Errors
    ///
    /// Returns a reference to the captured [`TryError`] if this is a `Failure`.
    #[inline]
    pub const fn value_ref(&self) -> Result<&T, &TryError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with the captured error if this is a `Failure`.
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("called `Try::unwrap()` on a `Failure` value: {error}"),
        }
    }

    /// Returns the error of a `Failure`.
    ///
    /// Never fails: on a `Success` a fresh
    /// [`TryError::InvalidOperation`] is returned, so both branches can be
    /// handled uniformly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Try, TryError};
    ///
    /// assert_eq!(
    ///     Try::success(1).failed_value(),
    ///     TryError::invalid_operation("no error present for success")
    /// );
    /// assert_eq!(Try::<i32>::failed(TryError::Cancelled).failed_value(), TryError::Cancelled);
    /// ```
    pub fn failed_value(&self) -> TryError {
        match self {
            Self::Success(_) => TryError::invalid_operation("no error present for success"),
            Self::Failure(error) => error.clone(),
        }
    }

    /// Converts from `&Try<T>` to `Try<&T>`.
    pub fn as_ref(&self) -> Try<&T> {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(error) => Try::Failure(error.clone()),
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Turns a `Failure` into a `Success` by computing a value from the error.
    ///
    /// A panic inside `function` yields a `Failure` with that panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Try, TryError};
    ///
    /// let recovered = Try::<i32>::failed(TryError::Cancelled).recover(|_| -1);
    /// assert_eq!(recovered.value(), Ok(-1));
    /// ```
    #[must_use]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(TryError) -> T,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(error) => guard("recover", || function(error)).into(),
        }
    }

    /// Replaces a `Failure` with the `Try` computed from its error.
    ///
    /// If `function` panics the original error is dropped and the result
    /// carries the panic.
    #[must_use]
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(TryError) -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(error) => {
                guard("recover_with", || function(error)).unwrap_or_else(Self::Failure)
            }
        }
    }

    /// Invokes exactly one of two `Try`-producing branches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Try, TryError};
    ///
    /// let describe = |attempt: Try<i32>| {
    ///     attempt.transform(
    ///         |value| Try::success(format!("ok {value}")),
    ///         |error| Try::success(format!("failed: {error}")),
    ///     )
    /// };
    /// assert_eq!(describe(Try::success(3)).value(), Ok("ok 3".to_string()));
    /// assert_eq!(
    ///     describe(Try::failed(TryError::Cancelled)).value(),
    ///     Ok("failed: task was cancelled".to_string())
    /// );
    /// ```
    pub fn transform<U, S, F>(self, on_success: S, on_failure: F) -> Try<U>
    where
        S: FnOnce(T) -> Try<U>,
        F: FnOnce(TryError) -> Try<U>,
    {
        let outcome = match self {
            Self::Success(value) => guard("transform", || on_success(value)),
            Self::Failure(error) => guard("transform", || on_failure(error)),
        };
        outcome.unwrap_or_else(Try::Failure)
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    /// Applies `function` to a `Success` value.
    ///
    /// A `Failure` passes through and `function` is never invoked.
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => guard("map", || function(value)).into(),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Chains a `Try`-producing function onto a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Try, TryError};
    ///
    /// let reciprocal = |value: i32| {
    ///     if value == 0 {
    ///         Try::failed(TryError::invalid_operation("division by zero"))
    ///     } else {
    ///         Try::success(1.0 / f64::from(value))
    ///     }
    /// };
    /// assert_eq!(Try::success(4).bind(reciprocal).value(), Ok(0.25));
    /// assert!(Try::success(0).bind(reciprocal).is_failure());
    /// ```
    pub fn bind<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => guard("bind", || function(value)).unwrap_or_else(Try::Failure),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Like [`bind`](Self::bind), treating an absent function as a
    /// [`TryError::MissingArgument`] failure.
    pub fn bind_checked<U, F>(self, function: Option<F>) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match function {
            Some(function) => self.bind(function),
            None => Try::missing("function"),
        }
    }

    /// Keeps a `Success` only if `predicate` holds for its value.
    ///
    /// A rejected value becomes a [`TryError::NoSuchElement`] failure; a
    /// panicking predicate becomes a [`TryError::Panicked`] failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Try, TryError};
    ///
    /// assert_eq!(Try::success(12).filter(|value| *value > 10).value(), Ok(12));
    /// assert!(matches!(
    ///     Try::success(4).filter(|value| *value > 10).failed_value(),
    ///     TryError::NoSuchElement { .. }
    /// ));
    /// ```
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => match guard("filter", || predicate(&value)) {
                Ok(true) => Self::Success(value),
                Ok(false) => {
                    tracing::debug!(operation = "filter", "predicate rejected value");
                    Self::Failure(TryError::no_such_element("predicate does not hold"))
                }
                Err(error) => Self::Failure(error),
            },
            Self::Failure(_) => self,
        }
    }

    /// Like [`filter`](Self::filter), treating an absent predicate as a
    /// [`TryError::MissingArgument`] failure.
    #[must_use]
    pub fn filter_checked<P>(self, predicate: Option<P>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match predicate {
            Some(predicate) => self.filter(predicate),
            None => Self::missing("predicate"),
        }
    }

    // =========================================================================
    // Defaults
    // =========================================================================

    /// Returns the value of a `Success`, or `default`.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value of a `Success`, or computes one.
    ///
    /// `default_function` runs only on `Failure` and is not guarded: it
    /// produces a plain value with nowhere to hold an error.
    #[inline]
    pub fn get_or_else<F>(self, default_function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default_function(),
        }
    }

    /// Returns `self` on `Success`, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => alternative,
        }
    }

    /// Returns `self` on `Success`, otherwise the `Try` produced by
    /// `alternative`, capturing a panic as a `Failure`.
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => Self::create(alternative),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into a [`Maybe`], discarding any error.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Returns an iterator over the value of a `Success`.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.value_ref().ok().into_iter()
    }

    fn missing(name: &'static str) -> Self {
        Self::Failure(TryError::MissingArgument { name })
    }
}

impl<T> From<Result<T, TryError>> for Try<T> {
    fn from(result: Result<T, TryError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Try<T>> for Result<T, TryError> {
    fn from(attempt: Try<T>) -> Self {
        attempt.value()
    }
}

impl<T> From<Maybe<T>> for Try<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.to_try()
    }
}

impl<T> IntoIterator for Try<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value().ok().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Try<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Try<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn failure_map_never_invokes_function() {
        let called = Cell::new(false);
        let result = Try::<i32>::failed(TryError::Cancelled).map(|value| {
            called.set(true);
            value + 1
        });
        assert!(!called.get());
        assert_eq!(result.failed_value(), TryError::Cancelled);
    }

    #[rstest]
    fn map_captures_panic() {
        let result = Try::success(1).map(|_: i32| -> i32 { panic!("map failed") });
        assert_eq!(
            result.failed_value(),
            TryError::Panicked {
                message: "map failed".to_string()
            }
        );
    }

    #[rstest]
    fn filter_panicking_predicate_is_captured() {
        let result = Try::success(1).filter(|_| panic!("predicate exploded"));
        assert!(result.failed_value().is_panic());
    }

    #[rstest]
    fn recover_with_panic_drops_original_error() {
        let result =
            Try::<i32>::failed(TryError::Cancelled).recover_with(|_| panic!("recovery failed"));
        assert_eq!(
            result.failed_value(),
            TryError::Panicked {
                message: "recovery failed".to_string()
            }
        );
    }

    #[rstest]
    fn recover_is_identity_on_success() {
        assert_eq!(Try::success(3).recover(|_| 0), Try::success(3));
    }

    #[rstest]
    fn transform_invokes_only_one_branch() {
        let failure_called = Cell::new(false);
        let result = Try::success(2).transform(
            |value| Try::success(value * 10),
            |_| {
                failure_called.set(true);
                Try::success(0)
            },
        );
        assert_eq!(result.value(), Ok(20));
        assert!(!failure_called.get());
    }

    #[rstest]
    fn checked_variants_report_missing_arguments() {
        let absent: Option<fn(i32) -> Try<i32>> = None;
        assert_eq!(
            Try::success(1).bind_checked(absent).failed_value(),
            TryError::MissingArgument { name: "function" }
        );
        let absent_factory: Option<fn() -> i32> = None;
        assert!(Try::from_fn_checked(absent_factory).is_failure());
        let absent_creator: Option<fn() -> Try<i32>> = None;
        assert!(Try::create_checked(absent_creator).is_failure());
    }

    #[rstest]
    fn or_else_is_lazy_and_guarded() {
        let called = Cell::new(false);
        let kept = Try::success(1).or_else(|| {
            called.set(true);
            Try::success(2)
        });
        assert_eq!(kept.value(), Ok(1));
        assert!(!called.get());

        let guarded = Try::<i32>::failed(TryError::Cancelled).or_else(|| panic!("alt"));
        assert!(guarded.failed_value().is_panic());
    }

    #[rstest]
    fn enumerates_zero_or_one_value() {
        assert_eq!(Try::success(9).into_iter().collect::<Vec<_>>(), vec![9]);
        assert_eq!(Try::<i32>::failed(TryError::Cancelled).into_iter().count(), 0);
    }

    #[rstest]
    #[should_panic(expected = "called `Try::unwrap()` on a `Failure` value: task was cancelled")]
    fn unwrap_on_failure_panics() {
        Try::<i32>::failed(TryError::Cancelled).unwrap();
    }
}
