//! Monadic combinators over asynchronous tasks.
//!
//! A task is any `Future<Output = Result<T, TryError>>`. A cancelled task
//! completes with [`TryError::Cancelled`]. Every combinator here is an
//! `async fn`, so the returned future does nothing until it is awaited.
//!
//! When the upstream task fails or is cancelled, its error passes through
//! untouched and the continuation is never invoked. Continuations run under
//! the same fault barrier as [`Try`]: a panic inside one becomes
//! [`TryError::Panicked`].
//!
//! No executor is provided; bring your own runtime.
//!
//! # Examples
//!
//! ```rust
//! use funkit::task;
//!
//! # futures::executor::block_on(async {
//! let doubled = task::map(async { Ok(21) }, |value| value * 2);
//! assert_eq!(doubled.await, Ok(42));
//!
//! let rejected = task::filter(async { Ok(3) }, |value| *value > 10);
//! assert!(rejected.await.is_err());
//! # });
//! ```

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::{self, Ready};

use crate::control::{Maybe, Try, TryError, guard};

/// Logs a failed or cancelled upstream outcome and passes it through.
fn observe<T>(operation: &'static str, outcome: Result<T, TryError>) -> Result<T, TryError> {
    if let Err(error) = &outcome {
        tracing::trace!(
            operation,
            cancelled = error.is_cancelled(),
            message = %error,
            "upstream task did not succeed"
        );
    }
    outcome
}

/// Applies `function` to the result of `task`.
///
/// # Examples
///
/// ```rust
/// use funkit::control::TryError;
/// use funkit::task;
///
/// # futures::executor::block_on(async {
/// let length = task::map(async { Ok::<_, TryError>("four") }, str::len);
/// assert_eq!(length.await, Ok(4));
/// # });
/// ```
pub async fn map<T, U, Fut, F>(task: Fut, function: F) -> Result<U, TryError>
where
    Fut: Future<Output = Result<T, TryError>>,
    F: FnOnce(T) -> U,
{
    let value = observe("task::map", task.await)?;
    guard("task::map", || function(value))
}

/// Awaits `task`, then the task `function` builds from its result.
///
/// # Examples
///
/// ```rust
/// use funkit::control::TryError;
/// use funkit::task;
///
/// # futures::executor::block_on(async {
/// let chained = task::bind(async { Ok::<_, TryError>(2) }, |value| async move {
///     Ok(value * 10)
/// });
/// assert_eq!(chained.await, Ok(20));
/// # });
/// ```
pub async fn bind<T, U, Fut, Next, F>(task: Fut, function: F) -> Result<U, TryError>
where
    Fut: Future<Output = Result<T, TryError>>,
    Next: Future<Output = Result<U, TryError>>,
    F: FnOnce(T) -> Next,
{
    let value = observe("task::bind", task.await)?;
    let next = guard("task::bind", || function(value))?;
    next.await
}

/// Keeps the result of `task` only if `predicate` holds for it.
///
/// A rejected value fails with [`TryError::NoSuchElement`].
pub async fn filter<T, Fut, P>(task: Fut, predicate: P) -> Result<T, TryError>
where
    Fut: Future<Output = Result<T, TryError>>,
    P: FnOnce(&T) -> bool,
{
    let value = observe("task::filter", task.await)?;
    if guard("task::filter", || predicate(&value))? {
        Ok(value)
    } else {
        tracing::trace!(operation = "task::filter", "predicate rejected value");
        Err(TryError::no_such_element("predicate does not hold"))
    }
}

/// Converts the outcome of `task` into a [`Try`].
///
/// The returned future never fails. A panic raised while polling `task`
/// is captured as [`TryError::Panicked`].
///
/// # Examples
///
/// ```rust
/// use funkit::control::{Try, TryError};
/// use funkit::task;
///
/// # futures::executor::block_on(async {
/// let outcome = task::try_result(task::cancelled::<i32>()).await;
/// assert_eq!(outcome, Try::Failure(TryError::Cancelled));
/// # });
/// ```
pub async fn try_result<T, Fut>(task: Fut) -> Try<T>
where
    Fut: Future<Output = Result<T, TryError>>,
{
    match AssertUnwindSafe(task).catch_unwind().await {
        Ok(outcome) => Try::from(observe("task::try_result", outcome)),
        Err(payload) => {
            let error = TryError::from_panic(payload.as_ref());
            tracing::debug!(
                operation = "task::try_result",
                message = %error,
                "captured panic in fault barrier"
            );
            Try::Failure(error)
        }
    }
}

/// Lets `function` decide how to recover when `task` fails.
///
/// `function` receives the error. A populated answer becomes the result;
/// an empty answer re-raises the original error.
///
/// # Examples
///
/// ```rust
/// use funkit::control::{Maybe, TryError};
/// use funkit::task;
///
/// # futures::executor::block_on(async {
/// let recovered = task::recover(task::cancelled(), |error| {
///     if error.is_cancelled() { Maybe::some(0) } else { Maybe::none() }
/// });
/// assert_eq!(recovered.await, Ok(0));
///
/// let declined = task::recover(task::failed::<i32>(TryError::Cancelled), |_| Maybe::none());
/// assert_eq!(declined.await, Err(TryError::Cancelled));
/// # });
/// ```
pub async fn recover<T, Fut, F>(task: Fut, function: F) -> Result<T, TryError>
where
    Fut: Future<Output = Result<T, TryError>>,
    F: FnOnce(TryError) -> Maybe<T>,
{
    let error = match observe("task::recover", task.await) {
        Ok(value) => return Ok(value),
        Err(error) => error,
    };
    let attempt = error.clone();
    match guard("task::recover", || function(attempt))? {
        Maybe::Some(value) => Ok(value),
        Maybe::None => {
            tracing::debug!(
                operation = "task::recover",
                message = %error,
                "recovery declined, propagating original error"
            );
            Err(error)
        }
    }
}

/// Lifts a plain future into a task that always succeeds.
///
/// The common case is a future yielding `()`, which becomes a task whose
/// success value is `()`.
pub async fn lift<T, Fut>(future: Fut) -> Result<T, TryError>
where
    Fut: Future<Output = T>,
{
    Ok(future.await)
}

/// Creates a task that has already failed with `error`.
pub fn failed<T>(error: TryError) -> Ready<Result<T, TryError>> {
    future::ready(Err(error))
}

/// Creates a task that has already been cancelled.
pub fn cancelled<T>() -> Ready<Result<T, TryError>> {
    failed(TryError::Cancelled)
}
