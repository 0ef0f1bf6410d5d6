//! Error types for the control structures.
//!
//! - [`InvalidStateAccess`]: a variant-specific accessor was used on the
//!   other variant (`Maybe::value` on `None`, `Either::left` on `Right`, ...)
//! - [`TryError`]: the error carried by a failed [`Try`](super::Try)
//!
//! This module also hosts the fault barrier used by `Try`: caller-supplied
//! closures run under [`std::panic::catch_unwind`] and a panic becomes a
//! [`TryError::Panicked`] instead of unwinding into the caller.

use std::any::Any;
use std::error::Error as StdError;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use thiserror::Error;

/// Returned when a value is read from the wrong variant.
///
/// # Examples
///
/// ```rust
/// use funkit::control::{InvalidStateAccess, Maybe};
///
/// let error = Maybe::<i32>::none().value().unwrap_err();
/// assert_eq!(
///     error,
///     InvalidStateAccess { expected: "Some", found: "None" }
/// );
/// assert_eq!(error.to_string(), "invalid state access: expected Some, found None");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid state access: expected {expected}, found {found}")]
pub struct InvalidStateAccess {
    /// The variant the accessor requires.
    pub expected: &'static str,
    /// The variant that was actually present.
    pub found: &'static str,
}

/// The error captured by a failed [`Try`](super::Try).
///
/// Cloning is cheap: caller errors are shared behind an [`Arc`].
///
/// # Equality
///
/// Two `Raised` errors are equal only when they share the same allocation,
/// i.e. one is a clone of the other. All other variants compare structurally.
///
/// # Examples
///
/// ```rust
/// use funkit::control::TryError;
///
/// let error = TryError::raised(std::fmt::Error);
/// assert_eq!(error.clone(), error);
/// assert!(matches!(error, TryError::Raised(_)));
/// ```
#[derive(Debug, Clone, Error)]
pub enum TryError {
    /// An error produced by caller code.
    #[error(transparent)]
    Raised(Arc<dyn StdError + Send + Sync + 'static>),

    /// A panic captured while running a caller-supplied closure.
    #[error("panicked: {message}")]
    Panicked {
        /// The panic message, or a placeholder for non-string payloads.
        message: String,
    },

    /// A filter predicate did not hold.
    #[error("no such element: {message}")]
    NoSuchElement {
        /// Describes what was rejected.
        message: String,
    },

    /// An operation was not valid for the current state.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// Describes the invalid operation.
        message: String,
    },

    /// A required callback was absent.
    #[error("missing argument: {name}")]
    MissingArgument {
        /// The name of the absent argument.
        name: &'static str,
    },

    /// An asynchronous task was cancelled.
    #[error("task was cancelled")]
    Cancelled,
}

impl TryError {
    /// Wraps a caller error.
    ///
    /// A `TryError` passed here is returned unchanged rather than nested.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::TryError;
    ///
    /// let original = TryError::MissingArgument { name: "predicate" };
    /// assert_eq!(TryError::raised(original.clone()), original);
    /// ```
    pub fn raised<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let boxed: Box<dyn StdError + Send + Sync + 'static> = Box::new(error);
        match boxed.downcast::<Self>() {
            Ok(already_wrapped) => *already_wrapped,
            Err(other) => Self::Raised(Arc::from(other)),
        }
    }

    /// Creates a `NoSuchElement` error.
    pub fn no_such_element(message: impl Into<String>) -> Self {
        Self::NoSuchElement {
            message: message.into(),
        }
    }

    /// Creates an `InvalidOperation` error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// Returns `true` if this error came from a captured panic.
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }

    /// Returns `true` if this error marks a cancelled task.
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns the wrapped caller error, if this is a `Raised` error.
    pub fn as_raised(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::Raised(error) => Some(error.as_ref()),
            _ => None,
        }
    }

    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self::Panicked { message }
    }
}

impl PartialEq for TryError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Raised(left), Self::Raised(right)) => Arc::ptr_eq(left, right),
            (Self::Panicked { message: left }, Self::Panicked { message: right })
            | (Self::NoSuchElement { message: left }, Self::NoSuchElement { message: right })
            | (
                Self::InvalidOperation { message: left },
                Self::InvalidOperation { message: right },
            ) => left == right,
            (Self::MissingArgument { name: left }, Self::MissingArgument { name: right }) => {
                left == right
            }
            (Self::Cancelled, Self::Cancelled) => true,
            _ => false,
        }
    }
}

/// Runs `function`, converting a panic into [`TryError::Panicked`].
///
/// `operation` names the combinator for the log event.
pub(crate) fn guard<T, F>(operation: &'static str, function: F) -> Result<T, TryError>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(function)).map_err(|payload| {
        let error = TryError::from_panic(payload.as_ref());
        tracing::debug!(operation, message = %error, "captured panic in fault barrier");
        error
    })
}

static_assertions::assert_impl_all!(TryError: Send, Sync, Clone);
static_assertions::assert_impl_all!(InvalidStateAccess: Send, Sync, Copy);
