//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: the identity function (I combinator)
//! - [`constant`]: a function that always returns the same value (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//! - [`compose2`]: right-to-left composition (B combinator)
//! - [`curry2`] / [`uncurry2`]: convert between binary and nested unary functions

use std::rc::Rc;

/// Returns its argument unchanged.
///
/// # Examples
///
/// ```rust
/// use funkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its argument and returns `value`.
///
/// # Examples
///
/// ```rust
/// use funkit::compose::constant;
///
/// let always_five = constant(5);
/// assert_eq!(always_five("ignored"), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Composes two functions right to left: `compose2(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```rust
/// use funkit::compose::compose2;
///
/// let length_then_double = compose2(|n: usize| n * 2, str::len);
/// assert_eq!(length_then_double("abc"), 6);
/// ```
#[inline]
pub fn compose2<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |argument| outer(inner(argument))
}

/// Turns a binary function into a function returning a unary function.
///
/// # Examples
///
/// ```rust
/// use funkit::compose::curry2;
///
/// let add = curry2(|a: i32, b: i32| a + b);
/// let add_ten = add(10);
/// assert_eq!(add_ten(5), 15);
/// assert_eq!(add_ten(-10), 0);
/// ```
pub fn curry2<A, B, C, F>(function: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + 'static,
{
    let function = Rc::new(function);
    move |first_argument: A| -> Box<dyn Fn(B) -> C> {
        let function = Rc::clone(&function);
        Box::new(move |second_argument: B| function(first_argument.clone(), second_argument))
    }
}

/// Turns a function returning a unary function into a binary function.
///
/// # Examples
///
/// ```rust
/// use funkit::compose::uncurry2;
///
/// let multiply = uncurry2(|a: i32| move |b: i32| a * b);
/// assert_eq!(multiply(6, 7), 42);
/// ```
#[inline]
pub fn uncurry2<A, B, C, F, G>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: Fn(B) -> C,
{
    move |first_argument, second_argument| function(first_argument)(second_argument)
}
