//! Helper callables for composition.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: ignores its arguments and returns a fixed value
//! - [`flip`]: swaps the two arguments of a binary callable

use crate::callable::Callable;
use crate::pack::Tuple;

/// The identity function.
///
/// Returns its argument unchanged. It is the unit of [`flow`](crate::flow()).
///
/// # Examples
///
/// ```
/// use fnfit::compose::identity;
///
/// assert_eq!(identity(5), 5);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// A callable that returns the same value for every argument list.
///
/// See [`constant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Always<T> {
    value: T,
}

/// Creates a callable that ignores its arguments and returns `value`.
///
/// # Examples
///
/// ```
/// use fnfit::compose::constant;
/// use fnfit::Callable;
///
/// let always_five = constant(5);
///
/// assert_eq!(always_five.call((100,)), 5);
/// assert_eq!(always_five.call(("ignored", 3.0)), 5);
/// assert_eq!(always_five.call(()), 5);
/// ```
#[inline]
pub const fn constant<T: Clone>(value: T) -> Always<T> {
    Always { value }
}

impl<T, Args> Callable<Args> for Always<T>
where
    T: Clone,
    Args: Tuple,
{
    type Output = T;

    #[inline]
    fn call(&self, _: Args) -> T {
        self.value.clone()
    }
}

/// A binary callable with its arguments swapped.
///
/// See [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flip<F> {
    function: F,
}

impl<F> Flip<F> {
    /// Returns the original callable.
    pub fn into_inner(self) -> F {
        self.function
    }
}

/// Swaps the arguments of a binary callable.
///
/// # Examples
///
/// ```
/// use fnfit::compose::flip;
/// use fnfit::Callable;
///
/// let divide = |dividend: f64, divisor: f64| dividend / divisor;
/// let flipped = flip(divide);
///
/// assert_eq!(divide(10.0, 2.0), 5.0);
/// assert_eq!(flipped.call((2.0, 10.0)), 5.0);
/// ```
#[inline]
pub const fn flip<F>(function: F) -> Flip<F> {
    Flip { function }
}

impl<F, A, B> Callable<(B, A)> for Flip<F>
where
    F: Callable<(A, B)>,
{
    type Output = F::Output;

    #[inline]
    fn call(&self, (second, first): (B, A)) -> Self::Output {
        self.function.call((first, second))
    }
}
