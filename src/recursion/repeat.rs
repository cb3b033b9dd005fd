use log::debug;

use crate::callable::Callable;
use crate::error::IterationLimitExceeded;

/// The default number of applications a [`RepeatWhile`] performs before it
/// gives up.
pub const DEFAULT_ITERATION_LIMIT: usize = 1 << 20;

/// A decorator that repeats a function a fixed number of times.
///
/// See [`repeat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepeatDecorator {
    times: usize,
}

/// A function applied to its own result a fixed number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Repeat<F> {
    function: F,
    times: usize,
}

/// Creates a decorator that applies a function `times` times.
///
/// `repeat(n).call((f,))` is a callable; calling it with `x` evaluates
/// `f(f(...f(x)))` with exactly `n` applications. With `n == 0` the
/// decorated function returns its argument unchanged.
///
/// # Examples
///
/// ```rust
/// use fnfit::{repeat, Callable};
///
/// let increment = |value: i32| value + 1;
/// let add_five = repeat(5).call((increment,));
///
/// assert_eq!(add_five.call((1,)), 6);
/// assert_eq!(repeat(0).call((increment,)).call((1,)), 1);
/// ```
///
/// # Laws
///
/// - **Zero**: `repeat(0)(f)(x) == x`
/// - **Successor**: `repeat(n)(f)(x) == f(repeat(n - 1)(f)(x))`
pub const fn repeat(times: usize) -> RepeatDecorator {
    RepeatDecorator { times }
}

impl RepeatDecorator {
    /// Returns the number of applications.
    pub const fn times(&self) -> usize {
        self.times
    }
}

impl<F> Callable<(F,)> for RepeatDecorator {
    type Output = Repeat<F>;

    #[inline]
    fn call(&self, (function,): (F,)) -> Repeat<F> {
        Repeat {
            function,
            times: self.times,
        }
    }
}

impl<F, T> Callable<(T,)> for Repeat<F>
where
    F: Callable<(T,), Output = T>,
{
    type Output = T;

    fn call(&self, (value,): (T,)) -> T {
        (0..self.times).fold(value, |accumulated, _| self.function.call((accumulated,)))
    }
}

/// A decorator that repeats a function while a predicate holds.
///
/// See [`repeat_while`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepeatWhileDecorator<P> {
    predicate: P,
    max_iterations: usize,
}

/// A function applied to its own result while a predicate holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepeatWhile<P, F> {
    predicate: P,
    function: F,
    max_iterations: usize,
}

/// Creates a decorator that applies a function as long as `predicate`
/// holds for the current value.
///
/// The decorated function checks `predicate(&x)`; while it is `true` it
/// replaces `x` with `f(x)`, and it returns the first value for which the
/// predicate is `false`. Because the number of applications depends on
/// runtime values, it is bounded: after
/// [`DEFAULT_ITERATION_LIMIT`] applications (or the limit set with
/// [`RepeatWhileDecorator::with_limit`]) the call fails with
/// [`IterationLimitExceeded`] if the predicate still holds.
///
/// # Examples
///
/// ```rust
/// use fnfit::{repeat_while, Callable, IterationLimitExceeded};
///
/// let not_six = |value: &i32| *value != 6;
/// let increment = |value: i32| value + 1;
///
/// let up_to_six = repeat_while(not_six).call((increment,));
/// assert_eq!(up_to_six.call((1,)), Ok(6));
/// assert_eq!(up_to_six.call((6,)), Ok(6));
///
/// let bounded = repeat_while(not_six).with_limit(3).call((increment,));
/// assert_eq!(bounded.call((1,)), Err(IterationLimitExceeded { max_iterations: 3 }));
/// ```
pub const fn repeat_while<P>(predicate: P) -> RepeatWhileDecorator<P> {
    RepeatWhileDecorator {
        predicate,
        max_iterations: DEFAULT_ITERATION_LIMIT,
    }
}

impl<P> RepeatWhileDecorator<P> {
    /// Sets the maximum number of applications.
    #[must_use]
    pub fn with_limit(self, max_iterations: usize) -> Self {
        Self {
            predicate: self.predicate,
            max_iterations,
        }
    }

    /// Returns the maximum number of applications.
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

impl<P, F> Callable<(F,)> for RepeatWhileDecorator<P>
where
    P: Clone,
{
    type Output = RepeatWhile<P, F>;

    #[inline]
    fn call(&self, (function,): (F,)) -> RepeatWhile<P, F> {
        RepeatWhile {
            predicate: self.predicate.clone(),
            function,
            max_iterations: self.max_iterations,
        }
    }
}

impl<P, F, T> Callable<(T,)> for RepeatWhile<P, F>
where
    P: for<'a> Callable<(&'a T,), Output = bool>,
    F: Callable<(T,), Output = T>,
{
    type Output = Result<T, IterationLimitExceeded>;

    fn call(&self, (value,): (T,)) -> Self::Output {
        let mut current = value;
        for _ in 0..self.max_iterations {
            if !self.predicate.call((&current,)) {
                return Ok(current);
            }
            current = self.function.call((current,));
        }
        if self.predicate.call((&current,)) {
            debug!(
                "conditional repeat gave up after {} iterations",
                self.max_iterations
            );
            Err(IterationLimitExceeded {
                max_iterations: self.max_iterations,
            })
        } else {
            Ok(current)
        }
    }
}
