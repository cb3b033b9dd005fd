use crate::callable::{Callable, ResultOf};
use crate::pack::{List, Tuple, TupleOf};

/// A callable that an evaluating consumer passes through untouched.
///
/// See [`protect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Protect<F> {
    function: F,
}

/// Masks `function` from evaluation by [`apply_eval`].
///
/// Called directly, a protected callable behaves exactly like `function`.
/// Passed as an argument to [`apply_eval`], it is not forced the way a
/// thunk would be: the receiving function gets `function` itself.
///
/// # Examples
///
/// ```rust
/// use fnfit::{apply_eval, protect, Callable};
///
/// let make_five = || 5;
/// assert_eq!(protect(make_five).call(()), 5);
///
/// let twice = |thunk: fn() -> i32| thunk() + thunk();
/// assert_eq!(apply_eval(&twice, (protect(make_five as fn() -> i32),)), 10);
/// ```
pub const fn protect<F>(function: F) -> Protect<F> {
    Protect { function }
}

impl<F> Protect<F> {
    /// Removes the protection.
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, Args> Callable<Args> for Protect<F>
where
    F: Callable<Args>,
{
    type Output = F::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        self.function.call(arguments)
    }
}

/// An argument of [`apply_eval`]: a thunk to force, or a protected value.
pub trait Evaluate {
    /// The value handed to the receiving function.
    type Output;

    /// Forces the argument.
    fn evaluate(self) -> Self::Output;
}

impl<Thunk, T> Evaluate for Thunk
where
    Thunk: FnOnce() -> T,
{
    type Output = T;

    #[inline]
    fn evaluate(self) -> T {
        self()
    }
}

impl<F> Evaluate for Protect<F> {
    type Output = F;

    #[inline]
    fn evaluate(self) -> F {
        self.function
    }
}

/// Forces every argument of a list, head first.
pub trait EvaluateAll {
    /// The list of forced values.
    type Output;

    /// Forces the arguments left to right.
    fn evaluate_all(self) -> Self::Output;
}

impl EvaluateAll for () {
    type Output = ();

    #[inline]
    fn evaluate_all(self) {}
}

impl<Head, Tail> EvaluateAll for (Head, Tail)
where
    Head: Evaluate,
    Tail: EvaluateAll,
{
    type Output = (Head::Output, Tail::Output);

    #[inline]
    fn evaluate_all(self) -> Self::Output {
        let head = self.0.evaluate();
        let tail = self.1.evaluate_all();
        (head, tail)
    }
}

type EvaluatedArguments<Thunks> = TupleOf<<<Thunks as Tuple>::List as EvaluateAll>::Output>;

/// Forces each argument in order, then calls `function` with the results.
///
/// Every argument is a thunk (`FnOnce() -> T`) or a [`protect`]ed callable.
/// The thunks run strictly left to right, each exactly once, before
/// `function` is called.
///
/// # Examples
///
/// ```rust
/// use fnfit::apply_eval;
/// use std::cell::RefCell;
///
/// let order = RefCell::new(String::new());
/// let step = |name: char, value: i32| {
///     order.borrow_mut().push(name);
///     value
/// };
///
/// let sum = |a: i32, b: i32, c: i32| a + b + c;
/// let total = apply_eval(&sum, (|| step('a', 1), || step('b', 2), || step('c', 3)));
///
/// assert_eq!(total, 6);
/// assert_eq!(*order.borrow(), "abc");
/// ```
pub fn apply_eval<F, Thunks>(function: &F, thunks: Thunks) -> ResultOf<F, EvaluatedArguments<Thunks>>
where
    Thunks: Tuple,
    Thunks::List: EvaluateAll,
    <Thunks::List as EvaluateAll>::Output: List,
    F: Callable<EvaluatedArguments<Thunks>> + ?Sized,
{
    let evaluated = thunks.into_list().evaluate_all();
    function.call(evaluated.into_tuple())
}
